//! The default cell geometry.

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use plumbum_expr::{Expr, Region};

/// A spatial coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Coordinate {
    /// Through-cell coordinate in the negative electrode.
    XNegative,
    /// Through-cell coordinate in the separator.
    XSeparator,
    /// Through-cell coordinate in the positive electrode.
    XPositive,
    /// Horizontal coordinate along the current collector.
    Y,
    /// Vertical coordinate along the current collector.
    Z,
}

impl Coordinate {
    /// Every coordinate.
    pub const ALL: [Self; 5] = [
        Self::XNegative,
        Self::XSeparator,
        Self::XPositive,
        Self::Y,
        Self::Z,
    ];

    /// Returns the coordinate name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::XNegative => "x_n",
            Self::XSeparator => "x_s",
            Self::XPositive => "x_p",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A closed interval `[min, max]` of one coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    min: Expr,
    max: Expr,
}

impl Interval {
    /// Creates a new interval.
    #[must_use]
    pub const fn new(min: Expr, max: Expr) -> Self {
        Self { min, max }
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn min(&self) -> &Expr {
        &self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn max(&self) -> &Expr {
        &self.max
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// A tab on the edge of a two-dimensional current collector.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    y_centre: Expr,
    z_centre: Expr,
    width: Expr,
}

impl Tab {
    /// Creates a new tab.
    #[must_use]
    pub const fn new(y_centre: Expr, z_centre: Expr, width: Expr) -> Self {
        Self {
            y_centre,
            z_centre,
            width,
        }
    }

    /// Returns the y-coordinate of the tab centre.
    #[must_use]
    pub const fn y_centre(&self) -> &Expr {
        &self.y_centre
    }

    /// Returns the z-coordinate of the tab centre.
    #[must_use]
    pub const fn z_centre(&self) -> &Expr {
        &self.z_centre
    }

    /// Returns the tab width.
    #[must_use]
    pub const fn width(&self) -> &Expr {
        &self.width
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "centre ({}, {}), width {}",
            self.y_centre, self.z_centre, self.width
        )
    }
}

/// The negative and positive tabs.
#[derive(Debug, Clone, PartialEq)]
pub struct Tabs {
    /// The negative tab, where boundary conditions labelled left apply.
    pub negative: Tab,
    /// The positive tab, where boundary conditions labelled right apply.
    pub positive: Tab,
}

/// The extent of one region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionGeometry {
    intervals: IndexMap<Coordinate, Interval>,
    tabs: Option<Tabs>,
}

impl RegionGeometry {
    /// Creates a region with no extent.
    #[must_use]
    pub fn point() -> Self {
        Self {
            intervals: IndexMap::new(),
            tabs: None,
        }
    }

    /// Creates a region spanning the given intervals.
    #[must_use]
    pub const fn intervals(intervals: IndexMap<Coordinate, Interval>) -> Self {
        Self {
            intervals,
            tabs: None,
        }
    }

    /// Returns this region with tabs.
    #[must_use]
    pub fn with_tabs(mut self, tabs: Tabs) -> Self {
        self.tabs = Some(tabs);
        self
    }

    /// Returns the number of coordinates the region spans.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.intervals.len()
    }

    /// Returns the interval of `coordinate`, if the region spans it.
    #[must_use]
    pub fn interval(&self, coordinate: Coordinate) -> Option<&Interval> {
        self.intervals.get(&coordinate)
    }

    /// Returns the coordinates and their intervals.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &Interval)> {
        self.intervals
            .iter()
            .map(|(coordinate, interval)| (*coordinate, interval))
    }

    /// Returns the tabs, if the region has them.
    #[must_use]
    pub const fn tabs(&self) -> Option<&Tabs> {
        self.tabs.as_ref()
    }
}

/// The regions of a cell and their extents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    regions: IndexMap<Region, RegionGeometry>,
}

impl Geometry {
    /// Creates an empty geometry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this geometry with `region` added.
    #[must_use]
    pub fn with_region(mut self, region: Region, geometry: RegionGeometry) -> Self {
        self.regions.insert(region, geometry);
        self
    }

    /// Returns the extent of `region`.
    #[must_use]
    pub fn get(&self, region: Region) -> Option<&RegionGeometry> {
        self.regions.get(&region)
    }

    /// Returns whether the geometry has a region called `name`.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        Region::from_name(name).is_some_and(|region| self.regions.contains_key(&region))
    }

    /// Returns the regions and their extents.
    pub fn iter(&self) -> impl Iterator<Item = (Region, &RegionGeometry)> {
        self.regions
            .iter()
            .map(|(region, geometry)| (*region, geometry))
    }

    /// Returns every coordinate spanned by some region.
    #[must_use]
    pub fn coordinates(&self) -> IndexSet<Coordinate> {
        self.regions
            .values()
            .flat_map(|geometry| geometry.intervals.keys().copied())
            .collect()
    }
}
