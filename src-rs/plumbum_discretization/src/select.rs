use indexmap::IndexMap;
use plumbum_expr::{Expr, Region};
use plumbum_options::{Dimensionality, OptionSet};

use crate::{Coordinate, Geometry, Interval, RegionGeometry, SpatialMethod, SubmeshType, Tab, Tabs};

/// The default discretization of a model.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscretizationDefaults {
    geometry: Geometry,
    spatial_methods: IndexMap<Region, SpatialMethod>,
    submesh_types: IndexMap<Region, SubmeshType>,
    var_pts: IndexMap<Coordinate, usize>,
}

impl DiscretizationDefaults {
    /// Returns the default geometry.
    #[must_use]
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Returns the spatial method of every region.
    #[must_use]
    pub const fn spatial_methods(&self) -> &IndexMap<Region, SpatialMethod> {
        &self.spatial_methods
    }

    /// Returns the submesh type of every region.
    #[must_use]
    pub const fn submesh_types(&self) -> &IndexMap<Region, SubmeshType> {
        &self.submesh_types
    }

    /// Returns the number of points along every coordinate of the geometry.
    #[must_use]
    pub const fn var_pts(&self) -> &IndexMap<Coordinate, usize> {
        &self.var_pts
    }
}

const THROUGH_CELL_REGIONS: [Region; 3] = [
    Region::NegativeElectrode,
    Region::Separator,
    Region::PositiveElectrode,
];

/// Returns the default discretization for `options`.
///
/// Only the current collector depends on the options, through
/// `dimensionality`:
///
/// | dimensionality | spatial method | submesh |
/// |---|---|---|
/// | 0 | zero-dimensional | zero-dimensional |
/// | 1 | finite volume | uniform 1D |
/// | 2 | finite element | uniform 2D |
///
/// The through-cell regions always use finite volumes on uniform 1D
/// submeshes. Lead-acid electrodes have no particle regions.
#[must_use]
pub fn defaults(options: &OptionSet) -> DiscretizationDefaults {
    let dimensionality = options.dimensionality();

    let (current_collector_method, current_collector_submesh) = match dimensionality {
        Dimensionality::Zero => (SpatialMethod::ZeroDimensional, SubmeshType::ZeroDimensional),
        Dimensionality::One => (SpatialMethod::FiniteVolume, SubmeshType::Uniform1D),
        Dimensionality::Two => (SpatialMethod::FiniteElement, SubmeshType::Uniform2D),
    };

    let mut spatial_methods = IndexMap::new();
    let mut submesh_types = IndexMap::new();
    for region in THROUGH_CELL_REGIONS {
        spatial_methods.insert(region, SpatialMethod::FiniteVolume);
        submesh_types.insert(region, SubmeshType::Uniform1D);
    }
    spatial_methods.insert(Region::CurrentCollector, current_collector_method);
    submesh_types.insert(Region::CurrentCollector, current_collector_submesh);

    let geometry = geometry(dimensionality);
    let coordinates = geometry.coordinates();
    let var_pts = Coordinate::ALL
        .into_iter()
        .filter(|coordinate| coordinates.contains(coordinate))
        .map(|coordinate| (coordinate, default_points(coordinate)))
        .collect();

    DiscretizationDefaults {
        geometry,
        spatial_methods,
        submesh_types,
        var_pts,
    }
}

const fn default_points(coordinate: Coordinate) -> usize {
    match coordinate {
        Coordinate::XNegative => 25,
        Coordinate::XSeparator => 41,
        Coordinate::XPositive => 34,
        Coordinate::Y | Coordinate::Z => 10,
    }
}

fn geometry(dimensionality: Dimensionality) -> Geometry {
    let l_n = Expr::parameter("Negative electrode thickness");
    let l_s = Expr::parameter("Separator thickness");

    let current_collector = match dimensionality {
        Dimensionality::Zero => RegionGeometry::point(),
        Dimensionality::One => RegionGeometry::intervals(span(Coordinate::Z, height())),
        Dimensionality::Two => {
            let mut intervals = span(Coordinate::Y, width());
            intervals.extend(span(Coordinate::Z, height()));
            RegionGeometry::intervals(intervals).with_tabs(Tabs {
                negative: tab("Negative"),
                positive: tab("Positive"),
            })
        }
    };

    Geometry::new()
        .with_region(
            Region::NegativeElectrode,
            RegionGeometry::intervals(interval(
                Coordinate::XNegative,
                Expr::scalar(0.0),
                l_n.clone(),
            )),
        )
        .with_region(
            Region::Separator,
            RegionGeometry::intervals(interval(
                Coordinate::XSeparator,
                l_n.clone(),
                l_n.clone() + l_s.clone(),
            )),
        )
        .with_region(
            Region::PositiveElectrode,
            RegionGeometry::intervals(interval(
                Coordinate::XPositive,
                l_n + l_s,
                Expr::scalar(1.0),
            )),
        )
        .with_region(Region::CurrentCollector, current_collector)
}

fn interval(coordinate: Coordinate, min: Expr, max: Expr) -> IndexMap<Coordinate, Interval> {
    let mut intervals = IndexMap::new();
    intervals.insert(coordinate, Interval::new(min, max));
    intervals
}

fn span(coordinate: Coordinate, length: Expr) -> IndexMap<Coordinate, Interval> {
    interval(coordinate, Expr::scalar(0.0), length)
}

fn width() -> Expr {
    Expr::parameter("Electrode width")
}

fn height() -> Expr {
    Expr::parameter("Electrode height")
}

fn tab(electrode: &str) -> Tab {
    Tab::new(
        Expr::parameter(format!("{electrode} tab centre y-coordinate")),
        Expr::parameter(format!("{electrode} tab centre z-coordinate")),
        Expr::parameter(format!("{electrode} tab width")),
    )
}

#[cfg(test)]
mod tests {
    use plumbum_options::RawOptions;

    use super::*;

    fn defaults_for(raw: &RawOptions) -> DiscretizationDefaults {
        defaults(&OptionSet::new(raw).expect("valid options"))
    }

    #[test]
    fn zero_dimensional_current_collector_by_default() {
        let defaults = defaults_for(&RawOptions::new());

        assert_eq!(
            defaults.spatial_methods().get(&Region::CurrentCollector),
            Some(&SpatialMethod::ZeroDimensional)
        );
        assert_eq!(
            defaults.submesh_types().get(&Region::CurrentCollector),
            Some(&SubmeshType::ZeroDimensional)
        );
        assert!(!defaults.geometry().contains_name("negative particle"));
        assert!(defaults.geometry().contains_name("current collector"));
        assert_eq!(
            defaults
                .geometry()
                .get(Region::CurrentCollector)
                .map(RegionGeometry::dimensions),
            Some(0)
        );
    }

    #[test]
    fn one_dimensional_current_collector_uses_finite_volumes() {
        let defaults = defaults_for(
            &RawOptions::new()
                .with("dimensionality", 1)
                .with("current collector", "potential pair"),
        );

        assert_eq!(
            defaults.spatial_methods().get(&Region::CurrentCollector),
            Some(&SpatialMethod::FiniteVolume)
        );
        assert_eq!(
            defaults.submesh_types().get(&Region::CurrentCollector),
            Some(&SubmeshType::Uniform1D)
        );
        let current_collector = defaults
            .geometry()
            .get(Region::CurrentCollector)
            .expect("current collector region");
        assert!(current_collector.interval(Coordinate::Z).is_some());
        assert!(current_collector.tabs().is_none());
    }

    #[test]
    fn two_dimensional_current_collector_uses_finite_elements() {
        let defaults = defaults_for(
            &RawOptions::new()
                .with("dimensionality", 2)
                .with("current collector", "potential pair"),
        );

        assert_eq!(
            defaults.spatial_methods().get(&Region::CurrentCollector),
            Some(&SpatialMethod::FiniteElement)
        );
        assert_eq!(
            defaults.submesh_types().get(&Region::CurrentCollector),
            Some(&SubmeshType::Uniform2D)
        );
        let current_collector = defaults
            .geometry()
            .get(Region::CurrentCollector)
            .expect("current collector region");
        assert_eq!(current_collector.dimensions(), 2);
        assert!(current_collector.tabs().is_some());
    }

    #[test]
    fn through_cell_regions_ignore_the_options() {
        let zero = defaults_for(&RawOptions::new());
        let two = defaults_for(&RawOptions::new().with("dimensionality", 2));

        for region in THROUGH_CELL_REGIONS {
            assert_eq!(
                zero.spatial_methods().get(&region),
                Some(&SpatialMethod::FiniteVolume)
            );
            assert_eq!(
                zero.spatial_methods().get(&region),
                two.spatial_methods().get(&region)
            );
            assert_eq!(zero.geometry().get(region), two.geometry().get(region));
        }
    }

    #[test]
    fn point_counts_follow_the_geometry() {
        use Coordinate::{XNegative, XPositive, XSeparator, Y, Z};

        let zero = defaults_for(&RawOptions::new());
        let one = defaults_for(&RawOptions::new().with("dimensionality", 1));
        let two = defaults_for(&RawOptions::new().with("dimensionality", 2));

        let coordinates = |defaults: &DiscretizationDefaults| {
            defaults.var_pts().keys().copied().collect::<Vec<_>>()
        };

        assert_eq!(coordinates(&zero), vec![XNegative, XSeparator, XPositive]);
        assert_eq!(coordinates(&one), vec![XNegative, XSeparator, XPositive, Z]);
        assert_eq!(
            coordinates(&two),
            vec![XNegative, XSeparator, XPositive, Y, Z]
        );
        assert_eq!(zero.var_pts().get(&XSeparator), Some(&41));
    }

    #[test]
    fn defaults_are_a_pure_function_of_the_options() {
        let raw = RawOptions::new().with("dimensionality", 2);

        assert_eq!(defaults_for(&raw), defaults_for(&raw));
    }
}
