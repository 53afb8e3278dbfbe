//! Spatial regions and the domains variables live on.

use std::fmt;

/// A region of the cell geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    /// The negative electrode.
    NegativeElectrode,
    /// The separator.
    Separator,
    /// The positive electrode.
    PositiveElectrode,
    /// The current collectors, resolved in 0, 1 or 2 dimensions.
    CurrentCollector,
}

impl Region {
    /// Every region, in through-cell order followed by the current collector.
    pub const ALL: [Self; 4] = [
        Self::NegativeElectrode,
        Self::Separator,
        Self::PositiveElectrode,
        Self::CurrentCollector,
    ];

    /// Returns the region name used by the discretization layer.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NegativeElectrode => "negative electrode",
            Self::Separator => "separator",
            Self::PositiveElectrode => "positive electrode",
            Self::CurrentCollector => "current collector",
        }
    }

    /// Looks up a region by its name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|region| region.name() == name)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered list of regions that a variable or equation lives on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain(Vec<Region>);

impl Domain {
    /// Creates a domain spanning the given regions, in order.
    #[must_use]
    pub const fn new(regions: Vec<Region>) -> Self {
        Self(regions)
    }

    /// Creates a domain made of a single region.
    #[must_use]
    pub fn region(region: Region) -> Self {
        Self(vec![region])
    }

    /// The current collector domain, where x-averaged quantities live.
    #[must_use]
    pub fn current_collector() -> Self {
        Self::region(Region::CurrentCollector)
    }

    /// The electrolyte domain, spanning both electrodes and the separator.
    #[must_use]
    pub fn electrolyte() -> Self {
        Self(vec![
            Region::NegativeElectrode,
            Region::Separator,
            Region::PositiveElectrode,
        ])
    }

    /// Returns the regions of this domain.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self
            .0
            .iter()
            .map(|region| region.name())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{names}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_names_round_trip() {
        for region in Region::ALL {
            assert_eq!(Region::from_name(region.name()), Some(region));
        }

        assert_eq!(Region::from_name("negative particle"), None);
    }

    #[test]
    fn electrolyte_domain_is_through_cell() {
        let domain = Domain::electrolyte();
        assert_eq!(
            domain.regions(),
            &[
                Region::NegativeElectrode,
                Region::Separator,
                Region::PositiveElectrode
            ]
        );
        assert_eq!(
            domain.to_string(),
            "[negative electrode, separator, positive electrode]"
        );
    }
}
