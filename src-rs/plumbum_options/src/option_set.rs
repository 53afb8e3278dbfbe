use std::fmt;

use crate::{
    Convection, CurrentCollector, Dimensionality, Incompatibility, OptionError, OptionKey,
    RawOptions, SideReaction, SurfaceForm, Thermal, TransverseConvection,
};

/// A validated, immutable set of model options.
///
/// An `OptionSet` can only be obtained through [`OptionSet::new`] (or
/// [`Default`]), so holding one means every value is in range and every
/// pair of options is compatible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OptionSet {
    thermal: Thermal,
    convection: Convection,
    surface_form: SurfaceForm,
    side_reactions: Vec<SideReaction>,
    current_collector: CurrentCollector,
    dimensionality: Dimensionality,
}

impl OptionSet {
    /// Validates a raw options record.
    ///
    /// Entries are validated in the order they were written and the first
    /// invalid entry is reported. Compatibility between options is checked
    /// only once every entry is individually valid.
    ///
    /// # Errors
    ///
    /// Returns an [`OptionError`] if the record contains an unknown key, a
    /// value outside the allowed set for its key, or an incompatible
    /// combination of values.
    pub fn new(raw: &RawOptions) -> Result<Self, OptionError> {
        let mut options = Self::default();

        for (name, value) in raw.iter() {
            let key = OptionKey::from_name(name).ok_or_else(|| OptionError::unknown_key(name))?;

            match key {
                OptionKey::Thermal => options.thermal = Thermal::from_value(value)?,
                OptionKey::Convection => options.convection = Convection::from_value(value)?,
                OptionKey::SurfaceForm => options.surface_form = SurfaceForm::from_value(value)?,
                OptionKey::SideReactions => {
                    options.side_reactions = SideReaction::list_from_value(value)?;
                }
                OptionKey::CurrentCollector => {
                    options.current_collector = CurrentCollector::from_value(value)?;
                }
                OptionKey::Dimensionality => {
                    options.dimensionality = Dimensionality::from_value(value)?;
                }
            }
        }

        options.check_compatibility()?;

        Ok(options)
    }

    fn check_compatibility(&self) -> Result<(), OptionError> {
        if !self.side_reactions.is_empty() && !self.surface_form.is_on() {
            return Err(OptionError::incompatible(
                Incompatibility::SideReactionsRequireSurfaceForm,
            ));
        }

        if self.current_collector == CurrentCollector::PotentialPair
            && !self.dimensionality.is_resolved()
        {
            return Err(OptionError::incompatible(
                Incompatibility::PotentialPairRequiresSpatialCurrentCollector,
            ));
        }

        if self.convection.transverse() == Some(TransverseConvection::Full)
            && !self.dimensionality.is_resolved()
        {
            return Err(OptionError::incompatible(
                Incompatibility::FullConvectionRequiresSpatialCurrentCollector,
            ));
        }

        Ok(())
    }

    /// Returns the thermal option.
    #[must_use]
    pub const fn thermal(&self) -> Thermal {
        self.thermal
    }

    /// Returns the convection option.
    #[must_use]
    pub const fn convection(&self) -> Convection {
        self.convection
    }

    /// Returns the surface form option.
    #[must_use]
    pub const fn surface_form(&self) -> SurfaceForm {
        self.surface_form
    }

    /// Returns the side reactions, in the order they were listed.
    #[must_use]
    pub fn side_reactions(&self) -> &[SideReaction] {
        &self.side_reactions
    }

    /// Returns whether `reaction` is among the side reactions.
    #[must_use]
    pub fn has_side_reaction(&self, reaction: SideReaction) -> bool {
        self.side_reactions.contains(&reaction)
    }

    /// Returns the current collector option.
    #[must_use]
    pub const fn current_collector(&self) -> CurrentCollector {
        self.current_collector
    }

    /// Returns the current collector dimensionality.
    #[must_use]
    pub const fn dimensionality(&self) -> Dimensionality {
        self.dimensionality
    }
}

impl TryFrom<&RawOptions> for OptionSet {
    type Error = OptionError;

    fn try_from(raw: &RawOptions) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl fmt::Display for OptionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side_reactions = self
            .side_reactions
            .iter()
            .map(|reaction| format!("{:?}", reaction.name()))
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(f, "{}: {}", OptionKey::Thermal, self.thermal)?;
        writeln!(f, "{}: {}", OptionKey::Convection, self.convection)?;
        writeln!(f, "{}: {}", OptionKey::SurfaceForm, self.surface_form)?;
        writeln!(f, "{}: [{side_reactions}]", OptionKey::SideReactions)?;
        writeln!(f, "{}: {}", OptionKey::CurrentCollector, self.current_collector)?;
        write!(f, "{}: {}", OptionKey::Dimensionality, self.dimensionality)
    }
}
