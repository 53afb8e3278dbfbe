//! Which sub-models each option selects.

use std::fmt;

use plumbum_options::{
    Convection, CurrentCollector, OptionSet, SideReaction, SurfaceForm, Thermal,
    TransverseConvection,
};

use crate::submodel::{
    AlgebraicSurfaceForm, DifferentialSurfaceForm, FirstOrderElectrolyte, FullTransverseConvection,
    InverseButlerVolmer, Isothermal, LeadingOrderElectrolyte, LeadingOrderPorosity, LumpedThermal,
    OxygenReaction, PotentialPair, SubModel, ThroughCellConvection, UniformCurrentCollector,
    UniformTransverseConvection,
};

/// The base electrochemical model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BaseModel {
    /// Leading-order quasi-static.
    #[default]
    Loqs,
    /// Leading order plus a first-order correction resolved through the
    /// cell.
    Composite,
}

impl BaseModel {
    /// Both base models.
    pub const ALL: [Self; 2] = [Self::Loqs, Self::Composite];

    /// Returns the base model name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Loqs => "LOQS",
            Self::Composite => "Composite",
        }
    }
}

impl fmt::Display for BaseModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A slot of the registry, filled by the sub-models one option selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The base model.
    Base,
    /// `thermal`
    Thermal,
    /// `convection`
    Convection,
    /// `surface form`
    SurfaceForm,
    /// `side reactions`
    SideReactions,
    /// `current collector`
    CurrentCollector,
}

impl Slot {
    /// Every slot, in merge order.
    pub const ORDER: [Self; 6] = [
        Self::Base,
        Self::Thermal,
        Self::Convection,
        Self::SurfaceForm,
        Self::SideReactions,
        Self::CurrentCollector,
    ];
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Thermal => write!(f, "thermal"),
            Self::Convection => write!(f, "convection"),
            Self::SurfaceForm => write!(f, "surface form"),
            Self::SideReactions => write!(f, "side reactions"),
            Self::CurrentCollector => write!(f, "current collector"),
        }
    }
}

/// Returns the sub-models that fill `slot`, in merge order.
#[must_use]
pub fn submodels_for(slot: Slot, base: BaseModel, options: &OptionSet) -> Vec<Box<dyn SubModel>> {
    match slot {
        Slot::Base => match base {
            BaseModel::Loqs => vec![boxed(LeadingOrderElectrolyte), boxed(LeadingOrderPorosity)],
            BaseModel::Composite => vec![
                boxed(LeadingOrderElectrolyte),
                boxed(LeadingOrderPorosity),
                boxed(FirstOrderElectrolyte),
            ],
        },
        Slot::Thermal => match options.thermal() {
            Thermal::Isothermal => vec![boxed(Isothermal)],
            Thermal::Lumped => vec![boxed(LumpedThermal)],
        },
        Slot::Convection => match options.convection() {
            Convection::Off => vec![],
            Convection::Transverse(TransverseConvection::Uniform) => vec![
                boxed(ThroughCellConvection),
                boxed(UniformTransverseConvection),
            ],
            Convection::Transverse(TransverseConvection::Full) => vec![
                boxed(ThroughCellConvection),
                boxed(FullTransverseConvection),
            ],
        },
        Slot::SurfaceForm => match options.surface_form() {
            SurfaceForm::Off => vec![boxed(InverseButlerVolmer)],
            SurfaceForm::Differential => vec![boxed(DifferentialSurfaceForm)],
            SurfaceForm::Algebraic => vec![boxed(AlgebraicSurfaceForm)],
        },
        Slot::SideReactions => options
            .side_reactions()
            .iter()
            .map(|reaction| match reaction {
                SideReaction::Oxygen => boxed(OxygenReaction),
            })
            .collect(),
        Slot::CurrentCollector => match options.current_collector() {
            CurrentCollector::Uniform => vec![boxed(UniformCurrentCollector)],
            CurrentCollector::PotentialPair => vec![boxed(PotentialPair)],
        },
    }
}

fn boxed(submodel: impl SubModel + 'static) -> Box<dyn SubModel> {
    Box::new(submodel)
}

/// Returns every sub-model selected by `base` and `options`, in merge order.
#[must_use]
pub fn select(base: BaseModel, options: &OptionSet) -> Vec<Box<dyn SubModel>> {
    Slot::ORDER
        .into_iter()
        .flat_map(|slot| submodels_for(slot, base, options))
        .collect()
}

#[cfg(test)]
mod tests {
    use plumbum_options::RawOptions;

    use super::*;

    fn names(submodels: &[Box<dyn SubModel>]) -> Vec<&'static str> {
        submodels.iter().map(|submodel| submodel.name()).collect()
    }

    #[test]
    fn default_loqs_selection() {
        let submodels = select(BaseModel::Loqs, &OptionSet::default());

        assert_eq!(
            names(&submodels),
            vec![
                "leading-order electrolyte",
                "leading-order porosity",
                "isothermal",
                "inverse Butler-Volmer",
                "uniform current collector",
            ]
        );
    }

    #[test]
    fn composite_adds_first_order_electrolyte() {
        let submodels = select(BaseModel::Composite, &OptionSet::default());

        assert_eq!(names(&submodels)[2], "first-order electrolyte");
    }

    #[test]
    fn every_option_fills_its_slot_in_order() {
        // create the options
        let raw = RawOptions::new()
            .with("thermal", "lumped")
            .with("convection", [("transverse", "full")])
            .with("surface form", "differential")
            .with("side reactions", ["oxygen"])
            .with("current collector", "potential pair")
            .with("dimensionality", 2);
        let options = OptionSet::new(&raw).expect("valid options");

        // check the selection
        let submodels = select(BaseModel::Loqs, &options);
        assert_eq!(
            names(&submodels),
            vec![
                "leading-order electrolyte",
                "leading-order porosity",
                "lumped thermal",
                "through-cell convection",
                "full transverse convection",
                "differential surface form",
                "oxygen reaction",
                "potential pair",
            ]
        );
    }

    #[test]
    fn surface_forms_are_mutually_exclusive() {
        for (value, expected) in [
            ("differential", "differential surface form"),
            ("algebraic", "algebraic surface form"),
        ] {
            let raw = RawOptions::new().with("surface form", value);
            let options = OptionSet::new(&raw).expect("valid options");

            let slot = submodels_for(Slot::SurfaceForm, BaseModel::Loqs, &options);

            assert_eq!(names(&slot), vec![expected]);
        }
    }
}
