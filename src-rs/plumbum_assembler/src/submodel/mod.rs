//! Lead-acid sub-models.
//!
//! Each sub-model contributes to a [`PartialModel`] in three phases. The
//! assembler runs the first phase of every selected sub-model, then the
//! second phase of every sub-model, then the third, so a sub-model may read
//! anything provided by any sub-model in an earlier phase, or by an earlier
//! sub-model in the same phase.

mod convection;
mod current_collector;
mod electrolyte;
mod interface;
mod oxygen;
mod porosity;
mod thermal;

use std::fmt;

pub use convection::{FullTransverseConvection, ThroughCellConvection, UniformTransverseConvection};
pub use current_collector::{PotentialPair, UniformCurrentCollector};
pub use electrolyte::{FirstOrderElectrolyte, LeadingOrderElectrolyte};
pub use interface::{AlgebraicSurfaceForm, DifferentialSurfaceForm, InverseButlerVolmer};
pub use oxygen::OxygenReaction;
pub use porosity::LeadingOrderPorosity;
pub use thermal::{Isothermal, LumpedThermal};

use crate::{ModelConstructionError, PartialModel};

/// A contribution of equations, conditions and outputs to a model.
///
/// Every phase defaults to contributing nothing.
pub trait SubModel: fmt::Debug {
    /// Returns the name the sub-model is reported under.
    fn name(&self) -> &'static str;

    /// Declares the sub-model's own variables, and outputs that depend only
    /// on them.
    ///
    /// # Errors
    ///
    /// Returns an error if a contribution collides with an earlier one.
    fn fundamental(&self, model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        Ok(model)
    }

    /// Provides outputs that couple to other sub-models, and registers
    /// reactions.
    ///
    /// # Errors
    ///
    /// Returns an error if a contribution collides with an earlier one or
    /// an output it needs has not been provided.
    fn coupled(&self, model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        Ok(model)
    }

    /// Writes equations, boundary conditions, initial conditions and
    /// source terms.
    ///
    /// # Errors
    ///
    /// Returns an error if a contribution collides with an earlier one or
    /// an output it needs has not been provided.
    fn equations(&self, model: PartialModel) -> Result<PartialModel, ModelConstructionError> {
        Ok(model)
    }
}

/// A phase of sub-model composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// [`SubModel::fundamental`]
    Fundamental,
    /// [`SubModel::coupled`]
    Coupled,
    /// [`SubModel::equations`]
    Equations,
}

impl Phase {
    /// Every phase, in the order they run.
    pub const ALL: [Self; 3] = [Self::Fundamental, Self::Coupled, Self::Equations];

    /// Runs this phase of `submodel`.
    ///
    /// # Errors
    ///
    /// Returns the error raised by the sub-model.
    pub fn run(
        self,
        submodel: &dyn SubModel,
        model: PartialModel,
    ) -> Result<PartialModel, ModelConstructionError> {
        match self {
            Self::Fundamental => submodel.fundamental(model),
            Self::Coupled => submodel.coupled(model),
            Self::Equations => submodel.equations(model),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fundamental => write!(f, "fundamental"),
            Self::Coupled => write!(f, "coupled"),
            Self::Equations => write!(f, "equations"),
        }
    }
}
