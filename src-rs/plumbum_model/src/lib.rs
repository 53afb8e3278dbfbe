//! Assembled model representation for plumbum
//!
//! A [`Model`] is the output of assembly and the input of the well-posedness
//! check. It owns the declared variables and parameters, the defining
//! equations, boundary and initial conditions, named output expressions, and
//! the [`OptionSet`](plumbum_options::OptionSet) it was assembled from.

mod condition;
mod declaration;
mod equation;
mod model;

pub use condition::{BoundaryCondition, BoundaryKind, BoundaryValue, InitialCondition};
pub use declaration::{Parameter, Variable};
pub use equation::{Equation, EquationKind};
pub use model::{Model, ModelParts};
