//! Well-posedness checking for plumbum
//!
//! [`check`] runs a fixed sequence of structural [`Rule`]s over an assembled
//! [`Model`](plumbum_model::Model) and fails with a [`ModelError`] on the
//! first violation. Passing every rule means the model is structurally
//! consistent; it says nothing about whether it can be solved numerically.

mod check;
mod diagnostic;
mod error;
mod rule;

pub use check::check;
pub use diagnostic::{Diagnostic, SymbolLocation};
pub use error::ModelError;
pub use rule::Rule;
