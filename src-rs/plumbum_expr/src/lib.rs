//! Symbolic expressions for the plumbum model pipeline
//!
//! Equations, boundary conditions and initial conditions are all written as
//! [`Expr`] trees. The model pipeline never evaluates or simplifies them; it
//! only needs to know which symbols an expression depends on, which variables
//! are differentiated in space, and how to substitute one expression for a
//! symbol.

mod domain;
mod expr;
mod symbol;

pub use domain::{Domain, Region};
pub use expr::{BinaryOp, Expr, MathFunction, SpatialOp, UnaryOp};
pub use symbol::{ParameterName, Symbol, VariableName};
