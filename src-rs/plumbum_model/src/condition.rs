//! Boundary and initial conditions.

use std::fmt;

use plumbum_expr::{Expr, VariableName};

/// The kind of a boundary condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    /// The value of the variable is prescribed.
    Dirichlet,
    /// The outward normal derivative of the variable is prescribed.
    Neumann,
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dirichlet => write!(f, "Dirichlet"),
            Self::Neumann => write!(f, "Neumann"),
        }
    }
}

/// A condition prescribed on one side of a domain.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryValue {
    kind: BoundaryKind,
    expr: Expr,
}

impl BoundaryValue {
    /// Creates a Dirichlet condition.
    #[must_use]
    pub const fn dirichlet(expr: Expr) -> Self {
        Self {
            kind: BoundaryKind::Dirichlet,
            expr,
        }
    }

    /// Creates a Neumann condition.
    #[must_use]
    pub const fn neumann(expr: Expr) -> Self {
        Self {
            kind: BoundaryKind::Neumann,
            expr,
        }
    }

    /// Returns the kind of the condition.
    #[must_use]
    pub const fn kind(&self) -> BoundaryKind {
        self.kind
    }

    /// Returns the prescribed value.
    #[must_use]
    pub const fn expr(&self) -> &Expr {
        &self.expr
    }
}

impl fmt::Display for BoundaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.expr)
    }
}

/// The pair of boundary conditions for one spatial variable.
///
/// For variables over the through-cell direction, or over `z` in a
/// one-dimensional current collector, `left` and `right` are the two ends of
/// the domain. Over a two-dimensional current collector they are the negative
/// and positive tabs.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryCondition {
    variable: VariableName,
    left: BoundaryValue,
    right: BoundaryValue,
}

impl BoundaryCondition {
    /// Creates a boundary condition pair for `variable`.
    #[must_use]
    pub const fn new(variable: VariableName, left: BoundaryValue, right: BoundaryValue) -> Self {
        Self {
            variable,
            left,
            right,
        }
    }

    /// Returns the variable the conditions apply to.
    #[must_use]
    pub const fn variable(&self) -> &VariableName {
        &self.variable
    }

    /// Returns the left (or negative tab) condition.
    #[must_use]
    pub const fn left(&self) -> &BoundaryValue {
        &self.left
    }

    /// Returns the right (or positive tab) condition.
    #[must_use]
    pub const fn right(&self) -> &BoundaryValue {
        &self.right
    }

    /// Returns the left and right prescribed expressions.
    pub fn exprs(&self) -> impl Iterator<Item = &Expr> {
        [self.left.expr(), self.right.expr()].into_iter()
    }
}

impl fmt::Display for BoundaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "left: {}, right: {}", self.left, self.right)
    }
}

/// The initial value of a state variable.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialCondition {
    variable: VariableName,
    expr: Expr,
}

impl InitialCondition {
    /// Creates an initial condition for `variable`.
    #[must_use]
    pub const fn new(variable: VariableName, expr: Expr) -> Self {
        Self { variable, expr }
    }

    /// Returns the variable the condition applies to.
    #[must_use]
    pub const fn variable(&self) -> &VariableName {
        &self.variable
    }

    /// Returns the initial value.
    #[must_use]
    pub const fn expr(&self) -> &Expr {
        &self.expr
    }
}

impl fmt::Display for InitialCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}(0) = {}", self.variable, self.expr)
    }
}
