//! Defining equations.

use std::fmt;

use indexmap::IndexSet;
use plumbum_expr::{Domain, Expr, Symbol, VariableName};

/// The kind of a defining equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquationKind {
    /// `d variable / dt = expr`, with no spatial operator in `expr`.
    Ode,
    /// `d variable / dt = expr`, where `expr` contains a spatial operator.
    Pde,
    /// `0 = expr`, an algebraic residual.
    Algebraic,
}

impl EquationKind {
    /// Returns whether the defined variable is a state variable, that is,
    /// whether it is differentiated in time and needs an initial condition.
    #[must_use]
    pub const fn is_differential(self) -> bool {
        matches!(self, Self::Ode | Self::Pde)
    }
}

impl fmt::Display for EquationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ode => write!(f, "ode"),
            Self::Pde => write!(f, "pde"),
            Self::Algebraic => write!(f, "algebraic"),
        }
    }
}

/// An equation defining one variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    variable: VariableName,
    kind: EquationKind,
    domain: Domain,
    expr: Expr,
}

impl Equation {
    /// Creates a new equation defining `variable`.
    #[must_use]
    pub const fn new(
        variable: VariableName,
        kind: EquationKind,
        domain: Domain,
        expr: Expr,
    ) -> Self {
        Self {
            variable,
            kind,
            domain,
            expr,
        }
    }

    /// Returns the variable this equation defines.
    #[must_use]
    pub const fn variable(&self) -> &VariableName {
        &self.variable
    }

    /// Returns the kind of the equation.
    #[must_use]
    pub const fn kind(&self) -> EquationKind {
        self.kind
    }

    /// Returns the domain the equation holds on.
    #[must_use]
    pub const fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Returns the right-hand side or residual.
    #[must_use]
    pub const fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Returns every symbol the equation references, including the variable
    /// it defines.
    #[must_use]
    pub fn dependencies(&self) -> IndexSet<Symbol> {
        let mut symbols = IndexSet::new();
        symbols.insert(Symbol::Variable(self.variable.clone()));
        symbols.extend(self.expr.dependencies());
        symbols
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EquationKind::Ode | EquationKind::Pde => {
                write!(f, "d{{{}}}/dt = {}", self.variable, self.expr)
            }
            EquationKind::Algebraic => write!(f, "0 = {}", self.expr),
        }
    }
}
