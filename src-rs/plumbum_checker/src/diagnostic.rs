use std::fmt;

use plumbum_expr::{Domain, Symbol, VariableName};

use crate::Rule;

/// Where a dangling symbol was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolLocation {
    /// In the defining equation of a variable.
    Equation(VariableName),
    /// In the boundary conditions of a variable.
    BoundaryCondition(VariableName),
    /// In the initial condition of a variable.
    InitialCondition(VariableName),
    /// In a named output.
    Output(String),
}

impl fmt::Display for SymbolLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equation(variable) => write!(f, "the equation for `{variable}`"),
            Self::BoundaryCondition(variable) => {
                write!(f, "the boundary conditions for `{variable}`")
            }
            Self::InitialCondition(variable) => write!(f, "the initial condition for `{variable}`"),
            Self::Output(name) => write!(f, "output `{name}`"),
        }
    }
}

/// A violation of a well-posedness rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A declared variable has no defining equation.
    UndefinedVariable {
        /// The undefined variable.
        variable: VariableName,
    },
    /// A declared variable has more than one defining equation.
    MultipleDefinitions {
        /// The variable.
        variable: VariableName,
        /// The number of defining equations.
        count: usize,
    },
    /// An equation defines a variable that is not declared.
    UndeclaredDefinition {
        /// The undeclared variable.
        variable: VariableName,
    },
    /// A symbol is referenced but not declared.
    DanglingSymbol {
        /// Where the symbol was found.
        location: SymbolLocation,
        /// The undeclared symbol.
        symbol: Symbol,
    },
    /// A variable differentiated in space has no boundary conditions.
    MissingBoundaryConditions {
        /// The variable.
        variable: VariableName,
    },
    /// A variable has more than one pair of boundary conditions.
    MultipleBoundaryConditions {
        /// The variable.
        variable: VariableName,
        /// The number of pairs.
        count: usize,
    },
    /// A variable that is not differentiated in space has boundary
    /// conditions.
    UnexpectedBoundaryConditions {
        /// The variable.
        variable: VariableName,
    },
    /// A state variable has no initial condition.
    MissingInitialCondition {
        /// The variable.
        variable: VariableName,
    },
    /// A state variable has more than one initial condition.
    MultipleInitialConditions {
        /// The variable.
        variable: VariableName,
        /// The number of initial conditions.
        count: usize,
    },
    /// A variable that is not a state variable has an initial condition.
    UnexpectedInitialCondition {
        /// The variable.
        variable: VariableName,
    },
    /// A domain has a different number of unknowns and equations.
    UnbalancedDomain {
        /// The domain.
        domain: Domain,
        /// The number of unknowns declared on it.
        unknowns: usize,
        /// The number of equations holding on it.
        equations: usize,
    },
}

impl Diagnostic {
    /// Returns the rule this diagnostic violates.
    #[must_use]
    pub const fn rule(&self) -> Rule {
        match self {
            Self::UndefinedVariable { .. }
            | Self::MultipleDefinitions { .. }
            | Self::UndeclaredDefinition { .. } => Rule::UniqueDefinitions,
            Self::DanglingSymbol {
                location: SymbolLocation::Output(_),
                ..
            } => Rule::OutputVariables,
            Self::DanglingSymbol { .. } => Rule::DeclaredSymbols,
            Self::MissingBoundaryConditions { .. }
            | Self::MultipleBoundaryConditions { .. }
            | Self::UnexpectedBoundaryConditions { .. } => Rule::BoundaryConditions,
            Self::MissingInitialCondition { .. }
            | Self::MultipleInitialConditions { .. }
            | Self::UnexpectedInitialCondition { .. } => Rule::InitialConditions,
            Self::UnbalancedDomain { .. } => Rule::EquationCount,
        }
    }

    /// Returns the variable the diagnostic is about, if there is one.
    #[must_use]
    pub const fn variable(&self) -> Option<&VariableName> {
        match self {
            Self::UndefinedVariable { variable }
            | Self::MultipleDefinitions { variable, .. }
            | Self::UndeclaredDefinition { variable }
            | Self::MissingBoundaryConditions { variable }
            | Self::MultipleBoundaryConditions { variable, .. }
            | Self::UnexpectedBoundaryConditions { variable }
            | Self::MissingInitialCondition { variable }
            | Self::MultipleInitialConditions { variable, .. }
            | Self::UnexpectedInitialCondition { variable } => Some(variable),
            Self::DanglingSymbol {
                location:
                    SymbolLocation::Equation(variable)
                    | SymbolLocation::BoundaryCondition(variable)
                    | SymbolLocation::InitialCondition(variable),
                ..
            } => Some(variable),
            Self::DanglingSymbol {
                location: SymbolLocation::Output(_),
                ..
            }
            | Self::UnbalancedDomain { .. } => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { variable } => {
                write!(f, "variable `{variable}` has no defining equation")
            }
            Self::MultipleDefinitions { variable, count } => {
                write!(f, "variable `{variable}` is defined by {count} equations")
            }
            Self::UndeclaredDefinition { variable } => {
                write!(f, "an equation defines undeclared variable `{variable}`")
            }
            Self::DanglingSymbol { location, symbol } => {
                write!(f, "{location} references undeclared {symbol}")
            }
            Self::MissingBoundaryConditions { variable } => write!(
                f,
                "variable `{variable}` is differentiated in space but has no boundary conditions"
            ),
            Self::MultipleBoundaryConditions { variable, count } => write!(
                f,
                "variable `{variable}` has {count} pairs of boundary conditions"
            ),
            Self::UnexpectedBoundaryConditions { variable } => write!(
                f,
                "variable `{variable}` has boundary conditions but is not differentiated in space"
            ),
            Self::MissingInitialCondition { variable } => {
                write!(f, "state variable `{variable}` has no initial condition")
            }
            Self::MultipleInitialConditions { variable, count } => write!(
                f,
                "state variable `{variable}` has {count} initial conditions"
            ),
            Self::UnexpectedInitialCondition { variable } => write!(
                f,
                "variable `{variable}` has an initial condition but is not a state variable"
            ),
            Self::UnbalancedDomain {
                domain,
                unknowns,
                equations,
            } => write!(
                f,
                "domain {domain} has {unknowns} unknowns but {equations} equations"
            ),
        }
    }
}
