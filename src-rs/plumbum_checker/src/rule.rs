use std::fmt;

/// A structural rule a well-posed model satisfies.
///
/// Rules are checked in the order of [`Rule::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rule {
    /// Every declared variable has exactly one defining equation, and every
    /// equation defines a declared variable.
    UniqueDefinitions,
    /// Equations, boundary conditions and initial conditions reference only
    /// declared variables and parameters.
    DeclaredSymbols,
    /// Every variable differentiated in space has exactly one pair of
    /// boundary conditions, and no other variable has any.
    BoundaryConditions,
    /// Every state variable has exactly one initial condition, and no
    /// algebraic variable has one.
    InitialConditions,
    /// On every domain, the number of unknowns equals the number of
    /// equations.
    EquationCount,
    /// Output expressions reference only declared variables and parameters.
    /// Only checked in debug mode.
    OutputVariables,
}

impl Rule {
    /// Every rule, in checking order.
    pub const ALL: [Self; 6] = [
        Self::UniqueDefinitions,
        Self::DeclaredSymbols,
        Self::BoundaryConditions,
        Self::InitialConditions,
        Self::EquationCount,
        Self::OutputVariables,
    ];

    /// Returns the rule number, starting at 1.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::UniqueDefinitions => 1,
            Self::DeclaredSymbols => 2,
            Self::BoundaryConditions => 3,
            Self::InitialConditions => 4,
            Self::EquationCount => 5,
            Self::OutputVariables => 6,
        }
    }

    /// Returns whether the rule only runs in debug mode.
    #[must_use]
    pub const fn is_debug_only(self) -> bool {
        matches!(self, Self::OutputVariables)
    }

    /// Returns a one-line statement of the rule.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::UniqueDefinitions => "every variable has exactly one defining equation",
            Self::DeclaredSymbols => {
                "equations and conditions reference only declared variables and parameters"
            }
            Self::BoundaryConditions => {
                "every variable differentiated in space has exactly one pair of boundary conditions"
            }
            Self::InitialConditions => "every state variable has exactly one initial condition",
            Self::EquationCount => "every domain has as many equations as unknowns",
            Self::OutputVariables => "outputs reference only declared variables and parameters",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule {}: {}", self.number(), self.description())
    }
}
