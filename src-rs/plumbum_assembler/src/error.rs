//! Errors raised while composing sub-models.

use std::fmt;

use plumbum_expr::VariableName;
use plumbum_shared::error::{AsPlumbumError, Context};

/// Represents a failure to compose sub-models into a model.
///
/// Collision variants name the colliding variable and both sub-models
/// involved: `first` is the sub-model that provided the item, `second` is
/// the one that tried to provide it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelConstructionError {
    /// A variable was declared twice.
    DuplicateVariable {
        /// The colliding variable.
        variable: VariableName,
        /// The sub-model that first declared it.
        first: &'static str,
        /// The sub-model that declared it again.
        second: &'static str,
    },
    /// A variable was given two defining equations.
    DuplicateEquation {
        /// The colliding variable.
        variable: VariableName,
        /// The sub-model that first defined it.
        first: &'static str,
        /// The sub-model that defined it again.
        second: &'static str,
    },
    /// A variable was given two pairs of boundary conditions.
    DuplicateBoundaryConditions {
        /// The colliding variable.
        variable: VariableName,
        /// The sub-model that first set them.
        first: &'static str,
        /// The sub-model that set them again.
        second: &'static str,
    },
    /// A variable was given two initial conditions.
    DuplicateInitialCondition {
        /// The colliding variable.
        variable: VariableName,
        /// The sub-model that first set it.
        first: &'static str,
        /// The sub-model that set it again.
        second: &'static str,
    },
    /// An output was provided twice.
    DuplicateOutput {
        /// The colliding output name.
        name: String,
        /// The sub-model that first provided it.
        first: &'static str,
        /// The sub-model that provided it again.
        second: &'static str,
    },
    /// A sub-model wrote an equation or condition for a variable nobody
    /// declared.
    UndeclaredVariable {
        /// The undeclared variable.
        variable: VariableName,
        /// The sub-model that referenced it.
        submodel: &'static str,
    },
    /// A sub-model asked for an output nobody has provided yet.
    MissingOutput {
        /// The missing output name.
        name: String,
        /// The sub-model that asked for it.
        submodel: &'static str,
    },
    /// A sub-model added a source term to a variable with no defining
    /// equation.
    OrphanSource {
        /// The variable the source was aimed at.
        variable: VariableName,
        /// The sub-model that added the source.
        submodel: &'static str,
    },
}

impl ModelConstructionError {
    /// Creates a new error indicating a variable was declared twice.
    #[must_use]
    pub const fn duplicate_variable(
        variable: VariableName,
        first: &'static str,
        second: &'static str,
    ) -> Self {
        Self::DuplicateVariable {
            variable,
            first,
            second,
        }
    }

    /// Creates a new error indicating a variable was defined twice.
    #[must_use]
    pub const fn duplicate_equation(
        variable: VariableName,
        first: &'static str,
        second: &'static str,
    ) -> Self {
        Self::DuplicateEquation {
            variable,
            first,
            second,
        }
    }

    /// Creates a new error indicating boundary conditions were set twice.
    #[must_use]
    pub const fn duplicate_boundary_conditions(
        variable: VariableName,
        first: &'static str,
        second: &'static str,
    ) -> Self {
        Self::DuplicateBoundaryConditions {
            variable,
            first,
            second,
        }
    }

    /// Creates a new error indicating an initial condition was set twice.
    #[must_use]
    pub const fn duplicate_initial_condition(
        variable: VariableName,
        first: &'static str,
        second: &'static str,
    ) -> Self {
        Self::DuplicateInitialCondition {
            variable,
            first,
            second,
        }
    }

    /// Creates a new error indicating an output was provided twice.
    #[must_use]
    pub const fn duplicate_output(name: String, first: &'static str, second: &'static str) -> Self {
        Self::DuplicateOutput {
            name,
            first,
            second,
        }
    }

    /// Creates a new error indicating an undeclared variable was referenced.
    #[must_use]
    pub const fn undeclared_variable(variable: VariableName, submodel: &'static str) -> Self {
        Self::UndeclaredVariable { variable, submodel }
    }

    /// Creates a new error indicating an output was not found.
    #[must_use]
    pub const fn missing_output(name: String, submodel: &'static str) -> Self {
        Self::MissingOutput { name, submodel }
    }

    /// Creates a new error indicating a source term has no target equation.
    #[must_use]
    pub const fn orphan_source(variable: VariableName, submodel: &'static str) -> Self {
        Self::OrphanSource { variable, submodel }
    }

    /// Returns the name of the variable or output the error is about.
    #[must_use]
    pub fn subject(&self) -> &str {
        match self {
            Self::DuplicateVariable { variable, .. }
            | Self::DuplicateEquation { variable, .. }
            | Self::DuplicateBoundaryConditions { variable, .. }
            | Self::DuplicateInitialCondition { variable, .. }
            | Self::UndeclaredVariable { variable, .. }
            | Self::OrphanSource { variable, .. } => variable.as_str(),
            Self::DuplicateOutput { name, .. } | Self::MissingOutput { name, .. } => name,
        }
    }
}

impl fmt::Display for ModelConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateVariable {
                variable, second, ..
            } => write!(f, "sub-model `{second}` redeclares variable `{variable}`"),
            Self::DuplicateEquation {
                variable, second, ..
            } => write!(f, "sub-model `{second}` redefines variable `{variable}`"),
            Self::DuplicateBoundaryConditions {
                variable, second, ..
            } => write!(
                f,
                "sub-model `{second}` sets boundary conditions for `{variable}` a second time"
            ),
            Self::DuplicateInitialCondition {
                variable, second, ..
            } => write!(
                f,
                "sub-model `{second}` sets the initial condition for `{variable}` a second time"
            ),
            Self::DuplicateOutput { name, second, .. } => {
                write!(f, "sub-model `{second}` redefines output `{name}`")
            }
            Self::UndeclaredVariable { variable, submodel } => write!(
                f,
                "sub-model `{submodel}` references undeclared variable `{variable}`"
            ),
            Self::MissingOutput { name, submodel } => write!(
                f,
                "sub-model `{submodel}` requires output `{name}`, which no earlier sub-model sets"
            ),
            Self::OrphanSource { variable, submodel } => write!(
                f,
                "sub-model `{submodel}` adds a source to `{variable}`, which has no equation"
            ),
        }
    }
}

impl std::error::Error for ModelConstructionError {}

impl AsPlumbumError for ModelConstructionError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::DuplicateVariable { first, .. }
            | Self::DuplicateEquation { first, .. }
            | Self::DuplicateBoundaryConditions { first, .. }
            | Self::DuplicateInitialCondition { first, .. }
            | Self::DuplicateOutput { first, .. } => {
                vec![Context::Note(format!("first provided by sub-model `{first}`"))]
            }
            Self::MissingOutput { .. } => vec![Context::Help(
                "outputs are only visible to sub-models that run after the one providing them"
                    .to_string(),
            )],
            Self::UndeclaredVariable { .. } | Self::OrphanSource { .. } => vec![],
        }
    }
}
