//! Names for the symbols an expression can reference.

use std::fmt;

/// The name of a model variable (an unknown of the assembled system).
///
/// Variable names are the human-readable names used throughout the model,
/// such as `X-averaged electrolyte concentration`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableName(String);

impl VariableName {
    /// Creates a new variable name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().to_string())
    }

    /// Returns the variable name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The name of a model parameter.
///
/// Parameter names are short symbols such as `l_n`. Parameter values are
/// supplied later by the parameter-substitution layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParameterName(String);

impl ParameterName {
    /// Creates a new parameter name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().to_string())
    }

    /// Returns the parameter name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A symbol referenced by an expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A model variable.
    Variable(VariableName),
    /// A scalar parameter or a function parameter.
    Parameter(ParameterName),
}

impl Symbol {
    /// Creates a variable symbol.
    pub fn variable(name: impl AsRef<str>) -> Self {
        Self::Variable(VariableName::new(name))
    }

    /// Creates a parameter symbol.
    pub fn parameter(name: impl AsRef<str>) -> Self {
        Self::Parameter(ParameterName::new(name))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(name) => write!(f, "variable `{name}`"),
            Self::Parameter(name) => write!(f, "parameter `{name}`"),
        }
    }
}
