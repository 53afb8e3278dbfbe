//! Declared variables and parameters.

use std::fmt;

use plumbum_expr::{Domain, ParameterName, VariableName};

/// A declared unknown of the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    name: VariableName,
    domain: Domain,
}

impl Variable {
    /// Creates a new variable living on `domain`.
    #[must_use]
    pub const fn new(name: VariableName, domain: Domain) -> Self {
        Self { name, domain }
    }

    /// Returns the variable name.
    #[must_use]
    pub const fn name(&self) -> &VariableName {
        &self.name
    }

    /// Returns the domain the variable lives on.
    #[must_use]
    pub const fn domain(&self) -> &Domain {
        &self.domain
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.name, self.domain)
    }
}

/// A declared parameter of the model.
///
/// Parameters are never given values here; substituting values is the job of
/// whoever solves the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: ParameterName,
    description: String,
}

impl Parameter {
    /// Creates a new parameter.
    #[must_use]
    pub const fn new(name: ParameterName, description: String) -> Self {
        Self { name, description }
    }

    /// Returns the parameter name.
    #[must_use]
    pub const fn name(&self) -> &ParameterName {
        &self.name
    }

    /// Returns a short description of the parameter.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}
