use std::fmt;

use plumbum_shared::error::{AsPlumbumError, Context};

use crate::{Diagnostic, Rule};

/// A model failed the well-posedness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelError {
    diagnostic: Diagnostic,
}

impl ModelError {
    /// Creates a new error from the diagnostic of the violated rule.
    #[must_use]
    pub const fn new(diagnostic: Diagnostic) -> Self {
        Self { diagnostic }
    }

    /// Returns the violated rule.
    #[must_use]
    pub const fn rule(&self) -> Rule {
        self.diagnostic.rule()
    }

    /// Returns the diagnostic.
    #[must_use]
    pub const fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }
}

impl From<Diagnostic> for ModelError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::new(diagnostic)
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "model is not well posed: {}", self.diagnostic)
    }
}

impl std::error::Error for ModelError {}

impl AsPlumbumError for ModelError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        vec![Context::Note(format!("violates {}", self.rule()))]
    }
}
