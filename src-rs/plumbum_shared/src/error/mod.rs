//! Errors for the plumbum model pipeline

mod context;
mod traits;

use std::fmt;

pub use context::Context;
pub use traits::AsPlumbumError;

/// The stage of the model pipeline that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Validation of the options record.
    Options,
    /// Composition of sub-models into a model.
    Assembly,
    /// Structural verification of an assembled model.
    WellPosedness,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Options => write!(f, "options"),
            Self::Assembly => write!(f, "assembly"),
            Self::WellPosedness => write!(f, "well-posedness check"),
        }
    }
}

/// Unified error representation for plumbum
///
/// This struct represents errors in a format suitable for display to users.
/// It includes the pipeline stage where the error occurred, a human-readable
/// message, and any context the originating error supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlumbumError {
    /// The stage where the error occurred
    stage: Stage,
    /// Human-readable error message
    message: String,
    /// Optional context information
    context: Vec<Context>,
}

impl PlumbumError {
    /// Creates a new `PlumbumError` from an error that implements `AsPlumbumError`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plumbum_shared::error::{AsPlumbumError, PlumbumError, Stage};
    ///
    /// struct SimpleError(String);
    ///
    /// impl AsPlumbumError for SimpleError {
    ///     fn message(&self) -> String {
    ///         self.0.clone()
    ///     }
    /// }
    ///
    /// let error = SimpleError("Something went wrong".to_string());
    /// let plumbum_error = PlumbumError::from_error(&error, Stage::Options);
    ///
    /// assert_eq!(plumbum_error.message(), "Something went wrong");
    /// assert!(plumbum_error.context().is_empty());
    /// ```
    pub fn from_error(error: &impl AsPlumbumError, stage: Stage) -> Self {
        Self {
            stage,
            message: error.message(),
            context: error.context(),
        }
    }

    /// Returns the stage where the error occurred
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the human-readable error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the context information
    #[must_use]
    pub fn context(&self) -> &[Context] {
        &self.context
    }
}
