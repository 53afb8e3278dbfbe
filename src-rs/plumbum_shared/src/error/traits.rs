use crate::error::Context;

/// Trait for types that can be converted to plumbum error messages.
///
/// This trait provides a standardized interface for error types to expose
/// their error message and associated context. Every error raised by the
/// model pipeline implements it so that reporting is consistent no matter
/// which stage failed.
pub trait AsPlumbumError {
    /// Returns the primary error message.
    ///
    /// This should be a concise, user-friendly description of what went wrong.
    fn message(&self) -> String;

    /// Returns additional context information about the error.
    ///
    /// Returns an empty vector if no context is available.
    fn context(&self) -> Vec<Context> {
        vec![]
    }
}
