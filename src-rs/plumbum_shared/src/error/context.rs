/// Represents different types of contextual information that can be associated with errors.
///
/// The `Context` enum provides a way to attach additional information to error messages,
/// helping users understand the context in which an error occurred and how to resolve it.
///
/// # Examples
///
/// ```rust
/// use plumbum_shared::error::Context;
///
/// let note = Context::Note("`side reactions` was set to [\"oxygen\"]".to_string());
/// let help = Context::Help("set `surface form` to `differential` or `algebraic`".to_string());
///
/// let contexts = vec![note, help];
/// assert_eq!(contexts.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// Additional information or context about the error.
    ///
    /// Notes provide supplementary details that help users understand the error
    /// better, such as the well-posedness rule that was violated or the
    /// sub-model that first defined a colliding variable.
    Note(String),

    /// Helpful suggestions for resolving the error.
    ///
    /// Help text provides actionable advice on how to fix the error, such as
    /// the values an option key accepts.
    Help(String),
}
