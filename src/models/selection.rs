//! Result of an interactive selection

/// Outcome of a prompt that picks a value
///
/// `Invalid` carries the raw input so the caller can report it and decide
/// on a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    /// The user picked a value (or accepted the default)
    Confirmed(T),
    /// The user entered the go-back token
    Aborted,
    /// The input could not be resolved to a value
    Invalid(String),
}
