use thiserror::Error;

/// Recoverable input failures.
///
/// The display strings are the exact diagnostics printed before a prompt is
/// repeated, so callers print the error itself and ask again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("The input date is invalid")]
    InvalidDate,
    #[error("The input time is invalid")]
    InvalidTime,
    #[error("Invalid task number")]
    InvalidTaskNumber,
    #[error("Invalid field")]
    InvalidField,
    #[error("The input action is invalid")]
    InvalidAction,
}
