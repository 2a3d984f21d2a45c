use thiserror::Error;

/// Failures that end an interactive session.
///
/// Rejected amounts, insufficient funds and bad menu choices are not errors;
/// they are reported to the user as output lines and the session goes on.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Input closed while waiting for: {prompt:?}")]
    InputClosed { prompt: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
