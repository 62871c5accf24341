use std::num::ParseFloatError;

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The trailing marker is missing, has the wrong case, or the text is
    /// too short to hold a number and a marker.
    #[error("Invalid {0}")]
    InvalidUnit(&'static str),

    #[error("invalid number {0}")]
    InvalidNumber(#[from] ParseFloatError),

    #[error("number {0} out of range")]
    NumberOutOfRange(String),
}
