use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContrastError {
    /// Input could not be normalized to exactly 6 hex digits.
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),
    #[error("unknown WCAG compliance level: {0:?}")]
    UnknownComplianceLevel(String),
}

impl From<ContrastError> for napi::Error {
    fn from(err: ContrastError) -> Self {
        napi::Error::new(napi::Status::InvalidArg, err.to_string())
    }
}
