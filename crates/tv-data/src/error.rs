//! Errors surfaced by the data layer.

use tv_core::CoreError;
use thiserror::Error;

/// Result type for data-layer operations.
pub type DataResult<T> = Result<T, DataError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    /// Transport failure or non-success HTTP status.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Payload parsed but violates the dataset invariants, or failed to
    /// parse at all.
    #[error("Invalid response: {what}")]
    InvalidResponse { what: &'static str },

    /// An unknown diagram type reached the data layer.
    #[error("Unsupported diagram type: {name}")]
    UnsupportedDiagram { name: String },
}

impl From<CoreError> for DataError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownDiagram { name } => DataError::UnsupportedDiagram { name },
            CoreError::NonFinite { .. } | CoreError::InvalidBounds { .. } => {
                DataError::InvalidResponse {
                    what: "non-finite or inverted bounds",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DataError::Network {
            message: "connection refused".into(),
        };
        assert!(err.to_string().contains("connection refused"));

        let err = DataError::InvalidResponse {
            what: "saturation.hV missing",
        };
        assert!(err.to_string().contains("saturation.hV"));
    }

    #[test]
    fn unknown_diagram_converts() {
        let core_err = CoreError::UnknownDiagram { name: "pv".into() };
        let err: DataError = core_err.into();
        assert!(matches!(err, DataError::UnsupportedDiagram { name } if name == "pv"));
    }
}
