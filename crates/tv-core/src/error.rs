use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid axis bounds for {what}: min={min}, max={max}")]
    InvalidBounds {
        what: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Unknown diagram type: {name}")]
    UnknownDiagram { name: String },
}
