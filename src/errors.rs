use thiserror::Error;

/// Failures raised at the string boundary of the wizard core.
///
/// Refused step transitions are not errors; they surface as held
/// session events.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Invalid value for {field}: `{value}`")]
    InvalidValue { field: &'static str, value: String },
    #[error("Unknown fund: {0}")]
    UnknownFund(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
