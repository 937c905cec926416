use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum VarunError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("groundwater dataset {path} is unavailable: {reason}")]
    DatasetUnavailable { path: PathBuf, reason: String },

    #[error("no nearby groundwater data found")]
    NoMatch,

    #[error("failed to load dataset schema from {path}: {reason}")]
    SchemaLoad { path: PathBuf, reason: String },

    #[error("invalid dataset schema: {0}")]
    SchemaInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl VarunError {
    /// Message safe to show an end user.
    ///
    /// Dataset failures are reported generically; the path and OS error
    /// stay in the `Display` output, which goes to the log.
    pub fn user_message(&self) -> String {
        match self {
            VarunError::DatasetUnavailable { .. } => {
                "groundwater data service is unavailable, please try again later".into()
            }
            other => other.to_string(),
        }
    }

    /// HTTP-equivalent status code for this failure.
    pub fn status(&self) -> u16 {
        match self {
            VarunError::InvalidInput(_) => 400,
            VarunError::NoMatch => 404,
            VarunError::DatasetUnavailable { .. } => 503,
            _ => 500,
        }
    }
}
