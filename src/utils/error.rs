use thiserror::Error;

#[derive(Error, Debug)]
pub enum KimlikError {
    #[error("Could not communicate with the identity verification service: {message}")]
    DirectoryUnavailable { message: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Directory service returned HTTP {status}")]
    UnexpectedStatus { status: u16 },

    #[error("SOAP fault ({code}): {message}")]
    SoapFault { code: String, message: String },

    #[error("Invalid directory response: {message}")]
    InvalidResponse { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl KimlikError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            KimlikError::DirectoryUnavailable { .. }
            | KimlikError::HttpError(_)
            | KimlikError::UnexpectedStatus { .. } => {
                "Check network access to the directory service endpoint and try again"
            }
            KimlikError::SoapFault { .. } | KimlikError::InvalidResponse { .. } => {
                "Check the request fields and the configured endpoint and SOAP action"
            }
            KimlikError::IoError(_) => "Check that the file exists and is readable",
            KimlikError::SerializationError(_) => "Report this as a bug",
            KimlikError::ConfigError { .. }
            | KimlikError::ConfigValidationError { .. }
            | KimlikError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line options"
            }
            KimlikError::ValidationError { .. } => "Check the input values",
        }
    }

    /// Process exit code for the CLI. 1 is reserved for a negative answer.
    pub fn exit_code(&self) -> i32 {
        match self {
            KimlikError::ConfigError { .. }
            | KimlikError::ConfigValidationError { .. }
            | KimlikError::InvalidConfigValueError { .. }
            | KimlikError::ValidationError { .. } => 2,
            _ => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, KimlikError>;
