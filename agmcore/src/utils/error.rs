use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgmError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration file '{file}': {source}")]
    ConfigParseError {
        source: toml::de::Error,
        file: String,
    },

    #[error("Failed to serialize configuration for '{file}': {source}")]
    ConfigSerializeError {
        source: toml::ser::Error,
        file: String,
    },

    /// The oracle could not produce a verdict. Fatal for the running operation.
    #[error("Oracle failed to produce a verdict: {reason}")]
    Oracle { reason: String },

    #[error("The consequence operator returned an empty closure for a non-empty belief set")]
    EmptyClosure,

    #[error("Precondition violated: {0}")]
    Precondition(String),
}

pub type AgmResult<T> = Result<T, AgmError>;

impl AgmError {
    /// Shorthand for [`AgmError::Oracle`].
    pub fn oracle(reason: impl Into<String>) -> Self {
        AgmError::Oracle {
            reason: reason.into(),
        }
    }
}
