use agmcore::utils::error::AgmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PropError {
    #[error(transparent)]
    Engine(#[from] AgmError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse formula '{input}': {}", errors.join("; "))]
    Parse { input: String, errors: Vec<String> },

    #[error("Failed to parse belief document '{file}': {source}")]
    DocumentParseError {
        source: toml::de::Error,
        file: String,
    },

    #[error("Failed to serialize belief document for '{file}': {source}")]
    DocumentSerializeError {
        source: toml::ser::Error,
        file: String,
    },

    #[error("Unknown closure generator '{0}'")]
    UnknownGenerator(String),
}

pub type PropResult<T> = Result<T, PropError>;
