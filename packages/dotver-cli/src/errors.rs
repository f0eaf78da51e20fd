use std::sync::Arc;

#[derive(thiserror::Error, Clone, Debug)]
pub enum Error {
    #[error(transparent)]
    VersionError(#[from] dotver::Error),

    #[error("Failed to serialize the output: {0}")]
    JsonError(Arc<serde_json::Error>),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::JsonError(Arc::new(value))
    }
}
