#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid version string '{0}'")]
    InvalidFormat(String),

    #[error("Invalid version range '{0}'")]
    InvalidRange(String),
}
