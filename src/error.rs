use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Chain interaction errors.
///
/// Mirrors the three ways an on-chain call fails from the caller's point of
/// view: the transport broke, the transaction was declined or reverted, or
/// an input could not be encoded at all.
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("chain call failed: {0}")]
    Network(String),

    #[error("transaction rejected: {0}")]
    Rejected(String),

    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
