use thiserror::Error;

pub type Result<T> = std::result::Result<T, KeySeqError>;

#[derive(Debug, Error)]
pub enum KeySeqError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No moves known for key '{key}'")]
    UnknownKey { key: char },

    #[error("Total sequence count exceeds the u64 range")]
    CountOverflow,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for KeySeqError {
    fn from(err: toml::de::Error) -> Self {
        KeySeqError::Config(format!("TOML parse error: {}", err))
    }
}
