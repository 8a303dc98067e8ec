use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown key {0:?}")]
    UnknownKey(String),
    #[error("invalid sprite settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
