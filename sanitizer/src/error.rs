use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "template has {fragments} literal fragments for {values} values, expected {expected}",
        expected = .values + 1
    )]
    Arity { fragments: usize, values: usize },
    #[error("value could not be formatted: {0}")]
    Format(#[from] std::fmt::Error),
    #[error("not a store page path: {0:?}")]
    InvalidStorePath(String),
    #[error("app details request answered with status {0}")]
    Status(u16),
    #[error("invalid app details: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
