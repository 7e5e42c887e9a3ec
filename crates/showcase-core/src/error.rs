use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("invalid showcase config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("no node registered with id `{0}`")]
    UnknownNode(String),
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
