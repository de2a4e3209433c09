use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum BuildError {
    #[error("missing pan rect")]
    MissingPanRect,
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;
