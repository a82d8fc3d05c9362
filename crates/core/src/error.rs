use reflector_api::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReflectorError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Logging error: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, ReflectorError>;
