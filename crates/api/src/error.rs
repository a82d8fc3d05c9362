#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid identifier: \"{0}\" is not a valid FQSEN")]
    InvalidIdentifier(String),
}

pub type ModelResult<T> = std::result::Result<T, ModelError>;
