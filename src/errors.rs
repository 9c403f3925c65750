use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Failed to read document from store: {0}")]
    Store(String),

    #[error("Document is not valid UTF-8 text: {0}")]
    Decode(String),

    #[error("Failed to invoke agent: {0}")]
    Agent(String),
}

impl From<std::string::FromUtf8Error> for DomainError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        DomainError::Decode(error.to_string())
    }
}

impl From<std::str::Utf8Error> for DomainError {
    fn from(error: std::str::Utf8Error) -> Self {
        DomainError::Decode(error.to_string())
    }
}
