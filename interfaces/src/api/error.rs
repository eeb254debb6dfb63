#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Server error status={0}, message={1}, url={2}, request={3}")]
    ServerError(u16, String, String, String),

    #[error("Serialization error: {0}")]
    SerializeError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Malformed URL: {0}")]
    MalformedUrl(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
