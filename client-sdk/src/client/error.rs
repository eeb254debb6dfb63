use studyhall_interfaces::api::error::ServerError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Server error: {0}")]
    ServerError(#[from] ServerError),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}
