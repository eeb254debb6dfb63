use envy::Error as EnvyError;
use studyhall_client_sdk::client::error::ClientError;
use studyhall_interfaces::api::error::ServerError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Env error: {0}")]
    EnvError(#[from] EnvyError),

    #[error("Client error: {0}")]
    ClientError(#[from] ClientError),

    #[error("Server error: {0}")]
    ServerError(#[from] ServerError),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}
