use thiserror::Error;

/// Errors surfaced by the dispatcher before a run starts, or while wiring it up
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Invalid send count: {0}")]
    InvalidCount(String),

    #[error("A run is already active")]
    AlreadyRunning,

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Client error: {0}")]
    ClientError(String),
}
