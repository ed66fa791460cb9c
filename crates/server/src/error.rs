//! Error types for the MCP server.

use thiserror::Error;

/// Startup and configuration failures. Tool failures never use this type; they are returned to the
/// caller as error results.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration errors (missing credential, bad URL, bad log settings)
    #[error("{0}")]
    Config(String),

    /// Startup errors (logging or transport failed to initialize)
    #[error("Startup error: {0}")]
    Startup(String),

    /// Close client construction errors
    #[error(transparent)]
    Close(#[from] close_mcp_tools::CloseError),
}

/// Result type alias for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;
