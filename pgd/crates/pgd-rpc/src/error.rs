//! Error types for the RPC client.

use thiserror::Error;

/// Failure of a single RPC call.
///
/// Every call returns at most one of these; the client never retries.
#[derive(Error, Debug)]
pub enum RpcError {
    /// The server received the call and answered with an error.
    #[error("{method} failed: {message}")]
    Call {
        /// Remote method name, e.g. `Server.GetPoolStats`
        method: String,
        /// Error text sent by the server
        message: String,
    },

    /// The reply could not be encoded or decoded.
    #[error("malformed RPC payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The channel failed to carry the request or the reply.
    #[error("RPC transport error: {0}")]
    Transport(#[from] std::io::Error),
}

/// Result type alias using RpcError.
pub type Result<T> = std::result::Result<T, RpcError>;
