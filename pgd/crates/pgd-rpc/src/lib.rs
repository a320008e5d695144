//! pgd-rpc - Administrative RPC client for the DHCP server
//!
//! Two read-only queries are exposed: lease statistics per pool and the
//! memory/status record of the server process. Both go through a
//! [`CallChannel`], a synchronous named-method request/response channel.
//! Each call either returns its decoded reply or one [`RpcError`]; nothing
//! is retried.
//!
//! # Module Structure
//!
//! - [`channel`] - The channel trait and a JSON-over-stream implementation
//! - [`server`] - Typed `Server.*` queries
//! - [`stats`] - Reply records
//! - [`error`] - Error types

#![warn(missing_docs)]

pub mod channel;
pub mod error;
pub mod server;
pub mod stats;

pub use channel::{CallChannel, JsonStreamChannel};
pub use error::{Result, RpcError};
pub use server::{RpcClient, ServerRpcRequest};
pub use stats::{PoolStat, StatusResp};
