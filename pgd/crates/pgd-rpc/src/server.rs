//! Typed administrative queries against a running DHCP server.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::debug;

use crate::channel::CallChannel;
use crate::error::Result;
use crate::stats::{PoolStat, StatusResp};

/// Remote method returning one [`PoolStat`] per configured pool.
pub const GET_POOL_STATS: &str = "Server.GetPoolStats";

/// Remote method returning the server's [`StatusResp`].
pub const MEM_STATUS: &str = "Server.MemStatus";

/// Client for a server's RPC endpoint.
///
/// # Example
///
/// ```no_run
/// use pgd_rpc::{JsonStreamChannel, RpcClient};
///
/// let channel = JsonStreamChannel::connect("127.0.0.1:8677")?;
/// let client = RpcClient::new(channel);
/// for pool in client.server().get_pool_stats()? {
///     println!("{} {}: {} free", pool.network_name, pool.subnet, pool.free);
/// }
/// # Ok::<(), pgd_rpc::RpcError>(())
/// ```
#[derive(Debug)]
pub struct RpcClient<C> {
    channel: C,
}

impl<C: CallChannel> RpcClient<C> {
    /// Creates a client over an open channel.
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    /// Queries under the `Server` namespace.
    pub fn server(&self) -> ServerRpcRequest<'_, C> {
        ServerRpcRequest { client: self }
    }

    /// Returns the channel.
    pub fn into_inner(self) -> C {
        self.channel
    }

    fn call<T: DeserializeOwned>(&self, method: &str, args: Value) -> Result<T> {
        debug!(method, "rpc call");
        let reply = self.channel.call(method, args)?;
        Ok(serde_json::from_value(reply)?)
    }
}

/// Requests served by the server's `Server` RPC object.
#[derive(Debug)]
pub struct ServerRpcRequest<'a, C> {
    client: &'a RpcClient<C>,
}

impl<C: CallChannel> ServerRpcRequest<'_, C> {
    /// Lease statistics for every pool, in server order.
    ///
    /// A `null` reply means the server has no pools.
    pub fn get_pool_stats(&self) -> Result<Vec<PoolStat>> {
        let stats: Option<Vec<PoolStat>> = self.client.call(GET_POOL_STATS, json!(0))?;
        Ok(stats.unwrap_or_default())
    }

    /// Memory and runtime status of the server process.
    pub fn mem_status(&self) -> Result<StatusResp> {
        self.client.call(MEM_STATUS, json!(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::MockCallChannel;
    use crate::error::RpcError;
    use std::net::Ipv4Addr;

    fn expect(mock: &mut MockCallChannel, method: &'static str, reply: Result<Value>) {
        let mut reply = Some(reply);
        mock.expect_call()
            .withf(move |m, args| m == method && *args == json!(0))
            .times(1)
            .returning(move |_, _| {
                reply
                    .take()
                    .unwrap_or_else(|| Ok(Value::Null))
            });
    }

    #[test]
    fn test_get_pool_stats() {
        let mut mock = MockCallChannel::new();
        expect(
            &mut mock,
            GET_POOL_STATS,
            Ok(json!([
                {"NetworkName": "lan", "Subnet": "10.0.2.0/24", "Start": "10.0.2.10",
                 "End": "10.0.2.200", "Registered": false, "Total": 191, "Active": 10,
                 "Claimed": 0, "Abandoned": 0, "Free": 181},
                {"NetworkName": "lan", "Subnet": "10.0.3.0/24", "Registered": true,
                 "Total": 50, "Free": 50}
            ])),
        );

        let client = RpcClient::new(mock);
        let stats = client.server().get_pool_stats().unwrap();

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].start, Some(Ipv4Addr::new(10, 0, 2, 10)));
        assert_eq!(stats[0].free, 181);
        assert_eq!(stats[1].subnet, "10.0.3.0/24");
        assert!(stats[1].registered);
    }

    #[test]
    fn test_null_pool_stats_is_empty() {
        let mut mock = MockCallChannel::new();
        expect(&mut mock, GET_POOL_STATS, Ok(Value::Null));
        let client = RpcClient::new(mock);
        assert!(client.server().get_pool_stats().unwrap().is_empty());
    }

    #[test]
    fn test_mem_status() {
        let mut mock = MockCallChannel::new();
        expect(
            &mut mock,
            MEM_STATUS,
            Ok(json!({"Alloc": 10, "TotalAlloc": 20, "Sys": 30, "NumGC": 4,
                      "Workers": 5, "Uptime": 60})),
        );
        let client = RpcClient::new(mock);
        let status = client.server().mem_status().unwrap();
        assert_eq!(status.num_gc, 4);
        assert_eq!(status.uptime, 60);
    }

    #[test]
    fn test_remote_failure_is_returned_once() {
        let mut mock = MockCallChannel::new();
        expect(
            &mut mock,
            MEM_STATUS,
            Err(RpcError::Call {
                method: MEM_STATUS.to_string(),
                message: "shutting down".to_string(),
            }),
        );
        let client = RpcClient::new(mock);
        assert!(matches!(
            client.server().mem_status(),
            Err(RpcError::Call { message, .. }) if message == "shutting down"
        ));
    }

    #[test]
    fn test_wrong_shape_is_decode_error() {
        let mut mock = MockCallChannel::new();
        expect(&mut mock, MEM_STATUS, Ok(json!("not a status")));
        let client = RpcClient::new(mock);
        assert!(matches!(client.server().mem_status(), Err(RpcError::Decode(_))));
    }

    #[test]
    fn test_transport_failure() {
        let mut mock = MockCallChannel::new();
        expect(
            &mut mock,
            GET_POOL_STATS,
            Err(RpcError::Transport(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "refused",
            ))),
        );
        let client = RpcClient::new(mock);
        assert!(matches!(
            client.server().get_pool_stats(),
            Err(RpcError::Transport(_))
        ));
    }
}
