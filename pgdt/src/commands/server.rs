//! Server query commands.
//!
//! `pools` prints lease statistics per pool and `status` prints the memory
//! status of a running server, both fetched over RPC.

use std::io::{self, Write};
use std::net::Ipv4Addr;

use pgd_rpc::{CallChannel, JsonStreamChannel, PoolStat, RpcClient, RpcError};
use tracing::debug;

use super::common::OutputFormat;
use crate::error::Result;

/// Arguments shared by the server query commands.
#[derive(Debug, Clone)]
pub struct ServerArgs {
    /// `host:port` of the server's RPC listener.
    pub address: String,

    /// Output format.
    pub format: OutputFormat,
}

fn connect(address: &str) -> Result<RpcClient<JsonStreamChannel<std::net::TcpStream>>> {
    debug!(address, "connecting");
    let channel = JsonStreamChannel::connect(address).map_err(RpcError::from)?;
    Ok(RpcClient::new(channel))
}

/// Execute the pools command.
pub fn run_pools(args: ServerArgs) -> Result<()> {
    let client = connect(&args.address)?;
    let stdout = io::stdout();
    write_pools(&client, args.format, &mut stdout.lock())
}

/// Execute the status command.
pub fn run_status(args: ServerArgs) -> Result<()> {
    let client = connect(&args.address)?;
    let stdout = io::stdout();
    write_status(&client, args.format, &mut stdout.lock())
}

fn addr_or_dash(addr: Option<Ipv4Addr>) -> String {
    addr.map_or_else(|| "-".to_string(), |a| a.to_string())
}

fn pool_line(pool: &PoolStat) -> String {
    format!(
        "{}\t{}\t{}-{}\t{}\t{}/{} in use\t{} free",
        pool.network_name,
        pool.subnet,
        addr_or_dash(pool.start),
        addr_or_dash(pool.end),
        if pool.registered { "registered" } else { "unregistered" },
        pool.in_use(),
        pool.total,
        pool.free
    )
}

/// Fetches pool statistics and writes one line per pool.
pub fn write_pools<C: CallChannel, W: Write>(
    client: &RpcClient<C>,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let pools = client.server().get_pool_stats()?;
    match format {
        OutputFormat::Text => {
            for pool in &pools {
                writeln!(out, "{}", pool_line(pool))?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &pools)?;
            writeln!(out)?;
        },
    }
    Ok(())
}

/// Fetches the server status and writes it as `key: value` lines.
pub fn write_status<C: CallChannel, W: Write>(
    client: &RpcClient<C>,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let status = client.server().mem_status()?;
    match format {
        OutputFormat::Text => {
            writeln!(out, "alloc: {}", status.alloc)?;
            writeln!(out, "total_alloc: {}", status.total_alloc)?;
            writeln!(out, "sys: {}", status.sys)?;
            writeln!(out, "num_gc: {}", status.num_gc)?;
            writeln!(out, "workers: {}", status.workers)?;
            writeln!(out, "uptime: {}s", status.uptime)?;
        },
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &status)?;
            writeln!(out)?;
        },
    }
    Ok(())
}
