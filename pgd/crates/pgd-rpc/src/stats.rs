//! Records returned by the server's administrative queries.
//!
//! Field names on the wire are PascalCase.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

/// Lease counters for one address pool.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PoolStat {
    /// Name of the network the pool belongs to
    pub network_name: String,
    /// Subnet in CIDR notation
    pub subnet: String,
    /// First address of the pool range
    pub start: Option<Ipv4Addr>,
    /// Last address of the pool range
    pub end: Option<Ipv4Addr>,
    /// Whether the pool serves registered clients
    pub registered: bool,

    /// Addresses in the range
    pub total: u64,
    /// Leases currently held by a client
    pub active: u64,
    /// Leases offered but not yet acknowledged
    pub claimed: u64,
    /// Leases declined or found in conflict
    pub abandoned: u64,
    /// Addresses available for new leases
    pub free: u64,
}

impl PoolStat {
    /// Leases not available for new clients.
    pub fn in_use(&self) -> u64 {
        self.active + self.claimed + self.abandoned
    }

    /// Share of the pool in use, as a percentage.
    pub fn utilization_percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.in_use() as f64 * 100.0 / self.total as f64
        }
    }
}

/// Memory and runtime status of the server process.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StatusResp {
    /// Bytes of allocated heap objects
    pub alloc: u64,
    /// Cumulative bytes allocated
    pub total_alloc: u64,
    /// Bytes obtained from the operating system
    pub sys: u64,
    /// Completed garbage collection cycles
    #[serde(rename = "NumGC")]
    pub num_gc: u32,
    /// Live worker tasks
    pub workers: u64,
    /// Seconds since the server started
    pub uptime: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pool_stat_from_wire() {
        let stat: PoolStat = serde_json::from_value(json!({
            "NetworkName": "lan",
            "Subnet": "10.0.2.0/24",
            "Start": "10.0.2.10",
            "End": "10.0.2.200",
            "Registered": false,
            "Total": 191,
            "Active": 40,
            "Claimed": 2,
            "Abandoned": 1,
            "Free": 148
        }))
        .unwrap();

        assert_eq!(stat.network_name, "lan");
        assert_eq!(stat.start, Some(Ipv4Addr::new(10, 0, 2, 10)));
        assert_eq!(stat.end, Some(Ipv4Addr::new(10, 0, 2, 200)));
        assert_eq!(stat.in_use(), 43);
        assert_eq!(stat.free, 148);
    }

    #[test]
    fn test_missing_fields_default() {
        let stat: PoolStat = serde_json::from_value(json!({"NetworkName": "guest"})).unwrap();
        assert_eq!(stat.total, 0);
        assert_eq!(stat.start, None);
        assert_eq!(stat.utilization_percent(), 0.0);
    }

    #[test]
    fn test_utilization() {
        let stat = PoolStat {
            total: 200,
            active: 50,
            ..Default::default()
        };
        assert!((stat.utilization_percent() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_status_from_wire() {
        let status: StatusResp = serde_json::from_value(json!({
            "Alloc": 1024,
            "TotalAlloc": 4096,
            "Sys": 8192,
            "NumGC": 3,
            "Workers": 12,
            "Uptime": 3600
        }))
        .unwrap();

        assert_eq!(
            status,
            StatusResp {
                alloc: 1024,
                total_alloc: 4096,
                sys: 8192,
                num_gc: 3,
                workers: 12,
                uptime: 3600,
            }
        );
    }
}
