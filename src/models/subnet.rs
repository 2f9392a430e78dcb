//! Result types produced by the subnet engine.

use super::Ipv4;
use serde::Serialize;
use std::net::Ipv4Addr;

/// RFC1918 private blocks, in the order they are checked.
pub const PRIVATE_BLOCKS: [Ipv4; 3] = [
    Ipv4 {
        addr: Ipv4Addr::new(10, 0, 0, 0),
        mask: 8,
    },
    Ipv4 {
        addr: Ipv4Addr::new(172, 16, 0, 0),
        mask: 12,
    },
    Ipv4 {
        addr: Ipv4Addr::new(192, 168, 0, 0),
        mask: 16,
    },
];

/// Every field derived from one `(address, prefix)` query.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subnet {
    /// The address the query was made with.
    pub address: Ipv4Addr,
    pub prefix: u8,
    pub mask: Ipv4Addr,
    pub wildcard: Ipv4Addr,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    /// First usable host. Equal to `network` for /31 and /32.
    pub first: Ipv4Addr,
    /// Last usable host. Equal to `broadcast` for /31 and /32.
    pub last: Ipv4Addr,
    pub total_hosts: u64,
}

impl Subnet {
    /// The network in CIDR form, e.g. `192.168.1.0/24`.
    pub fn cidr(&self) -> Ipv4 {
        Ipv4 {
            addr: self.network,
            mask: self.prefix,
        }
    }
}

/// A subnet that reaches past the private block its address belongs to.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverflowWarning {
    pub subnet: Ipv4,
    pub block: Ipv4,
}

impl std::fmt::Display for OverflowWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Subnet {} extends outside private block {}",
            self.subnet, self.block
        )
    }
}

/// Output of [`crate::processing::compute`].
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calculation {
    #[serde(flatten)]
    pub subnet: Subnet,
    pub overflow: Option<OverflowWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_blocks_are_disjoint() {
        for (i, a) in PRIVATE_BLOCKS.iter().enumerate() {
            for b in PRIVATE_BLOCKS.iter().skip(i + 1) {
                assert!(a.hi() < b.lo(), "{a} overlaps {b}");
            }
        }
        assert_eq!(PRIVATE_BLOCKS[1].hi(), Ipv4Addr::new(172, 31, 255, 255));
    }

    #[test]
    fn test_overflow_display() {
        let warning = OverflowWarning {
            subnet: Ipv4::new("172.0.0.0/8").unwrap(),
            block: PRIVATE_BLOCKS[1],
        };
        assert_eq!(
            warning.to_string(),
            "Subnet 172.0.0.0/8 extends outside private block 172.16.0.0/12"
        );
    }
}
