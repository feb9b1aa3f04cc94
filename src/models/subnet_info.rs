//! Calculation results.

use super::{Cidr, IpClass, SubnetMask};
use serde::Serialize;
use std::net::Ipv4Addr;

/// One subnet inside an enumerated block.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetRange {
    /// Position in the block, starting at 0. Displayed 1-based.
    pub index: usize,
    pub network: Ipv4Addr,
    pub first_host: Ipv4Addr,
    pub last_host: Ipv4Addr,
    pub broadcast: Ipv4Addr,
}

impl SubnetRange {
    /// The subnet written as `network/prefix`.
    pub fn cidr(&self, prefix: u8) -> Cidr {
        Cidr {
            addr: self.network,
            prefix,
        }
    }
}

/// Everything computed for one address and mask.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetInfo {
    /// The address as entered.
    pub address: Ipv4Addr,
    pub mask: SubnetMask,
    pub prefix: u8,
    pub class: IpClass,
    /// `2^(prefix - class boundary)`, 1 for classes without a boundary.
    pub num_subnets: u64,
    /// Usable hosts per subnet, network and broadcast excluded.
    pub num_hosts: u64,
    pub network: Ipv4Addr,
    pub first_host: Ipv4Addr,
    pub last_host: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    /// Present when enumeration was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnets: Option<Vec<SubnetRange>>,
    /// Set when `subnets` was cut short by the enumeration cap.
    pub subnets_truncated: bool,
}

impl SubnetInfo {
    /// The subnet containing `address`, written `network/prefix`.
    pub fn network_cidr(&self) -> Cidr {
        Cidr {
            addr: self.network,
            prefix: self.prefix,
        }
    }
}
