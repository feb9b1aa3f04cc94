//! Subnet enumeration inside a classful network.

use super::compute::{num_hosts, num_subnets};
use crate::error::Result;
use crate::models::{cut_addr, ip_class, SubnetRange, MAX_LENGTH};
use std::net::Ipv4Addr;

/// The listed subnets and whether the list was cut at the limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enumeration {
    pub ranges: Vec<SubnetRange>,
    pub truncated: bool,
}

/// List the `/prefix` subnets of the classful network that contains `addr`.
///
/// Subnet `i` starts at `base + i * 2^(32 - prefix)`. For a prefix shorter
/// than the class boundary the only entry is the subnet containing `addr`.
/// Classes D and E and the loopback and broadcast ranges have no boundary and
/// yield nothing. At most `limit` entries are returned.
pub fn enumerate_subnets(addr: Ipv4Addr, prefix: u8, limit: usize) -> Result<Enumeration> {
    let class = ip_class(addr);
    let Some(boundary) = class.default_prefix() else {
        log::debug!("enumerate_subnets({addr}/{prefix}): class {class} has no subnets");
        return Ok(Enumeration::default());
    };
    num_hosts(prefix)?;

    let base = u32::from(cut_addr(addr, boundary.min(prefix))?) as u64;
    let count = num_subnets(prefix, class)?;
    let host_bits = MAX_LENGTH - prefix;
    let block = 1u64 << host_bits;
    let take = count.min(limit as u64);

    let ranges = (0..take)
        .map(|i| {
            let start = base | (i << host_bits);
            let end = start + block - 1;
            SubnetRange {
                index: i as usize,
                network: Ipv4Addr::from(start as u32),
                first_host: Ipv4Addr::from((start + 1) as u32),
                last_host: Ipv4Addr::from((end - 1) as u32),
                broadcast: Ipv4Addr::from(end as u32),
            }
        })
        .collect();

    let truncated = count > take;
    if truncated {
        log::warn!("enumerate_subnets({addr}/{prefix}): listing {take} of {count} subnets");
    }
    Ok(Enumeration { ranges, truncated })
}
