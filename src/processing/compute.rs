//! Class, host count and address range computation.

use crate::error::{CalcError, Result};
use crate::models::{
    broadcast_addr, cut_addr, ip_class, IpClass, SubnetInfo, SubnetMask, MAX_LENGTH,
};
use std::net::Ipv4Addr;

/// Longest prefix that still leaves room for a network, a host and a broadcast.
pub const MAX_HOST_PREFIX: u8 = MAX_LENGTH - 2;

/// Bits borrowed from the host part beyond the class boundary.
///
/// Zero for classes without a boundary and for supernets.
pub fn subnet_bits(prefix: u8, class: IpClass) -> u8 {
    class
        .default_prefix()
        .map_or(0, |boundary| prefix.saturating_sub(boundary))
}

/// `2^subnet_bits` subnets of this size fit in the classful network.
pub fn num_subnets(prefix: u8, class: IpClass) -> Result<u64> {
    if prefix > MAX_LENGTH {
        return Err(CalcError::InvalidPrefix(format!(
            "/{prefix} is longer than {MAX_LENGTH} bits"
        )));
    }
    Ok(1u64 << subnet_bits(prefix, class))
}

/// Usable hosts per subnet: `2^(32 - prefix) - 2`.
///
/// /31 and /32 have no room for both a network and a broadcast address.
pub fn num_hosts(prefix: u8) -> Result<u64> {
    if prefix > MAX_HOST_PREFIX {
        Err(CalcError::InvalidPrefix(format!(
            "/{prefix} leaves no usable host addresses"
        )))
    } else {
        Ok((1u64 << (MAX_LENGTH - prefix)) - 2)
    }
}

/// Network and broadcast addresses of the subnet containing `addr`.
pub fn network_and_broadcast(addr: Ipv4Addr, prefix: u8) -> Result<(Ipv4Addr, Ipv4Addr)> {
    Ok((cut_addr(addr, prefix)?, broadcast_addr(addr, prefix)?))
}

/// First and last usable host of the subnet containing `addr`.
pub fn host_range(addr: Ipv4Addr, prefix: u8) -> Result<(Ipv4Addr, Ipv4Addr)> {
    num_hosts(prefix)?;
    let (network, broadcast) = network_and_broadcast(addr, prefix)?;
    Ok((
        Ipv4Addr::from(u32::from(network) + 1),
        Ipv4Addr::from(u32::from(broadcast) - 1),
    ))
}

/// Fill in every scalar field of a [`SubnetInfo`]; enumeration is left empty.
pub fn calculate(addr: Ipv4Addr, mask: SubnetMask) -> Result<SubnetInfo> {
    let prefix = mask.prefix();
    let class = ip_class(addr);
    let num_hosts = num_hosts(prefix)?;
    let num_subnets = num_subnets(prefix, class)?;
    let (network, broadcast) = network_and_broadcast(addr, prefix)?;
    let (first_host, last_host) = host_range(addr, prefix)?;

    log::debug!(
        "calculate({addr}, {mask}) = /{prefix} class {class} network {network} broadcast {broadcast} subnets {num_subnets} hosts {num_hosts}"
    );

    Ok(SubnetInfo {
        address: addr,
        mask,
        prefix,
        class,
        num_subnets,
        num_hosts,
        network,
        first_host,
        last_host,
        broadcast,
        subnets: None,
        subnets_truncated: false,
    })
}
