//! IPv4 subnet calculator.
//!
//! Computes class, prefix, mask, subnet and host counts, network and
//! broadcast addresses, and optionally the list of subnets in a classful
//! network, from either an address and mask or a CIDR string.
//!
//! ```
//! let info = subnet_calc::compute_from_address_and_mask("192.168.1.10", "255.255.255.0").unwrap();
//! assert_eq!(info.prefix, 24);
//! assert_eq!(info.num_hosts, 254);
//! assert_eq!(info.broadcast.to_string(), "192.168.1.255");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod parsing;
pub mod processing;

use config::Policy;
use error::CalcError;
pub use error::Result;
use models::{SubnetInfo, SubnetMask};
use parsing::{check_addressable, parse_cidr, parse_ipv4, parse_mask};
use processing::{calculate, enumerate_subnets, num_hosts};
use std::net::Ipv4Addr;

/// Calculate from a dotted address and a dotted mask under the default policy.
pub fn compute_from_address_and_mask(address: &str, mask: &str) -> Result<SubnetInfo> {
    compute_from_address_and_mask_with_policy(address, mask, &Policy::default())
}

/// Calculate from `a.b.c.d/p` under the default policy.
pub fn compute_from_cidr(cidr: &str) -> Result<SubnetInfo> {
    compute_from_cidr_with_policy(cidr, &Policy::default())
}

/// Calculate from a dotted address and a dotted mask.
///
/// Errors with `InvalidAddress` or `InvalidMask` for malformed input,
/// `InvalidPrefix` for `/31`, `/32`, a prefix outside the policy range or an
/// invalid policy, and `ReservedAddress` when the policy rejects the address.
pub fn compute_from_address_and_mask_with_policy(
    address: &str,
    mask: &str,
    policy: &Policy,
) -> Result<SubnetInfo> {
    log::debug!("compute_from_address_and_mask({address}, {mask})");
    policy.validate()?;
    let addr = parse_ipv4(address)?;
    let mask = parse_mask(mask)?;
    let prefix = mask.prefix();
    num_hosts(prefix)?;
    if !policy.allows_prefix(prefix) {
        return Err(CalcError::InvalidPrefix(format!(
            "mask {mask} (/{prefix}) is outside the accepted range /{}../{}",
            policy.min_prefix, policy.max_prefix
        )));
    }
    compute(addr, mask, policy)
}

/// Calculate from `a.b.c.d/p`.
///
/// Same result as the address/mask path for the same subnet. Malformed input
/// and a prefix outside the policy range are `InvalidCidr`; `/31`, `/32` and
/// an invalid policy are `InvalidPrefix`.
pub fn compute_from_cidr_with_policy(cidr: &str, policy: &Policy) -> Result<SubnetInfo> {
    log::debug!("compute_from_cidr({cidr})");
    policy.validate()?;
    let parsed = parse_cidr(cidr)?;
    num_hosts(parsed.prefix)?;
    if !policy.allows_prefix(parsed.prefix) {
        return Err(CalcError::InvalidCidr(format!(
            "prefix /{} is outside the accepted range /{}../{}",
            parsed.prefix, policy.min_prefix, policy.max_prefix
        )));
    }
    compute(parsed.addr, parsed.mask()?, policy)
}

fn compute(addr: Ipv4Addr, mask: SubnetMask, policy: &Policy) -> Result<SubnetInfo> {
    if policy.reject_reserved {
        check_addressable(addr, mask.prefix())?;
    }
    let info = calculate(addr, mask)?;
    if !policy.enumerate {
        return Ok(info);
    }
    let listed = enumerate_subnets(addr, info.prefix, policy.max_subnets)?;
    Ok(SubnetInfo {
        subnets: Some(listed.ranges),
        subnets_truncated: listed.truncated,
        ..info
    })
}
