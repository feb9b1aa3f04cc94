//! IPv4 mask and CIDR utilities.
//!
//! All arithmetic is done on `u32` values taken from [`Ipv4Addr`]. Shifts go
//! through a `u64` intermediate so that `/0` and `/32` never overflow.

use crate::error::{CalcError, Result};
use itertools::Itertools;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(CalcError::InvalidPrefix(format!(
            "/{len} is longer than {MAX_LENGTH} bits"
        )))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    let broadcast_bits = network_bits | !mask;
    Ok(Ipv4Addr::from(broadcast_bits))
}

/// Number of leading 1-bits in a mask.
///
/// Only meaningful for contiguous masks, which [`SubnetMask`] guarantees.
pub fn mask_to_cidr(mask: SubnetMask) -> u8 {
    u32::from(mask.addr()).leading_ones() as u8
}

/// Build the dotted mask for a prefix length, one octet at a time.
///
/// Octet `i` carries `clamp(prefix - 8*i, 0, 8)` bits, giving `256 - 2^(8-bits)`.
pub fn cidr_to_mask(prefix: u8) -> Result<SubnetMask> {
    if prefix > MAX_LENGTH {
        return Err(CalcError::InvalidPrefix(format!(
            "/{prefix} is longer than {MAX_LENGTH} bits"
        )));
    }
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        let bits = (prefix as i32 - 8 * i as i32).clamp(0, 8) as u32;
        *octet = if bits == 0 {
            0
        } else {
            (256u32 - (1u32 << (8 - bits))) as u8
        };
    }
    Ok(SubnetMask(Ipv4Addr::from(octets)))
}

/// Render an address as four zero-padded 8-bit groups, e.g.
/// `11000000.10101000.00000001.00000000`.
pub fn ip_to_binary(ip: Ipv4Addr) -> String {
    ip.octets().iter().map(|o| format!("{o:08b}")).join(".")
}

/// A subnet mask whose bits are a run of ones followed by zeros.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SubnetMask(Ipv4Addr);

impl SubnetMask {
    /// Wrap an address whose bits were already checked to be contiguous.
    pub(crate) fn from_contiguous(addr: Ipv4Addr) -> Self {
        debug_assert!(SubnetMask::try_from(addr).is_ok(), "{addr} is not contiguous");
        SubnetMask(addr)
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.0
    }

    pub fn prefix(&self) -> u8 {
        mask_to_cidr(*self)
    }

    /// The host part of the mask (`!mask`).
    pub fn wildcard(&self) -> Ipv4Addr {
        Ipv4Addr::from(!u32::from(self.0))
    }
}

impl TryFrom<Ipv4Addr> for SubnetMask {
    type Error = CalcError;

    fn try_from(addr: Ipv4Addr) -> Result<Self> {
        let bits = u32::from(addr);
        // ones then zeros: every bit is counted by exactly one of the two
        if bits.leading_ones() + bits.trailing_zeros() == u32::from(MAX_LENGTH) {
            Ok(SubnetMask(addr))
        } else {
            Err(CalcError::InvalidMask(format!(
                "{addr} ({}) is not a contiguous mask",
                ip_to_binary(addr)
            )))
        }
    }
}

impl fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// IPv4 address with a prefix length, written `a.b.c.d/p`.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// The address as given, not necessarily the network address.
    pub addr: Ipv4Addr,
    /// Prefix length (0-32).
    pub prefix: u8,
}

impl Cidr {
    /// The mask matching this prefix.
    pub fn mask(&self) -> Result<SubnetMask> {
        cidr_to_mask(self.prefix)
    }
}

impl FromStr for Cidr {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parsing::parse_cidr(s)
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
