//! Syntax checks for addresses, masks and CIDR strings.

use crate::error::{CalcError, Result};
use crate::models::{ip_to_binary, Cidr, SubnetMask, MAX_LENGTH};
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// One to three decimal digits.
static OCTET_REGEX: OnceLock<Regex> = OnceLock::new();

/// A run of ones followed by a run of zeros over the 32-bit binary form.
static MASK_BITS_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_octet_regex() -> &'static Regex {
    OCTET_REGEX.get_or_init(|| Regex::new(r"^[0-9]{1,3}$").expect("Invalid Regex"))
}

fn get_mask_bits_regex() -> &'static Regex {
    MASK_BITS_REGEX.get_or_init(|| Regex::new(r"^1*0*$").expect("Invalid Regex"))
}

/// Split dotted-decimal text into four octets.
///
/// Errors are plain messages so each caller can wrap them in its own variant.
fn parse_octets(s: &str) -> std::result::Result<[u8; 4], String> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() != 4 {
        return Err(format!("'{s}' has {} parts, expected 4", parts.len()));
    }
    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(&parts) {
        if !get_octet_regex().is_match(part) {
            return Err(format!("'{part}' in '{s}' is not a decimal octet"));
        }
        *octet = part
            .parse()
            .map_err(|_| format!("'{part}' in '{s}' is out of range 0-255"))?;
    }
    log::trace!("parse_octets({s}) = {octets:?}");
    Ok(octets)
}

/// Parse a dotted-decimal IPv4 address.
///
/// # Examples
/// ```
/// use subnet_calc::parsing::parse_ipv4;
/// assert_eq!(parse_ipv4("192.168.1.10").unwrap().octets(), [192, 168, 1, 10]);
/// assert!(parse_ipv4("192.168.1").is_err());
/// ```
pub fn parse_ipv4(s: &str) -> Result<Ipv4Addr> {
    parse_octets(s)
        .map(Ipv4Addr::from)
        .map_err(CalcError::InvalidAddress)
}

/// Parse a dotted-decimal subnet mask and check that its bits are contiguous.
pub fn parse_mask(s: &str) -> Result<SubnetMask> {
    let addr = parse_octets(s)
        .map(Ipv4Addr::from)
        .map_err(CalcError::InvalidMask)?;
    let dotted = ip_to_binary(addr);
    if !get_mask_bits_regex().is_match(&dotted.replace('.', "")) {
        return Err(CalcError::InvalidMask(format!(
            "{addr} ({dotted}) is not a contiguous mask"
        )));
    }
    Ok(SubnetMask::from_contiguous(addr))
}

/// Parse `a.b.c.d/p` with a prefix in `0..=32`.
///
/// Narrower prefix ranges are a [`crate::config::Policy`] decision.
pub fn parse_cidr(s: &str) -> Result<Cidr> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() != 2 {
        return Err(CalcError::InvalidCidr(format!(
            "'{s}' is not in the form a.b.c.d/prefix"
        )));
    }
    let addr = parse_ipv4(parts[0]).map_err(|e| CalcError::InvalidCidr(e.to_string()))?;
    let prefix_str = parts[1].trim();
    if prefix_str.is_empty() || !prefix_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalcError::InvalidCidr(format!(
            "prefix '{prefix_str}' is not a number"
        )));
    }
    let prefix = prefix_str
        .parse::<u8>()
        .ok()
        .filter(|p| *p <= MAX_LENGTH)
        .ok_or_else(|| {
            CalcError::InvalidCidr(format!("prefix /{prefix_str} is outside 0-{MAX_LENGTH}"))
        })?;
    Ok(Cidr { addr, prefix })
}
