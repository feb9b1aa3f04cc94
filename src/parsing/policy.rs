//! Addressability checks.
//!
//! These run on addresses that already parsed cleanly. They encode what the
//! calculator is willing to describe, not whether the input is well formed.

use crate::error::{CalcError, Reserved, Result};
use crate::models::broadcast_addr;
use std::net::Ipv4Addr;

/// Refuse the all-zero address, loopback addresses and an address that is the
/// broadcast address of its own subnet.
pub fn check_addressable(addr: Ipv4Addr, prefix: u8) -> Result<()> {
    let reason = if addr.is_unspecified() {
        Some(Reserved::Unspecified)
    } else if addr.octets()[0] == 127 {
        Some(Reserved::Loopback)
    } else if broadcast_addr(addr, prefix)? == addr {
        Some(Reserved::SelfBroadcast)
    } else {
        None
    };

    match reason {
        Some(reason) => {
            log::warn!("{}", rejection_message(addr, prefix, reason));
            Err(CalcError::ReservedAddress {
                addr: addr.to_string(),
                reason,
            })
        }
        None => Ok(()),
    }
}

// Plain text: the log file appender must not receive terminal escapes.
fn rejection_message(addr: Ipv4Addr, prefix: u8, reason: Reserved) -> String {
    format!("rejected {addr}/{prefix}: {reason}")
}
