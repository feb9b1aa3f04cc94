//! Error taxonomy for the subnet calculator.
//!
//! Syntax errors ([`CalcError::InvalidAddress`], [`CalcError::InvalidMask`],
//! [`CalcError::InvalidCidr`]) are kept apart from the policy rejection
//! [`CalcError::ReservedAddress`] and from [`CalcError::InvalidPrefix`], which
//! covers prefixes that give degenerate host counts or fall outside the
//! accepted range.

use std::fmt;
use thiserror::Error;

/// Why an otherwise well-formed address was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reserved {
    /// `0.0.0.0`
    Unspecified,
    /// First octet 127.
    Loopback,
    /// The address is the broadcast address of its own subnet.
    SelfBroadcast,
}

impl fmt::Display for Reserved {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Reserved::Unspecified => write!(f, "all-zero address"),
            Reserved::Loopback => write!(f, "loopback address"),
            Reserved::SelfBroadcast => write!(f, "address is the subnet broadcast address"),
        }
    }
}

/// Errors returned by the calculator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Wrong part count, non-numeric part or octet out of range.
    #[error("Invalid IP address: {0}")]
    InvalidAddress(String),

    /// Malformed octets or a non-contiguous bit pattern.
    #[error("Invalid subnet mask: {0}")]
    InvalidMask(String),

    /// Missing `/`, non-numeric prefix or prefix out of range.
    #[error("Invalid CIDR notation: {0}")]
    InvalidCidr(String),

    /// Syntactically valid but refused by the addressability policy.
    #[error("Reserved address {addr}: {reason}")]
    ReservedAddress { addr: String, reason: Reserved },

    /// Prefix yields no usable hosts (/31, /32) or is outside the policy range.
    #[error("Invalid prefix length: {0}")]
    InvalidPrefix(String),
}

impl CalcError {
    /// The policy reason, when this is a reserved-address rejection.
    pub fn reserved_reason(&self) -> Option<Reserved> {
        match self {
            CalcError::ReservedAddress { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
