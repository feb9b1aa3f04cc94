//! Legacy classful address classification.

use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Address class, decided by the first octet alone.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum IpClass {
    A,
    B,
    C,
    /// Multicast.
    D,
    /// Reserved.
    E,
    Loopback,
    Broadcast,
}

impl IpClass {
    /// Natural network boundary for classes A, B and C.
    pub fn default_prefix(&self) -> Option<u8> {
        match self {
            IpClass::A => Some(8),
            IpClass::B => Some(16),
            IpClass::C => Some(24),
            _ => None,
        }
    }

    /// Only A, B and C take part in subnet and host arithmetic.
    pub fn is_classful(&self) -> bool {
        self.default_prefix().is_some()
    }
}

impl fmt::Display for IpClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            IpClass::A => "A",
            IpClass::B => "B",
            IpClass::C => "C",
            IpClass::D => "D (multicast)",
            IpClass::E => "E (reserved)",
            IpClass::Loopback => "Loopback",
            IpClass::Broadcast => "Broadcast",
        };
        f.write_str(label)
    }
}

/// Classify an address by its first octet.
pub fn ip_class(addr: Ipv4Addr) -> IpClass {
    match addr.octets()[0] {
        0..=126 => IpClass::A,
        127 => IpClass::Loopback,
        128..=191 => IpClass::B,
        192..=223 => IpClass::C,
        224..=239 => IpClass::D,
        240..=254 => IpClass::E,
        255 => IpClass::Broadcast,
    }
}
