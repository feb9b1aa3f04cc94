//! Domain models for the subnet calculator.
//!
//! - [`Cidr`] and [`SubnetMask`] - IPv4 address/prefix types and mask math
//! - [`IpClass`] - classful address classification
//! - [`SubnetInfo`] and [`SubnetRange`] - calculation results

mod class;
mod ipv4;
mod subnet_info;

// Re-export public types
pub use class::{ip_class, IpClass};
pub use ipv4::{
    broadcast_addr, cidr_to_mask, cut_addr, get_cidr_mask, ip_to_binary, mask_to_cidr, Cidr,
    SubnetMask, MAX_LENGTH,
};
pub use subnet_info::{SubnetInfo, SubnetRange};
