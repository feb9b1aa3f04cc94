//! Subnet arithmetic.
//!
//! - [`compute`] - class, subnet/host counts, network and broadcast addresses
//! - [`enumerate`] - listing the subnets of a classful network

mod compute;
mod enumerate;

// Re-export public functions
pub use compute::{
    calculate, host_range, network_and_broadcast, num_hosts, num_subnets, subnet_bits,
    MAX_HOST_PREFIX,
};
pub use enumerate::{enumerate_subnets, Enumeration};
