//! Input validation.
//!
//! - [`parse`] - syntax of addresses, masks and CIDR strings
//! - [`policy`] - addressability rules layered above the syntax checks

mod parse;
pub mod policy;

pub use parse::{parse_cidr, parse_ipv4, parse_mask};
pub use policy::check_addressable;
