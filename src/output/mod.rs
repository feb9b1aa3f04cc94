//! Output formatting for calculation results.
//!
//! - [`csv`] - CSV rows, one per subnet
//! - [`json`] - pretty-printed JSON
//! - [`terminal`] - colored table

mod csv;
mod json;
mod terminal;

pub use csv::write_csv;
pub use json::write_json;
pub use terminal::{format_field, write_table};
