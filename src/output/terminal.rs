//! Terminal output.
//!
//! Renders a [`SubnetInfo`] as a two-column table with colored labels.

use crate::models::{ip_to_binary, SubnetInfo, SubnetRange};
use colored::Colorize;
use std::error::Error;
use std::io::Write;

const LABEL_WIDTH: usize = 18;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

fn write_row<W: Write>(out: &mut W, label: &str, value: impl ToString) -> std::io::Result<()> {
    writeln!(
        out,
        "{label} {value}",
        label = format!("{label:<LABEL_WIDTH$}").cyan(),
        value = value.to_string()
    )
}

/// One line per enumerated subnet, numbered from 1.
fn format_range(range: &SubnetRange, prefix: u8) -> String {
    format!(
        "{index:>6}  {cidr:<18} {first} - {last}  broadcast {broadcast}",
        index = range.index + 1,
        cidr = range.cidr(prefix).to_string(),
        first = range.first_host,
        last = range.last_host,
        broadcast = range.broadcast
    )
}

/// Write the full result table.
pub fn write_table<W: Write>(info: &SubnetInfo, out: &mut W) -> Result<(), Box<dyn Error>> {
    write_row(out, "Address", info.address)?;
    write_row(out, "Address (binary)", ip_to_binary(info.address))?;
    write_row(out, "Class", info.class)?;
    write_row(out, "Mask", info.mask)?;
    write_row(out, "Mask (binary)", ip_to_binary(info.mask.addr()))?;
    write_row(out, "Wildcard", info.mask.wildcard())?;
    write_row(out, "CIDR", format!("/{}", info.prefix))?;
    write_row(out, "Network", info.network_cidr())?;
    write_row(out, "First host", info.first_host)?;
    write_row(out, "Last host", info.last_host)?;
    write_row(out, "Broadcast", info.broadcast)?;
    write_row(out, "Subnets", info.num_subnets)?;
    write_row(out, "Hosts per subnet", info.num_hosts)?;

    if !info.class.is_classful() {
        writeln!(
            out,
            "{note} class {class} has no classful network; subnet count is nominal",
            note = "NOTE".on_yellow(),
            class = info.class
        )?;
    }

    if let Some(subnets) = &info.subnets {
        writeln!(out)?;
        writeln!(out, "{}", "Subnets".bold())?;
        for range in subnets {
            writeln!(out, "{}", format_range(range, info.prefix))?;
        }
        if info.subnets_truncated {
            writeln!(
                out,
                "{note} listed {listed} of {total} subnets",
                note = "NOTE".on_red(),
                listed = subnets.len(),
                total = info.num_subnets
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_from_cidr;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_format_range() {
        let range = SubnetRange {
            index: 0,
            network: "10.0.0.0".parse().unwrap(),
            first_host: "10.0.0.1".parse().unwrap(),
            last_host: "10.0.0.2".parse().unwrap(),
            broadcast: "10.0.0.3".parse().unwrap(),
        };
        assert_eq!(
            format_range(&range, 30),
            "     1  10.0.0.0/30        10.0.0.1 - 10.0.0.2  broadcast 10.0.0.3"
        );
    }

    #[test]
    fn test_write_table() {
        let info = compute_from_cidr("192.168.1.10/24").unwrap();
        let mut out = Vec::new();
        write_table(&info, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("192.168.1.0/24"));
        assert!(text.contains("11000000.10101000.00000001.00001010"));
        assert!(text.contains("255.255.255.0"));
        assert!(text.contains("0.0.0.255"));
        assert!(text.contains("254"));
        assert!(!text.contains("NOTE"));
    }
}
