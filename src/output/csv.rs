//! CSV output for calculation results.

use super::terminal::format_field;
use crate::models::{SubnetInfo, SubnetRange};
use std::error::Error;
use std::io::Write;

const HEADER: &str = r#""cnt","subnet_cidr","first_host","last_host","broadcast","hosts","class""#;

/// Write a header and one row per enumerated subnet.
///
/// Without enumeration the single row describes the subnet containing the
/// input address.
pub fn write_csv<W: Write>(info: &SubnetInfo, out: &mut W) -> Result<(), Box<dyn Error>> {
    log::info!(
        "#Start write_csv() {} with {} rows",
        info.network_cidr(),
        info.subnets.as_ref().map_or(1, |s| s.len())
    );
    writeln!(out, "{HEADER}")?;

    match &info.subnets {
        Some(subnets) => {
            for range in subnets {
                write_csv_row(out, range, info)?;
            }
        }
        None => {
            let own = SubnetRange {
                index: 0,
                network: info.network,
                first_host: info.first_host,
                last_host: info.last_host,
                broadcast: info.broadcast,
            };
            write_csv_row(out, &own, info)?;
        }
    }
    Ok(())
}

fn write_csv_row<W: Write>(
    out: &mut W,
    range: &SubnetRange,
    info: &SubnetInfo,
) -> std::io::Result<()> {
    writeln!(
        out,
        "{cnt},{subnet_cidr},{first_host},{last_host},{broadcast},{hosts},{class}",
        cnt = format_field(range.index + 1, 6),
        subnet_cidr = format_field(range.cidr(info.prefix), 20),
        first_host = format_field(range.first_host, 17),
        last_host = format_field(range.last_host, 17),
        broadcast = format_field(range.broadcast, 17),
        hosts = format_field(info.num_hosts, 10),
        class = format_field(info.class, 3),
    )
}
