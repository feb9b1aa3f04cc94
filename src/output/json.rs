//! JSON output.

use crate::models::SubnetInfo;
use std::error::Error;
use std::io::Write;

/// Write the result as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(info: &SubnetInfo, out: &mut W) -> Result<(), Box<dyn Error>> {
    let json =
        serde_json::to_string_pretty(info).map_err(|e| format!("Error serializing JSON: {e}"))?;
    writeln!(out, "{json}")?;
    Ok(())
}
