//! CLI subcommands.

pub mod render;
pub mod replay;

use std::io::Write;

use genae_storefront::PageUpdate;

/// Write one page update as a JSON document followed by a newline.
pub fn write_update(
    out: &mut impl Write,
    update: &PageUpdate,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, update)?;
    } else {
        serde_json::to_writer(&mut *out, update)?;
    }
    writeln!(out)?;
    Ok(())
}
