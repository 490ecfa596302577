//! CSV output via the csv crate.

use std::io::Write;

use crate::error::Result;
use crate::types::Spell;

/// Write records as CSV with one header row.
///
/// Column order comes from the `Spell` field order. Quoting follows the csv
/// crate defaults, so embedded commas and newlines are handled.
pub fn write_csv<W: Write>(spells: &[Spell], writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    for spell in spells {
        out.serialize(spell)?;
    }
    out.flush()?;
    Ok(())
}
