//! NDJSON output: one JSON object per record, one record per line.

use std::io::Write;

use crate::error::Result;
use crate::types::Spell;

/// Write records as line-delimited JSON.
///
/// Booleans and the level stay native JSON types; a missing material list
/// serializes as `null`.
pub fn write_json<W: Write>(spells: &[Spell], mut writer: W) -> Result<()> {
    for spell in spells {
        serde_json::to_writer(&mut writer, spell)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
