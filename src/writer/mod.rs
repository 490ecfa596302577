//! Record serialization.
//!
//! Both formats are flat views of the same [`Spell`] shape: CSV with one
//! header row and standard quoting, or NDJSON with one object per line.
//! The parser has already ordered the records; writers never reorder.

mod csv;
mod json;

use std::fmt;
use std::io::Write;

use clap::ValueEnum;

use crate::error::Result;
use crate::types::Spell;

pub use self::csv::write_csv;
pub use self::json::write_json;

/// Output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Comma-separated values with a header row
    Csv,
    /// Line-delimited JSON, one object per record
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Csv => write!(f, "csv"),
            Format::Json => write!(f, "json"),
        }
    }
}

/// Write all records in the selected format.
pub fn write_records<W: Write>(format: Format, spells: &[Spell], writer: W) -> Result<()> {
    match format {
        Format::Csv => write_csv(spells, writer),
        Format::Json => write_json(spells, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display() {
        assert_eq!(Format::Csv.to_string(), "csv");
        assert_eq!(Format::Json.to_string(), "json");
    }
}
