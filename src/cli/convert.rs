//! Convert command implementation.
//!
//! Reads a transcription from a file or stdin, parses the spell blocks, and
//! writes the records to a file or stdout in the selected format.

use std::fs::{self, File};
use std::io::{self, BufRead, BufWriter};
use std::path::PathBuf;

use clap::Args;

use crate::error::{GrimoireError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::parse_spells;
use crate::writer::{write_records, Format};

/// Convert a compendium transcription into CSV or NDJSON records
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input file (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// Output file (writes stdout when omitted)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = Format::Csv)]
    pub format: Format,
}

pub fn run(args: ConvertArgs) -> Result<()> {
    let printer = Printer::new();

    let lines = read_lines(&args.input)?;
    let spells = parse_spells(lines)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| GrimoireError::Io {
                path: path.clone(),
                message: format!("Failed to create output file: {}", e),
            })?;
            write_records(args.format, &spells, BufWriter::new(file))?;
            printer.status(
                "Converted",
                &format!(
                    "{} ({}) -> {}",
                    plural(spells.len(), "spell", "spells"),
                    args.format,
                    display_path(path)
                ),
            );
        }
        None => {
            write_records(args.format, &spells, io::stdout().lock())?;
            printer.status(
                "Converted",
                &format!("{} ({})", plural(spells.len(), "spell", "spells"), args.format),
            );
        }
    }

    Ok(())
}

/// Read input lines from a file or stdin, terminators stripped.
fn read_lines(input: &Option<PathBuf>) -> Result<Vec<String>> {
    match input {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| GrimoireError::Io {
                path: path.clone(),
                message: format!("Failed to read input: {}", e),
            })?;
            Ok(text.lines().map(str::to_string).collect())
        }
        None => {
            let stdin = io::stdin();
            let lines = stdin.lock().lines().collect::<io::Result<Vec<_>>>()?;
            Ok(lines)
        }
    }
}
