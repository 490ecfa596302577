//! Check command implementation.
//!
//! Parses transcriptions and lists what they contain, without writing any
//! records. Useful for eyeballing an extraction before converting it.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{GrimoireError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::parse_text;

/// Parse transcriptions and list the spells found
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Only print per-file totals, not individual spells
    #[arg(long, short)]
    pub quiet: bool,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let printer = Printer::new();
    let mut total = 0;

    for file in &args.files {
        let text = fs::read_to_string(file).map_err(|e| GrimoireError::Io {
            path: file.clone(),
            message: format!("Failed to read file: {}", e),
        })?;

        let spells = parse_text(&text)?;
        printer.status(
            "Checked",
            &format!(
                "{}: {}",
                display_path(file),
                plural(spells.len(), "spell", "spells")
            ),
        );

        if !args.quiet {
            for spell in &spells {
                let components = if spell.component_tags().is_empty() {
                    printer.dim("no components")
                } else {
                    spell.component_tags()
                };
                println!(
                    "  {} ({} {}) [{}]",
                    spell.name,
                    spell.level_label(),
                    spell.school,
                    components
                );
            }
        }

        total += spells.len();
    }

    printer.status(
        "Total",
        &plural(total, "spell", "spells"),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_check_counts_spells() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("one.txt");
        fs::write(
            &path,
            "Spare the Dying\nNecromancy cantrip\nCasting Time: 1 action\n\
             Range: Touch\nComponents: V, S\nDuration: Instantaneous\n\
             You touch a living creature that has 0 hit points.\n\
             The creature becomes stable.\n",
        )
        .unwrap();

        let args = CheckArgs {
            files: vec![path],
            quiet: true,
        };

        run(args).unwrap();
    }

    #[test]
    fn test_check_missing_file_fails() {
        let args = CheckArgs {
            files: vec![PathBuf::from("/nonexistent/spells.txt")],
            quiet: true,
        };

        assert!(matches!(run(args), Err(GrimoireError::Io { .. })));
    }
}
