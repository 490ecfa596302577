pub mod check;
pub mod completions;
pub mod convert;

use clap::{Parser, Subcommand};

/// grimoire - Spell compendium converter
#[derive(Parser, Debug)]
#[command(name = "grimoire")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a compendium transcription into CSV or NDJSON records
    Convert(convert::ConvertArgs),

    /// Parse transcriptions and list the spells found, writing nothing
    Check(check::CheckArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
