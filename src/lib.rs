//! grimoire - Spell compendium converter
//!
//! A library for reconstructing structured spell records from plain-text
//! compendium transcriptions and serializing them as CSV or line-delimited
//! JSON.

pub mod cli;
pub mod error;
pub mod output;
pub mod parser;
pub mod types;
pub mod writer;

pub use error::{GrimoireError, Result};
pub use parser::{parse_spells, parse_text, LineWindow, SpellAssembler, WINDOW_SIZE};
pub use types::{Spell, FIELDS};
pub use writer::{write_csv, write_json, write_records, Format};
