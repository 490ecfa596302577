//! Parser modules for spell compendium transcriptions.
//!
//! The input is a flat stream of text lines with no record delimiters: each
//! spell block starts with a title line, a level/school summary line, and a
//! `Casting Time` line, followed by more header lines and free-running body
//! text. The only boundary signal is the `Casting Time` prefix two lines
//! ahead of the current position, so parsing runs over a three-line sliding
//! window.
//!
//! # Usage
//!
//! ```ignore
//! use grimoire::parser::parse_text;
//!
//! let source = std::fs::read_to_string("compendium.txt")?;
//! let spells = parse_text(&source)?;
//!
//! for spell in spells {
//!     println!("Found: {}", spell.name);
//! }
//! ```

mod blocks;
mod window;
pub mod header;

// Re-export main entry points
pub use blocks::{parse_spells, parse_text, SpellAssembler};
pub use window::{LineWindow, WINDOW_SIZE};
