//! Core domain types for grimoire.

mod spell;

pub use spell::{Spell, FIELDS};
