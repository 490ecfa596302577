//! The spell record produced by the block parser.

use serde::{Deserialize, Serialize};

/// One fully-assembled spell.
///
/// Field order matters: it is the canonical CSV column order, and serde
/// derives both serializations from it, so the struct is the single source
/// of truth for the output schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    /// Title line of the block
    pub name: String,

    /// Spell level 0-9; 0 covers cantrip-tier entries
    pub level: u8,

    /// Lowercase school token (e.g. "evocation")
    pub school: String,

    pub cantrip: bool,
    pub ritual: bool,

    /// Lowercased value of the "Casting Time" line
    pub casting_time: String,

    /// Lowercased value of the "Range" line
    pub range: String,

    pub verbal: bool,
    pub material: bool,
    pub somatic: bool,

    /// Parenthesized material list, when the components line has one
    pub materials: Option<String>,

    /// Lowercased duration with any leading "concentration, " stripped
    pub duration: String,

    pub concentration: bool,

    /// Body text, paragraph breaks restored as newlines
    pub description: String,
}

/// Column names in canonical output order.
pub const FIELDS: [&str; 14] = [
    "name",
    "level",
    "school",
    "cantrip",
    "ritual",
    "casting_time",
    "range",
    "verbal",
    "material",
    "somatic",
    "materials",
    "duration",
    "concentration",
    "description",
];

impl Spell {
    /// Short component summary for human-readable listings, e.g. "V, S, M".
    pub fn component_tags(&self) -> String {
        let mut tags = Vec::new();
        if self.verbal {
            tags.push("V");
        }
        if self.somatic {
            tags.push("S");
        }
        if self.material {
            tags.push("M");
        }
        tags.join(", ")
    }

    /// Level label for listings: "cantrip" or "level N".
    pub fn level_label(&self) -> String {
        if self.cantrip {
            "cantrip".to_string()
        } else {
            format!("level {}", self.level)
        }
    }
}
