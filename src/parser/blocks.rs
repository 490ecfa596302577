//! Spell block assembly.
//!
//! Walks sliding windows over the line stream, recognizes block headers,
//! and folds everything between headers into the current spell's
//! description. A new block is only visible one header late, so emission is
//! deferred: the in-progress spell is finished the moment the next header
//! shows up, and the final one is flushed when the input runs out.

use crate::error::{GrimoireError, Result};
use crate::parser::header;
use crate::parser::window::LineWindow;
use crate::types::Spell;

/// Prefix on the third header line; the sole record-boundary signal.
const BLOCK_START: &str = "Casting Time";

/// Paragraph-break sentinel the extraction step leaves in body text.
const PARAGRAPH_MARK: &str = " \t";

/// Parse a whole transcription into spells, one per block, in input order.
pub fn parse_text(source: &str) -> Result<Vec<Spell>> {
    parse_spells(source.lines().map(str::to_string))
}

/// Parse an already-split line stream into spells.
///
/// Returns [`GrimoireError::Input`] when the stream contains no spell block
/// at all — empty input and input shorter than the lookahead window both
/// land here.
pub fn parse_spells<I>(lines: I) -> Result<Vec<Spell>>
where
    I: IntoIterator<Item = String>,
{
    let mut window = LineWindow::new(lines.into_iter());
    let mut assembler = SpellAssembler::new();

    loop {
        assembler.step(&mut window);
        if !window.advance() {
            break;
        }
    }

    // The last two window slots were never seen as the oldest line; they
    // belong to the final spell's body.
    let tail: Vec<String> = [window.middle(), window.last()]
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect();

    assembler.finish(tail)
}

/// Stateful record assembler.
///
/// Two states: no active spell (before the first header) and accumulating.
/// Header fields land directly on the active spell; everything else queues
/// in `description` until the block closes.
pub struct SpellAssembler {
    current: Option<Spell>,
    description: Vec<String>,
    spells: Vec<Spell>,
}

impl SpellAssembler {
    pub fn new() -> Self {
        Self {
            current: None,
            description: Vec::new(),
            spells: Vec::new(),
        }
    }

    /// Process one window position.
    ///
    /// A `Casting Time` line in the lookahead slot means the window sits on
    /// a three-line block header; that path consumes all three lines. Every
    /// other window contributes only its oldest line.
    pub fn step<I: Iterator<Item = String>>(&mut self, window: &mut LineWindow<I>) {
        if window.last().is_some_and(|line| line.starts_with(BLOCK_START)) {
            self.start_block(window);
            return;
        }

        let Some(line) = window.first() else {
            return;
        };

        if let Some(value) = header::prefixed_value(line, "Range") {
            let range = value.to_lowercase();
            if let Some(spell) = self.current.as_mut() {
                spell.range = range;
            }
        } else if let Some(value) = header::prefixed_value(line, "Duration") {
            let parsed = header::parse_duration(value);
            if let Some(spell) = self.current.as_mut() {
                spell.duration = parsed.duration;
                spell.concentration = parsed.concentration;
            }
        // "Component", not "Components": the source text has the singular
        // form on a handful of entries.
        } else if let Some(value) = header::prefixed_value(line, "Component") {
            let parsed = header::parse_components(value);
            if let Some(spell) = self.current.as_mut() {
                spell.verbal = parsed.verbal;
                spell.somatic = parsed.somatic;
                spell.material = parsed.material;
                spell.materials = parsed.materials;
            }
        } else {
            self.description.push(line.to_string());
        }
    }

    /// Flush any pending spell after appending the unconsumed tail lines.
    ///
    /// Errors when no block ever started: the format guarantees at least one
    /// header, so such a stream is not a supported input.
    pub fn finish(mut self, tail: Vec<String>) -> Result<Vec<Spell>> {
        if self.current.is_none() {
            return Err(GrimoireError::Input {
                message: "no spell blocks found in input".to_string(),
                help: Some(
                    "expected at least one block with a \"Casting Time\" header line".to_string(),
                ),
            });
        }

        self.description.extend(tail);
        self.finish_spell();

        Ok(self.spells)
    }

    /// Seed a new spell from the three header lines under the window, then
    /// step the window past the two lookahead lines it consumed.
    fn start_block<I: Iterator<Item = String>>(&mut self, window: &mut LineWindow<I>) {
        self.finish_spell();

        let name = window.first().unwrap_or("").to_string();
        let summary = header::parse_summary(window.middle().unwrap_or(""));
        let casting_time = header::value_after(window.last().unwrap_or("")).to_lowercase();

        self.current = Some(Spell {
            name,
            level: summary.level,
            school: summary.school,
            cantrip: summary.cantrip,
            ritual: summary.ritual,
            casting_time,
            ..Spell::default()
        });

        window.skip();
        window.skip();
    }

    /// Close out the active spell, joining its body text.
    ///
    /// Body lines join on single spaces; the extraction step's space-tab
    /// sentinel then becomes a real line break. Clears the description queue
    /// either way, so text before the first header is dropped.
    fn finish_spell(&mut self) {
        if let Some(mut spell) = self.current.take() {
            spell.description = self.description.join(" ").replace(PARAGRAPH_MARK, "\n");
            self.spells.push(spell);
        }
        self.description.clear();
    }
}

impl Default for SpellAssembler {
    fn default() -> Self {
        Self::new()
    }
}
