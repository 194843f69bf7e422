//! Selector splitter.
//!
//! Decomposes selector text into [`SelectorSegment`]s. Whitespace and the
//! combinator glyphs `>`, `+`, `~` start a new segment; `.`, `#`, `:` and `[`
//! start a new atom inside the current segment. Text inside parentheses,
//! brackets and quotes never splits, so `:not(.a .b)` and `[lang~="en"]` stay
//! whole.

use crate::css::model::{Combinator, SelectorSegment};
use crate::css::text::{collapse_whitespace, split_top_level, Nesting};

/// Split a comma-separated selector list into independent segment sequences.
///
/// Empty list items (`a, , b`) are dropped.
pub fn split_selector_list(text: &str) -> Vec<Vec<SelectorSegment>> {
    split_top_level(text, ',')
        .into_iter()
        .map(split_selector)
        .filter(|segments| !segments.is_empty())
        .collect()
}

/// Split a single selector (no top-level commas) into segments.
pub fn split_selector(text: &str) -> Vec<SelectorSegment> {
    let mut splitter = Splitter::default();
    let mut nesting = Nesting::default();

    for ch in text.chars() {
        let top = nesting.at_top_level();
        nesting.step(ch);

        if top && ch.is_whitespace() {
            splitter.whitespace();
        } else if let Some(combinator) = Combinator::from_glyph(ch).filter(|_| top) {
            splitter.glyph(combinator);
        } else {
            splitter.push(ch, top && matches!(ch, '.' | '#' | ':' | '['));
        }
    }

    splitter.finish()
}

#[derive(Default)]
struct Splitter {
    segments: Vec<SelectorSegment>,
    current: Option<SelectorSegment>,
    atom: String,
    /// Combinator seen since the last atom character, applied when the next
    /// atom starts.
    pending: Option<Combinator>,
}

impl Splitter {
    fn has_content(&self) -> bool {
        !self.atom.is_empty() || self.current.is_some() || !self.segments.is_empty()
    }

    fn whitespace(&mut self) {
        self.end_atom();
        if self.pending.is_none() && self.has_content() {
            self.pending = Some(Combinator::Descendant);
        }
    }

    fn glyph(&mut self, combinator: Combinator) {
        self.end_atom();
        self.pending = Some(combinator);
    }

    fn push(&mut self, ch: char, starts_atom: bool) {
        if let Some(combinator) = self.pending.take() {
            self.end_segment();
            self.current = Some(SelectorSegment::new(combinator));
        } else if starts_atom && !self.atom.is_empty() && !(ch == ':' && self.atom == ":") {
            self.end_atom();
        }
        self.atom.push(ch);
    }

    fn end_atom(&mut self) {
        if self.atom.is_empty() {
            return;
        }
        let atom = collapse_whitespace(&std::mem::take(&mut self.atom));
        self.current
            .get_or_insert_with(|| SelectorSegment::new(Combinator::None))
            .atoms
            .push(atom);
    }

    fn end_segment(&mut self) {
        self.end_atom();
        if let Some(segment) = self.current.take() {
            if !segment.atoms.is_empty() {
                self.segments.push(segment);
            }
        }
    }

    fn finish(mut self) -> Vec<SelectorSegment> {
        self.end_segment();
        self.segments
    }
}
