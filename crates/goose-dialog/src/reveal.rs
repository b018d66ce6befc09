//! One typewriter pass over a piece of text.

use crate::marker::{FENCE, LINE_BREAK};

/// What a single step makes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Char(char),
    LineBreak,
    CodeOpen,
    CodeClose,
}

impl Reveal {
    /// Whether this step shows something the user can count. Code span
    /// toggles only change styling.
    pub fn is_visible_unit(self) -> bool {
        matches!(self, Reveal::Char(_) | Reveal::LineBreak)
    }
}

/// Cursor over the text still to reveal.
///
/// Literal markup still present in the text is interpreted here: the
/// escaped line-break marker becomes one [`Reveal::LineBreak`], and an
/// inline fence toggles a code span instead of showing backticks.
#[derive(Debug, Clone)]
pub struct RevealTask {
    chars: Vec<char>,
    position: usize,
}

impl RevealTask {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            position: 0,
        }
    }

    /// Advance past the next unit. `code_open` is whether the visible
    /// output currently sits inside a code span, which decides the
    /// direction of a fence toggle.
    pub fn step(&mut self, code_open: bool) -> Option<Reveal> {
        let rest = &self.chars[self.position..];
        let first = *rest.first()?;

        if starts_with_marker(rest, LINE_BREAK) {
            self.position += LINE_BREAK.len();
            return Some(Reveal::LineBreak);
        }
        if starts_with_marker(rest, FENCE) {
            self.position += FENCE.len();
            return Some(if code_open {
                Reveal::CodeClose
            } else {
                Reveal::CodeOpen
            });
        }

        self.position += 1;
        Some(Reveal::Char(first))
    }

    /// Text not yet revealed, markup included.
    pub fn remaining(&self) -> String {
        self.chars[self.position.min(self.chars.len())..].iter().collect()
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Position in chars.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

// Markers are ASCII, so byte length equals char count.
fn starts_with_marker(rest: &[char], marker: &str) -> bool {
    let mut chars = rest.iter();
    marker.chars().all(|m| chars.next() == Some(&m))
}
