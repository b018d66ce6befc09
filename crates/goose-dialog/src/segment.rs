//! Visible output model.
//!
//! The typewriter appends to a list of typed segments instead of patching
//! a markup string. A UI walks [`VisibleText::segments`] (or calls
//! [`VisibleText::to_html`]) to draw it.

use std::fmt;

/// One run of visible output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    LineBreak,
    Code(String),
}

/// Everything the typewriter has revealed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleText {
    segments: Vec<Segment>,
    code_open: bool,
}

impl VisibleText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one character to the current run, starting a new run when
    /// the kind changes.
    pub fn push_char(&mut self, c: char) {
        match (self.code_open, self.segments.last_mut()) {
            (true, Some(Segment::Code(run))) | (false, Some(Segment::Plain(run))) => run.push(c),
            (true, _) => self.segments.push(Segment::Code(c.to_string())),
            (false, _) => self.segments.push(Segment::Plain(c.to_string())),
        }
    }

    /// A line break ends the current run. An open code span stays open and
    /// continues on the next line.
    pub fn line_break(&mut self) {
        self.segments.push(Segment::LineBreak);
    }

    pub fn open_code(&mut self) {
        self.code_open = true;
    }

    pub fn close_code(&mut self) {
        self.code_open = false;
    }

    pub fn clear(&mut self) {
        self.segments.clear();
        self.code_open = false;
    }

    // -- Getters --

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_code_open(&self) -> bool {
        self.code_open
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Revealed units: characters plus line breaks.
    pub fn char_count(&self) -> usize {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Plain(run) | Segment::Code(run) => run.chars().count(),
                Segment::LineBreak => 1,
            })
            .sum()
    }

    /// Flattened text with code spans inlined and line breaks as `'\n'`.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Plain(run) | Segment::Code(run) => out.push_str(run),
                Segment::LineBreak => out.push('\n'),
            }
        }
        out
    }

    /// Escaped markup for a webview dialog element.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Plain(run) => escape_html_into(run, &mut out),
                Segment::LineBreak => out.push_str("<br>"),
                Segment::Code(run) => {
                    out.push_str("<code>");
                    escape_html_into(run, &mut out);
                    out.push_str("</code>");
                }
            }
        }
        out
    }
}

impl fmt::Display for VisibleText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain_text())
    }
}

fn escape_html_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
}
