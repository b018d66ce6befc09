//! Terminal rendering of typewriter events.

use std::io::{self, Write};

use goose_dialog::{RenderEvent, RenderStream, Reveal};

use crate::sounds::SoundCues;

const CODE_STYLE: &str = "\x1b[36m";
const RESET_STYLE: &str = "\x1b[0m";

/// Draws the dialog onto a terminal-like writer.
pub struct TerminalPresenter<W: Write> {
    out: W,
    color: bool,
    started: bool,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            started: false,
        }
    }

    pub fn render(&mut self, event: &RenderEvent) -> io::Result<()> {
        match event {
            RenderEvent::Replace(text) => {
                if self.started {
                    writeln!(self.out)?;
                }
                self.started = true;
                write!(self.out, "{text}")?;
            }
            RenderEvent::Reveal(Reveal::Char(c)) => write!(self.out, "{c}")?,
            RenderEvent::Reveal(Reveal::LineBreak) => writeln!(self.out)?,
            RenderEvent::Reveal(Reveal::CodeOpen) if self.color => {
                self.out.write_all(CODE_STYLE.as_bytes())?
            }
            RenderEvent::Reveal(Reveal::CodeClose) if self.color => {
                self.out.write_all(RESET_STYLE.as_bytes())?
            }
            RenderEvent::Reveal(_) | RenderEvent::Cue(_) => {}
            RenderEvent::Complete => {
                if self.color {
                    self.out.write_all(RESET_STYLE.as_bytes())?;
                }
            }
        }
        self.out.flush()
    }

    /// End the last dialog line.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.started {
            writeln!(self.out)?;
            self.started = false;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Drain the render stream until the typewriter stops, rendering each
/// event and resolving its sound cues.
pub async fn run_presenter<W: Write>(
    mut events: RenderStream,
    mut presenter: TerminalPresenter<W>,
    sounds: SoundCues,
) -> TerminalPresenter<W> {
    while let Some(event) = events.recv().await {
        if let RenderEvent::Cue(selector) = event {
            sounds.play_dialog(selector);
        }
        if let Err(e) = presenter.render(&event) {
            tracing::warn!(error = %e, "Failed to write dialog output");
        }
    }
    if let Err(e) = presenter.finish() {
        tracing::warn!(error = %e, "Failed to write dialog output");
    }
    presenter
}

#[cfg(test)]
mod tests {
    use super::*;
    use goose_dialog::VisibleText;

    fn render_all(events: &[RenderEvent], color: bool) -> String {
        let mut presenter = TerminalPresenter::new(Vec::new(), color);
        for event in events {
            presenter.render(event).unwrap();
        }
        presenter.finish().unwrap();
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn plain_dialog_line() {
        let out = render_all(
            &[
                RenderEvent::Replace(VisibleText::new()),
                RenderEvent::Reveal(Reveal::Char('h')),
                RenderEvent::Cue(1),
                RenderEvent::Reveal(Reveal::Char('i')),
                RenderEvent::Complete,
            ],
            false,
        );
        assert_eq!(out, "hi\n");
    }

    #[test]
    fn restart_starts_a_new_line() {
        let out = render_all(
            &[
                RenderEvent::Replace(VisibleText::new()),
                RenderEvent::Reveal(Reveal::Char('a')),
                RenderEvent::Replace(VisibleText::new()),
                RenderEvent::Reveal(Reveal::Char('b')),
                RenderEvent::Reveal(Reveal::LineBreak),
                RenderEvent::Reveal(Reveal::Char('c')),
            ],
            false,
        );
        assert_eq!(out, "a\nb\nc\n");
    }

    #[test]
    fn code_spans_are_colored() {
        let out = render_all(
            &[
                RenderEvent::Replace(VisibleText::new()),
                RenderEvent::Reveal(Reveal::CodeOpen),
                RenderEvent::Reveal(Reveal::Char('x')),
                RenderEvent::Reveal(Reveal::CodeClose),
                RenderEvent::Reveal(Reveal::Char('!')),
            ],
            true,
        );
        assert_eq!(out, "\x1b[36mx\x1b[0m!\n");
    }

    #[test]
    fn nothing_rendered_means_no_output() {
        assert_eq!(render_all(&[], true), "");
    }

    #[tokio::test]
    async fn presenter_task_ends_with_the_stream() {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        tx.send(RenderEvent::Replace(VisibleText::new())).unwrap();
        tx.send(RenderEvent::Reveal(Reveal::Char('k'))).unwrap();
        drop(tx);

        let sounds = SoundCues::new(Default::default());
        let presenter = run_presenter(rx, TerminalPresenter::new(Vec::new(), false), sounds).await;
        assert_eq!(String::from_utf8(presenter.into_inner()).unwrap(), "k\n");
    }
}
