//! Dialog stream controller.
//!
//! Reassembles the chunks coming back from the assistant service into one
//! logical response. Session delimiters and code fences are consumed here;
//! everything else is either buffered for the typewriter or captured as a
//! code snippet. The controller never touches visible text: it returns
//! [`DialogAction`]s and the caller routes them.

use goose_common::SessionId;
use tracing::{debug, warn};

use crate::marker::{self, ChunkKind, CODE_MARKERS, FENCE, TEXT_MARKERS};
use crate::session::{Mode, StreamSession};

/// Work produced by one inbound chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    /// A session opened, explicitly or by the first content chunk.
    SessionStarted(SessionId),
    /// Clear visible output and reveal this text from scratch.
    Restart(String),
    /// Reveal this text after what is already visible.
    Append(String),
    /// A complete code block for the snippet-insertion collaborator.
    Snippet(String),
    /// The session closed on an end marker.
    SessionEnded(SessionId),
}

/// Turns the raw chunk sequence into reveal and snippet actions.
#[derive(Debug, Default)]
pub struct StreamController {
    session: StreamSession,
}

impl StreamController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk, in arrival order.
    pub fn on_chunk(&mut self, raw: &str) -> Vec<DialogAction> {
        let mut actions = Vec::new();

        match marker::classify_chunk(raw) {
            ChunkKind::StreamStart => self.start_session(&mut actions),
            ChunkKind::StreamEnd => self.end_session(&mut actions),
            ChunkKind::Content => {
                if self.session.mode() == Mode::Idle {
                    self.start_session(&mut actions);
                }
                self.consume(raw, &mut actions);
                self.forward_delta(&mut actions);
            }
        }

        actions
    }

    /// Drop the current session because the user submitted a new request.
    /// Whatever arrives next opens a fresh session.
    pub fn begin_submission(&mut self) {
        if self.session.mode() != Mode::Idle {
            debug!(session = %self.session.id().short(), "Abandoning session for new submission");
        }
        self.session.reset();
    }

    pub fn session(&self) -> &StreamSession {
        &self.session
    }

    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    fn start_session(&mut self, actions: &mut Vec<DialogAction>) {
        self.session.begin();
        debug!(session = %self.session.id().short(), "Stream started");
        actions.push(DialogAction::SessionStarted(self.session.id().clone()));
    }

    fn end_session(&mut self, actions: &mut Vec<DialogAction>) {
        if self.session.mode() == Mode::Idle {
            debug!("End marker outside a session, ignoring");
            return;
        }

        // A held-back fragment never completed a marker, so it is content.
        let carry = self.session.take_carry();
        match self.session.mode() {
            Mode::CodeCapture => {
                self.session.push_code(&carry);
                let code = self.session.take_code();
                warn!(
                    session = %self.session.id().short(),
                    bytes = code.len(),
                    "Unterminated code fence at end of stream, flushing snippet"
                );
                Self::emit_snippet(code, actions);
            }
            _ => self.session.push_text(&carry),
        }
        self.forward_delta(actions);

        self.session.set_mode(Mode::Idle);
        debug!(
            session = %self.session.id().short(),
            bytes = self.session.buffer().len(),
            "Stream ended"
        );
        actions.push(DialogAction::SessionEnded(self.session.id().clone()));
    }

    /// Split a content chunk between the text buffer and the code capture,
    /// toggling mode on every complete fence.
    fn consume(&mut self, raw: &str, actions: &mut Vec<DialogAction>) {
        let mut input = self.session.take_carry();
        input.push_str(raw);
        let mut rest = input.as_str();

        while let Some(idx) = rest.find(FENCE) {
            let before = &rest[..idx];
            rest = &rest[idx + FENCE.len()..];

            match self.session.mode() {
                Mode::CodeCapture => {
                    self.session.push_code(before);
                    let code = self.session.take_code();
                    Self::emit_snippet(code, actions);
                    self.session.set_mode(Mode::Streaming);
                }
                _ => {
                    self.session.push_text(before);
                    self.forward_delta(actions);
                    self.session.set_mode(Mode::CodeCapture);
                }
            }
        }

        let markers = match self.session.mode() {
            Mode::CodeCapture => CODE_MARKERS,
            _ => TEXT_MARKERS,
        };
        let held = marker::partial_marker_suffix(rest, markers);
        let (settled, carry) = rest.split_at(rest.len() - held);

        match self.session.mode() {
            Mode::CodeCapture => self.session.push_code(settled),
            _ => self.session.push_text(settled),
        }
        self.session.set_carry(carry);
    }

    fn forward_delta(&mut self, actions: &mut Vec<DialogAction>) {
        if let Some((delta, first)) = self.session.take_delta() {
            if first {
                actions.push(DialogAction::Restart(delta));
            } else {
                actions.push(DialogAction::Append(delta));
            }
        }
    }

    fn emit_snippet(code: String, actions: &mut Vec<DialogAction>) {
        if code.is_empty() {
            debug!("Empty code fence, no snippet");
            return;
        }
        actions.push(DialogAction::Snippet(code));
    }
}
