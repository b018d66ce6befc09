//! State of one streamed assistant interaction.

use goose_common::SessionId;

/// Parse mode of the stream controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// No session is open. The next content chunk opens one.
    #[default]
    Idle,
    /// Plain text is accumulating in the buffer.
    Streaming,
    /// Text is accumulating in the code capture until the closing fence.
    CodeCapture,
}

/// Buffers for one request/response interaction.
///
/// `revealed` is a byte offset into `buffer` marking how much has already
/// been handed to the renderer. It only grows within a session.
#[derive(Debug, Default)]
pub struct StreamSession {
    id: SessionId,
    buffer: String,
    revealed: usize,
    mode: Mode,
    code_capture: String,
    /// Trailing fragment that may be the first half of a split marker.
    carry: String,
}

impl StreamSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Throw away everything and open a fresh session in `Streaming` mode.
    pub(crate) fn begin(&mut self) {
        *self = Self {
            mode: Mode::Streaming,
            ..Self::default()
        };
    }

    /// Throw away everything and return to `Idle`.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub(crate) fn push_code(&mut self, code: &str) {
        self.code_capture.push_str(code);
    }

    pub(crate) fn take_code(&mut self) -> String {
        std::mem::take(&mut self.code_capture)
    }

    pub(crate) fn take_carry(&mut self) -> String {
        std::mem::take(&mut self.carry)
    }

    pub(crate) fn set_carry(&mut self, carry: &str) {
        self.carry.clear();
        self.carry.push_str(carry);
    }

    /// The suffix of `buffer` not yet handed to the renderer, and whether
    /// it is the first hand-off of this session. Advances `revealed`.
    pub(crate) fn take_delta(&mut self) -> Option<(String, bool)> {
        if self.revealed >= self.buffer.len() {
            return None;
        }
        let first = self.revealed == 0;
        let delta = self.buffer[self.revealed..].to_string();
        self.revealed = self.buffer.len();
        Some((delta, first))
    }

    // -- Getters --

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn code_capture(&self) -> &str {
        &self.code_capture
    }

    pub fn carry(&self) -> &str {
        &self.carry
    }
}
