//! In-band control markers carried by the assistant chunk stream.
//!
//! Session delimiters arrive as whole chunks. The fence and line-break
//! markers are substrings that may appear anywhere inside a chunk, and may
//! be cut in half by a chunk boundary.

/// Whole-chunk marker that opens a session.
pub const STREAM_START: &str = "Startstreaming";
/// Whole-chunk marker that closes a session.
pub const STREAM_END: &str = "Endstreaming";
/// Delimits a code-capture region.
pub const FENCE: &str = "```";
/// Escaped newline as sent by the assistant service: a backslash then `n`.
pub const LINE_BREAK: &str = "\\n";

/// Markers that matter while plain text is being buffered.
pub const TEXT_MARKERS: &[&str] = &[FENCE, LINE_BREAK];
/// Markers that matter while a code block is being captured.
pub const CODE_MARKERS: &[&str] = &[FENCE];

/// What a raw chunk means to the stream controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    StreamStart,
    StreamEnd,
    Content,
}

/// Classify a chunk. Only an exact match is a session delimiter; a chunk
/// that merely contains `Endstreaming` is content.
pub fn classify_chunk(raw: &str) -> ChunkKind {
    match raw {
        STREAM_START => ChunkKind::StreamStart,
        STREAM_END => ChunkKind::StreamEnd,
        _ => ChunkKind::Content,
    }
}

/// Byte length of the longest suffix of `text` that is a proper prefix of
/// one of `markers`. Such a suffix cannot be classified until the next
/// chunk arrives.
pub fn partial_marker_suffix(text: &str, markers: &[&str]) -> usize {
    let mut longest = 0;
    for marker in markers {
        for len in 1..marker.len() {
            if len > text.len() {
                break;
            }
            if text.ends_with(&marker[..len]) {
                longest = longest.max(len);
            }
        }
    }
    longest
}
