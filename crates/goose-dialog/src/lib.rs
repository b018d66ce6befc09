//! Streamed dialog engine for Mr. Goose.
//!
//! Turns the chunked text stream coming back from the assistant service
//! into a typewriter reveal:
//! - [`controller`] reassembles chunks, consumes session and fence markers,
//!   and extracts code snippets
//! - [`typewriter`] reveals text one unit per tick, emitting sound cues
//! - [`driver`] runs the typewriter on a tokio timer behind a handle
//! - [`segment`] is the visible output model the UI walks to draw

pub mod controller;
pub mod cue;
pub mod driver;
pub mod marker;
pub mod reveal;
pub mod segment;
pub mod session;
pub mod typewriter;

pub use controller::{DialogAction, StreamController};
pub use cue::{CueStrategy, CyclingCue, FixedCue, RandomCue};
pub use driver::{spawn_typewriter, RenderStream, TypewriterHandle};
pub use reveal::{Reveal, RevealTask};
pub use segment::{Segment, VisibleText};
pub use session::{Mode, StreamSession};
pub use typewriter::{CompletionCallback, RenderEvent, Typewriter, TypewriterConfig};
