//! Routes controller actions to the typewriter and the snippet sink.

use std::ops::ControlFlow;

use goose_dialog::{DialogAction, StreamController, TypewriterHandle};

use crate::snippets::SnippetSink;

pub struct DialogRouter {
    controller: StreamController,
    typewriter: TypewriterHandle,
    snippets: Box<dyn SnippetSink>,
}

impl DialogRouter {
    pub fn new(typewriter: TypewriterHandle, snippets: Box<dyn SnippetSink>) -> Self {
        Self {
            controller: StreamController::new(),
            typewriter,
            snippets,
        }
    }

    /// A new request is going out; forget any half-read response.
    pub fn begin_submission(&mut self) {
        self.controller.begin_submission();
    }

    /// Feed one inbound chunk. Breaks once the response has ended.
    pub fn on_chunk(&mut self, chunk: &str) -> ControlFlow<()> {
        let mut flow = ControlFlow::Continue(());
        for action in self.controller.on_chunk(chunk) {
            match action {
                DialogAction::SessionStarted(id) => {
                    tracing::debug!(session = %id.short(), "Response started");
                }
                DialogAction::Restart(text) => self.typewriter.restart(text, None),
                DialogAction::Append(text) => self.typewriter.append(text, None),
                DialogAction::Snippet(code) => {
                    if let Err(e) = self.snippets.insert(&code) {
                        tracing::warn!(error = %e, "Failed to insert snippet");
                    }
                }
                DialogAction::SessionEnded(id) => {
                    tracing::debug!(session = %id.short(), "Response ended");
                    flow = ControlFlow::Break(());
                }
            }
        }
        flow
    }

    /// Flush whatever the controller still holds, as if the stream ended.
    pub fn close(&mut self) {
        let _ = self.on_chunk(goose_dialog::marker::STREAM_END);
    }

    /// Wait for the typewriter to finish, then let the sink flush.
    pub async fn finish(&mut self) {
        self.typewriter.idle().await;
        if let Err(e) = self.snippets.finish() {
            tracing::warn!(error = %e, "Failed to flush snippets");
        }
    }
}
