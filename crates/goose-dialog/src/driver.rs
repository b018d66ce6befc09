//! Timer-driven typewriter task.
//!
//! A single tokio task owns the [`Typewriter`]. Commands arrive over a
//! channel and are applied in order between ticks, so a restart or append
//! always cancels the previous task before the next character can land.
//! The visible text is published on a `watch` channel: the task is its
//! only writer.

use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::Instant;
use tracing::debug;

use crate::cue::CueStrategy;
use crate::segment::VisibleText;
use crate::typewriter::{CompletionCallback, RenderEvent, Typewriter, TypewriterConfig};

/// Render directives, in the order they were produced.
pub type RenderStream = mpsc::UnboundedReceiver<RenderEvent>;

enum Command {
    Restart(String, Option<CompletionCallback>),
    Append(String, Option<CompletionCallback>),
    Cancel,
    NotifyIdle(oneshot::Sender<()>),
    Shutdown,
}

/// Cheap, cloneable control surface for the typewriter task.
#[derive(Clone)]
pub struct TypewriterHandle {
    cmd_tx: mpsc::UnboundedSender<Command>,
    visible_rx: watch::Receiver<VisibleText>,
}

impl TypewriterHandle {
    /// Clear visible output and reveal `text` from the start.
    pub fn restart(&self, text: impl Into<String>, on_complete: Option<CompletionCallback>) {
        self.send(Command::Restart(text.into(), on_complete));
    }

    /// Reveal `text` after what is already visible.
    pub fn append(&self, text: impl Into<String>, on_complete: Option<CompletionCallback>) {
        self.send(Command::Append(text.into(), on_complete));
    }

    /// Stop revealing, keeping what is visible.
    pub fn cancel(&self) {
        self.send(Command::Cancel);
    }

    /// Resolve once nothing is being revealed. Commands sent before this
    /// call are applied first, so it waits for text already queued.
    pub async fn idle(&self) {
        let (tx, rx) = oneshot::channel();
        self.send(Command::NotifyIdle(tx));
        // An error means the task is gone, which is idle too.
        let _ = rx.await;
    }

    /// Stop the task. Later commands are ignored.
    pub fn shutdown(&self) {
        self.send(Command::Shutdown);
    }

    /// Subscribe to visible text updates.
    pub fn visible(&self) -> watch::Receiver<VisibleText> {
        self.visible_rx.clone()
    }

    /// Current visible text.
    pub fn snapshot(&self) -> VisibleText {
        self.visible_rx.borrow().clone()
    }

    fn send(&self, cmd: Command) {
        if self.cmd_tx.send(cmd).is_err() {
            debug!("Typewriter task gone, dropping command");
        }
    }
}

/// Spawn the typewriter task on the current tokio runtime.
pub fn spawn_typewriter(
    config: TypewriterConfig,
    cues: Box<dyn CueStrategy>,
) -> (TypewriterHandle, RenderStream) {
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let (visible_tx, visible_rx) = watch::channel(VisibleText::new());

    let typewriter = Typewriter::new(config, cues);
    tokio::spawn(run_typewriter(typewriter, cmd_rx, event_tx, visible_tx));

    (TypewriterHandle { cmd_tx, visible_rx }, event_rx)
}

async fn run_typewriter(
    mut typewriter: Typewriter,
    mut cmd_rx: mpsc::UnboundedReceiver<Command>,
    event_tx: mpsc::UnboundedSender<RenderEvent>,
    visible_tx: watch::Sender<VisibleText>,
) {
    let cadence = typewriter.config().cadence;
    // Earliest moment the next unit may show. Commands never pull it
    // forward, so reveal speed stays at `cadence` however fast text
    // arrives; a deadline already in the past fires at once.
    let mut next_tick = Instant::now();
    let mut idle_waiters: Vec<oneshot::Sender<()>> = Vec::new();

    loop {
        if !typewriter.is_revealing() {
            for waiter in idle_waiters.drain(..) {
                let _ = waiter.send(());
            }
        }

        tokio::select! {
            biased;

            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(Command::Restart(text, on_complete)) => {
                        let replace = typewriter.restart(&text, on_complete);
                        let _ = event_tx.send(replace);
                        visible_tx.send_replace(typewriter.visible().clone());
                    }
                    Some(Command::Append(text, on_complete)) => {
                        typewriter.append(&text, on_complete);
                    }
                    Some(Command::Cancel) => {
                        typewriter.cancel();
                    }
                    Some(Command::NotifyIdle(waiter)) => {
                        idle_waiters.push(waiter);
                    }
                    Some(Command::Shutdown) | None => {
                        debug!("Typewriter task stopping");
                        return;
                    }
                }
            }

            _ = tokio::time::sleep_until(next_tick), if typewriter.is_revealing() => {
                let events = typewriter.tick();
                if events.iter().any(|e| matches!(e, RenderEvent::Reveal(_))) {
                    visible_tx.send_replace(typewriter.visible().clone());
                }
                for event in events {
                    let _ = event_tx.send(event);
                }
                next_tick = Instant::now() + cadence;
            }
        }
    }
}
