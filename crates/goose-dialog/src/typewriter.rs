//! Typewriter renderer state machine.
//!
//! `Idle -> Revealing -> Idle` on completion, or `Revealing -> Revealing`
//! when a restart or append supersedes the current task. This type is
//! clock-free: whoever owns it calls [`Typewriter::tick`] once per cadence
//! interval (see [`crate::driver`]).

use std::time::Duration;

use tracing::trace;

use crate::cue::CueStrategy;
use crate::reveal::{Reveal, RevealTask};
use crate::segment::VisibleText;

/// Invoked once when a task has revealed all of its text.
pub type CompletionCallback = Box<dyn FnOnce() + Send>;

/// Reveal pacing.
#[derive(Debug, Clone)]
pub struct TypewriterConfig {
    /// Delay between two revealed units.
    pub cadence: Duration,
    /// Emit a cue every this many revealed units of a task. Zero disables
    /// cues.
    pub cue_interval: usize,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            cadence: Duration::from_millis(40),
            cue_interval: 3,
        }
    }
}

/// Directive for the UI host and the sound collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    /// Replace all visible text with this (empty on restart).
    Replace(VisibleText),
    /// Append one step to the visible text.
    Reveal(Reveal),
    /// Play the dialog clip with this selector.
    Cue(u8),
    /// The current task finished.
    Complete,
}

struct ActiveTask {
    task: RevealTask,
    /// Visible units revealed by this task, for cue cadence.
    revealed: usize,
    on_complete: Option<CompletionCallback>,
}

/// Reveals text one unit per tick onto a [`VisibleText`].
pub struct Typewriter {
    config: TypewriterConfig,
    visible: VisibleText,
    active: Option<ActiveTask>,
    cues: Box<dyn CueStrategy>,
}

impl Typewriter {
    pub fn new(config: TypewriterConfig, cues: Box<dyn CueStrategy>) -> Self {
        Self {
            config,
            visible: VisibleText::new(),
            active: None,
            cues,
        }
    }

    /// Cancel any task, clear visible output, and reveal `text` from the
    /// start.
    pub fn restart(&mut self, text: &str, on_complete: Option<CompletionCallback>) -> RenderEvent {
        self.cancel();
        self.visible.clear();
        self.install(text, on_complete);
        RenderEvent::Replace(self.visible.clone())
    }

    /// Cancel any task but keep what is visible, then reveal `text` after
    /// it. Text the superseded task had not reached yet is revealed first,
    /// so streamed chunks never lose their tail; its callback is dropped.
    pub fn append(&mut self, text: &str, on_complete: Option<CompletionCallback>) {
        let pending = match self.active.as_ref() {
            Some(active) => active.task.remaining(),
            None => String::new(),
        };
        self.cancel();
        if pending.is_empty() {
            self.install(text, on_complete);
        } else {
            self.install(&format!("{pending}{text}"), on_complete);
        }
    }

    /// Drop the current task along with its completion callback. Returns
    /// whether there was one; cancelling an idle typewriter is a no-op.
    pub fn cancel(&mut self) -> bool {
        match self.active.take() {
            Some(active) => {
                trace!(
                    position = active.task.position(),
                    len = active.task.len(),
                    "Reveal task superseded"
                );
                true
            }
            None => false,
        }
    }

    /// Reveal the next visible unit. Code span toggles in front of it are
    /// applied in the same tick.
    pub fn tick(&mut self) -> Vec<RenderEvent> {
        let mut events = Vec::new();
        let Some(active) = self.active.as_mut() else {
            return events;
        };

        while let Some(reveal) = active.task.step(self.visible.is_code_open()) {
            match reveal {
                Reveal::Char(c) => self.visible.push_char(c),
                Reveal::LineBreak => self.visible.line_break(),
                Reveal::CodeOpen => self.visible.open_code(),
                Reveal::CodeClose => self.visible.close_code(),
            }
            events.push(RenderEvent::Reveal(reveal));

            if reveal.is_visible_unit() {
                active.revealed += 1;
                let interval = self.config.cue_interval;
                if interval > 0 && active.revealed % interval == 0 {
                    events.push(RenderEvent::Cue(self.cues.select()));
                }
                break;
            }
        }

        if active.task.is_finished() {
            if let Some(done) = self.active.take() {
                if let Some(on_complete) = done.on_complete {
                    on_complete();
                }
            }
            events.push(RenderEvent::Complete);
        }

        events
    }

    pub fn is_revealing(&self) -> bool {
        self.active.is_some()
    }

    pub fn visible(&self) -> &VisibleText {
        &self.visible
    }

    pub fn config(&self) -> &TypewriterConfig {
        &self.config
    }

    fn install(&mut self, text: &str, on_complete: Option<CompletionCallback>) {
        self.active = Some(ActiveTask {
            task: RevealTask::new(text),
            revealed: 0,
            on_complete,
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::cue::{CyclingCue, FixedCue};

    fn typewriter(cue_interval: usize) -> Typewriter {
        Typewriter::new(
            TypewriterConfig {
                cadence: Duration::from_millis(1),
                cue_interval,
            },
            Box::new(FixedCue(1)),
        )
    }

    fn run_to_idle(tw: &mut Typewriter) -> Vec<RenderEvent> {
        let mut events = Vec::new();
        while tw.is_revealing() {
            events.extend(tw.tick());
        }
        events
    }

    fn counter() -> (Arc<AtomicUsize>, CompletionCallback) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let callback: CompletionCallback = Box::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        (count, callback)
    }

    #[test]
    fn restart_reveals_whole_text() {
        let mut tw = typewriter(3);
        let replace = tw.restart("Hello world", None);
        assert_eq!(replace, RenderEvent::Replace(VisibleText::new()));
        run_to_idle(&mut tw);
        assert_eq!(tw.visible().plain_text(), "Hello world");
    }

    #[test]
    fn one_visible_unit_per_tick() {
        let mut tw = typewriter(0);
        tw.restart("abc", None);
        tw.tick();
        assert_eq!(tw.visible().plain_text(), "a");
        tw.tick();
        assert_eq!(tw.visible().plain_text(), "ab");
        assert!(tw.is_revealing());
        let last = tw.tick();
        assert_eq!(tw.visible().plain_text(), "abc");
        assert!(last.contains(&RenderEvent::Complete));
        assert!(!tw.is_revealing());
    }

    #[test]
    fn cue_every_third_char_of_seven() {
        let mut tw = typewriter(3);
        tw.restart("abcdefg", None);
        let events = run_to_idle(&mut tw);
        let cues = events
            .iter()
            .filter(|e| matches!(e, RenderEvent::Cue(_)))
            .count();
        assert_eq!(cues, 2);

        // Cues follow the 3rd and 6th reveal.
        let positions: Vec<usize> = events
            .iter()
            .filter(|e| matches!(e, RenderEvent::Reveal(_) | RenderEvent::Cue(_)))
            .enumerate()
            .filter(|(_, e)| matches!(e, RenderEvent::Cue(_)))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(positions, vec![3, 7]);
    }

    #[test]
    fn cue_interval_six() {
        let mut tw = typewriter(6);
        tw.restart("twelve chars", None);
        let events = run_to_idle(&mut tw);
        let cues = events
            .iter()
            .filter(|e| matches!(e, RenderEvent::Cue(_)))
            .count();
        assert_eq!(cues, 2);
    }

    #[test]
    fn cue_selector_comes_from_strategy() {
        let mut tw = Typewriter::new(
            TypewriterConfig {
                cadence: Duration::from_millis(1),
                cue_interval: 1,
            },
            Box::new(CyclingCue::new(2)),
        );
        tw.restart("abc", None);
        let cues: Vec<u8> = run_to_idle(&mut tw)
            .into_iter()
            .filter_map(|e| match e {
                RenderEvent::Cue(n) => Some(n),
                _ => None,
            })
            .collect();
        assert_eq!(cues, vec![1, 2, 1]);
    }

    #[test]
    fn append_keeps_visible_text() {
        let mut tw = typewriter(3);
        tw.restart("Hello", None);
        run_to_idle(&mut tw);
        tw.append(" world", None);
        run_to_idle(&mut tw);
        assert_eq!(tw.visible().plain_text(), "Hello world");
    }

    #[test]
    fn append_mid_reveal_keeps_pending_tail() {
        let mut tw = typewriter(3);
        let (old_count, old_cb) = counter();
        let (new_count, new_cb) = counter();
        tw.restart("abcdef", Some(old_cb));
        tw.tick();
        tw.tick();
        tw.append("XY", Some(new_cb));
        run_to_idle(&mut tw);
        assert_eq!(tw.visible().plain_text(), "abcdefXY");
        assert_eq!(old_count.load(Ordering::SeqCst), 0);
        assert_eq!(new_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn back_to_back_appends_reveal_everything() {
        let mut tw = typewriter(0);
        tw.restart("Hello", None);
        tw.append(" wor", None);
        tw.append("ld", None);
        run_to_idle(&mut tw);
        assert_eq!(tw.visible().plain_text(), "Hello world");
    }

    #[test]
    fn restart_mid_reveal_shows_only_new_text() {
        let mut tw = typewriter(3);
        tw.restart("old text", None);
        for _ in 0..4 {
            tw.tick();
        }
        assert_eq!(tw.visible().plain_text(), "old ");

        tw.restart("new", None);
        let events = run_to_idle(&mut tw);
        let revealed: String = events
            .iter()
            .filter_map(|e| match e {
                RenderEvent::Reveal(Reveal::Char(c)) => Some(*c),
                _ => None,
            })
            .collect();
        assert_eq!(revealed, "new");
        assert_eq!(tw.visible().plain_text(), "new");
    }

    #[test]
    fn superseded_task_never_completes() {
        let mut tw = typewriter(3);
        let (old_count, old_cb) = counter();
        let (new_count, new_cb) = counter();

        tw.restart("old text", Some(old_cb));
        tw.tick();
        tw.restart("new", Some(new_cb));
        run_to_idle(&mut tw);

        assert_eq!(old_count.load(Ordering::SeqCst), 0);
        assert_eq!(new_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn empty_restart_is_idempotent() {
        let mut tw = typewriter(3);
        tw.restart("", None);
        let first = run_to_idle(&mut tw);
        tw.restart("", None);
        let second = run_to_idle(&mut tw);
        assert!(tw.visible().is_empty());
        assert_eq!(first, vec![RenderEvent::Complete]);
        assert_eq!(second, vec![RenderEvent::Complete]);
    }

    #[test]
    fn cancel_when_idle_is_noop() {
        let mut tw = typewriter(3);
        assert!(!tw.cancel());
        assert!(!tw.cancel());
        assert!(tw.tick().is_empty());
    }

    #[test]
    fn cancel_keeps_visible_and_skips_callback() {
        let mut tw = typewriter(3);
        let (count, cb) = counter();
        tw.restart("abc", Some(cb));
        tw.tick();
        assert!(tw.cancel());
        assert!(tw.tick().is_empty());
        assert_eq!(tw.visible().plain_text(), "a");
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn inline_markup_becomes_segments() {
        let mut tw = typewriter(0);
        tw.restart("run ```go()``` now\\nok", None);
        run_to_idle(&mut tw);
        assert_eq!(tw.visible().to_html(), "run <code>go()</code> now<br>ok");
    }

    #[test]
    fn fence_toggles_do_not_cost_a_tick() {
        let mut tw = typewriter(0);
        tw.restart("```a", None);
        let events = tw.tick();
        assert_eq!(
            events,
            vec![
                RenderEvent::Reveal(Reveal::CodeOpen),
                RenderEvent::Reveal(Reveal::Char('a')),
                RenderEvent::Complete,
            ]
        );
    }

    #[test]
    fn append_continues_open_code_span() {
        let mut tw = typewriter(0);
        tw.restart("```ab", None);
        run_to_idle(&mut tw);
        tw.append("c```d", None);
        run_to_idle(&mut tw);
        assert_eq!(tw.visible().to_html(), "<code>abc</code>d");
    }
}
