//! Drives a matcher built from a profile with recording actions.

use super::script::{ScriptLine, Step};
use crate::config::{Config, ProfileError};
use crate::input::{
    CursorShape, CursorSink, InputAction, InputEvent, PointerEvent, ShortcutMatcher,
};
use log::debug;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Calls observed since the last step, shared by every recording action.
type Transcript = Rc<RefCell<Vec<String>>>;

fn record(transcript: &Transcript, entry: String) {
    debug!("{entry}");
    transcript.borrow_mut().push(entry);
}

fn describe(event: &InputEvent) -> String {
    let what = match event {
        InputEvent::KeyPress(key) => format!("key {key} down"),
        InputEvent::KeyRelease(key) => format!("key {key} up"),
        InputEvent::ButtonPress { button, .. } => format!("{button} down"),
        InputEvent::ButtonRelease { button, .. } => format!("{button} up"),
        InputEvent::Motion(_) => "motion".to_string(),
        InputEvent::Wheel { action, .. } => action.to_string(),
    };
    match event.pointer() {
        Some(pointer) => format!("{what} at {},{}", pointer.x, pointer.y),
        None => what,
    }
}

/// Action that writes every lifecycle call into the transcript.
struct RecordingAction {
    name: String,
    cursor: Option<CursorShape>,
    accepts_extra_buttons: bool,
    transcript: Transcript,
}

impl InputAction for RecordingAction {
    fn name(&self) -> &str {
        &self.name
    }

    fn begin(&mut self, mode: u32, event: &InputEvent) {
        let entry = format!("{}: begin (mode {mode}, {})", self.name, describe(event));
        record(&self.transcript, entry);
    }

    fn input_event(&mut self, event: &InputEvent) {
        record(&self.transcript, format!("{}: {}", self.name, describe(event)));
    }

    fn end(&mut self, event: Option<&InputEvent>) {
        let entry = match event {
            Some(event) => format!("{}: end ({})", self.name, describe(event)),
            None => format!("{}: end (forced)", self.name),
        };
        record(&self.transcript, entry);
    }

    fn cursor(&self, _mode: u32) -> Option<CursorShape> {
        self.cursor
    }

    fn activate(&mut self, mode: u32) {
        record(&self.transcript, format!("{}: ready (mode {mode})", self.name));
    }

    fn deactivate(&mut self, mode: u32) {
        record(&self.transcript, format!("{}: idle (mode {mode})", self.name));
    }

    fn accepts_extra_buttons(&self) -> bool {
        self.accepts_extra_buttons
    }
}

struct TranscriptCursor(Transcript);

impl CursorSink for TranscriptCursor {
    fn show(&mut self, shape: CursorShape) {
        record(&self.0, format!("cursor: {shape:?}"));
    }

    fn clear(&mut self) {
        record(&self.0, "cursor: default".to_string());
    }
}

/// What one script step did.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub line: usize,
    pub step: Step,
    /// Whether the matcher ate the event
    pub consumed: bool,
    /// Action and cursor calls the step caused, in order
    pub calls: Vec<String>,
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.consumed { "consumed" } else { "passed" };
        write!(f, "line {}: {} -> {verdict}", self.line, self.step)?;
        for call in &self.calls {
            write!(f, "; {call}")?;
        }
        Ok(())
    }
}

/// A matcher wired to recording actions, fed one script step at a time.
pub struct Replay {
    matcher: ShortcutMatcher,
    transcript: Transcript,
    pointer: PointerEvent,
}

impl Replay {
    /// Builds the matcher from `config`, one recording action per declared
    /// action.
    pub fn from_config(config: &Config) -> Result<Self, ProfileError> {
        let transcript = Transcript::default();
        let mut matcher = config.build_matcher(|action| {
            Box::new(RecordingAction {
                name: action.name.clone(),
                cursor: action.cursor.map(|spec| spec.to_shape()),
                accepts_extra_buttons: action.accepts_extra_buttons,
                transcript: Rc::clone(&transcript),
            })
        })?;
        matcher.set_cursor_sink(Box::new(TranscriptCursor(Rc::clone(&transcript))));
        // Calls made while installing the profile are not part of any step.
        transcript.borrow_mut().clear();

        Ok(Self {
            matcher,
            transcript,
            pointer: PointerEvent::default(),
        })
    }

    pub fn matcher(&self) -> &ShortcutMatcher {
        &self.matcher
    }

    /// Feeds one step to the matcher. Returns whether it was consumed.
    pub fn apply(&mut self, step: Step) -> bool {
        match step {
            Step::KeyPress(key) => self.matcher.key_pressed(key),
            Step::KeyRelease(key) => self.matcher.key_released(key),
            Step::Press(button, at) => {
                self.pointer = at.unwrap_or(self.pointer);
                self.matcher.button_pressed(button, self.pointer)
            }
            Step::Release(button, at) => {
                self.pointer = at.unwrap_or(self.pointer);
                self.matcher.button_released(button, self.pointer)
            }
            Step::Move(pointer) => {
                self.pointer = pointer;
                self.matcher.mouse_moved(pointer)
            }
            Step::Wheel(wheel) => self.matcher.wheel_event(wheel, self.pointer),
            Step::Reset => {
                self.matcher.reset();
                false
            }
            Step::Suppress(value) => {
                self.matcher.suppress_all_actions(value);
                false
            }
        }
    }

    /// Replays a parsed script, reporting the calls each step caused.
    pub fn run(&mut self, script: &[ScriptLine]) -> Vec<StepReport> {
        script
            .iter()
            .map(|line| {
                let consumed = self.apply(line.step);
                StepReport {
                    line: line.line,
                    step: line.step,
                    consumed,
                    calls: std::mem::take(&mut *self.transcript.borrow_mut()),
                }
            })
            .collect()
    }
}
