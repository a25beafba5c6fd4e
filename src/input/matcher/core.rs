//! Matcher state and shortcut registration.

use crate::input::action::{ActionId, CursorShape, CursorSink, InputAction};
use crate::input::events::MouseButton;
use crate::input::pressed::{ButtonSet, KeySet};
use crate::input::shortcut::{ShortcutId, SingleActionShortcut, StrokeShortcut};
use log::debug;
use std::fmt;
use thiserror::Error;

/// Errors raised while registering shortcuts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatcherError {
    #[error("Shortcut refers to unknown action #{0}")]
    UnknownAction(usize),

    #[error("Stroke shortcut needs at least one mouse button")]
    EmptyStrokeButtons,
}

/// The stroke currently owning pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct RunningStroke {
    /// Index into `stroke_shortcuts`
    pub(super) shortcut: usize,
    /// Button whose press started the stroke
    pub(super) trigger: MouseButton,
}

/// Arbitrates input events between registered shortcuts.
///
/// Stroke actions move through Idle -> Ready -> Running:
///
/// - *Ready*: the shortcut's keys are held and only its last button is
///   missing. Among all such candidates the one with the highest priority
///   (later registration on ties) is elected and may show a cursor hint.
/// - *Running*: the last button was pressed; the action receives all
///   pointer input until one of its buttons is released.
///
/// Single-action shortcuts fire once on a key press, button press or wheel
/// tick and never touch the ready/running state. At most one stroke runs at
/// any time.
pub struct ShortcutMatcher {
    pub(super) actions: Vec<Box<dyn InputAction>>,
    pub(super) stroke_shortcuts: Vec<StrokeShortcut>,
    pub(super) single_shortcuts: Vec<SingleActionShortcut>,
    /// Keys currently held
    pub(super) keys: KeySet,
    /// Buttons currently held
    pub(super) buttons: ButtonSet,
    /// Stroke shortcuts whose modifiers match, in election order
    pub(super) ready_shortcuts: Vec<usize>,
    /// Elected head of `ready_shortcuts`, absent while a stroke runs
    pub(super) ready_shortcut: Option<usize>,
    pub(super) running: Option<RunningStroke>,
    /// Blocks new elections and single actions while set
    pub(super) suppressed: bool,
    pub(super) cursor_sink: Option<Box<dyn CursorSink>>,
    pub(super) shown_cursor: Option<CursorShape>,
}

impl fmt::Debug for ShortcutMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutMatcher")
            .field("actions", &self.actions.len())
            .field("stroke_shortcuts", &self.stroke_shortcuts.len())
            .field("single_shortcuts", &self.single_shortcuts.len())
            .field("keys", &self.keys)
            .field("buttons", &self.buttons)
            .field("ready_shortcut", &self.ready_shortcut)
            .field("running", &self.running)
            .field("suppressed", &self.suppressed)
            .finish_non_exhaustive()
    }
}

impl Default for ShortcutMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutMatcher {
    /// Creates a matcher with no actions or shortcuts.
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            stroke_shortcuts: Vec::new(),
            single_shortcuts: Vec::new(),
            keys: KeySet::new(),
            buttons: ButtonSet::new(),
            ready_shortcuts: Vec::new(),
            ready_shortcut: None,
            running: None,
            suppressed: false,
            cursor_sink: None,
            shown_cursor: None,
        }
    }

    /// Registers an action and returns its handle for use in shortcuts.
    pub fn add_action(&mut self, action: Box<dyn InputAction>) -> ActionId {
        let id = ActionId(self.actions.len());
        debug!("Registered action '{}' as #{}", action.name(), id.0);
        self.actions.push(action);
        id
    }

    /// Registers a stroke shortcut.
    ///
    /// Takes effect at the next state recomputation; call during setup.
    pub fn add_stroke_shortcut(
        &mut self,
        shortcut: StrokeShortcut,
    ) -> Result<ShortcutId, MatcherError> {
        self.check_action(shortcut.action)?;
        if shortcut.buttons.is_empty() {
            return Err(MatcherError::EmptyStrokeButtons);
        }
        debug!(
            "Stroke shortcut {} -> '{}' (priority {})",
            shortcut,
            self.actions[shortcut.action.0].name(),
            shortcut.priority
        );
        self.stroke_shortcuts.push(shortcut);
        Ok(ShortcutId::Stroke(self.stroke_shortcuts.len() - 1))
    }

    /// Registers a single-action shortcut.
    pub fn add_single_action_shortcut(
        &mut self,
        shortcut: SingleActionShortcut,
    ) -> Result<ShortcutId, MatcherError> {
        self.check_action(shortcut.action)?;
        debug!(
            "Single-action shortcut {} -> '{}' (priority {})",
            shortcut,
            self.actions[shortcut.action.0].name(),
            shortcut.priority
        );
        self.single_shortcuts.push(shortcut);
        Ok(ShortcutId::Single(self.single_shortcuts.len() - 1))
    }

    fn check_action(&self, action: ActionId) -> Result<(), MatcherError> {
        if action.0 < self.actions.len() {
            Ok(())
        } else {
            Err(MatcherError::UnknownAction(action.0))
        }
    }

    /// Installs the host surface receiving cursor hints.
    ///
    /// A hint that is already active is replayed to the new sink.
    pub fn set_cursor_sink(&mut self, mut sink: Box<dyn CursorSink>) {
        if let Some(shape) = self.shown_cursor {
            sink.show(shape);
        }
        self.cursor_sink = Some(sink);
    }

    /// Cursor hint currently requested from the host, if any.
    pub fn ready_cursor(&self) -> Option<CursorShape> {
        self.shown_cursor
    }

    /// Whether a stroke action currently owns pointer input.
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Name of the action behind `id`, if registered.
    pub fn action_name(&self, id: ActionId) -> Option<&str> {
        self.actions.get(id.0).map(|action| action.name())
    }

    /// Disables the start of any actions.
    ///
    /// A stroke that is already running is *not* ended: it keeps receiving
    /// events and finishes when its button is released. While suppressed, no
    /// shortcut is shown as ready and no single action fires.
    pub fn suppress_all_actions(&mut self, value: bool) {
        if self.suppressed == value {
            return;
        }
        debug!(
            "Shortcut matcher {}",
            if value { "suppressed" } else { "resumed" }
        );
        self.suppressed = value;
        if self.running.is_none() {
            self.try_activate_ready_shortcut();
        }
    }

    /// Resets the internal state of the matcher.
    ///
    /// Call when the window lost focus and events may have been dropped. A
    /// running stroke is ended (with no event) so it can release whatever it
    /// acquired in `begin`. The suppression flag is left untouched.
    pub fn reset(&mut self) {
        if self.running.is_some() {
            debug!("Reset while a stroke is running; forcing it to end");
            self.end_running_shortcut(None);
        }
        if let Some(ready) = self.ready_shortcut.take() {
            self.deactivate_ready(ready);
        }
        self.keys.clear();
        self.buttons.clear();
        self.ready_shortcuts.clear();
    }

    pub(super) fn show_cursor(&mut self, shape: Option<CursorShape>) {
        if self.shown_cursor == shape {
            return;
        }
        self.shown_cursor = shape;
        if let Some(sink) = self.cursor_sink.as_mut() {
            match shape {
                Some(shape) => sink.show(shape),
                None => sink.clear(),
            }
        }
    }
}
