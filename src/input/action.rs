//! Action capability contract.
//!
//! An action is whatever the host wants to run when a shortcut matches:
//! panning the view, painting a stroke, zooming one step. The matcher only
//! decides *when* an action may run; what it does is up to the implementor.

use super::events::InputEvent;

/// Handle of an action registered with the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(pub(crate) usize);

impl ActionId {
    /// Registration index of the action.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Cursor hint an action shows while it is ready to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorShape {
    Arrow,
    Crosshair,
    OpenHand,
    ClosedHand,
    Rotate,
    ZoomIn,
    ZoomOut,
    Pointer,
}

/// Host surface that displays cursor hints.
///
/// The matcher forwards the ready action's hint through this trait and never
/// touches presentation state itself.
pub trait CursorSink {
    /// Shows `shape` until the next call.
    fn show(&mut self, shape: CursorShape);

    /// Restores the host's default cursor.
    fn clear(&mut self);
}

/// A long-running or instantaneous action driven by the matcher.
///
/// `mode` is the index the shortcut was registered with, so one action can
/// serve several bindings (zoom in / zoom out on the same action).
///
/// Callbacks run synchronously on the input thread and must return promptly.
/// They only see events; they cannot reach back into the matcher.
pub trait InputAction {
    /// Human-readable name used in logs.
    fn name(&self) -> &str;

    /// Called when the action starts. For single actions this is followed
    /// immediately by [`InputAction::end`].
    fn begin(&mut self, _mode: u32, _event: &InputEvent) {}

    /// Continuation input (motion, extra buttons) while running.
    fn input_event(&mut self, _event: &InputEvent) {}

    /// Called when the action stops. `event` is `None` when the matcher was
    /// reset rather than the trigger being released.
    fn end(&mut self, _event: Option<&InputEvent>) {}

    /// Cursor to show while a shortcut of this action is ready.
    fn cursor(&self, _mode: u32) -> Option<CursorShape> {
        None
    }

    /// A shortcut of this action became the ready shortcut.
    fn activate(&mut self, _mode: u32) {}

    /// A shortcut of this action stopped being ready (or finished running).
    fn deactivate(&mut self, _mode: u32) {}

    /// Whether presses of buttons outside the shortcut are forwarded while
    /// this action runs.
    fn accepts_extra_buttons(&self) -> bool {
        false
    }
}
