//! Input arbitration between shortcuts and actions.
//!
//! This module turns a stream of key, button, motion and wheel events into
//! action lifecycle calls. It tracks the held keys and buttons, stages the
//! stroke shortcut that would start next, runs at most one stroke at a time
//! and fires single-action shortcuts alongside.

pub mod action;
pub mod events;
pub mod matcher;
pub mod pressed;
pub mod shortcut;

// Re-export commonly used types at module level
pub use action::{ActionId, CursorShape, CursorSink, InputAction};
pub use events::{InputEvent, Key, MouseButton, PointerEvent, WheelAction};
pub use matcher::{MatcherError, ShortcutMatcher};
pub use pressed::{ButtonSet, KeySet};
pub use shortcut::{ShortcutId, SingleActionShortcut, StrokeShortcut, Trigger};

#[cfg(any(test, feature = "diagnostics"))]
pub use matcher::MatcherDiagnostics;
