//! Read-only view of the matcher state for tests and debugging tools.
//!
//! Only compiled for unit tests or with the `diagnostics` cargo feature.

use crate::input::pressed::{ButtonSet, KeySet};
use crate::input::shortcut::ShortcutId;

use super::ShortcutMatcher;

/// Borrowed snapshot of the matcher's dynamic state.
pub struct MatcherDiagnostics<'a> {
    matcher: &'a ShortcutMatcher,
}

impl ShortcutMatcher {
    pub fn diagnostics(&self) -> MatcherDiagnostics<'_> {
        MatcherDiagnostics { matcher: self }
    }
}

impl MatcherDiagnostics<'_> {
    /// Stroke shortcuts whose modifiers match, in election order.
    pub fn ready_shortcuts(&self) -> Vec<ShortcutId> {
        self.matcher
            .ready_shortcuts
            .iter()
            .map(|&index| ShortcutId::Stroke(index))
            .collect()
    }

    pub fn ready_shortcut(&self) -> Option<ShortcutId> {
        self.matcher.ready_shortcut.map(ShortcutId::Stroke)
    }

    pub fn running_shortcut(&self) -> Option<ShortcutId> {
        self.matcher
            .running
            .map(|running| ShortcutId::Stroke(running.shortcut))
    }

    pub fn pressed_keys(&self) -> &KeySet {
        &self.matcher.keys
    }

    pub fn pressed_buttons(&self) -> &ButtonSet {
        &self.matcher.buttons
    }

    pub fn is_suppressed(&self) -> bool {
        self.matcher.suppressed
    }
}
