//! Shortcut descriptors.
//!
//! Shortcuts are immutable predicates over the held keys and buttons plus a
//! priority. Two kinds exist:
//!
//! - [`StrokeShortcut`]: governs a durable action that runs while its
//!   button set stays pressed (Idle -> Ready -> Running).
//! - [`SingleActionShortcut`]: fires an action once per trigger event.

use super::action::ActionId;
use super::events::{Key, MouseButton, WheelAction};
use super::pressed::{ButtonSet, KeySet};
use std::cmp::Ordering;
use std::fmt;

/// Identity of a registered shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutId {
    Stroke(usize),
    Single(usize),
}

/// The event that fires a single-action shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Key(Key),
    Button(MouseButton),
    Wheel(WheelAction),
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Key(key) => write!(f, "{key}"),
            Trigger::Button(button) => write!(f, "{button}"),
            Trigger::Wheel(wheel) => write!(f, "{wheel}"),
        }
    }
}

/// Shortcut firing an atomic action once per trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleActionShortcut {
    pub action: ActionId,
    pub mode: u32,
    pub priority: i32,
    /// Keys that must be held, exactly, when the trigger arrives
    pub keys: KeySet,
    /// Buttons that must be held, exactly, when the trigger arrives
    pub buttons: ButtonSet,
    pub trigger: Trigger,
}

impl SingleActionShortcut {
    pub fn new(action: ActionId, keys: KeySet, trigger: Trigger) -> Self {
        Self {
            action,
            mode: 0,
            priority: 0,
            keys,
            buttons: ButtonSet::new(),
            trigger,
        }
    }

    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_buttons(mut self, buttons: ButtonSet) -> Self {
        self.buttons = buttons;
        self
    }

    /// Exact match against the state held *before* the trigger event.
    pub fn matches(&self, keys: &KeySet, buttons: &ButtonSet, trigger: Trigger) -> bool {
        self.trigger == trigger && self.keys == *keys && self.buttons == *buttons
    }
}

impl fmt::Display for SingleActionShortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in self.keys.iter() {
            write!(f, "{key}+")?;
        }
        for button in self.buttons.iter() {
            write!(f, "{button}+")?;
        }
        write!(f, "{}", self.trigger)
    }
}

/// Shortcut governing a durable stroke action.
///
/// The stroke is ready while `keys` are held and all but one of `buttons`
/// are pressed; pressing the last button begins it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrokeShortcut {
    pub action: ActionId,
    pub mode: u32,
    pub priority: i32,
    pub keys: KeySet,
    pub buttons: ButtonSet,
}

impl StrokeShortcut {
    pub fn new(action: ActionId, keys: KeySet, buttons: ButtonSet) -> Self {
        Self {
            action,
            mode: 0,
            priority: 0,
            keys,
            buttons,
        }
    }

    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Modifier predicate: exact keys held and one button short of the set.
    pub fn match_ready(&self, keys: &KeySet, buttons: &ButtonSet) -> bool {
        self.keys == *keys
            && buttons.len() + 1 == self.buttons.len()
            && buttons.is_subset(&self.buttons)
    }

    /// Whether pressing `button` on top of `buttons` completes the stroke.
    pub fn match_begin(&self, buttons: &ButtonSet, button: MouseButton) -> bool {
        buttons.completes_with(button, &self.buttons)
    }

    /// Whether releasing `button` terminates the running stroke.
    pub fn match_end(&self, button: MouseButton) -> bool {
        self.buttons.contains(button)
    }
}

impl fmt::Display for StrokeShortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in self.keys.iter() {
            write!(f, "{key}+")?;
        }
        write!(f, "{}", self.buttons)
    }
}

/// Election order shared by both shortcut kinds: higher priority first,
/// then the later registration.
pub(crate) fn election_order(a: (i32, usize), b: (i32, usize)) -> Ordering {
    b.0.cmp(&a.0).then(b.1.cmp(&a.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(items: &[Key]) -> KeySet {
        items.iter().copied().collect()
    }

    fn buttons(items: &[MouseButton]) -> ButtonSet {
        items.iter().copied().collect()
    }

    #[test]
    fn stroke_is_ready_one_button_short() {
        let shortcut = StrokeShortcut::new(
            ActionId(0),
            keys(&[Key::Space]),
            buttons(&[MouseButton::Left]),
        );
        assert!(shortcut.match_ready(&keys(&[Key::Space]), &ButtonSet::new()));
        assert!(!shortcut.match_ready(&keys(&[Key::Space, Key::Ctrl]), &ButtonSet::new()));
        assert!(!shortcut.match_ready(&KeySet::new(), &ButtonSet::new()));
        assert!(!shortcut.match_ready(&keys(&[Key::Space]), &buttons(&[MouseButton::Left])));
    }

    #[test]
    fn two_button_stroke_ready_after_first_button() {
        let shortcut = StrokeShortcut::new(
            ActionId(0),
            KeySet::new(),
            buttons(&[MouseButton::Left, MouseButton::Right]),
        );
        assert!(!shortcut.match_ready(&KeySet::new(), &ButtonSet::new()));
        assert!(shortcut.match_ready(&KeySet::new(), &buttons(&[MouseButton::Right])));
        assert!(shortcut.match_begin(&buttons(&[MouseButton::Right]), MouseButton::Left));
        assert!(shortcut.match_end(MouseButton::Right));
        assert!(!shortcut.match_end(MouseButton::Middle));
    }

    #[test]
    fn single_action_requires_exact_state() {
        let shortcut = SingleActionShortcut::new(
            ActionId(1),
            keys(&[Key::Ctrl]),
            Trigger::Key(Key::Char('z')),
        );
        let trigger = Trigger::Key(Key::Char('z'));
        assert!(shortcut.matches(&keys(&[Key::Ctrl]), &ButtonSet::new(), trigger));
        assert!(!shortcut.matches(&keys(&[Key::Ctrl, Key::Shift]), &ButtonSet::new(), trigger));
        assert!(!shortcut.matches(
            &keys(&[Key::Ctrl]),
            &buttons(&[MouseButton::Left]),
            trigger
        ));
        assert!(!shortcut.matches(
            &keys(&[Key::Ctrl]),
            &ButtonSet::new(),
            Trigger::Key(Key::Char('y'))
        ));
    }

    #[test]
    fn election_prefers_priority_then_later_registration() {
        let mut candidates = vec![(1, 0), (5, 1), (5, 2), (0, 3)];
        candidates.sort_by(|a, b| election_order(*a, *b));
        assert_eq!(candidates, vec![(5, 2), (5, 1), (1, 0), (0, 3)]);
    }

    #[test]
    fn display_lists_keys_before_trigger() {
        let shortcut = SingleActionShortcut::new(
            ActionId(0),
            keys(&[Key::Ctrl]),
            Trigger::Wheel(WheelAction::Up),
        );
        assert_eq!(shortcut.to_string(), "Ctrl+WheelUp");
    }
}
