//! Generic input event types for cross-backend compatibility.

use std::fmt;

/// Generic key representation for cross-backend compatibility.
///
/// Backend implementations map their native key codes to these generic
/// key values. Modifiers are ordinary keys here: a shortcut lists the exact
/// set of keys that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Shift modifier
    Shift,
    /// Ctrl modifier
    Ctrl,
    /// Alt modifier
    Alt,
    /// Meta / Super / Command modifier
    Meta,
    /// Space bar
    Space,
    /// Tab key
    Tab,
    /// Escape key
    Escape,
    /// Return/Enter key
    Return,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Function keys F1..F12
    F(u8),
    /// Regular character key (a-z, 0-9, symbols), stored lowercase
    Char(char),
}

impl Key {
    /// Builds a character key, folding ASCII letters to lowercase.
    pub fn char(c: char) -> Self {
        Key::Char(c.to_ascii_lowercase())
    }

    /// Parses a key name as used in bindings and event scripts.
    ///
    /// Matching is case-insensitive. Single characters map to [`Key::Char`].
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        let key = match lower.as_str() {
            "shift" => Key::Shift,
            "ctrl" | "control" => Key::Ctrl,
            "alt" => Key::Alt,
            "meta" | "super" | "cmd" => Key::Meta,
            "space" => Key::Space,
            "tab" => Key::Tab,
            "escape" | "esc" => Key::Escape,
            "return" | "enter" => Key::Return,
            "backspace" => Key::Backspace,
            "delete" | "del" => Key::Delete,
            "plus" => Key::Char('+'),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    (Some('f'), Some(_)) => {
                        let n: u8 = other[1..].parse().ok()?;
                        if !(1..=12).contains(&n) {
                            return None;
                        }
                        Key::F(n)
                    }
                    _ => return None,
                }
            }
        };
        Some(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char('+') => f.write_str("Plus"),
            Key::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
            Key::Shift => f.write_str("Shift"),
            Key::Ctrl => f.write_str("Ctrl"),
            Key::Alt => f.write_str("Alt"),
            Key::Meta => f.write_str("Meta"),
            Key::Space => f.write_str("Space"),
            Key::Tab => f.write_str("Tab"),
            Key::Escape => f.write_str("Escape"),
            Key::Return => f.write_str("Return"),
            Key::Backspace => f.write_str("Backspace"),
            Key::Delete => f.write_str("Delete"),
            Key::F(n) => write!(f, "F{n}"),
        }
    }
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MouseButton {
    /// Left mouse button (primary stroke button)
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

impl MouseButton {
    /// Parses a button name (`Left`, `LMB`, `Right`, ...), case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "left" | "lmb" => Some(MouseButton::Left),
            "right" | "rmb" => Some(MouseButton::Right),
            "middle" | "mmb" => Some(MouseButton::Middle),
            _ => None,
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MouseButton::Left => "Left",
            MouseButton::Right => "Right",
            MouseButton::Middle => "Middle",
        })
    }
}

/// Direction of a single wheel tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelAction {
    Up,
    Down,
    Left,
    Right,
}

impl WheelAction {
    /// Parses `up`/`down`/`left`/`right`, optionally prefixed with `wheel`.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        let direction = lower.strip_prefix("wheel").unwrap_or(&lower);
        match direction {
            "up" => Some(WheelAction::Up),
            "down" => Some(WheelAction::Down),
            "left" => Some(WheelAction::Left),
            "right" => Some(WheelAction::Right),
            _ => None,
        }
    }

    /// Derives the tick direction from a scroll delta, preferring the vertical axis.
    pub fn from_delta(dx: f64, dy: f64) -> Option<Self> {
        if dy < 0.0 {
            Some(WheelAction::Up)
        } else if dy > 0.0 {
            Some(WheelAction::Down)
        } else if dx < 0.0 {
            Some(WheelAction::Left)
        } else if dx > 0.0 {
            Some(WheelAction::Right)
        } else {
            None
        }
    }
}

impl fmt::Display for WheelAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WheelAction::Up => "WheelUp",
            WheelAction::Down => "WheelDown",
            WheelAction::Left => "WheelLeft",
            WheelAction::Right => "WheelRight",
        })
    }
}

/// Pointer position attached to button, motion and wheel events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    /// Surface-local X coordinate
    pub x: f64,
    /// Surface-local Y coordinate
    pub y: f64,
}

impl PointerEvent {
    pub fn at(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The event handed to an action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyPress(Key),
    KeyRelease(Key),
    ButtonPress {
        button: MouseButton,
        pointer: PointerEvent,
    },
    ButtonRelease {
        button: MouseButton,
        pointer: PointerEvent,
    },
    Motion(PointerEvent),
    Wheel {
        action: WheelAction,
        pointer: PointerEvent,
    },
}

impl InputEvent {
    /// Pointer position carried by the event, if any.
    pub fn pointer(&self) -> Option<PointerEvent> {
        match self {
            InputEvent::KeyPress(_) | InputEvent::KeyRelease(_) => None,
            InputEvent::ButtonPress { pointer, .. }
            | InputEvent::ButtonRelease { pointer, .. }
            | InputEvent::Wheel { pointer, .. } => Some(*pointer),
            InputEvent::Motion(pointer) => Some(*pointer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_are_case_insensitive() {
        assert_eq!(Key::from_name("SHIFT"), Some(Key::Shift));
        assert_eq!(Key::from_name("control"), Some(Key::Ctrl));
        assert_eq!(Key::from_name("Z"), Some(Key::Char('z')));
        assert_eq!(Key::from_name("f10"), Some(Key::F(10)));
        assert_eq!(Key::from_name("F13"), None);
        assert_eq!(Key::from_name("banana"), None);
    }

    #[test]
    fn wheel_names_accept_prefix() {
        assert_eq!(WheelAction::from_name("WheelUp"), Some(WheelAction::Up));
        assert_eq!(WheelAction::from_name("down"), Some(WheelAction::Down));
        assert_eq!(WheelAction::from_name("sideways"), None);
    }

    #[test]
    fn wheel_direction_prefers_vertical_delta() {
        assert_eq!(WheelAction::from_delta(3.0, -1.0), Some(WheelAction::Up));
        assert_eq!(WheelAction::from_delta(-2.0, 0.0), Some(WheelAction::Left));
        assert_eq!(WheelAction::from_delta(0.0, 0.0), None);
    }

    #[test]
    fn display_round_trips_through_names() {
        for key in [Key::Shift, Key::Space, Key::char('Q'), Key::F(4), Key::Char('+')] {
            assert_eq!(Key::from_name(&key.to_string()), Some(key));
        }
    }
}
