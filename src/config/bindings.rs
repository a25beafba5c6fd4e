//! Binding string parsing.
//!
//! Users write shortcuts in config.toml as `+`-separated tokens:
//! ```toml
//! [[stroke]]
//! action = "pan"
//! binding = "Space+Left"
//!
//! [[single]]
//! action = "zoom"
//! binding = "Ctrl+WheelUp"
//! ```
//! Tokens are keys (`Ctrl`, `Shift`, `Z`, `F10`, ...), mouse buttons
//! (`Left`, `Right`, `Middle`) or wheel ticks (`WheelUp`, ...). Order does
//! not matter except for single actions, whose trigger is the wheel token,
//! else the last button, else the last key.

use crate::input::{
    ActionId, ButtonSet, Key, KeySet, MouseButton, SingleActionShortcut, StrokeShortcut,
    Trigger, WheelAction,
};
use thiserror::Error;

/// Errors produced while parsing a binding string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindingError {
    #[error("Empty binding string")]
    Empty,

    #[error("Empty token in binding '{0}'")]
    EmptyToken(String),

    #[error("Unknown key, button or wheel token '{0}'")]
    UnknownToken(String),

    #[error("Token '{0}' appears more than once")]
    RepeatedToken(String),

    #[error("Stroke bindings need at least one mouse button")]
    MissingButton,

    #[error("Stroke bindings cannot use the wheel")]
    WheelInStroke,

    #[error("Only one wheel token is allowed per binding")]
    MultipleWheels,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Key(Key),
    Button(MouseButton),
    Wheel(WheelAction),
}

/// Splits a binding string into classified tokens.
/// Supports spaces around '+' (e.g., "Ctrl + Shift + W") and '+' itself as
/// the final key ("Ctrl++").
fn tokenize(s: &str) -> Result<Vec<Token>, BindingError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(BindingError::Empty);
    }

    // Normalize by removing spaces around '+'
    let normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");

    let (body, plus_key) = if normalized == "+" {
        ("", true)
    } else if let Some(body) = normalized.strip_suffix("++") {
        (body, true)
    } else {
        (normalized.as_str(), false)
    };

    let mut raw: Vec<&str> = if body.is_empty() {
        Vec::new()
    } else {
        body.split('+').collect()
    };
    if plus_key {
        raw.push("+");
    }

    let mut tokens = Vec::with_capacity(raw.len());
    for part in raw {
        if part.trim().is_empty() {
            return Err(BindingError::EmptyToken(s.to_string()));
        }
        let token = classify(part)?;
        if tokens.contains(&token) {
            return Err(BindingError::RepeatedToken(part.to_string()));
        }
        tokens.push(token);
    }
    Ok(tokens)
}

fn classify(part: &str) -> Result<Token, BindingError> {
    if let Some(button) = MouseButton::from_name(part) {
        return Ok(Token::Button(button));
    }
    if part.trim().to_lowercase().starts_with("wheel") {
        return WheelAction::from_name(part)
            .map(Token::Wheel)
            .ok_or_else(|| BindingError::UnknownToken(part.to_string()));
    }
    Key::from_name(part)
        .map(Token::Key)
        .ok_or_else(|| BindingError::UnknownToken(part.to_string()))
}

/// Parsed stroke binding: modifier keys plus the button set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StrokeBinding {
    pub keys: KeySet,
    pub buttons: ButtonSet,
}

impl StrokeBinding {
    /// Parse a binding string like "Shift+Space+Left".
    pub fn parse(s: &str) -> Result<Self, BindingError> {
        let mut keys = KeySet::new();
        let mut buttons = ButtonSet::new();
        for token in tokenize(s)? {
            match token {
                Token::Key(key) => {
                    keys.press(key);
                }
                Token::Button(button) => {
                    buttons.press(button);
                }
                Token::Wheel(_) => return Err(BindingError::WheelInStroke),
            }
        }
        if buttons.is_empty() {
            return Err(BindingError::MissingButton);
        }
        Ok(Self { keys, buttons })
    }

    pub fn into_shortcut(self, action: ActionId, mode: u32, priority: i32) -> StrokeShortcut {
        StrokeShortcut::new(action, self.keys, self.buttons)
            .with_mode(mode)
            .with_priority(priority)
    }
}

/// Parsed single-action binding: held keys and buttons plus the trigger.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SingleBinding {
    pub keys: KeySet,
    pub buttons: ButtonSet,
    pub trigger: Trigger,
}

impl SingleBinding {
    /// Parse a binding string like "Ctrl+Z", "Ctrl+WheelUp" or "Alt+Right".
    pub fn parse(s: &str) -> Result<Self, BindingError> {
        let tokens = tokenize(s)?;

        let wheels: Vec<WheelAction> = tokens
            .iter()
            .filter_map(|token| match token {
                Token::Wheel(wheel) => Some(*wheel),
                _ => None,
            })
            .collect();
        if wheels.len() > 1 {
            return Err(BindingError::MultipleWheels);
        }

        let trigger_pos = if wheels.is_empty() {
            tokens
                .iter()
                .rposition(|token| matches!(token, Token::Button(_)))
                .unwrap_or(tokens.len() - 1)
        } else {
            tokens
                .iter()
                .position(|token| matches!(token, Token::Wheel(_)))
                .unwrap_or(tokens.len() - 1)
        };

        let mut keys = KeySet::new();
        let mut buttons = ButtonSet::new();
        let mut trigger = None;
        for (pos, token) in tokens.into_iter().enumerate() {
            match (pos == trigger_pos, token) {
                (true, Token::Key(key)) => trigger = Some(Trigger::Key(key)),
                (true, Token::Button(button)) => trigger = Some(Trigger::Button(button)),
                (_, Token::Wheel(wheel)) => trigger = Some(Trigger::Wheel(wheel)),
                (false, Token::Key(key)) => {
                    keys.press(key);
                }
                (false, Token::Button(button)) => {
                    buttons.press(button);
                }
            }
        }

        // tokenize() never returns an empty list, so a trigger was assigned.
        let trigger = trigger.ok_or(BindingError::Empty)?;
        Ok(Self {
            keys,
            buttons,
            trigger,
        })
    }

    pub fn into_shortcut(self, action: ActionId, mode: u32, priority: i32) -> SingleActionShortcut {
        SingleActionShortcut::new(action, self.keys, self.trigger)
            .with_buttons(self.buttons)
            .with_mode(mode)
            .with_priority(priority)
    }
}
