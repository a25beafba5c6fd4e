//! Event script parsing.
//!
//! One step per line, blank lines and `#` comments ignored:
//! ```text
//! key-press space
//! press left 10 20
//! move 30 40
//! release left
//! wheel up
//! wheel 0 -1.5
//! key-press #   # a bare '#' after key-press is the key itself
//! suppress on
//! reset
//! ```

use crate::input::{Key, MouseButton, PointerEvent, WheelAction};
use std::fmt;
use thiserror::Error;

/// Errors produced while parsing an event script.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: invalid {what} '{value}'")]
    BadArgument {
        line: usize,
        what: &'static str,
        value: String,
    },

    #[error("line {line}: '{command}' expects {expected}")]
    Arity {
        line: usize,
        command: String,
        expected: &'static str,
    },
}

impl ScriptError {
    /// 1-based line the error was found on.
    pub fn line(&self) -> usize {
        match self {
            ScriptError::UnknownCommand { line, .. }
            | ScriptError::BadArgument { line, .. }
            | ScriptError::Arity { line, .. } => *line,
        }
    }
}

/// One input event (or matcher control call) to replay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    KeyPress(Key),
    KeyRelease(Key),
    /// Button press, optionally at a new pointer position.
    Press(MouseButton, Option<PointerEvent>),
    Release(MouseButton, Option<PointerEvent>),
    Move(PointerEvent),
    Wheel(WheelAction),
    Reset,
    Suppress(bool),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::KeyPress(key) => write!(f, "key-press {key}"),
            Step::KeyRelease(key) => write!(f, "key-release {key}"),
            Step::Press(button, _) => write!(f, "press {button}"),
            Step::Release(button, _) => write!(f, "release {button}"),
            Step::Move(pointer) => write!(f, "move {} {}", pointer.x, pointer.y),
            Step::Wheel(wheel) => write!(f, "wheel {wheel}"),
            Step::Reset => write!(f, "reset"),
            Step::Suppress(true) => write!(f, "suppress on"),
            Step::Suppress(false) => write!(f, "suppress off"),
        }
    }
}

/// A parsed step with the line it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub step: Step,
}

/// Parses a whole script. Stops at the first malformed line.
pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut steps = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let words: Vec<&str> = raw.split_whitespace().collect();
        let words = &words[..comment_start(&words)];
        if words.is_empty() {
            continue;
        }
        let step = parse_step(line, words)?;
        steps.push(ScriptLine { line, step });
    }
    Ok(steps)
}

/// Index of the first word that opens a comment.
///
/// A word starting with `#` opens a comment, except a bare `#` given as the
/// key of `key-press`/`key-release`.
fn comment_start(words: &[&str]) -> usize {
    let takes_key = words.first().is_some_and(|command| {
        matches!(command.to_lowercase().as_str(), "key-press" | "key-release")
    });
    words
        .iter()
        .enumerate()
        .position(|(pos, word)| {
            let key_arg = takes_key && pos == 1 && *word == "#";
            word.starts_with('#') && !key_arg
        })
        .unwrap_or(words.len())
}

fn parse_step(line: usize, words: &[&str]) -> Result<Step, ScriptError> {
    let command = words.first().copied().unwrap_or_default().to_lowercase();
    let args = words.get(1..).unwrap_or_default();

    let arity = |expected: &'static str| ScriptError::Arity {
        line,
        command: command.clone(),
        expected,
    };

    match command.as_str() {
        "key-press" | "key-release" => {
            let [name] = args[..] else {
                return Err(arity("one key name"));
            };
            let key = Key::from_name(name).ok_or_else(|| bad(line, "key", name))?;
            Ok(if command == "key-press" {
                Step::KeyPress(key)
            } else {
                Step::KeyRelease(key)
            })
        }
        "press" | "release" => {
            let (name, pointer) = match args[..] {
                [name] => (name, None),
                [name, x, y] => (name, Some(parse_point(line, x, y)?)),
                _ => return Err(arity("a button and an optional 'x y' position")),
            };
            let button = MouseButton::from_name(name).ok_or_else(|| bad(line, "button", name))?;
            Ok(if command == "press" {
                Step::Press(button, pointer)
            } else {
                Step::Release(button, pointer)
            })
        }
        "move" => {
            let [x, y] = args[..] else {
                return Err(arity("an 'x y' position"));
            };
            Ok(Step::Move(parse_point(line, x, y)?))
        }
        "wheel" => match args[..] {
            [direction] => WheelAction::from_name(direction)
                .map(Step::Wheel)
                .ok_or_else(|| bad(line, "wheel direction", direction)),
            [dx, dy] => {
                let delta = parse_point(line, dx, dy)?;
                WheelAction::from_delta(delta.x, delta.y)
                    .map(Step::Wheel)
                    .ok_or_else(|| bad(line, "wheel delta", &format!("{dx} {dy}")))
            }
            _ => Err(arity("a direction (up, down, left, right) or a 'dx dy' delta")),
        },
        "reset" => {
            if !args.is_empty() {
                return Err(arity("no arguments"));
            }
            Ok(Step::Reset)
        }
        "suppress" => {
            let [value] = args[..] else {
                return Err(arity("on or off"));
            };
            match value.to_lowercase().as_str() {
                "on" | "true" => Ok(Step::Suppress(true)),
                "off" | "false" => Ok(Step::Suppress(false)),
                _ => Err(bad(line, "suppress value", value)),
            }
        }
        _ => Err(ScriptError::UnknownCommand {
            line,
            command: command.clone(),
        }),
    }
}

fn parse_point(line: usize, x: &str, y: &str) -> Result<PointerEvent, ScriptError> {
    let coord = |value: &str| {
        value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| bad(line, "coordinate", value))
    };
    Ok(PointerEvent::at(coord(x)?, coord(y)?))
}

fn bad(line: usize, what: &'static str, value: &str) -> ScriptError {
    ScriptError::BadArgument {
        line,
        what,
        value: value.to_string(),
    }
}
