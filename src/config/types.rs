//! Configuration type definitions.

use super::enums::CursorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Matcher behaviour settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MatcherConfig {
    /// Start with every action suppressed until the host resumes input
    #[serde(default)]
    pub start_suppressed: bool,
}

/// An action that shortcuts can refer to by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ActionConfig {
    /// Name used by `[[stroke]]` and `[[single]]` entries
    pub name: String,

    /// Cursor shown while a stroke of this action is ready
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<CursorSpec>,

    /// Forward presses of unrelated buttons while the stroke runs
    #[serde(default)]
    pub accepts_extra_buttons: bool,
}

impl ActionConfig {
    pub fn new(name: &str, cursor: Option<CursorSpec>) -> Self {
        Self {
            name: name.to_string(),
            cursor,
            accepts_extra_buttons: false,
        }
    }
}

/// A durable stroke shortcut, e.g. `Space+Left` for panning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StrokeConfig {
    pub action: String,

    /// Keys and buttons, e.g. "Shift+Space+Left"
    pub binding: String,

    /// Higher wins when several strokes are ready (valid range: -1000 - 1000)
    #[serde(default)]
    pub priority: i32,

    /// Index passed to the action to tell its shortcuts apart
    #[serde(default)]
    pub mode: u32,
}

/// An instantaneous shortcut, e.g. `Ctrl+WheelUp` for one zoom step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SingleConfig {
    pub action: String,

    /// Held keys/buttons plus a trigger key, button or wheel tick
    pub binding: String,

    /// Higher wins when several shortcuts match (valid range: -1000 - 1000)
    #[serde(default)]
    pub priority: i32,

    /// Index passed to the action to tell its shortcuts apart
    #[serde(default)]
    pub mode: u32,
}

impl StrokeConfig {
    pub fn new(action: &str, binding: &str, priority: i32) -> Self {
        Self {
            action: action.to_string(),
            binding: binding.to_string(),
            priority,
            mode: 0,
        }
    }
}

impl SingleConfig {
    pub fn new(action: &str, binding: &str, mode: u32) -> Self {
        Self {
            action: action.to_string(),
            binding: binding.to_string(),
            priority: 0,
            mode,
        }
    }
}

// =============================================================================
// Built-in profile (used when the config file omits a section)
// =============================================================================

pub(super) fn default_actions() -> Vec<ActionConfig> {
    vec![
        ActionConfig {
            accepts_extra_buttons: true,
            ..ActionConfig::new("paint", Some(CursorSpec::Crosshair))
        },
        ActionConfig::new("pan", Some(CursorSpec::OpenHand)),
        ActionConfig::new("rotate", Some(CursorSpec::Rotate)),
        ActionConfig::new("zoom", Some(CursorSpec::ZoomIn)),
        ActionConfig::new("pick_color", Some(CursorSpec::Pointer)),
        ActionConfig::new("reset_view", None),
        ActionConfig::new("undo", None),
    ]
}

pub(super) fn default_strokes() -> Vec<StrokeConfig> {
    vec![
        StrokeConfig::new("paint", "Left", 0),
        StrokeConfig::new("pan", "Space+Left", 5),
        StrokeConfig::new("pan", "Middle", 5),
        StrokeConfig::new("rotate", "Shift+Space+Left", 6),
        StrokeConfig::new("zoom", "Ctrl+Space+Left", 6),
        StrokeConfig::new("pick_color", "Ctrl+Left", 3),
    ]
}

pub(super) fn default_singles() -> Vec<SingleConfig> {
    vec![
        SingleConfig::new("zoom", "Ctrl+WheelUp", 0),
        SingleConfig::new("zoom", "Ctrl+WheelDown", 1),
        SingleConfig::new("reset_view", "Ctrl+R", 0),
        SingleConfig::new("undo", "Ctrl+Z", 0),
    ]
}
