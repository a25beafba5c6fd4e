//! Shortcut profile configuration.
//!
//! This module loads the shortcut profile from the configuration file located
//! at `~/.config/strokematch/config.toml` (or an explicit path). A profile
//! declares the actions, their cursor hints, and the stroke and single-action
//! bindings that trigger them.
//!
//! A file that declares no `[[action]]` tweaks the built-in profile: its
//! missing `[[stroke]]` or `[[single]]` sections fall back to the built-in
//! ones. A file that declares actions stands alone and missing sections are
//! empty.

pub mod bindings;
pub mod enums;
pub mod types;


pub use bindings::{BindingError, SingleBinding, StrokeBinding};
pub use enums::CursorSpec;
pub use types::{ActionConfig, MatcherConfig, SingleConfig, StrokeConfig};

use crate::input::{ActionId, InputAction, MatcherError, ShortcutMatcher};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const PRIORITY_RANGE: std::ops::RangeInclusive<i32> = -1000..=1000;

/// Errors raised while turning a profile into a live matcher.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Binding '{binding}' refers to undeclared action '{action}'")]
    UnknownAction { action: String, binding: String },

    #[error("Invalid binding '{binding}' for action '{action}': {source}")]
    Binding {
        action: String,
        binding: String,
        #[source]
        source: BindingError,
    },

    #[error(
        "Duplicate binding '{binding}' assigned to both '{first}' and '{second}' with priority {priority}"
    )]
    Duplicate {
        binding: String,
        first: String,
        second: String,
        priority: i32,
    },

    #[error(transparent)]
    Matcher(#[from] MatcherError),
}

/// Main configuration structure: one shortcut profile.
///
/// # Example TOML
/// ```toml
/// [matcher]
/// start_suppressed = false
///
/// [[action]]
/// name = "pan"
/// cursor = "open-hand"
///
/// [[stroke]]
/// action = "pan"
/// binding = "Space+Left"
/// priority = 5
///
/// [[single]]
/// action = "zoom"
/// binding = "Ctrl+WheelUp"
/// mode = 0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Config {
    /// Matcher behaviour
    #[serde(default)]
    pub matcher: MatcherConfig,

    /// Declared actions
    #[serde(default, rename = "action")]
    pub actions: Vec<ActionConfig>,

    /// Durable stroke bindings
    #[serde(default, rename = "stroke")]
    pub strokes: Vec<StrokeConfig>,

    /// Instantaneous bindings
    #[serde(default, rename = "single")]
    pub singles: Vec<SingleConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            matcher: MatcherConfig::default(),
            actions: types::default_actions(),
            strokes: types::default_strokes(),
            singles: types::default_singles(),
        }
    }
}

/// The profile file as written, with absent sections left as `None`.
#[derive(Debug, Deserialize)]
struct ProfileFile {
    #[serde(default)]
    matcher: MatcherConfig,
    #[serde(rename = "action")]
    actions: Option<Vec<ActionConfig>>,
    #[serde(rename = "stroke")]
    strokes: Option<Vec<StrokeConfig>>,
    #[serde(rename = "single")]
    singles: Option<Vec<SingleConfig>>,
}

impl From<ProfileFile> for Config {
    fn from(file: ProfileFile) -> Self {
        match file.actions {
            // No actions of its own: the file tweaks the built-in profile.
            None => Self {
                matcher: file.matcher,
                actions: types::default_actions(),
                strokes: file.strokes.unwrap_or_else(types::default_strokes),
                singles: file.singles.unwrap_or_else(types::default_singles),
            },
            Some(actions) => Self {
                matcher: file.matcher,
                actions,
                strokes: file.strokes.unwrap_or_default(),
                singles: file.singles.unwrap_or_default(),
            },
        }
    }
}

impl Config {
    /// Validates and clamps configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped or dropped and a warning is logged:
    /// - `priority`: -1000 - 1000
    /// - duplicate action declarations: the first one wins
    fn validate_and_clamp(&mut self) {
        let mut seen = HashSet::new();
        self.actions.retain(|action| {
            let fresh = seen.insert(action.name.clone());
            if !fresh {
                warn!(
                    "Action '{}' declared more than once, keeping the first declaration",
                    action.name
                );
            }
            fresh
        });

        for stroke in &mut self.strokes {
            if !PRIORITY_RANGE.contains(&stroke.priority) {
                warn!(
                    "Invalid priority {} for stroke '{}', clamping to -1000-1000 range",
                    stroke.priority, stroke.binding
                );
                stroke.priority = stroke
                    .priority
                    .clamp(*PRIORITY_RANGE.start(), *PRIORITY_RANGE.end());
            }
        }

        for single in &mut self.singles {
            if !PRIORITY_RANGE.contains(&single.priority) {
                warn!(
                    "Invalid priority {} for shortcut '{}', clamping to -1000-1000 range",
                    single.priority, single.binding
                );
                single.priority = single
                    .priority
                    .clamp(*PRIORITY_RANGE.start(), *PRIORITY_RANGE.end());
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("strokematch");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads the profile from the default path, or the built-in profile if
    /// the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using built-in profile");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads the profile from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses a profile from TOML text without validation.
    pub fn from_toml(text: &str) -> Result<Self> {
        let file: ProfileFile = toml::from_str(text)?;
        Ok(file.into())
    }

    /// Serializes the profile to pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Saves the profile to the default config path, creating the directory.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(&config_path, self.to_toml()?)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// JSON schema of the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Builds a matcher from this profile.
    ///
    /// `make_action` creates the action object for each declared action;
    /// shortcuts are registered in file order, which decides priority ties.
    /// Returns an error if a binding is invalid, refers to an undeclared
    /// action, or duplicates another binding at the same priority.
    pub fn build_matcher<F>(&self, mut make_action: F) -> Result<ShortcutMatcher, ProfileError>
    where
        F: FnMut(&ActionConfig) -> Box<dyn InputAction>,
    {
        let mut matcher = ShortcutMatcher::new();
        let mut ids: HashMap<&str, ActionId> = HashMap::new();
        for action in &self.actions {
            ids.insert(&action.name, matcher.add_action(make_action(action)));
        }

        let lookup = |action: &str, binding: &str| -> Result<ActionId, ProfileError> {
            ids.get(action)
                .copied()
                .ok_or_else(|| ProfileError::UnknownAction {
                    action: action.to_string(),
                    binding: binding.to_string(),
                })
        };
        let invalid = |action: &str, binding: &str, source| ProfileError::Binding {
            action: action.to_string(),
            binding: binding.to_string(),
            source,
        };

        let mut strokes_seen: HashMap<(StrokeBinding, i32), &str> = HashMap::new();
        for stroke in &self.strokes {
            let id = lookup(&stroke.action, &stroke.binding)?;
            let parsed = StrokeBinding::parse(&stroke.binding)
                .map_err(|err| invalid(&stroke.action, &stroke.binding, err))?;
            let key = (parsed.clone(), stroke.priority);
            if let Some(first) = strokes_seen.insert(key, &stroke.action) {
                return Err(ProfileError::Duplicate {
                    binding: stroke.binding.clone(),
                    first: first.to_string(),
                    second: stroke.action.clone(),
                    priority: stroke.priority,
                });
            }
            let shortcut = parsed.into_shortcut(id, stroke.mode, stroke.priority);
            matcher.add_stroke_shortcut(shortcut)?;
        }

        let mut singles_seen: HashMap<(SingleBinding, i32), &str> = HashMap::new();
        for single in &self.singles {
            let id = lookup(&single.action, &single.binding)?;
            let parsed = SingleBinding::parse(&single.binding)
                .map_err(|err| invalid(&single.action, &single.binding, err))?;
            let key = (parsed.clone(), single.priority);
            if let Some(first) = singles_seen.insert(key, &single.action) {
                return Err(ProfileError::Duplicate {
                    binding: single.binding.clone(),
                    first: first.to_string(),
                    second: single.action.clone(),
                    priority: single.priority,
                });
            }
            let shortcut = parsed.into_shortcut(id, single.mode, single.priority);
            matcher.add_single_action_shortcut(shortcut)?;
        }

        matcher.suppress_all_actions(self.matcher.start_suppressed);
        info!(
            "Profile installed: {} actions, {} strokes, {} single actions",
            self.actions.len(),
            self.strokes.len(),
            self.singles.len()
        );
        Ok(matcher)
    }
}
