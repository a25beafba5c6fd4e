//! Configuration enum types.

use crate::input::CursorShape;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Cursor hint an action shows while it is ready to start.
///
/// # Examples
/// ```toml
/// [[action]]
/// name = "pan"
/// cursor = "open-hand"
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum CursorSpec {
    Arrow,
    Crosshair,
    OpenHand,
    ClosedHand,
    Rotate,
    ZoomIn,
    ZoomOut,
    Pointer,
}

impl CursorSpec {
    /// Converts the configured name to the shape handed to the host.
    pub fn to_shape(self) -> CursorShape {
        match self {
            CursorSpec::Arrow => CursorShape::Arrow,
            CursorSpec::Crosshair => CursorShape::Crosshair,
            CursorSpec::OpenHand => CursorShape::OpenHand,
            CursorSpec::ClosedHand => CursorShape::ClosedHand,
            CursorSpec::Rotate => CursorShape::Rotate,
            CursorSpec::ZoomIn => CursorShape::ZoomIn,
            CursorSpec::ZoomOut => CursorShape::ZoomOut,
            CursorSpec::Pointer => CursorShape::Pointer,
        }
    }
}
