//! Engine configuration.
//!
//! Every field has a default, so hosts can load a partial JSON document and
//! only override what they care about.

use crate::tools::{ToolConfig, ToolKind};
use rp_core::{Color, MAX_FILL};
use serde::{Deserialize, Serialize};

/// Configuration for `PaintEngine::new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Canvas width in pixels. Default: **800**.
    pub width: usize,
    /// Canvas height in pixels. Default: **600**.
    pub height: usize,
    /// Initial fill and eraser color. Default: **white**.
    pub background: Color,
    /// Initial brush size, clamped to `[1, 50]`. Default: **5**.
    pub brush_size: i32,
    /// Initial draw color. Default: **black**.
    pub color: Color,
    /// Initially selected tool. Default: **Pencil**.
    pub tool: ToolKind,
    /// Redraw shapes on every pointer move while dragging. Default: **true**.
    pub live_preview: bool,
    /// Maximum pixels recolored by one flood fill. Default: **100000**.
    pub fill_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: Color::WHITE,
            brush_size: 5,
            color: Color::BLACK,
            tool: ToolKind::Pencil,
            live_preview: true,
            fill_limit: MAX_FILL,
        }
    }
}

impl EngineConfig {
    /// Defaults with a specific canvas size and background.
    pub fn with_canvas(width: usize, height: usize, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON document.
    ///
    /// # Errors
    /// Returns the parser message for malformed JSON, unknown tool names, or
    /// invalid hex colors.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid engine config: {e}"))
    }

    /// Pretty-printed JSON document.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("engine config serialization: {e}"))
    }

    /// Initial tool settings derived from this config.
    pub fn tool_config(&self) -> ToolConfig {
        ToolConfig::new(self.tool, self.brush_size, self.color)
    }
}
