//! Host-facing engine.
//!
//! `PaintEngine` owns the canvas, the tool settings, and the tool state
//! machine, and exposes the complete operation surface a host needs:
//! tool/color/size setters, the three pointer hooks, undo, clear, export, and
//! read-only accessors for UI.
//!
//! After any call that returns an effect touching pixels (or after `undo` /
//! `clear`), the host should re-read the buffer. `take_dirty` folds that into
//! a single per-frame check.

use crate::config::EngineConfig;
use crate::input::InputEvent;
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use crate::tools::{ToolConfig, ToolEffect, ToolKind, ToolPhase, ToolStateMachine};
use rp_core::{CanvasState, Color, ImageEncoder, Palette, Point, export_canvas};

/// Result of applying a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutEffect {
    Applied,
    /// The host should call `export_to` with its encoder.
    ExportRequested,
}

/// Result of `PaintEngine::handle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Tool(ToolEffect),
    Shortcut(ShortcutEffect),
    /// Key event with no binding.
    Ignored,
}

pub struct PaintEngine {
    canvas: CanvasState,
    tools: ToolConfig,
    machine: ToolStateMachine,
    palette: Palette,
}

impl Default for PaintEngine {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl PaintEngine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            canvas: CanvasState::new(config.width, config.height, config.background),
            tools: config.tool_config(),
            machine: ToolStateMachine::new(config.live_preview, config.fill_limit),
            palette: Palette::classic(),
        }
    }

    /// A `width × height` canvas filled with `background`, other settings at
    /// their defaults.
    pub fn initialize(width: usize, height: usize, background: Color) -> Self {
        Self::new(&EngineConfig::with_canvas(width, height, background))
    }

    // ─── Setters ─────────────────────────────────────────────────────────

    pub fn set_tool(&mut self, tool: ToolKind) {
        if self.tools.tool != tool {
            log::debug!("tool {} -> {}", self.tools.tool, tool);
        }
        self.tools.tool = tool;
    }

    /// Select a tool by numeric selector in `[0, 8)`.
    ///
    /// # Errors
    /// Unknown selectors are rejected and the current tool is kept.
    pub fn set_tool_index(&mut self, index: i64) -> Result<(), String> {
        match ToolKind::from_index(index) {
            Some(tool) => {
                self.set_tool(tool);
                Ok(())
            }
            None => {
                log::warn!("ignoring unknown tool selector {index}");
                Err(format!("unknown tool selector: {index}"))
            }
        }
    }

    /// Select a tool by (case-insensitive) name.
    pub fn set_tool_by_name(&mut self, name: &str) -> Result<(), String> {
        let tool = name.parse::<ToolKind>()?;
        self.set_tool(tool);
        Ok(())
    }

    pub fn set_color(&mut self, color: Color) {
        self.tools.color = color;
    }

    /// Pick a preset swatch. Indexes outside `[0, 28)` are ignored.
    pub fn set_color_from_palette(&mut self, index: i64) {
        match self.palette.get(index) {
            Some(color) => self.tools.color = color,
            None => log::warn!("ignoring palette index {index}"),
        }
    }

    /// Set the brush size, clamped to `[1, 50]`.
    pub fn set_brush_size(&mut self, size: i32) {
        self.tools.set_brush_size(size);
        log::debug!("brush size {}", self.tools.brush_size());
    }

    // ─── Pointer hooks ───────────────────────────────────────────────────

    pub fn on_pointer_down(&mut self, pos: Point) -> ToolEffect {
        self.machine.pointer_down(&mut self.canvas, &mut self.tools, pos)
    }

    pub fn on_pointer_move(&mut self, pos: Point) -> ToolEffect {
        self.machine.pointer_move(&mut self.canvas, &self.tools, pos)
    }

    pub fn on_pointer_up(&mut self, pos: Point) -> ToolEffect {
        self.machine.pointer_up(&mut self.canvas, &self.tools, pos)
    }

    // ─── Commands ────────────────────────────────────────────────────────

    /// Roll back to the snapshot taken by the last pointer-down or clear.
    /// Repeating it restores the same snapshot again.
    pub fn undo(&mut self) {
        log::debug!("undo");
        self.canvas.restore();
    }

    /// Snapshot, then fill with the background color. Ends any drag in
    /// progress so its commit cannot bring back the cleared pixels.
    pub fn clear(&mut self) {
        log::debug!("clear");
        self.machine.reset();
        self.canvas.clear();
    }

    /// Dispatch a host input event.
    pub fn handle(&mut self, event: &InputEvent) -> Response {
        match event {
            InputEvent::PointerDown { x, y } => Response::Tool(self.on_pointer_down(Point::from_f32(*x, *y))),
            InputEvent::PointerMove { x, y } => Response::Tool(self.on_pointer_move(Point::from_f32(*x, *y))),
            InputEvent::PointerUp { x, y } => Response::Tool(self.on_pointer_up(Point::from_f32(*x, *y))),
            InputEvent::Key {
                key,
                ctrl,
                shift,
                alt,
                meta,
            } => match ShortcutMap::resolve(key, *ctrl, *shift, *alt, *meta) {
                Some(action) => Response::Shortcut(self.apply_shortcut(action)),
                None => Response::Ignored,
            },
        }
    }

    pub fn apply_shortcut(&mut self, action: ShortcutAction) -> ShortcutEffect {
        match action {
            ShortcutAction::SelectTool(tool) => self.set_tool(tool),
            ShortcutAction::GrowBrush => {
                self.tools.grow_brush();
                log::debug!("brush size {}", self.tools.brush_size());
            }
            ShortcutAction::ShrinkBrush => {
                self.tools.shrink_brush();
                log::debug!("brush size {}", self.tools.brush_size());
            }
            ShortcutAction::Undo => self.undo(),
            ShortcutAction::Clear => self.clear(),
            ShortcutAction::Export => return ShortcutEffect::ExportRequested,
        }
        ShortcutEffect::Applied
    }

    // ─── Export ──────────────────────────────────────────────────────────

    /// Row-major copy of the live pixels.
    pub fn export_pixels(&self) -> Vec<Color> {
        self.canvas.export_pixels()
    }

    /// Row-major interleaved RGBA bytes of the live pixels.
    pub fn export_rgba8(&self) -> Vec<u8> {
        self.canvas.export_rgba8()
    }

    /// Hand the live buffer to an external encoder.
    pub fn export_to(&self, encoder: &mut dyn ImageEncoder) -> Result<(), String> {
        export_canvas(&self.canvas, encoder)
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn current_tool(&self) -> ToolKind {
        self.tools.tool
    }

    pub fn current_tool_name(&self) -> &'static str {
        self.tools.tool.name()
    }

    pub fn brush_size(&self) -> i32 {
        self.tools.brush_size()
    }

    pub fn current_color(&self) -> Color {
        self.tools.color
    }

    pub fn palette(&self) -> &[Color] {
        self.palette.colors()
    }

    pub fn tool_config(&self) -> &ToolConfig {
        &self.tools
    }

    pub fn phase(&self) -> ToolPhase {
        self.machine.phase()
    }

    pub fn canvas(&self) -> &CanvasState {
        &self.canvas
    }

    pub fn width(&self) -> usize {
        self.canvas.width()
    }

    pub fn height(&self) -> usize {
        self.canvas.height()
    }

    /// Whether the buffer changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        self.canvas.take_dirty()
    }
}
