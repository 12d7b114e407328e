//! Tool system for canvas interactions.
//!
//! A single [`ToolStateMachine`] interprets pointer events according to the
//! active [`ToolKind`] and drives the rasterizer. Tool settings live in an
//! explicit [`ToolConfig`] passed into every call.
//!
//! | Tool | Pointer down | Pointer move | Pointer up |
//! |------|--------------|--------------|------------|
//! | Pencil / Brush / Eraser | backup, stamp | stroke from last position | idle |
//! | Fill | backup, flood fill | — | — |
//! | Eyedropper | backup, pick color | — | — |
//! | Line / Rectangle / Circle | backup, anchor | restore + preview | restore + commit |

use rp_core::raster::{self, Stamp};
use rp_core::{CanvasState, Color, MAX_FILL, Point};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_BRUSH_SIZE: i32 = 1;
pub const MAX_BRUSH_SIZE: i32 = 50;
/// Increment used by the grow/shrink brush shortcuts.
pub const BRUSH_STEP: i32 = 2;

// ─── Tool kinds ──────────────────────────────────────────────────────────

/// The active tool determines how pointer events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Pencil,
    Brush,
    Eraser,
    Fill,
    Line,
    Rectangle,
    Circle,
    Eyedropper,
}

impl ToolKind {
    /// All tools in selector order.
    pub const ALL: [ToolKind; 8] = [
        ToolKind::Pencil,
        ToolKind::Brush,
        ToolKind::Eraser,
        ToolKind::Fill,
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::Circle,
        ToolKind::Eyedropper,
    ];

    /// Tool for a numeric selector in `[0, 8)`.
    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Pencil => "Pencil",
            ToolKind::Brush => "Brush",
            ToolKind::Eraser => "Eraser",
            ToolKind::Fill => "Fill",
            ToolKind::Line => "Line",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Circle => "Circle",
            ToolKind::Eyedropper => "Eyedropper",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown tool: {s:?}"))
    }
}

/// Shapes placed by dragging from an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Circle,
}

// ─── Tool settings ───────────────────────────────────────────────────────

/// Host-adjustable tool settings, read on every stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolConfig {
    pub tool: ToolKind,
    brush_size: i32,
    pub color: Color,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self::new(ToolKind::Pencil, 5, Color::BLACK)
    }
}

impl ToolConfig {
    pub fn new(tool: ToolKind, brush_size: i32, color: Color) -> Self {
        Self {
            tool,
            brush_size: brush_size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE),
            color,
        }
    }

    pub fn brush_size(&self) -> i32 {
        self.brush_size
    }

    /// Set the brush size, clamped to `[1, 50]`.
    pub fn set_brush_size(&mut self, size: i32) {
        self.brush_size = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
    }

    pub fn grow_brush(&mut self) {
        self.set_brush_size(self.brush_size.saturating_add(BRUSH_STEP));
    }

    pub fn shrink_brush(&mut self) {
        self.set_brush_size(self.brush_size.saturating_sub(BRUSH_STEP));
    }

    /// The mark the active tool lays down, or `None` for tools that do not
    /// stamp (fill, eyedropper).
    ///
    /// The eraser paints `background` at twice the brush radius. Shape tools
    /// outline with the brush disc.
    pub fn stamp(&self, background: Color) -> Option<Stamp> {
        match self.tool {
            ToolKind::Pencil => Some(Stamp::pencil(self.color)),
            ToolKind::Brush | ToolKind::Line | ToolKind::Rectangle | ToolKind::Circle => {
                Some(self.shape_stamp())
            }
            ToolKind::Eraser => Some(Stamp::disc(self.brush_size * 2, background)),
            ToolKind::Fill | ToolKind::Eyedropper => None,
        }
    }

    /// Brush disc used to outline shapes, whatever tool is active.
    pub fn shape_stamp(&self) -> Stamp {
        Stamp::disc(self.brush_size, self.color)
    }
}

// ─── State machine ───────────────────────────────────────────────────────

/// Interaction phase between pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolPhase {
    #[default]
    Idle,
    /// A freehand stroke is in progress; `last` is the previous sample.
    Drawing { last: Point },
    /// A `shape` is being dragged out from `anchor`.
    DraggingShape { anchor: Point, shape: ShapeKind },
}

/// What a pointer event did to the canvas or tool settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolEffect {
    Nothing,
    Painted,
    Filled { pixels: usize },
    Picked(Color),
    ShapeStarted,
    ShapePreviewed,
    ShapeCommitted,
}

#[derive(Debug, Clone)]
pub struct ToolStateMachine {
    phase: ToolPhase,
    /// Restore-and-redraw the shape on every move while dragging.
    pub live_preview: bool,
    /// Pixel budget for a single flood fill.
    pub fill_limit: usize,
}

impl Default for ToolStateMachine {
    fn default() -> Self {
        Self::new(true, MAX_FILL)
    }
}

impl ToolStateMachine {
    pub fn new(live_preview: bool, fill_limit: usize) -> Self {
        Self {
            phase: ToolPhase::Idle,
            live_preview,
            fill_limit,
        }
    }

    pub fn phase(&self) -> ToolPhase {
        self.phase
    }

    /// Drop any in-progress stroke or drag without touching pixels.
    pub fn reset(&mut self) {
        self.phase = ToolPhase::Idle;
    }

    pub fn pointer_down(&mut self, canvas: &mut CanvasState, tools: &mut ToolConfig, pos: Point) -> ToolEffect {
        canvas.backup();

        match tools.tool {
            ToolKind::Pencil | ToolKind::Brush | ToolKind::Eraser => {
                if let Some(mark) = tools.stamp(canvas.background()) {
                    raster::stamp(canvas.live_mut(), pos, &mark);
                }
                self.phase = ToolPhase::Drawing { last: pos };
                ToolEffect::Painted
            }
            ToolKind::Fill => {
                self.phase = ToolPhase::Idle;
                let pixels = raster::flood_fill_bounded(canvas.live_mut(), pos, tools.color, self.fill_limit);
                log::debug!("fill at ({}, {}) recolored {pixels} pixels", pos.x, pos.y);
                ToolEffect::Filled { pixels }
            }
            ToolKind::Eyedropper => {
                self.phase = ToolPhase::Idle;
                match raster::eyedropper(canvas.live(), pos) {
                    Some(picked) => {
                        tools.color = picked;
                        log::debug!("picked {picked} at ({}, {})", pos.x, pos.y);
                        ToolEffect::Picked(picked)
                    }
                    None => ToolEffect::Nothing,
                }
            }
            ToolKind::Line => self.start_shape(ShapeKind::Line, pos),
            ToolKind::Rectangle => self.start_shape(ShapeKind::Rectangle, pos),
            ToolKind::Circle => self.start_shape(ShapeKind::Circle, pos),
        }
    }

    fn start_shape(&mut self, shape: ShapeKind, anchor: Point) -> ToolEffect {
        self.phase = ToolPhase::DraggingShape { anchor, shape };
        ToolEffect::ShapeStarted
    }

    pub fn pointer_move(&mut self, canvas: &mut CanvasState, tools: &ToolConfig, pos: Point) -> ToolEffect {
        match self.phase {
            ToolPhase::Drawing { last } => {
                self.phase = ToolPhase::Drawing { last: pos };
                match tools.stamp(canvas.background()) {
                    Some(mark) => {
                        raster::stroke_line(canvas.live_mut(), last, pos, &mark);
                        ToolEffect::Painted
                    }
                    None => ToolEffect::Nothing,
                }
            }
            ToolPhase::DraggingShape { anchor, shape } if self.live_preview => {
                canvas.restore();
                draw_shape(canvas, shape, &tools.shape_stamp(), anchor, pos);
                ToolEffect::ShapePreviewed
            }
            _ => ToolEffect::Nothing,
        }
    }

    pub fn pointer_up(&mut self, canvas: &mut CanvasState, tools: &ToolConfig, pos: Point) -> ToolEffect {
        let phase = std::mem::take(&mut self.phase);
        match phase {
            ToolPhase::DraggingShape { anchor, shape } => {
                // Commit on top of the pre-drag snapshot so previews never stack.
                canvas.restore();
                draw_shape(canvas, shape, &tools.shape_stamp(), anchor, pos);
                log::debug!(
                    "{shape:?} committed ({}, {}) -> ({}, {})",
                    anchor.x,
                    anchor.y,
                    pos.x,
                    pos.y
                );
                ToolEffect::ShapeCommitted
            }
            ToolPhase::Drawing { .. } | ToolPhase::Idle => ToolEffect::Nothing,
        }
    }
}

/// Rasterize `shape` from `anchor` to `pos`.
fn draw_shape(canvas: &mut CanvasState, shape: ShapeKind, mark: &Stamp, anchor: Point, pos: Point) {
    let grid = canvas.live_mut();
    match shape {
        ShapeKind::Line => raster::stroke_line(grid, anchor, pos, mark),
        ShapeKind::Rectangle => raster::rectangle_outline(grid, anchor, pos, mark),
        ShapeKind::Circle => raster::circle_outline(grid, anchor, pos, mark),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn setup(tool: ToolKind) -> (ToolStateMachine, CanvasState, ToolConfig) {
        (
            ToolStateMachine::default(),
            CanvasState::new(40, 40, Color::WHITE),
            ToolConfig::new(tool, 3, Color::BLACK),
        )
    }

    #[test]
    fn tool_selectors_round_trip() {
        for (i, tool) in ToolKind::ALL.into_iter().enumerate() {
            assert_eq!(ToolKind::from_index(i as i64), Some(tool));
            assert_eq!(tool.index(), i);
            assert_eq!(tool.name().parse::<ToolKind>(), Ok(tool));
        }
        assert_eq!(ToolKind::from_index(8), None);
        assert_eq!(ToolKind::from_index(-1), None);
        assert_eq!("rectangle".parse::<ToolKind>(), Ok(ToolKind::Rectangle));
        assert!("Spray".parse::<ToolKind>().is_err());
    }

    #[test]
    fn brush_size_clamps() {
        let mut cfg = ToolConfig::new(ToolKind::Brush, 500, Color::BLACK);
        assert_eq!(cfg.brush_size(), 50);
        cfg.set_brush_size(0);
        assert_eq!(cfg.brush_size(), 1);
        cfg.shrink_brush();
        assert_eq!(cfg.brush_size(), 1);
        cfg.set_brush_size(49);
        cfg.grow_brush();
        assert_eq!(cfg.brush_size(), 50);
        cfg.set_brush_size(i32::MIN);
        assert_eq!(cfg.brush_size(), 1);
    }

    #[test]
    fn eraser_uses_background_at_double_size() {
        let cfg = ToolConfig::new(ToolKind::Eraser, 4, Color::RED);
        assert_eq!(cfg.stamp(Color::WHITE), Some(Stamp::disc(8, Color::WHITE)));
    }

    #[test]
    fn pencil_ignores_brush_size() {
        let cfg = ToolConfig::new(ToolKind::Pencil, 40, Color::RED);
        assert_eq!(cfg.stamp(Color::WHITE), Some(Stamp::pencil(Color::RED)));
        let fill = ToolConfig::new(ToolKind::Fill, 40, Color::RED);
        assert_eq!(fill.stamp(Color::WHITE), None);
    }

    #[test]
    fn continuous_stroke_phases() {
        let (mut sm, mut canvas, mut cfg) = setup(ToolKind::Brush);
        assert_eq!(sm.pointer_down(&mut canvas, &mut cfg, Point::new(5, 5)), ToolEffect::Painted);
        assert_eq!(sm.phase(), ToolPhase::Drawing { last: Point::new(5, 5) });

        sm.pointer_move(&mut canvas, &cfg, Point::new(30, 5));
        assert_eq!(sm.phase(), ToolPhase::Drawing { last: Point::new(30, 5) });
        // Continuous: every cell along the path is covered.
        for x in 5..=30 {
            assert_eq!(canvas.get(Point::new(x, 5)), Some(Color::BLACK));
        }

        assert_eq!(sm.pointer_up(&mut canvas, &cfg, Point::new(30, 5)), ToolEffect::Nothing);
        assert_eq!(sm.phase(), ToolPhase::Idle);
    }

    #[test]
    fn move_while_idle_does_nothing() {
        let (mut sm, mut canvas, cfg) = setup(ToolKind::Pencil);
        let before = canvas.live().clone();
        assert_eq!(sm.pointer_move(&mut canvas, &cfg, Point::new(3, 3)), ToolEffect::Nothing);
        assert_eq!(canvas.live(), &before);
    }

    #[test]
    fn fill_is_single_shot() {
        let (mut sm, mut canvas, mut cfg) = setup(ToolKind::Fill);
        cfg.color = Color::GREEN;
        let effect = sm.pointer_down(&mut canvas, &mut cfg, Point::new(0, 0));
        assert_eq!(effect, ToolEffect::Filled { pixels: 1600 });
        assert_eq!(sm.phase(), ToolPhase::Idle);
    }

    #[test]
    fn fill_limit_is_configurable() {
        let mut sm = ToolStateMachine::new(true, 10);
        let mut canvas = CanvasState::new(10, 10, Color::WHITE);
        let mut cfg = ToolConfig::new(ToolKind::Fill, 1, Color::RED);
        sm.pointer_down(&mut canvas, &mut cfg, Point::new(5, 5));
        assert_eq!(canvas.live().count(Color::RED), 10);
    }

    #[test]
    fn eyedropper_sets_color_without_painting() {
        let (mut sm, mut canvas, mut cfg) = setup(ToolKind::Eyedropper);
        canvas.set(Point::new(7, 7), Color::CYAN);
        let before = canvas.live().clone();

        let effect = sm.pointer_down(&mut canvas, &mut cfg, Point::new(7, 7));
        assert_eq!(effect, ToolEffect::Picked(Color::CYAN));
        assert_eq!(cfg.color, Color::CYAN);
        assert_eq!(canvas.live(), &before);

        // Outside the canvas: color unchanged.
        assert_eq!(sm.pointer_down(&mut canvas, &mut cfg, Point::new(-4, 7)), ToolEffect::Nothing);
        assert_eq!(cfg.color, Color::CYAN);
    }

    #[test]
    fn shape_preview_does_not_compound() {
        let (mut sm, mut canvas, mut cfg) = setup(ToolKind::Rectangle);
        cfg.set_brush_size(1);
        sm.pointer_down(&mut canvas, &mut cfg, Point::new(2, 2));
        assert_eq!(
            sm.phase(),
            ToolPhase::DraggingShape {
                anchor: Point::new(2, 2),
                shape: ShapeKind::Rectangle
            }
        );

        for x in [30, 25, 20, 15] {
            assert_eq!(sm.pointer_move(&mut canvas, &cfg, Point::new(x, x)), ToolEffect::ShapePreviewed);
        }
        // The earlier, larger previews are gone.
        assert_eq!(canvas.get(Point::new(30, 30)), Some(Color::WHITE));
        assert_eq!(canvas.get(Point::new(15, 15)), Some(Color::BLACK));

        assert_eq!(sm.pointer_up(&mut canvas, &cfg, Point::new(10, 10)), ToolEffect::ShapeCommitted);
        assert_eq!(canvas.get(Point::new(15, 15)), Some(Color::WHITE));
        assert_eq!(canvas.get(Point::new(10, 10)), Some(Color::BLACK));
        assert_eq!(sm.phase(), ToolPhase::Idle);
    }

    #[test]
    fn shape_without_preview_only_draws_on_release() {
        let mut sm = ToolStateMachine::new(false, MAX_FILL);
        let mut canvas = CanvasState::new(20, 20, Color::WHITE);
        let mut cfg = ToolConfig::new(ToolKind::Line, 1, Color::BLUE);

        sm.pointer_down(&mut canvas, &mut cfg, Point::new(1, 1));
        assert_eq!(sm.pointer_move(&mut canvas, &cfg, Point::new(18, 1)), ToolEffect::Nothing);
        assert_eq!(canvas.live().count(Color::BLUE), 0);

        sm.pointer_up(&mut canvas, &cfg, Point::new(18, 1));
        assert_eq!(canvas.get(Point::new(10, 1)), Some(Color::BLUE));
    }

    #[test]
    fn tool_switch_mid_drag_commits_started_shape() {
        let (mut sm, mut canvas, mut cfg) = setup(ToolKind::Rectangle);
        cfg.set_brush_size(1);
        sm.pointer_down(&mut canvas, &mut cfg, Point::new(5, 5));
        sm.pointer_move(&mut canvas, &cfg, Point::new(30, 30));

        cfg.tool = ToolKind::Pencil;
        assert_eq!(sm.pointer_up(&mut canvas, &cfg, Point::new(30, 30)), ToolEffect::ShapeCommitted);
        assert_eq!(canvas.get(Point::new(5, 17)), Some(Color::BLACK));
        assert_eq!(canvas.get(Point::new(30, 17)), Some(Color::BLACK));
        assert_eq!(canvas.get(Point::new(17, 17)), Some(Color::WHITE));

        // Switching to a non-stamping tool still draws with the brush disc.
        cfg.tool = ToolKind::Line;
        sm.pointer_down(&mut canvas, &mut cfg, Point::new(0, 38));
        cfg.tool = ToolKind::Fill;
        sm.pointer_up(&mut canvas, &cfg, Point::new(39, 38));
        assert_eq!(canvas.get(Point::new(20, 38)), Some(Color::BLACK));
    }

    #[test]
    fn circle_commit_from_anchor() {
        let (mut sm, mut canvas, mut cfg) = setup(ToolKind::Circle);
        cfg.set_brush_size(1);
        sm.pointer_down(&mut canvas, &mut cfg, Point::new(20, 20));
        sm.pointer_up(&mut canvas, &cfg, Point::new(30, 20));
        assert_eq!(canvas.get(Point::new(30, 20)), Some(Color::BLACK));
        assert_eq!(canvas.get(Point::new(20, 20)), Some(Color::WHITE));
    }
}
