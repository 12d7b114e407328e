//! Rasterization primitives.
//!
//! Every function here is stateless and tool-agnostic: it receives a grid and
//! a [`Stamp`] describing the mark to lay down, and writes through
//! [`PixelGrid::set`]. Positions past the grid edges are silently clipped.
//!
//! | Primitive | Coverage |
//! |-----------|----------|
//! | [`stamp`] | filled disc `dx² + dy² ≤ r²` |
//! | [`stroke_line`] | one stamp per Bresenham cell |
//! | [`rectangle_outline`] | stamps along the four edges, never the interior |
//! | [`circle_outline`] | stamps at 360 one-degree samples |
//! | [`flood_fill`] | 4-connected BFS, capped at [`MAX_FILL`] pixels |

use crate::color::Color;
use crate::grid::{PixelGrid, Point};
use std::collections::VecDeque;
use std::ops::RangeInclusive;

/// Safety cap on the number of pixels a single flood fill may recolor.
pub const MAX_FILL: usize = 100_000;

/// Radius of the fixed pencil dot.
pub const PENCIL_RADIUS: i32 = 2;

/// A disc-shaped mark of a single color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp {
    /// Disc radius in pixels. `0` marks a single pixel.
    pub radius: i32,
    pub color: Color,
}

impl Stamp {
    pub const fn disc(radius: i32, color: Color) -> Self {
        Self { radius, color }
    }

    /// Small precise dot used by the pencil.
    pub const fn pencil(color: Color) -> Self {
        Self::disc(PENCIL_RADIUS, color)
    }

    /// Offsets `(dx, dy)` covered by this stamp, in row order.
    pub fn offsets(&self) -> impl Iterator<Item = (i32, i32)> + use<> {
        let r = self.radius.max(0);
        let r2 = i64::from(r) * i64::from(r);
        (-r..=r).flat_map(move |dy| {
            (-r..=r)
                .filter(move |&dx| i64::from(dx).pow(2) + i64::from(dy).pow(2) <= r2)
                .map(move |dx| (dx, dy))
        })
    }
}

/// Inclusive box of centers whose stamp of `radius` can touch `grid`, as
/// `(min, max)` corners.
fn reach(grid: &PixelGrid, radius: i32) -> ((i64, i64), (i64, i64)) {
    let r = i64::from(radius.max(0));
    let w = i64::try_from(grid.width()).unwrap_or(i64::MAX);
    let h = i64::try_from(grid.height()).unwrap_or(i64::MAX);
    ((-r, -r), (w.saturating_add(r - 1), h.saturating_add(r - 1)))
}

/// Lay down one stamp centered at `center`.
pub fn stamp(grid: &mut PixelGrid, center: Point, mark: &Stamp) {
    let ((min_x, min_y), (max_x, max_y)) = reach(grid, mark.radius);
    let (x, y) = (i64::from(center.x), i64::from(center.y));
    if x < min_x || y < min_y || x > max_x || y > max_y {
        return;
    }
    for (dx, dy) in mark.offsets() {
        grid.set(center.offset(dx, dy), mark.color);
    }
}

// ─── Lines ────────────────────────────────────────────────────────────────

/// Integer Bresenham walk between two cells, both endpoints included.
///
/// Yields the cells of the error-accumulator loop (`err = dx - dy`, step x
/// while `2·err > -dy`, step y while `2·err < dx`). That loop advances the
/// major axis on every step, and the minor offset at step `k` is
/// `ceil((2k·minor - major) / (2·major))`, so cells are computed directly.
/// This lets [`BresenhamLine::clipped`] skip far off-grid stretches in O(1).
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    x0: i64,
    y0: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    step: i64,
    last: i64,
}

impl BresenhamLine {
    pub fn new(start: Point, end: Point) -> Self {
        let (x0, y0) = (i64::from(start.x), i64::from(start.y));
        let (x1, y1) = (i64::from(end.x), i64::from(end.y));
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        Self {
            x0,
            y0,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            step: 0,
            last: dx.max(dy),
        }
    }

    fn x_major(&self) -> bool {
        self.dx >= self.dy
    }

    /// Keep only the steps whose major-axis coordinate lies in the inclusive
    /// box `min..=max`. Minor-axis coordinates are not filtered.
    pub fn clipped(mut self, min: (i64, i64), max: (i64, i64)) -> Self {
        let (origin, sign, lo, hi) = if self.x_major() {
            (self.x0, self.sx, min.0, max.0)
        } else {
            (self.y0, self.sy, min.1, max.1)
        };
        let (from, to) = if sign > 0 {
            (lo - origin, hi - origin)
        } else {
            (origin - hi, origin - lo)
        };
        self.step = self.step.max(from);
        self.last = self.last.min(to);
        self
    }

    fn cell_at(&self, k: i64) -> Point {
        let (major, minor) = if self.x_major() {
            (self.dx, self.dy)
        } else {
            (self.dy, self.dx)
        };
        let m = if major == 0 {
            0
        } else {
            let num = 2 * i128::from(k) * i128::from(minor) + i128::from(major) - 1;
            (num / (2 * i128::from(major))) as i64
        };
        let (u, v) = if self.x_major() { (k, m) } else { (m, k) };
        // Every cell lies between the endpoints, so it fits in i32.
        Point::new((self.x0 + self.sx * u) as i32, (self.y0 + self.sy * v) as i32)
    }
}

impl Iterator for BresenhamLine {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.step > self.last {
            return None;
        }
        let cell = self.cell_at(self.step);
        self.step += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.last - self.step + 1).unwrap_or(0);
        (n, Some(n))
    }
}

/// Cells visited when stroking from `a` to `b`.
///
/// The walk always starts at the smaller endpoint (by `x`, then `y`), so the
/// result does not depend on stroke direction.
pub fn line_cells(a: Point, b: Point) -> BresenhamLine {
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    BresenhamLine::new(start, end)
}

/// Stamp at every cell of the line `a`–`b`. Equal endpoints stamp once.
///
/// Cells whose stamp cannot reach the grid are skipped, so cost tracks the
/// grid size rather than the line length.
pub fn stroke_line(grid: &mut PixelGrid, a: Point, b: Point, mark: &Stamp) {
    log::trace!("stroke ({}, {}) -> ({}, {}) r={}", a.x, a.y, b.x, b.y, mark.radius);
    let (min, max) = reach(grid, mark.radius);
    for cell in line_cells(a, b).clipped(min, max) {
        stamp(grid, cell, mark);
    }
}

// ─── Shapes ───────────────────────────────────────────────────────────────

/// `a..=b` intersected with `lo..=hi`.
fn span_within(a: i32, b: i32, lo: i64, hi: i64) -> RangeInclusive<i32> {
    let from = i64::from(a).max(lo);
    let to = i64::from(b).min(hi);
    if from > to {
        return 1..=0;
    }
    // Both ends lie within `a..=b`.
    from as i32..=to as i32
}

/// Stamp along the four edges of the box spanned by two opposite corners.
pub fn rectangle_outline(grid: &mut PixelGrid, c0: Point, c1: Point, mark: &Stamp) {
    let (x1, x2) = (c0.x.min(c1.x), c0.x.max(c1.x));
    let (y1, y2) = (c0.y.min(c1.y), c0.y.max(c1.y));
    let ((min_x, min_y), (max_x, max_y)) = reach(grid, mark.radius);

    for x in span_within(x1, x2, min_x, max_x) {
        stamp(grid, Point::new(x, y1), mark);
        stamp(grid, Point::new(x, y2), mark);
    }
    for y in span_within(y1, y2, min_y, max_y) {
        stamp(grid, Point::new(x1, y), mark);
        stamp(grid, Point::new(x2, y), mark);
    }
}

/// Outline radius for a circle through `edge`: the Euclidean distance
/// truncated toward zero, saturating at `i32::MAX`.
pub fn circle_radius(center: Point, edge: Point) -> i32 {
    let dx = (i64::from(edge.x) - i64::from(center.x)) as f64;
    let dy = (i64::from(edge.y) - i64::from(center.y)) as f64;
    dx.hypot(dy) as i32
}

/// Stamp at 360 points spaced one degree apart on the circle around `center`
/// passing through `edge`.
///
/// This samples angles rather than walking the grid, so large radii show gaps
/// between stamps once the arc length per degree exceeds the stamp width.
pub fn circle_outline(grid: &mut PixelGrid, center: Point, edge: Point, mark: &Stamp) {
    let r = f64::from(circle_radius(center, edge));
    for deg in 0..360 {
        let rad = f64::from(deg).to_radians();
        let x = center.x.saturating_add((r * rad.cos()) as i32);
        let y = center.y.saturating_add((r * rad.sin()) as i32);
        stamp(grid, Point::new(x, y), mark);
    }
}

// ─── Fill & sample ────────────────────────────────────────────────────────

/// 4-connected flood fill from `seed`, recoloring at most [`MAX_FILL`] pixels.
///
/// Returns the number of pixels recolored.
pub fn flood_fill(grid: &mut PixelGrid, seed: Point, fill: Color) -> usize {
    flood_fill_bounded(grid, seed, fill, MAX_FILL)
}

/// Flood fill with an explicit pixel budget.
///
/// A no-op (returning 0) when the seed is outside the grid or already has the
/// fill color. Stops as soon as `limit` pixels have been recolored, even if
/// the region continues.
pub fn flood_fill_bounded(grid: &mut PixelGrid, seed: Point, fill: Color, limit: usize) -> usize {
    let Some(target) = grid.get(seed) else {
        return 0;
    };
    if target == fill {
        return 0;
    }

    let mut queue = VecDeque::with_capacity(1024);
    queue.push_back(seed);
    let mut filled = 0;

    while filled < limit {
        let Some(p) = queue.pop_front() else {
            break;
        };
        if grid.get(p) != Some(target) {
            continue;
        }
        grid.set(p, fill);
        filled += 1;

        queue.push_back(p.offset(1, 0));
        queue.push_back(p.offset(-1, 0));
        queue.push_back(p.offset(0, 1));
        queue.push_back(p.offset(0, -1));
    }

    if filled >= limit && !queue.is_empty() {
        log::debug!("flood fill from ({}, {}) stopped at limit {limit}", seed.x, seed.y);
    }
    filled
}

/// Color under `p`. `None` outside the grid.
pub fn eyedropper(grid: &PixelGrid, p: Point) -> Option<Color> {
    grid.get(p)
}
