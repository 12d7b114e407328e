//! Fixed-size, row-major pixel storage.
//!
//! Coordinates are signed so that rasterizers can compute positions past the
//! edges freely: every write outside `[0, width) × [0, height)` is dropped, and
//! every read outside returns `None`.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// An integer grid position. May lie outside any particular grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Grid cell containing a floating-point position.
    pub fn from_f32(x: f32, y: f32) -> Self {
        Self::new(x.floor() as i32, y.floor() as i32)
    }

    /// Shifted by `(dx, dy)`, saturating at the `i32` range.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A `width × height` grid of colors. Dimensions never change after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl PixelGrid {
    /// Create a grid with every pixel set to `fill`.
    pub fn new(width: usize, height: usize, fill: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.y as usize * self.width + p.x as usize)
    }

    /// Read a pixel. `None` when `p` is outside the grid.
    #[inline]
    pub fn get(&self, p: Point) -> Option<Color> {
        self.index(p).map(|i| self.pixels[i])
    }

    /// Write a pixel. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, p: Point, color: Color) {
        if let Some(i) = self.index(p) {
            self.pixels[i] = color;
        }
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Overwrite all pixels from a row-major slice. Returns `false` (and leaves
    /// the grid untouched) if the slice length does not match.
    pub fn set_pixels(&mut self, pixels: &[Color]) -> bool {
        if pixels.len() != self.pixels.len() {
            log::warn!(
                "set_pixels: expected {} pixels, got {}",
                self.pixels.len(),
                pixels.len()
            );
            return false;
        }
        self.pixels.copy_from_slice(pixels);
        true
    }

    pub fn same_shape(&self, other: &PixelGrid) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Copy every pixel of `self` into `other`. Grids of different shape are
    /// left untouched.
    pub fn snapshot_to(&self, other: &mut PixelGrid) {
        if !self.same_shape(other) {
            log::warn!(
                "snapshot_to: shape mismatch {}x{} vs {}x{}",
                self.width,
                self.height,
                other.width,
                other.height
            );
            return;
        }
        other.pixels.copy_from_slice(&self.pixels);
    }

    /// Copy every pixel of `other` into `self`.
    pub fn restore_from(&mut self, other: &PixelGrid) {
        other.snapshot_to(self);
    }

    /// Number of pixels equal to `color`.
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|c| **c == color).count()
    }
}
