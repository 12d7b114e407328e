//! Live canvas plus its single-level backup.
//!
//! `CanvasState` owns two independent grids of identical shape. `backup`
//! copies live → backup, `restore` copies backup → live. There is no history
//! beyond that one snapshot: restoring twice in a row restores the same pixels.

use crate::color::Color;
use crate::grid::{PixelGrid, Point};

#[derive(Debug, Clone)]
pub struct CanvasState {
    live: PixelGrid,
    backup: PixelGrid,
    background: Color,
    /// Set on every pixel mutation; cleared by `take_dirty`.
    dirty: bool,
}

impl CanvasState {
    /// Create both grids filled with `background`.
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        log::debug!("canvas {width}x{height} background {background}");
        Self {
            live: PixelGrid::new(width, height, background),
            backup: PixelGrid::new(width, height, background),
            background,
            dirty: true,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.live.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.live.height()
    }

    #[inline]
    pub fn background(&self) -> Color {
        self.background
    }

    /// The grid being drawn on.
    pub fn live(&self) -> &PixelGrid {
        &self.live
    }

    /// Mutable access to the live grid. Marks the canvas dirty.
    pub fn live_mut(&mut self) -> &mut PixelGrid {
        self.dirty = true;
        &mut self.live
    }

    /// The most recent snapshot.
    pub fn backup_grid(&self) -> &PixelGrid {
        &self.backup
    }

    #[inline]
    pub fn get(&self, p: Point) -> Option<Color> {
        self.live.get(p)
    }

    pub fn set(&mut self, p: Point, color: Color) {
        self.live_mut().set(p, color);
    }

    /// Snapshot live → backup. Does not touch the live grid.
    pub fn backup(&mut self) {
        self.live.snapshot_to(&mut self.backup);
    }

    /// Roll the live grid back to the last snapshot.
    pub fn restore(&mut self) {
        self.dirty = true;
        self.live.restore_from(&self.backup);
    }

    /// Snapshot, then fill the live grid with the background color.
    pub fn clear(&mut self) {
        self.backup();
        let bg = self.background;
        self.live_mut().fill(bg);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Return and reset the dirty flag. Hosts call this once per frame to
    /// decide whether the buffer must be re-presented.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Row-major copy of the live pixels.
    pub fn export_pixels(&self) -> Vec<Color> {
        self.live.pixels().to_vec()
    }

    /// Row-major interleaved RGBA bytes of the live pixels.
    pub fn export_rgba8(&self) -> Vec<u8> {
        self.live
            .pixels()
            .iter()
            .flat_map(|c| c.to_array())
            .collect()
    }
}
