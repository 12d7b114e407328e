pub mod canvas;
pub mod color;
pub mod export;
pub mod grid;
pub mod palette;
pub mod raster;

pub use canvas::CanvasState;
pub use color::Color;
pub use export::{ImageEncoder, export_canvas};
pub use grid::{PixelGrid, Point};
pub use palette::{PALETTE_SIZE, Palette};
pub use raster::{MAX_FILL, Stamp};
