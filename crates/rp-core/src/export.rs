//! Hand-off point to an external image encoder.
//!
//! The core never encodes image formats or touches the filesystem. A host
//! supplies an [`ImageEncoder`] (PNG writer, clipboard, network upload, ...)
//! and receives the raw row-major buffer.

use crate::canvas::CanvasState;
use crate::color::Color;

/// External collaborator that encodes and persists a pixel buffer.
pub trait ImageEncoder {
    /// `pixels` is row-major with `width * height` entries.
    fn encode_and_save(&mut self, width: usize, height: usize, pixels: &[Color]) -> Result<(), String>;
}

/// Pass the live grid of `canvas` to `encoder`.
pub fn export_canvas(canvas: &CanvasState, encoder: &mut dyn ImageEncoder) -> Result<(), String> {
    let live = canvas.live();
    log::debug!("exporting {}x{} canvas", live.width(), live.height());
    encoder.encode_and_save(live.width(), live.height(), live.pixels())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Point;

    #[derive(Default)]
    struct Capture {
        frames: Vec<(usize, usize, Vec<Color>)>,
    }

    impl ImageEncoder for Capture {
        fn encode_and_save(&mut self, width: usize, height: usize, pixels: &[Color]) -> Result<(), String> {
            self.frames.push((width, height, pixels.to_vec()));
            Ok(())
        }
    }

    struct Failing;

    impl ImageEncoder for Failing {
        fn encode_and_save(&mut self, _: usize, _: usize, _: &[Color]) -> Result<(), String> {
            Err("disk full".to_string())
        }
    }

    #[test]
    fn encoder_receives_live_buffer() {
        let mut canvas = CanvasState::new(3, 2, Color::WHITE);
        canvas.set(Point::new(2, 1), Color::RED);
        let mut capture = Capture::default();
        export_canvas(&canvas, &mut capture).unwrap();

        let (w, h, pixels) = &capture.frames[0];
        assert_eq!((*w, *h), (3, 2));
        assert_eq!(pixels[5], Color::RED);
    }

    #[test]
    fn encoder_errors_propagate() {
        let canvas = CanvasState::new(1, 1, Color::WHITE);
        assert_eq!(export_canvas(&canvas, &mut Failing), Err("disk full".to_string()));
    }
}
