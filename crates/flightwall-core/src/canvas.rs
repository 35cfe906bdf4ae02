//! Pixel-addressable drawing surface.
//!
//! Implementors only provide in-bounds writes, clearing, and the flush
//! hand-off. Every drawing primitive on top of that clips, so callers may pass
//! any coordinates without checking them first.

use crate::{color::Rgb565, font};

pub trait Canvas {
    /// Error reported by the output collaborator during [`Canvas::flush`].
    type Error;

    /// Surface size in pixels as `(width, height)`.
    fn size(&self) -> (u16, u16);

    /// Writes one pixel. Only called with in-bounds coordinates.
    fn write_pixel(&mut self, x: u16, y: u16, color: Rgb565);

    /// Sets every pixel to background (0).
    fn clear(&mut self);

    /// Hands the finished frame to the physical or virtual output.
    fn flush(&mut self) -> Result<(), Self::Error>;

    fn width(&self) -> i32 {
        self.size().0 as i32
    }

    fn height(&self) -> i32 {
        self.size().1 as i32
    }

    /// Writes a pixel when it lies on the surface, otherwise does nothing.
    fn draw_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return;
        }

        self.write_pixel(x as u16, y as u16, color);
    }

    /// One-pixel rectangle outline.
    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb565) {
        if w <= 0 || h <= 0 {
            return;
        }

        for px in x..(x + w) {
            self.draw_pixel(px, y, color);
            self.draw_pixel(px, y + h - 1, color);
        }
        for py in y..(y + h) {
            self.draw_pixel(x, py, color);
            self.draw_pixel(x + w - 1, py, color);
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb565) {
        for py in y..(y + h) {
            for px in x..(x + w) {
                self.draw_pixel(px, py, color);
            }
        }
    }

    /// Draws `thickness` concentric outlines, inset by `0..thickness` from
    /// the surface edge.
    fn draw_rect_stroke(&mut self, thickness: u16, color: Rgb565) {
        let (w, h) = (self.width(), self.height());

        for t in 0..thickness as i32 {
            self.draw_rect(t, t, w - 2 * t, h - 2 * t, color);
        }
    }

    /// Draws one glyph cell with its top-left corner at `(x, y)`.
    fn draw_glyph(&mut self, x: i32, y: i32, c: char, size: u8, color: Rgb565) {
        let scale = size.max(1) as i32;
        let columns = font::glyph(font::normalize(c));

        for (col, bits) in columns.iter().enumerate() {
            for row in 0..font::GLYPH_H {
                if bits & (1 << row) != 0 {
                    let px = x + col as i32 * scale;
                    let py = y + row * scale;
                    self.fill_rect(px, py, scale, scale, color);
                }
            }
        }
    }

    /// Draws `text` left to right in `6 * size` wide cells.
    ///
    /// Returns the x coordinate just past the last cell.
    fn draw_text(&mut self, x: i32, y: i32, text: &str, size: u8, color: Rgb565) -> i32 {
        let advance = font::cell_width(size.max(1));
        let mut cursor_x = x;

        for c in text.chars() {
            self.draw_glyph(cursor_x, y, c, size, color);
            cursor_x += advance;
        }

        cursor_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::PixelCanvas;

    const RED: Rgb565 = Rgb565(0xF800);

    #[test]
    fn out_of_bounds_pixels_are_dropped() {
        let mut canvas = PixelCanvas::new(8, 4);

        canvas.draw_pixel(-1, 0, RED);
        canvas.draw_pixel(0, -1, RED);
        canvas.draw_pixel(8, 0, RED);
        canvas.draw_pixel(0, 4, RED);
        assert_eq!(canvas.count(RED), 0);

        canvas.draw_pixel(7, 3, RED);
        assert_eq!(canvas.pixel(7, 3), RED);
        assert_eq!(canvas.count(RED), 1);
    }

    #[test]
    fn stroke_draws_concentric_outlines() {
        let mut canvas = PixelCanvas::new(10, 8);
        canvas.draw_rect_stroke(2, RED);

        // Outer ring 2*(10+8)-4 = 32, inner ring 2*(8+6)-4 = 24.
        assert_eq!(canvas.count(RED), 56);
        assert_eq!(canvas.pixel(0, 0), RED);
        assert_eq!(canvas.pixel(1, 1), RED);
        assert_eq!(canvas.pixel(2, 2), Rgb565::BLACK);
        assert_eq!(canvas.pixel(9, 7), RED);
        assert_eq!(canvas.pixel(8, 6), RED);
    }

    #[test]
    fn zero_thickness_stroke_draws_nothing() {
        let mut canvas = PixelCanvas::new(10, 8);
        canvas.draw_rect_stroke(0, RED);
        assert_eq!(canvas.count(RED), 0);
    }

    #[test]
    fn text_cells_scale_with_size() {
        let mut small = PixelCanvas::new(32, 32);
        let end = small.draw_text(0, 0, "|", 1, RED);
        assert_eq!(end, 6);
        assert_eq!(small.count(RED), 7);
        assert_eq!(small.bounds(RED), Some((2, 0, 2, 6)));

        let mut large = PixelCanvas::new(32, 32);
        let end = large.draw_text(0, 0, "|", 2, RED);
        assert_eq!(end, 12);
        assert_eq!(large.count(RED), 28);
        assert_eq!(large.bounds(RED), Some((4, 0, 5, 13)));
    }

    #[test]
    fn text_is_clipped_at_the_edges() {
        let mut canvas = PixelCanvas::new(8, 8);
        let end = canvas.draw_text(-3, -2, "HH", 1, RED);

        assert_eq!(end, 9);
        assert!(canvas.count(RED) > 0);
        assert!(canvas.bounds(RED).is_some_and(|(x0, y0, _, _)| x0 >= 0 && y0 >= 0));
    }
}
