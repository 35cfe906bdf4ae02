//! Drawing airline logos and the fallback airplane icon.

use log::debug;

use crate::{
    canvas::Canvas,
    color::Rgb565,
    logo::{LOGO_HEIGHT, LOGO_PIXELS, LOGO_WIDTH, TRANSPARENT_RGB565},
};

pub const ICON_SIZE: usize = 32;

/// Top-down airplane silhouette, one `u32` per row, MSB is the leftmost
/// column.
pub const AIRPLANE_ICON: [u32; ICON_SIZE] = [
    0x0001_8000,
    0x0003_C000,
    0x0003_C000,
    0x0001_8000,
    0x0001_8000,
    0x0001_8000,
    0x0001_8000,
    0x0001_8000,
    0x0001_8000,
    0x0007_E000,
    0x001F_F800,
    0x07FF_FFE0,
    0x07FF_FFE0,
    0x1FFF_FFF8,
    0x07FF_FFE0,
    0x07FF_FFE0,
    0x001F_F800,
    0x0007_E000,
    0x0001_8000,
    0x0001_8000,
    0x0001_8000,
    0x0001_8000,
    0x0001_8000,
    0x0001_8000,
    0x0007_E000,
    0x003F_FC00,
    0x003F_FC00,
    0x0007_E000,
    0x0001_8000,
    0x0000_0000,
    0x0000_0000,
    0x0000_0000,
];

/// Draws a logo with its top-left corner at `(x, y)`.
///
/// Buffers that are not exactly one logo in size are ignored. Transparent
/// pixels leave the canvas untouched. Returns whether anything was drawn.
pub fn draw_logo<C: Canvas>(canvas: &mut C, x: i32, y: i32, pixels: &[u16]) -> bool {
    if pixels.len() != LOGO_PIXELS {
        return false;
    }

    for (row, line) in pixels.chunks_exact(LOGO_WIDTH).enumerate() {
        for (col, &rgb565) in line.iter().enumerate() {
            if rgb565 == TRANSPARENT_RGB565 {
                continue;
            }
            canvas.draw_pixel(x + col as i32, y + row as i32, Rgb565(rgb565));
        }
    }
    true
}

/// Draws the airplane silhouette in a single color, in the same box a logo
/// would occupy.
pub fn draw_fallback_icon<C: Canvas>(canvas: &mut C, x: i32, y: i32, color: Rgb565) {
    for (row, bits) in AIRPLANE_ICON.iter().enumerate() {
        for col in 0..ICON_SIZE {
            if bits & (1 << (ICON_SIZE - 1 - col)) != 0 {
                canvas.draw_pixel(x + col as i32, y + row as i32, color);
            }
        }
    }
}

/// Draws `logo` when it is a valid bitmap, otherwise the fallback icon.
pub fn draw_logo_or_fallback<C: Canvas>(
    canvas: &mut C,
    x: i32,
    y: i32,
    logo: &[u16],
    fallback_color: Rgb565,
) {
    if draw_logo(canvas, x, y, logo) {
        return;
    }

    if !logo.is_empty() {
        debug!(
            "logo has {} pixels, expected {}x{}; drawing fallback icon",
            logo.len(),
            LOGO_WIDTH,
            LOGO_HEIGHT
        );
    }
    draw_fallback_icon(canvas, x, y, fallback_color);
}
