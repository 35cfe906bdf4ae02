//! Airline logo bitmaps and their binary blob format.
//!
//! A blob is exactly `LOGO_WIDTH * LOGO_HEIGHT` little-endian RGB565 values,
//! row-major, top-to-bottom and left-to-right. [`TRANSPARENT_RGB565`] marks
//! pixels that must not be drawn.

use alloc::vec::Vec;
use core::fmt;

pub const LOGO_WIDTH: usize = 32;
pub const LOGO_HEIGHT: usize = 32;
pub const LOGO_PIXELS: usize = LOGO_WIDTH * LOGO_HEIGHT;
/// Size in bytes of one logo blob.
pub const LOGO_BYTES: usize = LOGO_PIXELS * 2;

/// Pure magenta; logo pixels with this value are skipped.
pub const TRANSPARENT_RGB565: u16 = 0xF81F;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LogoError {
    /// Blob length differs from [`LOGO_BYTES`].
    WrongSize { expected: usize, actual: usize },
}

impl fmt::Display for LogoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongSize { expected, actual } => {
                write!(f, "logo blob is {actual} bytes, expected {expected}")
            }
        }
    }
}

/// Decodes a logo blob into row-major pixels.
pub fn decode_logo(bytes: &[u8]) -> Result<Vec<u16>, LogoError> {
    if bytes.len() != LOGO_BYTES {
        return Err(LogoError::WrongSize {
            expected: LOGO_BYTES,
            actual: bytes.len(),
        });
    }

    Ok(bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

/// Number of pixels that will actually be drawn.
pub fn opaque_pixels(pixels: &[u16]) -> usize {
    pixels.iter().filter(|p| **p != TRANSPARENT_RGB565).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn decodes_little_endian_row_major() {
        let mut blob = vec![0u8; LOGO_BYTES];
        blob[0] = 0x1F;
        blob[1] = 0xF8;
        blob[2] = 0x34;
        blob[3] = 0x12;
        let last = LOGO_BYTES - 2;
        blob[last] = 0xE0;
        blob[last + 1] = 0x07;

        let pixels = decode_logo(&blob).unwrap();

        assert_eq!(pixels.len(), LOGO_PIXELS);
        assert_eq!(pixels[0], TRANSPARENT_RGB565);
        assert_eq!(pixels[1], 0x1234);
        assert_eq!(pixels[LOGO_PIXELS - 1], 0x07E0);
        assert_eq!(opaque_pixels(&pixels), LOGO_PIXELS - 1);
    }

    #[test]
    fn rejects_any_other_length() {
        for len in [0, 1, LOGO_BYTES - 1, LOGO_BYTES + 2] {
            assert_eq!(
                decode_logo(&vec![0u8; len]),
                Err(LogoError::WrongSize {
                    expected: LOGO_BYTES,
                    actual: len,
                })
            );
        }
    }
}
