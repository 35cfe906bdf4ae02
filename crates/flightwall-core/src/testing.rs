//! In-memory canvas and clock used by unit tests.

use core::{cell::Cell, convert::Infallible};

use alloc::{vec, vec::Vec};

use crate::{canvas::Canvas, color::Rgb565, cycler::Clock};

pub(crate) struct PixelCanvas {
    width: u16,
    height: u16,
    pixels: Vec<Rgb565>,
    pub(crate) flushes: usize,
    pub(crate) clears: usize,
}

impl PixelCanvas {
    pub(crate) fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb565::BLACK; width as usize * height as usize],
            flushes: 0,
            clears: 0,
        }
    }

    pub(crate) fn pixel(&self, x: i32, y: i32) -> Rgb565 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    pub(crate) fn fill(&mut self, color: Rgb565) {
        self.pixels.fill(color);
    }

    pub(crate) fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|p| **p == color).count()
    }

    /// Bounding box `(x0, y0, x1, y1)` of every pixel with `color`.
    pub(crate) fn bounds(&self, color: Rgb565) -> Option<(i32, i32, i32, i32)> {
        let mut bounds: Option<(i32, i32, i32, i32)> = None;

        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if self.pixel(x, y) != color {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }

        bounds
    }

    /// Bounding box of `color` restricted to the given rectangle.
    pub(crate) fn bounds_in(
        &self,
        color: Rgb565,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
    ) -> Option<(i32, i32, i32, i32)> {
        let mut bounds: Option<(i32, i32, i32, i32)> = None;

        for py in y..(y + h) {
            for px in x..(x + w) {
                if self.pixel(px, py) != color {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (px, py, px, py),
                    Some((x0, y0, x1, y1)) => (x0.min(px), y0.min(py), x1.max(px), y1.max(py)),
                });
            }
        }

        bounds
    }
}

impl Canvas for PixelCanvas {
    type Error = Infallible;

    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn write_pixel(&mut self, x: u16, y: u16, color: Rgb565) {
        self.pixels[y as usize * self.width as usize + x as usize] = color;
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.pixels.fill(Rgb565::BLACK);
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

/// Clock that only moves when a test tells it to.
#[derive(Default)]
pub(crate) struct ManualClock {
    now_ms: Cell<u64>,
}

impl ManualClock {
    pub(crate) fn new(now_ms: u64) -> Self {
        Self {
            now_ms: Cell::new(now_ms),
        }
    }

    pub(crate) fn advance(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }
}
