//! In-memory frame for a tiled WS2812 panel, stored in strip order.

use crate::protocol::{PIXELS, PanelLayout};

/// RGB888 frame whose storage order is the order LEDs sit on the strip.
#[derive(Clone)]
pub struct FrameBuffer {
    layout: PanelLayout,
    pixels: [[u8; 3]; PIXELS],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new(PanelLayout::FLIGHTWALL_MINI)
    }
}

impl FrameBuffer {
    /// Creates a black frame. Layouts larger than [`PIXELS`] are clipped to
    /// the first [`PIXELS`] LEDs of the strip.
    pub const fn new(layout: PanelLayout) -> Self {
        Self {
            layout,
            pixels: [[0; 3]; PIXELS],
        }
    }

    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    pub fn width(&self) -> usize {
        self.layout.width()
    }

    pub fn height(&self) -> usize {
        self.layout.height()
    }

    pub fn clear(&mut self) {
        self.pixels.fill([0; 3]);
    }

    /// Sets a pixel color.
    ///
    /// Returns `true` when the pixel is on the panel, `false` otherwise.
    pub fn set_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) -> bool {
        let Some(slot) = self
            .layout
            .index_of(x, y)
            .and_then(|index| self.pixels.get_mut(index))
        else {
            return false;
        };

        *slot = rgb;
        true
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        let index = self.layout.index_of(x, y)?;
        self.pixels.get(index).copied()
    }

    /// LED colors in the order they are shifted out.
    pub fn strip(&self) -> &[[u8; 3]] {
        let len = self.layout.pixel_count().min(PIXELS);
        &self.pixels[..len]
    }
}
