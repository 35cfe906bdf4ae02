//! WS2812B wire encoding and tiled-panel pixel ordering.
//!
//! The strip is driven from a plain SPI MOSI line clocked at [`SPI_HZ`].
//! Each WS2812 data bit becomes three SPI bits (`0 -> 100`, `1 -> 110`),
//! so one 24-bit GRB pixel takes [`BYTES_PER_LED`] SPI bytes.

/// Panel width in pixels.
pub const WIDTH: usize = 128;
/// Panel height in pixels.
pub const HEIGHT: usize = 64;
/// Number of LEDs on the strip.
pub const PIXELS: usize = WIDTH * HEIGHT;

/// SPI clock that gives ~417 ns per encoded bit.
pub const SPI_HZ: u32 = 2_400_000;
/// SPI bytes per encoded color byte.
pub const BYTES_PER_COLOR: usize = 3;
/// SPI bytes per LED.
pub const BYTES_PER_LED: usize = 3 * BYTES_PER_COLOR;
/// Low bytes sent after a frame; 96 bytes hold the line low for 320 us.
pub const RESET_BYTES: usize = 96;

const BIT_ONE: u32 = 0b110;
const BIT_ZERO: u32 = 0b100;

/// Scales `value` by `brightness / 256`, keeping full brightness lossless.
#[inline]
pub const fn scale8(value: u8, brightness: u8) -> u8 {
    ((value as u16 * (1 + brightness as u16)) >> 8) as u8
}

/// Expands one color byte into its 24-bit SPI pattern, MSB first.
#[inline]
pub const fn encode_byte(byte: u8) -> [u8; BYTES_PER_COLOR] {
    let mut bits: u32 = 0;
    let mut i = 0;
    while i < 8 {
        let pattern = if byte & (0x80 >> i) != 0 {
            BIT_ONE
        } else {
            BIT_ZERO
        };
        bits = (bits << 3) | pattern;
        i += 1;
    }

    [(bits >> 16) as u8, (bits >> 8) as u8, bits as u8]
}

/// Encodes one RGB888 pixel as GRB after brightness scaling.
pub fn encode_pixel(rgb: [u8; 3], brightness: u8) -> [u8; BYTES_PER_LED] {
    let [r, g, b] = rgb;
    let mut out = [0u8; BYTES_PER_LED];

    for (slot, channel) in out.chunks_exact_mut(BYTES_PER_COLOR).zip([g, r, b]) {
        slot.copy_from_slice(&encode_byte(scale8(channel, brightness)));
    }

    out
}

/// Where the first LED of a tile, or the first tile of the panel, sits.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    const fn is_right(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomRight)
    }

    const fn is_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::BottomRight)
    }

    /// Diagonally opposite corner.
    const fn opposite(self) -> Self {
        match self {
            Self::TopLeft => Self::BottomRight,
            Self::TopRight => Self::BottomLeft,
            Self::BottomLeft => Self::TopRight,
            Self::BottomRight => Self::TopLeft,
        }
    }
}

/// Whether consecutive LEDs run along rows or columns.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Axis {
    Rows,
    Columns,
}

/// Whether every line starts on the same side or alternates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Sequence {
    Progressive,
    Zigzag,
}

/// Wiring of a grid of identical LED tiles chained into one strip.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PanelLayout {
    pub tile_width: u16,
    pub tile_height: u16,
    pub tiles_x: u16,
    pub tiles_y: u16,
    pub pixel_origin: Corner,
    pub pixel_axis: Axis,
    pub pixel_sequence: Sequence,
    pub tile_origin: Corner,
    pub tile_axis: Axis,
    pub tile_sequence: Sequence,
}

impl PanelLayout {
    /// 4x2 grid of 32x32 tiles. Inside each tile the strip starts bottom
    /// right and snakes up and down columns; tiles are chained the same way
    /// starting from the top-right tile.
    pub const FLIGHTWALL_MINI: Self = Self {
        tile_width: 32,
        tile_height: 32,
        tiles_x: 4,
        tiles_y: 2,
        pixel_origin: Corner::BottomRight,
        pixel_axis: Axis::Columns,
        pixel_sequence: Sequence::Zigzag,
        tile_origin: Corner::TopRight,
        tile_axis: Axis::Columns,
        tile_sequence: Sequence::Zigzag,
    };

    /// Single tile whose strip runs along rows from the top-left corner.
    pub const fn single(width: u16, height: u16) -> Self {
        Self {
            tile_width: width,
            tile_height: height,
            tiles_x: 1,
            tiles_y: 1,
            pixel_origin: Corner::TopLeft,
            pixel_axis: Axis::Rows,
            pixel_sequence: Sequence::Progressive,
            tile_origin: Corner::TopLeft,
            tile_axis: Axis::Rows,
            tile_sequence: Sequence::Progressive,
        }
    }

    pub const fn width(&self) -> usize {
        self.tile_width as usize * self.tiles_x as usize
    }

    pub const fn height(&self) -> usize {
        self.tile_height as usize * self.tiles_y as usize
    }

    pub const fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Strip position of the LED at `(x, y)`, or `None` off the panel.
    pub fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width() || y >= self.height() {
            return None;
        }

        let tile_w = self.tile_width as usize;
        let tile_h = self.tile_height as usize;

        let mut minor = x / tile_w;
        let mut major = y / tile_h;
        if self.tile_origin.is_right() {
            minor = self.tiles_x as usize - 1 - minor;
        }
        if self.tile_origin.is_bottom() {
            major = self.tiles_y as usize - 1 - major;
        }
        let scale = match self.tile_axis {
            Axis::Rows => self.tiles_x as usize,
            Axis::Columns => {
                core::mem::swap(&mut major, &mut minor);
                self.tiles_y as usize
            }
        };

        // Odd lines of a zigzag tile chain are mounted rotated 180 degrees.
        let mut corner = self.pixel_origin;
        let tile = match self.tile_sequence {
            Sequence::Zigzag if major % 2 == 1 => {
                corner = corner.opposite();
                (major + 1) * scale - 1 - minor
            }
            _ => major * scale + minor,
        };

        let offset = tile * tile_w * tile_h;
        Some(offset + self.index_in_tile(x % tile_w, y % tile_h, corner))
    }

    fn index_in_tile(&self, x: usize, y: usize, corner: Corner) -> usize {
        let tile_w = self.tile_width as usize;
        let tile_h = self.tile_height as usize;

        let mut minor = if corner.is_right() { tile_w - 1 - x } else { x };
        let mut major = if corner.is_bottom() { tile_h - 1 - y } else { y };
        let scale = match self.pixel_axis {
            Axis::Rows => tile_w,
            Axis::Columns => {
                core::mem::swap(&mut major, &mut minor);
                tile_h
            }
        };

        match self.pixel_sequence {
            Sequence::Zigzag if major % 2 == 1 => (major + 1) * scale - 1 - minor,
            _ => major * scale + minor,
        }
    }
}
