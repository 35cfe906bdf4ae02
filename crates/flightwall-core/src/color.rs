//! 16-bit RGB565 colors.

/// Packed RGB565 color: 5 bits red, 6 bits green, 5 bits blue.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);

    /// Packs 8-bit channels by dropping their low bits.
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Self((((r as u16) & 0xF8) << 8) | (((g as u16) & 0xFC) << 3) | ((b as u16) >> 3))
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Expands to 8-bit channels, replicating the high bits into the low
    /// bits so full-scale values map to 255.
    pub const fn to_rgb888(self) -> [u8; 3] {
        let r5 = ((self.0 >> 11) & 0x1F) as u8;
        let g6 = ((self.0 >> 5) & 0x3F) as u8;
        let b5 = (self.0 & 0x1F) as u8;

        [
            (r5 << 3) | (r5 >> 2),
            (g6 << 2) | (g6 >> 4),
            (b5 << 3) | (b5 >> 2),
        ]
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_scale_channels_round_trip_to_255() {
        assert_eq!(Rgb565::WHITE.to_rgb888(), [255, 255, 255]);
        assert_eq!(Rgb565::from_rgb888(255, 255, 255), Rgb565::WHITE);
        assert_eq!(Rgb565::BLACK.to_rgb888(), [0, 0, 0]);
    }

    #[test]
    fn packing_drops_low_bits() {
        assert_eq!(Rgb565::from_rgb888(255, 0, 0).raw(), 0xF800);
        assert_eq!(Rgb565::from_rgb888(0, 255, 0).raw(), 0x07E0);
        assert_eq!(Rgb565::from_rgb888(0, 0, 255).raw(), 0x001F);
        assert_eq!(Rgb565::from_rgb888(0, 100, 255).raw(), 0x033F);
    }

    #[test]
    fn transparent_magenta_expands_to_pure_magenta() {
        assert_eq!(Rgb565(0xF81F).to_rgb888(), [255, 0, 255]);
    }
}
