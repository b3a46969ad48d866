//! Palette-indexed color
use embedded_graphics_core::pixelcolor::raw::{RawData, RawU8};
use embedded_graphics_core::pixelcolor::PixelColor;

/// Number of entries in the mode 13h palette
pub const NUMBER_COLORS: usize = 256;

/// One byte of framebuffer: an index into whatever palette is loaded.
///
/// The drawing code never looks inside it beyond equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PaletteIndex(pub u8);

impl PaletteIndex {
    // Indices of the 16 EGA colors in the default VGA palette
    pub const BLACK: PaletteIndex = PaletteIndex(0x00);
    pub const BLUE: PaletteIndex = PaletteIndex(0x01);
    pub const GREEN: PaletteIndex = PaletteIndex(0x02);
    pub const CYAN: PaletteIndex = PaletteIndex(0x03);
    pub const RED: PaletteIndex = PaletteIndex(0x04);
    pub const MAGENTA: PaletteIndex = PaletteIndex(0x05);
    pub const BROWN: PaletteIndex = PaletteIndex(0x06);
    pub const LIGHT_GRAY: PaletteIndex = PaletteIndex(0x07);
    pub const DARK_GRAY: PaletteIndex = PaletteIndex(0x08);
    pub const LIGHT_BLUE: PaletteIndex = PaletteIndex(0x09);
    pub const LIGHT_GREEN: PaletteIndex = PaletteIndex(0x0A);
    pub const LIGHT_CYAN: PaletteIndex = PaletteIndex(0x0B);
    pub const LIGHT_RED: PaletteIndex = PaletteIndex(0x0C);
    pub const LIGHT_MAGENTA: PaletteIndex = PaletteIndex(0x0D);
    pub const YELLOW: PaletteIndex = PaletteIndex(0x0E);
    pub const WHITE: PaletteIndex = PaletteIndex(0x0F);

    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    pub const fn index(self) -> u8 {
        self.0
    }
}

impl From<u8> for PaletteIndex {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

impl From<PaletteIndex> for u8 {
    fn from(color: PaletteIndex) -> Self {
        color.0
    }
}

impl PixelColor for PaletteIndex {
    type Raw = RawU8;
}

impl From<RawU8> for PaletteIndex {
    fn from(raw: RawU8) -> Self {
        Self(raw.into_inner())
    }
}

impl From<PaletteIndex> for RawU8 {
    fn from(color: PaletteIndex) -> Self {
        RawU8::new(color.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_raw_data() {
        let raw: RawU8 = PaletteIndex::LIGHT_CYAN.into();
        assert_eq!(raw.into_inner(), 0x0B);
        assert_eq!(PaletteIndex::from(raw), PaletteIndex::LIGHT_CYAN);
    }

    #[test]
    fn index_is_opaque_byte() {
        assert_eq!(u8::from(PaletteIndex::new(200)), 200);
        assert_eq!(PaletteIndex::from(15u8), PaletteIndex::WHITE);
    }
}
