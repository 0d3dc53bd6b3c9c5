/// Alpha channel of a fully opaque packed ARGB pixel.
pub const OPAQUE: u32 = 0xFF00_0000;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour { r: 0, g: 0, b: 0 };

    /// Builds a colour from a `0xRRGGBB` literal. Bits above 24 are ignored.
    #[must_use]
    pub const fn from_rgb_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    /// Packs the colour as an opaque `0xAARRGGBB` pixel.
    #[must_use]
    pub const fn to_argb(self) -> u32 {
        OPAQUE | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb_hex_splits_channels() {
        let colour = Colour::from_rgb_hex(0x0AFC84);

        assert_eq!(colour, Colour { r: 0x0A, g: 0xFC, b: 0x84 });
    }

    #[test]
    fn test_from_rgb_hex_ignores_high_bits() {
        assert_eq!(
            Colour::from_rgb_hex(0x7F12_3456),
            Colour { r: 0x12, g: 0x34, b: 0x56 }
        );
    }

    #[test]
    fn test_to_argb_is_opaque() {
        let argb = Colour { r: 1, g: 2, b: 3 }.to_argb();

        assert_eq!(argb, 0xFF01_0203);
        assert_eq!(argb & OPAQUE, OPAQUE);
    }

    #[test]
    fn test_black_packs_to_opaque_black() {
        assert_eq!(Colour::BLACK.to_argb(), 0xFF00_0000);
    }
}
