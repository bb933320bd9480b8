#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour { r: 0, g: 0, b: 0 };

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the colour as `0x00RRGGBB`.
    #[must_use]
    pub fn to_packed(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    #[must_use]
    pub fn from_packed(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_is_all_zero() {
        assert_eq!(Colour::BLACK, Colour { r: 0, g: 0, b: 0 });
        assert_eq!(Colour::BLACK, Colour::default());
    }

    #[test]
    fn test_packed_layout() {
        let colour = Colour::new(0x12, 0x34, 0x56);

        assert_eq!(colour.to_packed(), 0x0012_3456);
        assert_eq!(Colour::from_packed(0x0012_3456), colour);
    }

    #[test]
    fn test_from_packed_ignores_high_byte() {
        assert_eq!(Colour::from_packed(0xff00_00ff), Colour::new(0, 0, 255));
    }
}
