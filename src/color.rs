//! RGB color type and the built-in palette.
//!
//! Every pixel the crate stores or ships is a 24-bit RGB triple. Channels
//! are `u8`, so any value that reaches a buffer is already inside the range
//! the device accepts.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels in the row-major order the device expects.
    #[inline]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb` form used by the text overlay commands.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// Named colors.
pub mod palette {
    use super::Rgb;

    /// Black, the fill color of a fresh buffer.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// White.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Red.
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    /// Green.
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    /// Blue.
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    /// Yellow.
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    /// Cyan.
    pub const CYAN: Rgb = Rgb::new(0, 255, 255);
    /// Magenta.
    pub const MAGENTA: Rgb = Rgb::new(255, 0, 255);
    /// Mid gray.
    pub const GRAY: Rgb = Rgb::new(128, 128, 128);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(255, 0, 10).to_hex(), "#ff000a");
        assert_eq!(palette::BLACK.to_hex(), "#000000");
        assert_eq!(Rgb::new(0xab, 0xcd, 0xef).to_hex(), "#abcdef");
    }

    #[test]
    fn test_channels_order() {
        assert_eq!(Rgb::new(1, 2, 3).channels(), [1, 2, 3]);
    }

    #[test]
    fn test_from_tuple() {
        let color: Rgb = (9, 8, 7).into();
        assert_eq!(color, Rgb::new(9, 8, 7));
    }

    #[test]
    fn test_default_is_black() {
        assert_eq!(Rgb::default(), palette::BLACK);
    }
}
