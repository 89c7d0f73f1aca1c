/// Straight-alpha RGB color used for palette tints and postcard framing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from raw channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string (leading `#` optional).
    ///
    /// Palette hex values are static catalog data, so the parser is strict:
    /// anything other than six hex digits yields `None`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Channel values as an array in RGB order.
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(Rgb8::from_hex("#FFE0BD"), Some(Rgb8::new(255, 224, 189)));
        assert_eq!(Rgb8::from_hex("1c1c1c"), Some(Rgb8::new(28, 28, 28)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Rgb8::from_hex(""), None);
        assert_eq!(Rgb8::from_hex("#FFF"), None);
        assert_eq!(Rgb8::from_hex("#GGGGGG"), None);
        assert_eq!(Rgb8::from_hex("#FFE0BD00"), None);
    }
}
