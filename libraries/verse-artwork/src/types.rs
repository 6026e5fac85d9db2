//! Palette types

use serde::{Deserialize, Serialize};

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a color from channel values
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS-style hex string, e.g. `#7828c8`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Color palette extracted from one piece of artwork
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Most prominent color
    pub dominant: Color,

    /// Saturated accent color, when extraction found one
    pub vibrant: Option<Color>,

    /// Desaturated background color, when extraction found one
    pub muted: Option<Color>,
}

impl Palette {
    /// Palette with only a dominant color
    pub fn solid(dominant: Color) -> Self {
        Self {
            dominant,
            vibrant: None,
            muted: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_formatting() {
        assert_eq!(Color::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Color::new(120, 40, 200).to_hex(), "#7828c8");
        assert_eq!(Color::new(255, 255, 255).to_hex(), "#ffffff");
    }
}
