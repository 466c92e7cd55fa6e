use std::fmt;

use crate::Face;

/// RGB color with floating-point channels in the range `0.0..=1.0`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rgb {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}
impl Rgb {
    /// White.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    /// Yellow.
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0);
    /// Red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    /// Orange.
    pub const ORANGE: Self = Self::new(1.0, 0.5, 0.0);
    /// Green.
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    /// Blue.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
    /// Dark color used for stickers that face the inside of the cube.
    pub const HIDDEN: Self = Self::new(0.1, 0.1, 0.1);

    /// Constructs a color from its channels.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Returns the sticker color of `face` on a solved cube.
    pub const fn solved_color(face: Face) -> Self {
        match face {
            Face::Front => Self::RED,
            Face::Back => Self::ORANGE,
            Face::Left => Self::GREEN,
            Face::Right => Self::BLUE,
            Face::Up => Self::WHITE,
            Face::Down => Self::YELLOW,
        }
    }

    /// Returns the sum of the absolute differences of each channel.
    pub fn manhattan_distance(self, other: Rgb) -> f32 {
        (self.r - other.r).abs() + (self.g - other.g).abs() + (self.b - other.b).abs()
    }

    /// Returns whether two colors are within `tolerance` of each other by
    /// [`Rgb::manhattan_distance()`].
    pub fn approx_eq(self, other: Rgb, tolerance: f32) -> bool {
        self.manhattan_distance(other) <= tolerance
    }

    /// Converts the color to 8-bit channels.
    pub fn to_rgb8(self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_distance() {
        assert_eq!(Rgb::RED.manhattan_distance(Rgb::ORANGE), 0.5);
        assert!(Rgb::WHITE.approx_eq(Rgb::new(0.99, 0.99, 0.99), 0.05));
        assert!(!Rgb::WHITE.approx_eq(Rgb::new(0.97, 0.97, 0.97), 0.05));
        assert_eq!(Rgb::ORANGE.to_string(), "#ff8000");
    }
}
