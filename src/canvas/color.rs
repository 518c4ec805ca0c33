//! Color types with alpha support

/// RGBA color with f32 components (0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from 8-bit RGB values (0-255)
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(f32::from(r) / 255.0, f32::from(g) / 255.0, f32::from(b) / 255.0)
    }

    /// Create from hex color (e.g., 0xFF4500 for orange-red)
    #[inline]
    pub fn from_hex(hex: u32) -> Self {
        Self::from_rgb8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Same color with its alpha scaled by `coverage`
    #[inline]
    pub fn with_coverage(self, coverage: f32) -> Self {
        Self {
            a: self.a * coverage.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Convert to 8-bit RGB tuple
    #[inline]
    pub fn to_rgb8(&self) -> [u8; 3] {
        [channel(self.r), channel(self.g), channel(self.b)]
    }

    /// Blend this color over another (alpha compositing)
    #[inline]
    pub fn blend_over(&self, bg: &Color) -> Color {
        let a = self.a + bg.a * (1.0 - self.a);
        if a < 0.0001 {
            return Color::TRANSPARENT;
        }
        Color {
            r: (self.r * self.a + bg.r * bg.a * (1.0 - self.a)) / a,
            g: (self.g * self.a + bg.g * bg.a * (1.0 - self.a)) / a,
            b: (self.b * self.a + bg.b * bg.a * (1.0 - self.a)) / a,
            a,
        }
    }
}

#[inline]
fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_round_trips_to_rgb8() {
        for hex in [0xFF4500, 0x89CFF0, 0x90EE90, 0xFFD700, 0xDA70D6, 0xCCCCCC, 0x333333] {
            let [r, g, b] = Color::from_hex(hex).to_rgb8();
            assert_eq!((u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b), hex);
        }
    }

    #[test]
    fn test_blend() {
        let fg = Color::rgba(1.0, 0.0, 0.0, 0.5); // 50% red
        let bg = Color::rgb(0.0, 0.0, 1.0); // solid blue
        let blended = fg.blend_over(&bg);

        // Should be purplish
        assert!(blended.r > 0.4);
        assert!(blended.b > 0.4);
        assert!((blended.a - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_with_coverage() {
        let c = Color::WHITE.with_coverage(0.25);
        assert!((c.a - 0.25).abs() < 1e-6);
        assert!((Color::WHITE.with_coverage(3.0).a - 1.0).abs() < 1e-6);
    }
}
