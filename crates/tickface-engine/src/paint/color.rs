/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Same hue with its opacity scaled by `factor`, e.g. `foreground.faded(0.3)`
    /// for a 30 % tint of the foreground.
    #[inline]
    pub fn faded(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self { r: self.r * f, g: self.g * f, b: self.b * f, a: self.a * f }
    }

    /// Straight-alpha sRGB bytes, dropping alpha.
    #[inline]
    pub fn to_rgb8(self) -> [u8; 3] {
        let (r, g, b, _) = self.to_straight();
        [to_u8(r), to_u8(g), to_u8(b)]
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_srgb_u8_round_trips_through_rgb8() {
        let c = Color::from_srgb_u8(12, 200, 99, 255);
        assert_eq!(c.to_rgb8(), [12, 200, 99]);
    }

    #[test]
    fn faded_keeps_hue_and_scales_alpha() {
        let c = Color::from_srgb_u8(255, 128, 0, 255).faded(0.5);
        assert!((c.a - 0.5).abs() < 1e-6);
        assert_eq!(c.to_rgb8(), [255, 128, 0]);
    }

    #[test]
    fn transparent_has_black_rgb() {
        assert_eq!(Color::transparent().to_rgb8(), [0, 0, 0]);
        assert!(!Color::transparent().is_opaque());
    }
}
