use core::ops::{Add, Mul, Sub};

/// 2D vector in logical units.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Point at `radius` from `self` along `radians`, measured clockwise from +X
    /// (screen space, +Y down).
    #[inline]
    pub fn polar_offset(self, radians: f64, radius: f32) -> Self {
        let r = f64::from(radius);
        Vec2::new(
            self.x + (radians.cos() * r) as f32,
            self.y + (radians.sin() * r) as f32,
        )
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_offset_zero_radians_points_right() {
        let p = Vec2::new(50.0, 50.0).polar_offset(0.0, 10.0);
        assert!((p.x - 60.0).abs() < 1e-5);
        assert!((p.y - 50.0).abs() < 1e-5);
    }

    #[test]
    fn polar_offset_quarter_turn_points_down() {
        // +Y is down in screen space, so +90° lands below the origin.
        let p = Vec2::zero().polar_offset(std::f64::consts::FRAC_PI_2, 4.0);
        assert!(p.x.abs() < 1e-5);
        assert!((p.y - 4.0).abs() < 1e-5);
    }
}
