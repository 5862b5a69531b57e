use crate::coords::Vec2;

/// A hand drawn as a stroked segment through the pivot.
///
/// Shapes are described pointing at 12 o'clock; the rendered angle is applied
/// as a rotation about the pivot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandShape {
    /// Pivot to tip.
    pub length: f32,
    /// Pivot to the far end of the tail (0 for no tail).
    pub tail: f32,
    pub width: f32,
}

impl HandShape {
    #[inline]
    pub const fn new(length: f32, tail: f32, width: f32) -> Self {
        Self { length, tail, width }
    }

    /// Unrotated `(tail end, tip)` segment for a hand pivoting at `center`.
    #[inline]
    pub fn segment(&self, center: Vec2) -> (Vec2, Vec2) {
        (
            Vec2::new(center.x, center.y + self.tail),
            Vec2::new(center.x, center.y - self.length),
        )
    }

    /// Tip position after rotating by `degrees` clockwise from 12 o'clock.
    ///
    /// Any number of full turns may be included in `degrees`.
    pub fn tip(&self, center: Vec2, degrees: f64) -> Vec2 {
        center.polar_offset((degrees - 90.0).to_radians(), self.length)
    }
}
