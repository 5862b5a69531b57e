use crate::coords::Vec2;

use super::hands::HandShape;

/// Geometric constants of the dial, in units of a 100×100 square.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DialLayout {
    /// Side of the square the dial is laid out on.
    pub extent: f32,
    pub center: Vec2,
    pub face_radius: f32,
    pub ring_radius: f32,
    /// Outer end of every tick mark.
    pub tick_outer: f32,
    /// Inner end of the 12, 3, 6 and 9 o'clock marks.
    pub major_inner: f32,
    /// Inner end of the other hour marks.
    pub hour_inner: f32,
    /// Inner end of the minute marks.
    pub minute_inner: f32,
    pub hour_hand: HandShape,
    pub minute_hand: HandShape,
    pub second_hand: HandShape,
    /// Counterweight disc on the second hand's tail.
    pub counterweight_radius: f32,
    pub counterweight_offset: f32,
    pub cap_outer: f32,
    pub cap_inner: f32,
}

impl DialLayout {
    pub const STANDARD: DialLayout = DialLayout {
        extent: 100.0,
        center: Vec2::new(50.0, 50.0),
        face_radius: 48.0,
        ring_radius: 46.0,
        tick_outer: 44.0,
        major_inner: 38.0,
        hour_inner: 40.0,
        minute_inner: 42.0,
        hour_hand: HandShape::new(24.0, 0.0, 2.5),
        minute_hand: HandShape::new(34.0, 0.0, 1.5),
        second_hand: HandShape::new(38.0, 8.0, 0.8),
        counterweight_radius: 1.5,
        counterweight_offset: 6.0,
        cap_outer: 3.0,
        cap_inner: 1.5,
    };
}

impl Default for DialLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}
