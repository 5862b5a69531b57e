use crate::coords::Vec2;

/// Rotation applied to a group of draw items.
///
/// `degrees` is clockwise in screen space and is not reduced modulo 360: a hand
/// that has gone round twice is emitted at 720° + its base angle, so an
/// animated transition between two frames always turns forward.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rotation {
    pub degrees: f64,
    pub pivot: Vec2,
    pub transition: Option<Transition>,
}

impl Rotation {
    #[inline]
    pub const fn new(degrees: f64, pivot: Vec2) -> Self {
        Self { degrees, pivot, transition: None }
    }

    #[inline]
    pub const fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    /// Composes `inner` inside `self`.
    ///
    /// Rotations about the same pivot add up exactly. Rotations about different
    /// pivots cannot be expressed as a single `rotate()`; the inner one wins.
    #[inline]
    pub fn compose(self, inner: Rotation) -> Rotation {
        if self.pivot == inner.pivot {
            Rotation {
                degrees: self.degrees + inner.degrees,
                pivot: self.pivot,
                transition: inner.transition.or(self.transition),
            }
        } else {
            inner
        }
    }
}

/// Animated transition of a rotation between successive frames.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Transition {
    #[inline]
    pub const fn new(duration_ms: u32, easing: Easing) -> Self {
        Self { duration_ms, easing }
    }
}

/// Timing curve of a [`Transition`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Easing {
    Linear,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Overshooting "tick" curve: the hand slightly passes its target and
    /// settles back, like a quartz movement.
    pub const TICK: Easing = Easing::CubicBezier(0.4, 2.08, 0.55, 0.44);
}
