use super::Vec2;

/// Axis-aligned rectangle in logical units (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x * 0.5, self.origin.y + self.size.y * 0.5)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Largest square that fits inside `self`, centered on both axes.
    #[inline]
    pub fn centered_square(self) -> Rect {
        let side = self.size.x.min(self.size.y).max(0.0);
        let c = self.center();
        Rect::new(c.x - side * 0.5, c.y - side * 0.5, side, side)
    }

    /// Rectangle of `size` centered horizontally in `self`, starting at `y`.
    #[inline]
    pub fn centered_row(self, y: f32, size: Vec2) -> Rect {
        Rect::new(self.origin.x + (self.size.x - size.x) * 0.5, y, size.x, size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── centered_square ───────────────────────────────────────────────────

    #[test]
    fn centered_square_of_wide_rect() {
        assert_eq!(r(0.0, 0.0, 200.0, 100.0).centered_square(), r(50.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn centered_square_of_tall_rect() {
        assert_eq!(r(10.0, 0.0, 40.0, 100.0).centered_square(), r(10.0, 30.0, 40.0, 40.0));
    }

    #[test]
    fn centered_square_of_negative_size_is_empty() {
        assert!(r(0.0, 0.0, -5.0, 10.0).centered_square().is_empty());
    }

    // ── centered_row ──────────────────────────────────────────────────────

    #[test]
    fn centered_row_splits_slack_evenly() {
        let row = r(0.0, 0.0, 100.0, 100.0).centered_row(20.0, Vec2::new(40.0, 10.0));
        assert_eq!(row, r(30.0, 20.0, 40.0, 10.0));
    }

    // ── misc ──────────────────────────────────────────────────────────────

    #[test]
    fn center_and_max() {
        let rect = r(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.center(), Vec2::new(25.0, 40.0));
        assert_eq!(rect.max(), Vec2::new(40.0, 60.0));
    }
}
