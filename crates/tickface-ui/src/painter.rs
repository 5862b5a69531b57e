use tickface_engine::coords::{Rect, Vec2};
use tickface_engine::paint::Color;
use tickface_engine::scene::shapes::TextCmd;
use tickface_engine::scene::{Border, DrawList, Rotation, ZIndex};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a high-level API. Every call draws on
/// top of the previous one.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Circle with optional fill and border.
    pub fn circle(&mut self, center: Vec2, radius: f32, fill: Option<Color>, border: Option<Border>) {
        let z = self.next_z();
        self.draw_list.push_circle(z, center, radius, fill, border);
    }

    /// Stroked segment with round caps.
    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_line(z, from, to, width, color);
    }

    /// Rounded rectangle. Pass `radius = 0.0` for sharp corners.
    pub fn rounded_rect(&mut self, rect: Rect, radius: f32, fill: Option<Color>, border: Option<Border>) {
        let z = self.next_z();
        self.draw_list.push_rounded_rect(z, rect, radius, fill, border);
    }

    pub fn text(&mut self, text: TextCmd) {
        let z = self.next_z();
        self.draw_list.push_text(z, text);
    }

    // ── rotation ──────────────────────────────────────────────────────────

    /// Draws everything `f` paints rotated by `rotation`.
    pub fn rotated(&mut self, rotation: Rotation, f: impl FnOnce(&mut Painter<'a>)) {
        self.draw_list.push_rotation(rotation);
        f(self);
        self.draw_list.pop_rotation();
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
