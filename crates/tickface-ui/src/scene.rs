use tickface_engine::coords::{Rect, Vec2, Viewport};
use tickface_engine::scene::DrawList;

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Owns the draw list a widget tree is painted into, reused across frames.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
///
/// // Every tick:
/// let list = ui.frame(ClockWidget::default().build(&reading, &theme), viewport);
/// let svg = writer.render(list);
/// ```
#[derive(Debug, Default)]
pub struct UiScene {
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { draw_list: DrawList::new() }
    }

    /// Lays out and paints `root` over the whole viewport.
    ///
    /// The returned list is valid until the next call.
    pub fn frame(&mut self, root: Element, viewport: Viewport) -> &mut DrawList {
        self.draw_list.clear();

        let size = Vec2::new(viewport.width, viewport.height);
        // The root always fills the viewport; measuring still lets children
        // settle their natural sizes.
        let _ = root.measure(Constraints::loose(size));
        let rect = Rect::from_origin_size(Vec2::zero(), size);

        let mut painter = Painter::new(&mut self.draw_list);
        root.paint(&mut painter, rect);

        &mut self.draw_list
    }

    /// Convenience: wrap any [`Widget`] in an [`Element`] and call [`frame`](Self::frame).
    pub fn frame_widget<W: Widget>(&mut self, root: W, viewport: Viewport) -> &mut DrawList {
        self.frame(root.into(), viewport)
    }
}
