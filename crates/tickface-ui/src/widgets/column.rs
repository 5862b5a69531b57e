use tickface_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, Edges, inset_rect};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Vertical stack. Children are centered horizontally, and the whole stack is
/// centered vertically in whatever rect the column is given.
///
/// # Example
/// ```rust,ignore
/// Column::new()
///     .spacing(16.0)
///     .child(ClockFace::new(reading.angles, theme))
///     .child(Text::new(reading.digital.clone(), 32.0, theme.foreground))
/// ```
pub struct Column {
    children: Vec<Element>,
    spacing: f32,
    padding: Edges,
}

impl Column {
    pub fn new() -> Self {
        Self { children: Vec::new(), spacing: 0.0, padding: Edges::default() }
    }

    pub fn spacing(mut self, v: f32) -> Self {
        self.spacing = v;
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    fn child_constraints(inner_w: f32) -> Constraints {
        Constraints::loose(Vec2::new(inner_w, f32::INFINITY))
    }

    fn content_size(&self, inner_w: f32) -> (Vec<Vec2>, Vec2) {
        let c = Self::child_constraints(inner_w);
        let sizes: Vec<Vec2> = self.children.iter().map(|ch| ch.measure(c)).collect();
        let gaps = self.spacing * sizes.len().saturating_sub(1) as f32;
        let h = sizes.iter().map(|s| s.y).sum::<f32>() + gaps;
        let w = sizes.iter().fold(0.0f32, |acc, s| acc.max(s.x));
        (sizes, Vec2::new(w, h))
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Column {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let inner = constraints.shrink(self.padding);
        let (_, content) = self.content_size(inner.max.x);
        constraints.constrain(Vec2::new(
            content.x + self.padding.h(),
            content.y + self.padding.v(),
        ))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let inner = inset_rect(rect, self.padding);
        let (sizes, content) = self.content_size(inner.size.x);

        let mut y = inner.origin.y + ((inner.size.y - content.y) * 0.5).max(0.0);
        for (child, size) in self.children.iter().zip(sizes) {
            child.paint(painter, inner.centered_row(y, size));
            y += size.y + self.spacing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use tickface_engine::scene::DrawList;

    /// Fixed-size box that records where it was painted.
    struct Probe {
        size: Vec2,
        painted: Rc<RefCell<Vec<Rect>>>,
    }

    impl Widget for Probe {
        fn measure(&self, constraints: Constraints) -> Vec2 {
            constraints.constrain(self.size)
        }
        fn paint(&self, _painter: &mut Painter, rect: Rect) {
            self.painted.borrow_mut().push(rect);
        }
    }

    fn probe(w: f32, h: f32, log: &Rc<RefCell<Vec<Rect>>>) -> Probe {
        Probe { size: Vec2::new(w, h), painted: log.clone() }
    }

    #[test]
    fn measure_sums_heights_and_spacing() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let col = Column::new()
            .spacing(10.0)
            .padding(Edges::all(5.0))
            .child(probe(40.0, 20.0, &log))
            .child(probe(60.0, 30.0, &log));
        let size = col.measure(Constraints::loose(Vec2::new(500.0, 500.0)));
        assert_eq!(size, Vec2::new(70.0, 70.0));
    }

    #[test]
    fn paint_centers_children() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let col = Column::new()
            .spacing(10.0)
            .child(probe(40.0, 20.0, &log))
            .child(probe(60.0, 30.0, &log));

        let mut list = DrawList::new();
        col.paint(&mut Painter::new(&mut list), Rect::new(0.0, 0.0, 100.0, 100.0));

        // Content is 60 tall, so it starts 20 down.
        assert_eq!(*log.borrow(), vec![
            Rect::new(30.0, 20.0, 40.0, 20.0),
            Rect::new(20.0, 50.0, 60.0, 30.0),
        ]);
    }

    #[test]
    fn empty_column_measures_padding_only() {
        let col = Column::new().padding(Edges::symmetric(4.0, 6.0));
        assert_eq!(col.measure(Constraints::loose(Vec2::new(100.0, 100.0))), Vec2::new(12.0, 8.0));
    }
}
