use super::{DrawCmd, Rotation, SortKey, ZIndex};

/// A single draw item: sort key + command + the rotation it is drawn under.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// `None` = drawn unrotated.
    pub rotation: Option<Rotation>,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
///
/// # Rotation
///
/// Use [`push_rotation`](Self::push_rotation) / [`pop_rotation`](Self::pop_rotation)
/// to draw a group of items rotated about a pivot (a clock hand and its
/// counterweight, for instance).
///
/// ```ignore
/// draw_list.push_rotation(Rotation::new(reading.angles.second, center));
/// // ... push the hand's line and counterweight ...
/// draw_list.pop_rotation();
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Stack of active rotations. The top is the effective rotation, already
    /// composed with every parent.
    rotation_stack: Vec<Rotation>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the rotation stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.rotation_stack.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    ///
    /// The item inherits the current rotation from the rotation stack.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            rotation: self.rotation_stack.last().copied(),
        });

        self.sorted_dirty = true;
    }

    /// Begins a rotated group. Calls must be balanced with [`pop_rotation`](Self::pop_rotation).
    #[inline]
    pub fn push_rotation(&mut self, rotation: Rotation) {
        let effective = match self.rotation_stack.last() {
            None => rotation,
            Some(&parent) => parent.compose(rotation),
        };
        self.rotation_stack.push(effective);
    }

    /// Ends the most recent rotated group.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_rotation`.
    #[inline]
    pub fn pop_rotation(&mut self) {
        debug_assert!(
            !self.rotation_stack.is_empty(),
            "pop_rotation called without matching push_rotation"
        );
        self.rotation_stack.pop();
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn dot(list: &mut DrawList, z: i32, x: f32) {
        list.push_solid_circle(ZIndex::new(z), Vec2::new(x, 0.0), 1.0, Color::transparent());
    }

    fn xs(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Circle(c) => c.center.x,
                other => panic!("unexpected command {other:?}"),
            })
            .collect()
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        dot(&mut list, 2, 1.0);
        dot(&mut list, 0, 2.0);
        dot(&mut list, 2, 3.0);
        dot(&mut list, 1, 4.0);
        assert_eq!(xs(&mut list), vec![2.0, 4.0, 1.0, 3.0]);
    }

    #[test]
    fn items_inherit_active_rotation_only() {
        let mut list = DrawList::new();
        let pivot = Vec2::new(50.0, 50.0);
        dot(&mut list, 0, 1.0);
        list.push_rotation(Rotation::new(90.0, pivot));
        dot(&mut list, 0, 2.0);
        list.pop_rotation();
        dot(&mut list, 0, 3.0);

        let rotations: Vec<_> = list.items().iter().map(|i| i.rotation).collect();
        assert_eq!(rotations, vec![None, Some(Rotation::new(90.0, pivot)), None]);
    }

    #[test]
    fn nested_rotations_about_one_pivot_compose() {
        let mut list = DrawList::new();
        let pivot = Vec2::new(50.0, 50.0);
        list.push_rotation(Rotation::new(360.0, pivot));
        list.push_rotation(Rotation::new(6.0, pivot));
        dot(&mut list, 0, 1.0);
        list.pop_rotation();
        list.pop_rotation();

        assert_eq!(list.items()[0].rotation.map(|r| r.degrees), Some(366.0));
    }

    #[test]
    fn clear_resets_items_and_rotation() {
        let mut list = DrawList::new();
        list.push_rotation(Rotation::new(10.0, Vec2::zero()));
        dot(&mut list, 0, 1.0);
        list.clear();
        assert!(list.is_empty());
        dot(&mut list, 0, 1.0);
        assert_eq!(list.items()[0].rotation, None);
        assert_eq!(list.items()[0].key.order, 0);
    }
}
