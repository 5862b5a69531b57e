use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Rounded rectangle draw payload (uniform corner radius).
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radius: f32,
    pub fill: Option<Color>,
    pub border: Option<Border>,
}

impl DrawList {
    /// Records a rounded rectangle draw command.
    ///
    /// Pass `radius = 0.0` for sharp corners.
    #[inline]
    pub fn push_rounded_rect(
        &mut self,
        z: ZIndex,
        rect: Rect,
        radius: f32,
        fill: Option<Color>,
        border: Option<Border>,
    ) {
        self.push(z, DrawCmd::RoundedRect(RoundedRectCmd { rect, radius, fill, border }));
    }
}
