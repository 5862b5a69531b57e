use tickface_engine::coords::{Rect, Vec2};
use tickface_engine::paint::Color;
use tickface_engine::scene::shapes::{FontFamily, TextAnchor, TextCmd};

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Widget;

const LINE_HEIGHT: f32 = 1.25;
const ASCENT: f32 = 0.8;

/// A single line of text.
///
/// There is no font rasterizer behind the SVG output, so width is estimated
/// from an average glyph advance per family. Digital readouts use the
/// monospace family, where the estimate is exact for tabular digits.
///
/// # Example
/// ```rust,ignore
/// Text::new("12:00:00", 32.0, fg).monospace().weight(300)
/// ```
pub struct Text {
    text: String,
    size: f32,
    color: Color,
    family: FontFamily,
    weight: u16,
    letter_spacing: f32,
    anchor: TextAnchor,
}

impl Text {
    pub fn new(text: impl Into<String>, size: f32, color: Color) -> Self {
        Self {
            text: text.into(),
            size,
            color,
            family: FontFamily::SansSerif,
            weight: 400,
            letter_spacing: 0.0,
            anchor: TextAnchor::Middle,
        }
    }

    pub fn monospace(mut self) -> Self {
        self.family = FontFamily::Monospace;
        self
    }

    pub fn weight(mut self, v: u16) -> Self {
        self.weight = v;
        self
    }

    pub fn letter_spacing(mut self, v: f32) -> Self {
        self.letter_spacing = v;
        self
    }

    pub fn anchor(mut self, v: TextAnchor) -> Self {
        self.anchor = v;
        self
    }

    fn advance(&self) -> f32 {
        match self.family {
            FontFamily::Monospace => 0.6,
            FontFamily::SansSerif => 0.55,
        }
    }

    fn natural_size(&self) -> Vec2 {
        let chars = self.text.chars().count() as f32;
        let gaps = (chars - 1.0).max(0.0);
        Vec2::new(
            chars * self.size * self.advance() + gaps * self.letter_spacing,
            self.size * LINE_HEIGHT,
        )
    }
}

impl Widget for Text {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.constrain(self.natural_size())
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let x = match self.anchor {
            TextAnchor::Start => rect.origin.x,
            TextAnchor::Middle => rect.center().x,
            TextAnchor::End => rect.max().x,
        };
        let baseline = rect.origin.y + self.size * (ASCENT + (LINE_HEIGHT - 1.0) * 0.5);

        let mut cmd = TextCmd::new(self.text.clone(), self.size, self.color, Vec2::new(x, baseline));
        cmd.family = self.family;
        cmd.weight = self.weight;
        cmd.letter_spacing = self.letter_spacing;
        cmd.anchor = self.anchor;
        painter.text(cmd);
    }
}
