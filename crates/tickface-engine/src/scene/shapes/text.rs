use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Horizontal alignment of text relative to its anchor point.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// Generic font family. Concrete font selection is left to the consumer of
/// the output (browser, rasterizer).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum FontFamily {
    #[default]
    SansSerif,
    /// Tabular digits, used for the digital readout.
    Monospace,
}

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Font size in logical units.
    pub size: f32,
    pub color: Color,
    /// Anchor point on the baseline.
    pub origin: Vec2,
    pub anchor: TextAnchor,
    pub family: FontFamily,
    /// CSS-style numeric weight (300 light, 400 regular, 500 medium).
    pub weight: u16,
    /// Extra spacing between glyphs, in logical units.
    pub letter_spacing: f32,
}

impl TextCmd {
    pub fn new(text: impl Into<String>, size: f32, color: Color, origin: Vec2) -> Self {
        Self {
            text: text.into(),
            size,
            color,
            origin,
            anchor: TextAnchor::Start,
            family: FontFamily::SansSerif,
            weight: 400,
            letter_spacing: 0.0,
        }
    }
}

impl DrawList {
    /// Records a text draw command.
    #[inline]
    pub fn push_text(&mut self, z: ZIndex, text: TextCmd) {
        self.push(z, DrawCmd::Text(text));
    }
}
