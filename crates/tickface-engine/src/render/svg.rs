use std::fmt::Write as _;

use crate::coords::Viewport;
use crate::paint::Color;
use crate::scene::shapes::{
    Border, CircleCmd, FontFamily, LineCap, LineCmd, RoundedRectCmd, TextAnchor, TextCmd,
};
use crate::scene::{DrawCmd, DrawList, Easing, Rotation};

/// Serializes a [`DrawList`] into an SVG document.
///
/// Items are written in paint order. Consecutive items that share a rotation
/// are wrapped in one `<g transform="rotate(...)">`, so a hand and its
/// counterweight turn (and animate) together. Rotations are written as given,
/// full turns included.
#[derive(Debug, Clone)]
pub struct SvgWriter {
    viewport: Viewport,
    background: Option<Color>,
    buf: String,
}

impl SvgWriter {
    pub fn new(viewport: Viewport) -> Self {
        debug_assert!(viewport.is_valid(), "invalid SVG viewport {viewport:?}");
        Self { viewport, background: None, buf: String::new() }
    }

    /// Fills the whole viewport before drawing.
    pub fn background(mut self, color: Option<Color>) -> Self {
        self.background = color;
        self
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Writes `list` and returns the document. The internal buffer is reused
    /// across calls.
    pub fn render(&mut self, list: &mut DrawList) -> &str {
        self.buf.clear();
        let w = num(self.viewport.width);
        let h = num(self.viewport.height);
        // Writing into a String cannot fail.
        let _ = write!(
            self.buf,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#
        );

        if let Some(bg) = self.background {
            let _ = write!(self.buf, r#"<rect width="{w}" height="{h}"{}/>"#, fill(Some(bg)));
        }

        let mut open: Option<Rotation> = None;
        for item in list.iter_in_paint_order() {
            if item.rotation != open {
                if open.is_some() {
                    self.buf.push_str("</g>");
                }
                if let Some(rotation) = item.rotation {
                    write_group_open(&mut self.buf, rotation);
                }
                open = item.rotation;
            }

            match &item.cmd {
                DrawCmd::Circle(c) => write_circle(&mut self.buf, c),
                DrawCmd::Line(l) => write_line(&mut self.buf, l),
                DrawCmd::RoundedRect(r) => write_rounded_rect(&mut self.buf, r),
                DrawCmd::Text(t) => write_text(&mut self.buf, t),
            }
        }
        if open.is_some() {
            self.buf.push_str("</g>");
        }

        self.buf.push_str("</svg>");
        &self.buf
    }
}

fn write_group_open(buf: &mut String, rotation: Rotation) {
    let _ = write!(
        buf,
        r#"<g transform="rotate({} {} {})""#,
        num(rotation.degrees),
        num(rotation.pivot.x),
        num(rotation.pivot.y)
    );
    if let Some(t) = rotation.transition {
        let easing = match t.easing {
            Easing::Linear => "linear".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({}, {}, {}, {})", num(x1), num(y1), num(x2), num(y2))
            }
        };
        let _ = write!(buf, r#" style="transition: transform {}ms {easing}""#, t.duration_ms);
    }
    buf.push('>');
}

fn write_circle(buf: &mut String, c: &CircleCmd) {
    let _ = write!(
        buf,
        r#"<circle cx="{}" cy="{}" r="{}"{}{}/>"#,
        num(c.center.x),
        num(c.center.y),
        num(c.radius),
        fill(c.fill),
        stroke(c.border),
    );
}

fn write_line(buf: &mut String, l: &LineCmd) {
    let cap = match l.cap {
        LineCap::Butt => "butt",
        LineCap::Round => "round",
    };
    let _ = write!(
        buf,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{} stroke-linecap="{cap}"/>"#,
        num(l.from.x),
        num(l.from.y),
        num(l.to.x),
        num(l.to.y),
        stroke(Some(Border::new(l.width, l.color))),
    );
}

fn write_rounded_rect(buf: &mut String, r: &RoundedRectCmd) {
    let _ = write!(
        buf,
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}"{}{}/>"#,
        num(r.rect.origin.x),
        num(r.rect.origin.y),
        num(r.rect.size.x.max(0.0)),
        num(r.rect.size.y.max(0.0)),
        num(r.radius.max(0.0)),
        fill(r.fill),
        stroke(r.border),
    );
}

fn write_text(buf: &mut String, t: &TextCmd) {
    let anchor = match t.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    let family = match t.family {
        FontFamily::SansSerif => "sans-serif",
        FontFamily::Monospace => "monospace",
    };
    let _ = write!(
        buf,
        r#"<text x="{}" y="{}" font-size="{}" font-family="{family}" font-weight="{}" text-anchor="{anchor}""#,
        num(t.origin.x),
        num(t.origin.y),
        num(t.size),
        t.weight,
    );
    if t.letter_spacing != 0.0 {
        let _ = write!(buf, r#" letter-spacing="{}""#, num(t.letter_spacing));
    }
    buf.push_str(&fill(Some(t.color)));
    buf.push('>');
    escape_into(buf, &t.text);
    buf.push_str("</text>");
}

fn fill(color: Option<Color>) -> String {
    match color {
        None => r#" fill="none""#.to_string(),
        Some(c) => {
            let [r, g, b] = c.to_rgb8();
            if c.is_opaque() {
                format!(r#" fill="rgb({r},{g},{b})""#)
            } else {
                format!(r#" fill="rgb({r},{g},{b})" fill-opacity="{}""#, num(c.a))
            }
        }
    }
}

fn stroke(border: Option<Border>) -> String {
    match border {
        None => String::new(),
        Some(Border { width, color }) => {
            let [r, g, b] = color.to_rgb8();
            let mut s = format!(r#" stroke="rgb({r},{g},{b})" stroke-width="{}""#, num(width));
            if !color.is_opaque() {
                let _ = write!(s, r#" stroke-opacity="{}""#, num(color.a));
            }
            s
        }
    }
}

/// Up to three decimals, trailing zeros trimmed, never `-0`.
///
/// Rotations arrive as `f64` and are written at full precision; `f32`
/// geometry is widened first.
fn num(v: impl Into<f64>) -> String {
    let v: f64 = v.into();
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape_into(buf: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => buf.push_str("&amp;"),
            '<' => buf.push_str("&lt;"),
            '>' => buf.push_str("&gt;"),
            '"' => buf.push_str("&quot;"),
            _ => buf.push(ch),
        }
    }
}
