use tickface_engine::coords::{Rect, Vec2};
use tickface_engine::dial::{DialLayout, HandShape, MarkerGeometry, TickKind};
use tickface_engine::paint::Color;
use tickface_engine::scene::shapes::{FontFamily, TextAnchor, TextCmd};
use tickface_engine::scene::{Border, Easing, Rotation, Transition};
use tickface_engine::time::AngleSet;

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::theme::Theme;
use crate::widget::Widget;

const DEFAULT_SIZE: f32 = 288.0;

const HOUR_MINUTE_TRANSITION: Transition = Transition::new(500, Easing::TICK);
const SECOND_TRANSITION: Transition = Transition::new(100, Easing::TICK);

// Stroke widths in dial units.
const FACE_BORDER: f32 = 0.5;
const RING_STROKE: f32 = 0.3;
const MAJOR_TICK: f32 = 1.2;
const HOUR_TICK: f32 = 0.6;
const MINUTE_TICK: f32 = 0.3;

// Badge metrics in pixels, independent of the dial scale.
const BADGE_TEXT: f32 = 11.0;
const BADGE_HEIGHT: f32 = 20.0;
const BADGE_PAD_X: f32 = 8.0;
const BADGE_OVERHANG: f32 = 8.0;

/// Analog dial: face, ring, tick marks, three hands and the center cap.
///
/// The 100×100 [`DialLayout`] is scaled into the largest square that fits the
/// rect. Hands are drawn pointing north and rotated by the reading's angles,
/// which may include full turns of continuity offset.
///
/// # Example
/// ```rust,ignore
/// ClockFace::new(reading.angles, Theme::dark())
///     .badge("UTC")
///     .size(288.0)
/// ```
pub struct ClockFace {
    angles: AngleSet,
    theme: Theme,
    layout: DialLayout,
    size: f32,
    badge: Option<String>,
    animate: bool,
}

impl ClockFace {
    pub fn new(angles: AngleSet, theme: Theme) -> Self {
        Self {
            angles,
            theme,
            layout: DialLayout::STANDARD,
            size: DEFAULT_SIZE,
            badge: None,
            animate: true,
        }
    }

    pub fn size(mut self, v: f32) -> Self { self.size = v; self }
    pub fn badge(mut self, v: impl Into<String>) -> Self { self.badge = Some(v.into()); self }
    pub fn no_badge(mut self) -> Self { self.badge = None; self }
    /// Emit hand transitions. Off gives static frames.
    pub fn animate(mut self, v: bool) -> Self { self.animate = v; self }

    fn rotation(&self, degrees: f64, pivot: Vec2, transition: Transition) -> Rotation {
        let r = Rotation::new(degrees, pivot);
        if self.animate { r.with_transition(transition) } else { r }
    }

    fn paint_hand(&self, p: &mut Painter, dial: &DialToPx, hand: HandShape, color: Color) {
        let (tail, tip) = hand.segment(self.layout.center);
        p.line(dial.point(tail), dial.point(tip), dial.len(hand.width), color);
    }

    fn paint_badge(&self, p: &mut Painter, square: Rect, label: &str) {
        let t = &self.theme;
        let chars = label.chars().count() as f32;
        let w = chars * BADGE_TEXT * 0.62 + BADGE_PAD_X * 2.0;
        let rect = Rect::new(
            square.max().x - w + BADGE_OVERHANG,
            square.origin.y - BADGE_OVERHANG,
            w,
            BADGE_HEIGHT,
        );
        p.rounded_rect(
            rect,
            BADGE_HEIGHT * 0.5,
            Some(t.accent.faded(0.1)),
            Some(Border::new(1.0, t.accent.faded(0.3))),
        );

        let c = rect.center();
        let mut text = TextCmd::new(label, BADGE_TEXT, t.accent, Vec2::new(c.x, c.y + BADGE_TEXT * 0.35));
        text.anchor = TextAnchor::Middle;
        text.family = FontFamily::SansSerif;
        text.weight = 500;
        text.letter_spacing = 0.5;
        p.text(text);
    }
}

impl Widget for ClockFace {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let side = self.size.min(constraints.max.x).min(constraints.max.y).max(0.0);
        constraints.constrain(Vec2::new(side, side))
    }

    fn paint(&self, p: &mut Painter, rect: Rect) {
        let square = rect.centered_square();
        if square.is_empty() {
            return;
        }
        let l = &self.layout;
        let t = &self.theme;
        let dial = DialToPx { origin: square.origin, scale: square.size.x / l.extent };
        let center = dial.point(l.center);

        // Face and inner ring
        p.circle(center, dial.len(l.face_radius), Some(t.card), Some(Border::new(dial.len(FACE_BORDER), t.border)));
        p.circle(center, dial.len(l.ring_radius), None, Some(Border::new(dial.len(RING_STROKE), t.border.faded(0.5))));

        for tick in MarkerGeometry::new(l).iter() {
            let (width, color) = match tick.kind {
                TickKind::Major => (MAJOR_TICK, t.foreground),
                TickKind::Hour => (HOUR_TICK, t.foreground.faded(0.7)),
                TickKind::Minute => (MINUTE_TICK, t.muted.faded(0.3)),
            };
            p.line(dial.point(tick.start), dial.point(tick.end), dial.len(width), color);
        }

        p.rotated(self.rotation(self.angles.hour, center, HOUR_MINUTE_TRANSITION), |p| {
            self.paint_hand(p, &dial, l.hour_hand, t.foreground);
        });
        p.rotated(self.rotation(self.angles.minute, center, HOUR_MINUTE_TRANSITION), |p| {
            self.paint_hand(p, &dial, l.minute_hand, t.foreground);
        });
        p.rotated(self.rotation(self.angles.second, center, SECOND_TRANSITION), |p| {
            self.paint_hand(p, &dial, l.second_hand, t.accent);
            let weight = Vec2::new(l.center.x, l.center.y + l.counterweight_offset);
            p.circle(dial.point(weight), dial.len(l.counterweight_radius), Some(t.accent), None);
        });

        // Center cap
        p.circle(center, dial.len(l.cap_outer), Some(t.foreground), None);
        p.circle(center, dial.len(l.cap_inner), Some(t.card), None);

        if let Some(label) = &self.badge {
            self.paint_badge(p, square, label);
        }
    }
}

/// Maps dial units into the pixel square being painted.
struct DialToPx {
    origin: Vec2,
    scale: f32,
}

impl DialToPx {
    #[inline]
    fn point(&self, v: Vec2) -> Vec2 {
        Vec2::new(self.origin.x + v.x * self.scale, self.origin.y + v.y * self.scale)
    }

    #[inline]
    fn len(&self, v: f32) -> f32 {
        v * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickface_engine::scene::{DrawCmd, DrawList};

    fn paint(face: &ClockFace, rect: Rect) -> DrawList {
        let mut list = DrawList::new();
        face.paint(&mut Painter::new(&mut list), rect);
        list
    }

    fn lines(list: &DrawList) -> usize {
        list.items().iter().filter(|i| matches!(i.cmd, DrawCmd::Line(_))).count()
    }

    #[test]
    fn one_line_per_tick_and_hand() {
        let face = ClockFace::new(AngleSet::new(0.0, 0.0, 0.0), Theme::dark());
        let list = paint(&face, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(lines(&list), 60 + 3);
    }

    #[test]
    fn hands_carry_unbounded_rotation() {
        let face = ClockFace::new(AngleSet::new(330.0, 726.0, 366.0), Theme::dark());
        let list = paint(&face, Rect::new(0.0, 0.0, 200.0, 200.0));

        let mut rotations: Vec<f64> = list
            .items()
            .iter()
            .filter_map(|i| i.rotation.map(|r| r.degrees))
            .collect();
        rotations.dedup();
        assert_eq!(rotations, vec![330.0, 726.0, 366.0]);

        let pivot = list.items().iter().find_map(|i| i.rotation).map(|r| r.pivot);
        assert_eq!(pivot, Some(Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn second_hand_group_holds_tail_and_counterweight() {
        let face = ClockFace::new(AngleSet::new(0.0, 0.0, 90.0), Theme::dark()).no_badge();
        let list = paint(&face, Rect::new(0.0, 0.0, 100.0, 100.0));

        let group: Vec<&DrawCmd> = list
            .items()
            .iter()
            .filter(|i| i.rotation.map(|r| r.degrees) == Some(90.0))
            .map(|i| &i.cmd)
            .collect();
        assert_eq!(group.len(), 2);
        match group[0] {
            DrawCmd::Line(l) => {
                assert_eq!(l.from, Vec2::new(50.0, 58.0));
                assert_eq!(l.to, Vec2::new(50.0, 12.0));
            }
            other => panic!("expected second hand line, got {other:?}"),
        }
        match group[1] {
            DrawCmd::Circle(c) => assert_eq!(c.center, Vec2::new(50.0, 56.0)),
            other => panic!("expected counterweight, got {other:?}"),
        }
    }

    #[test]
    fn rotations_keep_full_engine_precision() {
        use chrono::{TimeZone, Utc};
        use tickface_engine::time::{ClockAngleEngine, EngineConfig};

        // Drive the engine through 100 000 minute rollovers.
        let mut engine = ClockAngleEngine::new(EngineConfig::default());
        let midnight = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let mut reading = engine.evaluate(&midnight);
        for minute in 0..100_000i64 {
            // :50 of this minute, then :07 of the next.
            engine.evaluate(&(midnight + chrono::Duration::seconds(minute * 60 + 50)));
            reading = engine.evaluate(&(midnight + chrono::Duration::seconds(minute * 60 + 67)));
        }
        assert_eq!(reading.digital, "10:40:07");
        assert_eq!(reading.angles.second, 100_000.0 * 360.0 + 42.0);

        let face = ClockFace::new(reading.angles, Theme::dark());
        let list = paint(&face, Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut rotations: Vec<f64> = list
            .items()
            .iter()
            .filter_map(|i| i.rotation.map(|r| r.degrees))
            .collect();
        rotations.dedup();
        assert_eq!(rotations, vec![reading.angles.hour, reading.angles.minute, reading.angles.second]);
    }

    #[test]
    fn transitions_follow_hand_speed() {
        let face = ClockFace::new(AngleSet::new(10.0, 20.0, 30.0), Theme::dark());
        let list = paint(&face, Rect::new(0.0, 0.0, 100.0, 100.0));
        let transition_of = |deg: f64| {
            list.items()
                .iter()
                .filter_map(|i| i.rotation)
                .find(|r| r.degrees == deg)
                .and_then(|r| r.transition)
                .map(|t| t.duration_ms)
        };
        assert_eq!(transition_of(10.0), Some(500));
        assert_eq!(transition_of(20.0), Some(500));
        assert_eq!(transition_of(30.0), Some(100));

        let still = ClockFace::new(AngleSet::new(10.0, 20.0, 30.0), Theme::dark()).animate(false);
        let list = paint(&still, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(list.items().iter().filter_map(|i| i.rotation).all(|r| r.transition.is_none()));
    }

    #[test]
    fn scales_into_centered_square() {
        let face = ClockFace::new(AngleSet::new(0.0, 0.0, 0.0), Theme::dark()).no_badge();
        let list = paint(&face, Rect::new(0.0, 0.0, 400.0, 200.0));
        match &list.items()[0].cmd {
            DrawCmd::Circle(c) => {
                assert_eq!(c.center, Vec2::new(200.0, 100.0));
                assert_eq!(c.radius, 96.0);
            }
            other => panic!("expected face disc, got {other:?}"),
        }
    }

    #[test]
    fn badge_is_optional() {
        let angles = AngleSet::new(0.0, 0.0, 0.0);
        let has_text = |face: &ClockFace| {
            paint(face, Rect::new(0.0, 0.0, 100.0, 100.0))
                .items()
                .iter()
                .any(|i| matches!(&i.cmd, DrawCmd::Text(t) if t.text == "UTC"))
        };
        assert!(has_text(&ClockFace::new(angles, Theme::dark()).badge("UTC")));
        assert!(!has_text(&ClockFace::new(angles, Theme::dark())));
    }

    #[test]
    fn measure_is_square_and_bounded() {
        let face = ClockFace::new(AngleSet::new(0.0, 0.0, 0.0), Theme::dark());
        assert_eq!(face.measure(Constraints::loose(Vec2::new(1000.0, f32::INFINITY))), Vec2::new(288.0, 288.0));
        assert_eq!(face.measure(Constraints::loose(Vec2::new(120.0, 500.0))), Vec2::new(120.0, 120.0));
    }

    #[test]
    fn empty_rect_paints_nothing() {
        let face = ClockFace::new(AngleSet::new(0.0, 0.0, 0.0), Theme::dark());
        assert!(paint(&face, Rect::new(0.0, 0.0, 0.0, 50.0)).is_empty());
    }
}
