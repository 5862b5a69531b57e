use tickface_engine::time::ClockReading;

use crate::constraints::Edges;
use crate::theme::Theme;
use crate::widget::Element;
use crate::widgets::clock_face::ClockFace;
use crate::widgets::column::Column;
use crate::widgets::text::Text;

const DIGITAL_SIZE: f32 = 30.0;
const CAPTION_SIZE: f32 = 12.0;
const TAGLINE_SIZE: f32 = 14.0;

/// Presentational clock: analog face, digital readout and caption.
///
/// Local, UTC and continuous-UTC clocks all render through this one view; the
/// differences live in the engine configuration that produced the reading.
///
/// # Example
/// ```rust,ignore
/// let root = ClockWidget::default().build(&reading, &Theme::dark());
/// let list = scene.frame(root, viewport);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClockWidget {
    pub face_size: f32,
    /// Show the zone label (`UTC` / `LOCAL`) on the dial.
    pub badge: bool,
    pub animate: bool,
    pub caption: Option<String>,
    /// Line shown under the clock, outside the card.
    pub tagline: Option<String>,
}

impl Default for ClockWidget {
    fn default() -> Self {
        Self {
            face_size: 288.0,
            badge: true,
            animate: true,
            caption: Some("24-HOUR FORMAT".to_string()),
            tagline: None,
        }
    }
}

impl ClockWidget {
    pub fn build(&self, reading: &ClockReading, theme: &Theme) -> Element {
        let mut face = ClockFace::new(reading.angles, *theme)
            .size(self.face_size)
            .animate(self.animate);
        if self.badge {
            face = face.badge(reading.mode.label());
        }

        let mut readout = Column::new().spacing(4.0).child(
            Text::new(reading.digital.clone(), DIGITAL_SIZE, theme.foreground)
                .monospace()
                .weight(300)
                .letter_spacing(1.5),
        );
        if let Some(caption) = &self.caption {
            readout = readout.child(
                Text::new(caption.clone(), CAPTION_SIZE, theme.muted).letter_spacing(1.2),
            );
        }

        let card = Column::new().spacing(16.0).child(face).child(readout);

        let mut root = Column::new().spacing(32.0).padding(Edges::all(32.0)).child(card);
        if let Some(tagline) = &self.tagline {
            root = root.child(
                Text::new(tagline.clone(), TAGLINE_SIZE, theme.muted)
                    .weight(300)
                    .letter_spacing(2.8),
            );
        }
        root.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tickface_engine::coords::Viewport;
    use tickface_engine::scene::DrawCmd;
    use tickface_engine::time::{ClockMode, RolloverPolicy, evaluate};

    use crate::scene::UiScene;

    fn reading(h: u32, m: u32, s: u32) -> ClockReading {
        let at = Utc.with_ymd_and_hms(2025, 1, 2, h, m, s).unwrap();
        evaluate(&at, ClockMode::Utc, RolloverPolicy::Threshold, None).0
    }

    fn texts(view: &ClockWidget, r: &ClockReading) -> Vec<String> {
        let mut scene = UiScene::new();
        let list = scene.frame(view.build(r, &Theme::dark()), Viewport::new(400.0, 520.0));
        list.items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Text(t) => Some(t.text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn shows_badge_readout_and_caption() {
        let r = reading(5, 3, 9);
        assert_eq!(texts(&ClockWidget::default(), &r), vec!["UTC", "05:03:09", "24-HOUR FORMAT"]);
    }

    #[test]
    fn optional_parts_can_be_turned_off() {
        let view = ClockWidget {
            badge: false,
            caption: None,
            tagline: Some("Time in motion".into()),
            ..ClockWidget::default()
        };
        assert_eq!(texts(&view, &reading(23, 59, 59)), vec!["23:59:59", "Time in motion"]);
    }
}
