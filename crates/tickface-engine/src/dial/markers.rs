use std::f64::consts::PI;

use crate::coords::Vec2;

use super::layout::DialLayout;

const HOUR_STEP_DEGREES: f64 = 30.0;
const MINUTE_STEP_DEGREES: f64 = 6.0;

/// Visual weight of a tick mark.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TickKind {
    /// 12, 3, 6 and 9 o'clock: longer and thicker.
    Major,
    /// The remaining hour positions.
    Hour,
    /// Minute positions that do not coincide with an hour.
    Minute,
}

/// One tick mark segment, from the inner radius to the outer one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tick {
    /// Position in its own cycle (`0..12` for hours, `0..60` for minutes).
    pub index: u32,
    pub kind: TickKind,
    pub start: Vec2,
    pub end: Vec2,
}

/// Hour and minute tick marks of a dial.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerGeometry {
    pub hours: Vec<Tick>,
    pub minutes: Vec<Tick>,
}

impl MarkerGeometry {
    /// 12 hour ticks and 48 minute ticks (60 positions minus the 12 shared
    /// with an hour).
    pub fn new(layout: &DialLayout) -> Self {
        let hours = (0..12)
            .map(|i| {
                let (kind, inner) = if i % 3 == 0 {
                    (TickKind::Major, layout.major_inner)
                } else {
                    (TickKind::Hour, layout.hour_inner)
                };
                tick(layout, i, HOUR_STEP_DEGREES, kind, inner)
            })
            .collect();

        let minutes = (0..60)
            .filter(|i| i % 5 != 0)
            .map(|i| tick(layout, i, MINUTE_STEP_DEGREES, TickKind::Minute, layout.minute_inner))
            .collect();

        Self { hours, minutes }
    }

    /// Every tick, minutes first (they are drawn underneath).
    pub fn iter(&self) -> impl Iterator<Item = &Tick> {
        self.minutes.iter().chain(self.hours.iter())
    }
}

/// The `-90°` turns index 0 from 3 o'clock (the +X axis) to 12 o'clock.
fn tick(layout: &DialLayout, index: u32, step: f64, kind: TickKind, inner: f32) -> Tick {
    let angle = (f64::from(index) * step - 90.0) * PI / 180.0;
    Tick {
        index,
        kind,
        start: layout.center.polar_offset(angle, inner),
        end: layout.center.polar_offset(angle, layout.tick_outer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> MarkerGeometry {
        MarkerGeometry::new(&DialLayout::STANDARD)
    }

    #[test]
    fn counts() {
        let m = markers();
        assert_eq!(m.hours.len(), 12);
        assert_eq!(m.minutes.len(), 48);
        assert_eq!(m.iter().count(), 60);
    }

    #[test]
    fn index_zero_is_due_north() {
        let m = markers();
        let c = DialLayout::STANDARD.center;
        let top = m.hours[0];
        assert!((top.end.x - c.x).abs() < 1e-4);
        assert!(top.end.y - c.y < 0.0);
        assert!((top.end.y - 6.0).abs() < 1e-4);
        assert!((top.start.y - 12.0).abs() < 1e-4);
    }

    #[test]
    fn quarter_hours_are_major() {
        let m = markers();
        let majors: Vec<u32> = m
            .hours
            .iter()
            .filter(|t| t.kind == TickKind::Major)
            .map(|t| t.index)
            .collect();
        assert_eq!(majors, vec![0, 3, 6, 9]);
    }

    #[test]
    fn three_oclock_points_east() {
        let t = markers().hours[3];
        assert!((t.end.x - 94.0).abs() < 1e-4);
        assert!((t.end.y - 50.0).abs() < 1e-4);
    }

    #[test]
    fn minute_ticks_skip_hour_positions() {
        let m = markers();
        assert!(m.minutes.iter().all(|t| t.index % 5 != 0));
        assert_eq!(m.minutes.first().map(|t| t.index), Some(1));
        assert_eq!(m.minutes.last().map(|t| t.index), Some(59));
    }

    #[test]
    fn every_tick_spans_inner_to_outer_radius() {
        let layout = DialLayout::STANDARD;
        for t in markers().iter() {
            let r_end = ((t.end.x - 50.0).powi(2) + (t.end.y - 50.0).powi(2)).sqrt();
            assert!((r_end - layout.tick_outer).abs() < 1e-3);
            let r_start = ((t.start.x - 50.0).powi(2) + (t.start.y - 50.0).powi(2)).sqrt();
            let expected = match t.kind {
                TickKind::Major => layout.major_inner,
                TickKind::Hour => layout.hour_inner,
                TickKind::Minute => layout.minute_inner,
            };
            assert!((r_start - expected).abs() < 1e-3);
        }
    }
}
