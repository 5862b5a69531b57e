//! Tickface UI: widget tree, clock view and run loop on top of `tickface-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use tickface_ui::prelude::*;
//!
//! let latest = LatestFrame::new();
//! let clock = Application::new()
//!     .mode(ClockMode::Utc)
//!     .continuity(true)
//!     .start(latest.clone());
//!
//! // Later, from anywhere holding a clone:
//! if let Some(frame) = latest.get() {
//!     println!("{} -> {} bytes of SVG", frame.reading.digital, frame.svg.len());
//! }
//! ```
//!
//! # Custom widgets
//!
//! Implement [`Widget`] for any type, then use it anywhere an [`Element`] is accepted:
//!
//! ```rust,ignore
//! use tickface_ui::prelude::*;
//!
//! pub struct Dot(Color);
//!
//! impl Widget for Dot {
//!     fn measure(&self, constraints: Constraints) -> Vec2 {
//!         constraints.constrain(Vec2::new(8.0, 8.0))
//!     }
//!     fn paint(&self, painter: &mut Painter, rect: Rect) {
//!         painter.circle(rect.center(), 4.0, Some(self.0), None);
//!     }
//! }
//! ```

pub mod app;
pub mod clock;
pub mod constraints;
pub mod painter;
pub mod scene;
pub mod sink;
pub mod theme;
pub mod widget;
pub mod widgets;

pub use app::{Application, ClockHandle};

pub mod prelude {
    pub use crate::app::{Application, ClockHandle};
    pub use crate::clock::ClockWidget;
    pub use crate::constraints::{Constraints, Edges};
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::sink::{Frame, FrameSink, LatestFrame, OwnedFrame, sink_fn};
    pub use crate::theme::Theme;
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::clock_face::ClockFace;
    pub use crate::widgets::column::Column;
    pub use crate::widgets::text::Text;

    pub use tickface_engine::coords::{Rect, Vec2, Viewport};
    pub use tickface_engine::paint::Color;
    pub use tickface_engine::time::{ClockMode, ClockReading, RolloverPolicy};
}
