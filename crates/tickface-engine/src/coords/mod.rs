//! Coordinate and geometry types shared across the dial, the draw list and UI.
//!
//! Canonical space:
//! - Logical units (the dial itself is laid out on a 100×100 square)
//! - Origin top-left
//! - +X right, +Y down
//!
//! The SVG writer emits these values unchanged; scaling is done by the widget
//! that places the dial.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
