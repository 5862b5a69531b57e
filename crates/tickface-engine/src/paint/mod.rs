//! Paint model shared between the UI and the SVG writer.
//!
//! Colors are stored premultiplied; the writer converts back to straight
//! alpha when it emits `rgb()` + opacity attributes.

pub mod color;

pub use color::Color;
