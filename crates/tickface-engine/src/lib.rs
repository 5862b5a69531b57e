//! Tickface engine crate.
//!
//! Owns the clock's time logic (angle engine, continuity, ticker), the fixed
//! dial geometry and the renderer-agnostic draw stream plus its SVG output.
//! Higher layers (`tickface-ui`) build widget trees on top of it.

pub mod coords;
pub mod dial;
pub mod error;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod time;

pub use error::ClockError;
