//! Output backends.
//!
//! Renderers consume `scene` draw streams. The SVG writer is the only backend:
//! it produces a standalone document that a browser, a rasterizer or a file
//! viewer can display.
//!
//! Convention:
//! - geometry is in logical units (top-left origin, +Y down)
//! - the viewport becomes the SVG `viewBox`

pub mod svg;

pub use svg::SvgWriter;
