//! Fixed geometry of the clock face.
//!
//! Everything here is stateless and independent of time: the same layout is
//! drawn every tick, only the hand rotations change.

mod hands;
mod layout;
mod markers;

pub use hands::HandShape;
pub use layout::DialLayout;
pub use markers::{MarkerGeometry, Tick, TickKind};
