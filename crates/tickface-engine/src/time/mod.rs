//! Time subsystem.
//!
//! Turns a wall-clock instant into hand angles and a digital readout, and
//! drives that evaluation from a periodic ticker.
//!
//! Intended usage:
//! - one `ClockAngleEngine` per running clock (it owns the continuity state)
//! - one `Ticker` per clock, armed on activation and cancelled (or dropped) on teardown
//! - a `TimeSource` queried once per tick

mod angles;
mod continuity;
mod digital;
mod engine;
mod fields;
mod source;
mod ticker;

pub use angles::AngleSet;
pub use continuity::{ContinuityState, Hand, HandContinuity, RolloverPolicy};
pub use digital::format_digital;
pub use engine::{ClockAngleEngine, ClockReading, EngineConfig, evaluate};
pub use fields::{ClockFields, ClockMode};
pub use source::{FixedClock, ScriptedClock, SystemClock, TimeSource};
pub use ticker::{Tick, Ticker};
