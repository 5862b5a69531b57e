use std::sync::{Arc, Mutex, PoisonError};

use tickface_engine::time::ClockReading;

/// One rendered frame, borrowed for the duration of [`FrameSink::present`].
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Index of the tick that produced the frame.
    pub tick: u64,
    pub reading: &'a ClockReading,
    /// Standalone SVG document.
    pub svg: &'a str,
}

impl Frame<'_> {
    pub fn to_owned_frame(&self) -> OwnedFrame {
        OwnedFrame {
            tick: self.tick,
            reading: self.reading.clone(),
            svg: self.svg.to_owned(),
        }
    }
}

/// An owned copy of a [`Frame`].
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedFrame {
    pub tick: u64,
    pub reading: ClockReading,
    pub svg: String,
}

/// Destination for rendered frames.
///
/// Called from the ticker task once per successful tick.
pub trait FrameSink: Send + 'static {
    fn present(&mut self, frame: &Frame<'_>);
}

/// Adapts a closure into a [`FrameSink`]. See [`sink_fn`].
pub struct FnSink<F>(F);

/// Wraps `f` as a [`FrameSink`].
///
/// ```rust,ignore
/// app.start(sink_fn(|frame| println!("{}", frame.reading.digital)));
/// ```
pub fn sink_fn<F>(f: F) -> FnSink<F>
where
    F: FnMut(&Frame<'_>) + Send + 'static,
{
    FnSink(f)
}

impl<F> FrameSink for FnSink<F>
where
    F: FnMut(&Frame<'_>) + Send + 'static,
{
    fn present(&mut self, frame: &Frame<'_>) {
        (self.0)(frame)
    }
}

/// Keeps the most recent frame for whoever holds a clone.
#[derive(Debug, Clone, Default)]
pub struct LatestFrame {
    inner: Arc<Mutex<Latest>>,
}

#[derive(Debug, Default)]
struct Latest {
    frame: Option<OwnedFrame>,
    count: u64,
}

impl LatestFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last presented frame, if any.
    pub fn get(&self) -> Option<OwnedFrame> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).frame.clone()
    }

    /// Number of frames presented so far.
    pub fn count(&self) -> u64 {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).count
    }
}

impl FrameSink for LatestFrame {
    fn present(&mut self, frame: &Frame<'_>) {
        let mut latest = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        latest.frame = Some(frame.to_owned_frame());
        latest.count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tickface_engine::time::{ClockMode, RolloverPolicy, evaluate};

    fn reading() -> ClockReading {
        let at = Utc.with_ymd_and_hms(2025, 1, 2, 12, 0, 0).unwrap();
        evaluate(&at, ClockMode::Utc, RolloverPolicy::Threshold, None).0
    }

    #[test]
    fn latest_frame_keeps_last_and_counts() {
        let r = reading();
        let latest = LatestFrame::new();
        let mut sink = latest.clone();
        assert!(latest.get().is_none());

        sink.present(&Frame { tick: 0, reading: &r, svg: "<svg/>" });
        sink.present(&Frame { tick: 1, reading: &r, svg: "<svg></svg>" });

        let last = latest.get().unwrap();
        assert_eq!(last.tick, 1);
        assert_eq!(last.svg, "<svg></svg>");
        assert_eq!(latest.count(), 2);
    }

    #[test]
    fn closure_sink_sees_each_frame() {
        let r = reading();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        let mut sink = sink_fn(move |f: &Frame<'_>| s.lock().unwrap().push(f.reading.digital.clone()));

        sink.present(&Frame { tick: 0, reading: &r, svg: "" });
        assert_eq!(*seen.lock().unwrap(), vec!["12:00:00".to_string()]);
    }
}
