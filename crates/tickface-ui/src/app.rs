use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use tickface_engine::ClockError;
use tickface_engine::coords::Viewport;
use tickface_engine::render::SvgWriter;
use tickface_engine::time::{
    ClockAngleEngine, ClockMode, ClockReading, EngineConfig, RolloverPolicy, SystemClock, Tick,
    Ticker, TimeSource,
};

use crate::clock::ClockWidget;
use crate::scene::UiScene;
use crate::sink::{Frame, FrameSink, OwnedFrame};
use crate::theme::Theme;

const DEFAULT_TICK: Duration = Duration::from_secs(1);

// ── Application ───────────────────────────────────────────────────────────

/// Top-level clock application builder.
///
/// Configure the engine, look and time source, then either [`start`] a
/// ticker and keep the returned handle, or [`run_until`] a shutdown signal.
///
/// ```rust,ignore
/// Application::new()
///     .mode(ClockMode::Utc)
///     .continuity(true)
///     .tagline("Time in motion")
///     .run_until(LatestFrame::new(), async {
///         tokio::signal::ctrl_c().await.context("waiting for ctrl-c")
///     })
///     .await?;
/// ```
///
/// [`start`]: Self::start
/// [`run_until`]: Self::run_until
pub struct Application {
    config:   EngineConfig,
    period:   Duration,
    viewport: Viewport,
    theme:    Theme,
    view:     ClockWidget,
    source:   Arc<dyn TimeSource>,
}

impl Application {
    pub fn new() -> Self {
        Self {
            config:   EngineConfig::default(),
            period:   DEFAULT_TICK,
            viewport: Viewport::new(400.0, 520.0),
            theme:    Theme::default(),
            view:     ClockWidget::default(),
            source:   Arc::new(SystemClock::new()),
        }
    }

    pub fn mode(mut self, mode: ClockMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Keep hand angles increasing across rollovers.
    pub fn continuity(mut self, on: bool) -> Self {
        self.config.continuity = on;
        self
    }

    pub fn rollover_policy(mut self, policy: RolloverPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Re-evaluation period. Clamped to at least 1 ms.
    pub fn tick_interval(mut self, period: Duration) -> Self {
        self.period = period.max(Ticker::MIN_PERIOD);
        self
    }

    /// Output size in logical pixels.
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.viewport = Viewport::new(width, height);
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn view(mut self, view: ClockWidget) -> Self {
        self.view = view;
        self
    }

    pub fn tagline(mut self, text: impl Into<String>) -> Self {
        self.view.tagline = Some(text.into());
        self
    }

    /// Emit CSS transitions on the hands.
    pub fn animate(mut self, on: bool) -> Self {
        self.view.animate = on;
        self
    }

    pub fn time_source(mut self, source: impl TimeSource + 'static) -> Self {
        self.source = Arc::new(source);
        self
    }

    // ── Entry points ──────────────────────────────────────────────────────

    /// Renders a single frame from a fresh engine, without a ticker.
    pub fn snapshot(&self) -> Result<OwnedFrame, ClockError> {
        let mut engine = ClockAngleEngine::new(self.config);
        let reading = engine.sample(self.source.as_ref())?;
        let mut pipeline = FramePipeline::new(self);
        let svg = pipeline.render(&reading).to_owned();
        Ok(OwnedFrame { tick: 0, reading, svg })
    }

    /// Arms the ticker and returns its handle. Must be called inside a tokio
    /// runtime. The clock stops when the handle is stopped or dropped.
    pub fn start<S: FrameSink>(self, sink: S) -> ClockHandle {
        let mut runtime = ClockRuntime::new(&self, sink);
        let mut ticker = Ticker::new(self.period);

        log::info!(
            "clock started: mode = {}, continuity = {}, policy = {:?}, period = {:?}",
            self.config.mode.label(),
            self.config.continuity,
            self.config.policy,
            self.period,
        );
        ticker.start(move |tick| runtime.on_tick(tick));

        ClockHandle { ticker }
    }

    /// Runs the clock until `shutdown` resolves, then stops it.
    ///
    /// The ticker is cancelled on every exit path, including a failing
    /// `shutdown` future.
    pub async fn run_until<S, F>(self, sink: S, shutdown: F) -> anyhow::Result<()>
    where
        S: FrameSink,
        F: Future<Output = anyhow::Result<()>>,
    {
        let handle = self.start(sink);
        shutdown.await.context("clock shutdown signal failed")?;
        handle.stop();
        log::info!("clock stopped");
        Ok(())
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── ClockHandle ───────────────────────────────────────────────────────────

/// A running clock. Dropping it stops the ticker.
#[derive(Debug)]
pub struct ClockHandle {
    ticker: Ticker,
}

impl ClockHandle {
    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Stops the clock. No frame is presented after this returns.
    pub fn stop(mut self) {
        self.ticker.cancel();
    }
}

// ── internals ─────────────────────────────────────────────────────────────

/// Reading → widget tree → draw list → SVG.
struct FramePipeline {
    view:     ClockWidget,
    theme:    Theme,
    viewport: Viewport,
    scene:    UiScene,
    writer:   SvgWriter,
}

impl FramePipeline {
    fn new(app: &Application) -> Self {
        Self {
            view:     app.view.clone(),
            theme:    app.theme,
            viewport: app.viewport,
            scene:    UiScene::new(),
            writer:   SvgWriter::new(app.viewport).background(app.theme.background),
        }
    }

    fn render(&mut self, reading: &ClockReading) -> &str {
        let root = self.view.build(reading, &self.theme);
        let list = self.scene.frame(root, self.viewport);
        self.writer.render(list)
    }
}

/// State moved into the ticker callback. Owns the engine, so the continuity
/// state lives exactly as long as the running clock.
struct ClockRuntime<S> {
    engine:   ClockAngleEngine,
    source:   Arc<dyn TimeSource>,
    pipeline: FramePipeline,
    sink:     S,
}

impl<S: FrameSink> ClockRuntime<S> {
    fn new(app: &Application, sink: S) -> Self {
        Self {
            engine:   ClockAngleEngine::new(app.config),
            source:   app.source.clone(),
            pipeline: FramePipeline::new(app),
            sink,
        }
    }

    fn on_tick(&mut self, tick: Tick) {
        let reading = match self.engine.sample(self.source.as_ref()) {
            Ok(r) => r,
            Err(err) => {
                // No fallback time: skip the frame and query again next tick.
                log::error!("tick {}: {err}; frame skipped", tick.index);
                return;
            }
        };

        let svg = self.pipeline.render(&reading);
        log::trace!("tick {}: {} ({} bytes)", tick.index, reading.digital, svg.len());
        self.sink.present(&Frame { tick: tick.index, reading: &reading, svg });
    }
}
