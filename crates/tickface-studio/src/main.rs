use std::io::{self, Write};

use anyhow::Context;

use tickface_engine::logging::{LoggingConfig, init_logging};
use tickface_ui::prelude::*;

/// Rewrites a single terminal line with the current reading.
struct TerminalSink {
    out: io::Stdout,
}

impl FrameSink for TerminalSink {
    fn present(&mut self, frame: &Frame<'_>) {
        let r = frame.reading;
        let mut out = self.out.lock();
        let written = write!(
            out,
            "\r  {}  {}   hour {:>7.1}°  minute {:>7.1}°  second {:>7.1}°",
            r.digital,
            r.mode.label(),
            r.angles.hour,
            r.angles.minute,
            r.angles.second,
        )
        .and_then(|()| out.flush());
        if let Err(e) = written {
            log::warn!("terminal write failed: {e}");
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║            TICKFACE STUDIO             ║");
    println!("  ║      Time in motion  ·  Ctrl-C quits   ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?;

    runtime.block_on(async {
        Application::new()
            .mode(ClockMode::Utc)
            .continuity(true)
            .tagline("Time in motion")
            .run_until(TerminalSink { out: io::stdout() }, async {
                tokio::signal::ctrl_c().await.context("listening for ctrl-c")
            })
            .await
    })?;

    println!();
    Ok(())
}
