use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// One firing of a [`Ticker`].
#[derive(Debug, Copy, Clone)]
pub struct Tick {
    /// Monotonic tick counter, starting at 0 for the immediate first tick.
    pub index: u64,
    /// When the tick was scheduled to fire.
    pub scheduled: Instant,
}

/// Periodic timer driving a clock's re-evaluation.
///
/// `start` arms it; `cancel` disarms it; dropping it disarms it as well, so a
/// ticker owned by a clock instance stops on every teardown path. Once
/// `cancel` has returned, the callback is not invoked again.
///
/// Must be started from within a tokio runtime. The first tick fires
/// immediately; later ones follow at `period`, and a late tick delays the
/// schedule rather than bursting to catch up.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    armed: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Shortest accepted period. `tokio::time::interval` rejects zero.
    pub const MIN_PERIOD: Duration = Duration::from_millis(1);

    /// Periods below [`MIN_PERIOD`](Self::MIN_PERIOD) are clamped up to it.
    pub fn new(period: Duration) -> Self {
        if period < Self::MIN_PERIOD {
            log::warn!("ticker period {period:?} below minimum, using {:?}", Self::MIN_PERIOD);
        }
        Self {
            period: period.max(Self::MIN_PERIOD),
            armed: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// `true` between `start` and `cancel`/drop.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.armed.load(Ordering::Acquire)
    }

    /// Arms the ticker, replacing any previous callback.
    pub fn start<F>(&mut self, mut on_tick: F)
    where
        F: FnMut(Tick) + Send + 'static,
    {
        self.cancel();

        // Fresh flag per run so a stale task can never observe a re-arm.
        let armed = Arc::new(AtomicBool::new(true));
        self.armed = armed.clone();

        let period = self.period;
        log::debug!("ticker armed, period = {period:?}");

        self.handle = Some(tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut index: u64 = 0;
            loop {
                let scheduled = interval.tick().await;
                if !armed.load(Ordering::Acquire) {
                    break;
                }
                on_tick(Tick { index, scheduled });
                index = index.wrapping_add(1);
            }
        }));
    }

    /// Disarms the ticker. Idempotent.
    pub fn cancel(&mut self) {
        self.armed.store(false, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            handle.abort();
            log::debug!("ticker cancelled");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU64;

    fn counting(ticker: &mut Ticker) -> Arc<AtomicU64> {
        let count = Arc::new(AtomicU64::new(0));
        let c = count.clone();
        ticker.start(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[tokio::test(start_paused = true)]
    async fn fires_immediately_then_every_period() {
        let mut ticker = Ticker::new(Duration::from_secs(1));
        let count = counting(&mut ticker);

        time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 4);
        assert!(ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_further_ticks() {
        let mut ticker = Ticker::new(Duration::from_secs(1));
        let count = counting(&mut ticker);

        time::sleep(Duration::from_millis(1500)).await;
        ticker.cancel();
        let seen = count.load(Ordering::SeqCst);

        time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), seen);
        assert!(!ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_stops_further_ticks() {
        let count;
        {
            let mut ticker = Ticker::new(Duration::from_secs(1));
            count = counting(&mut ticker);
            time::sleep(Duration::from_millis(500)).await;
        }
        let seen = count.load(Ordering::SeqCst);
        time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), seen);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_replaces_callback() {
        let mut ticker = Ticker::new(Duration::from_secs(1));
        let first = counting(&mut ticker);
        time::sleep(Duration::from_millis(500)).await;
        let second = counting(&mut ticker);
        time::sleep(Duration::from_millis(2500)).await;

        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn tick_indices_are_sequential() {
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let s = seen.clone();
        let mut ticker = Ticker::new(Duration::from_secs(1));
        ticker.start(move |tick| s.lock().unwrap().push(tick.index));

        time::sleep(Duration::from_millis(2500)).await;
        ticker.cancel();
        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_period_is_clamped_and_still_ticks() {
        let mut ticker = Ticker::new(Duration::ZERO);
        assert_eq!(ticker.period(), Ticker::MIN_PERIOD);

        let count = counting(&mut ticker);
        time::sleep(Duration::from_millis(5)).await;
        ticker.cancel();
        assert!(count.load(Ordering::SeqCst) >= 5);
    }
}
