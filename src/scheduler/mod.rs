//! Fixed-interval tick scheduler
//!
//! Fires a tick once per interval, first after one full interval has
//! elapsed. Ticks run on tokio's blocking pool so a slow tick never holds up
//! the timer. Late ticks are dropped rather than bunched up, and nothing
//! corrects for drift.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Longest interval the timer accepts (about 136 years)
pub const MAX_INTERVAL: Duration = Duration::from_secs(u32::MAX as u64);

/// What to do when a tick fires while the previous one is still running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// Drop the new tick
    #[default]
    Skip,

    /// Run the new tick alongside the old one
    Concurrent,
}

/// Tick counters shared between the timer task and the handle
#[derive(Debug, Default)]
struct TickCounters {
    fired: AtomicU64,
    skipped: AtomicU64,
    running: AtomicBool,
}

/// Clears the running flag when a tick ends, even by panic
struct RunningGuard(Arc<TickCounters>);

impl Drop for RunningGuard {
    fn drop(&mut self) {
        self.0.running.store(false, Ordering::Release);
    }
}

/// Timer configuration
#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    interval: Duration,
    overlap: OverlapPolicy,
}

impl Scheduler {
    /// Create a scheduler firing every `interval`
    ///
    /// A zero interval is bumped to one millisecond; tokio refuses zero
    /// periods. Anything above [`MAX_INTERVAL`] is cut down to it so the
    /// first deadline stays representable.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.clamp(Duration::from_millis(1), MAX_INTERVAL),
            overlap: OverlapPolicy::default(),
        }
    }

    pub fn with_overlap_policy(mut self, overlap: OverlapPolicy) -> Self {
        self.overlap = overlap;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start firing `tick`
    ///
    /// Must be called from within a tokio runtime. The ticks keep coming
    /// until [`SchedulerHandle::stop`] is called or the runtime shuts down.
    pub fn start<F>(self, tick: F) -> SchedulerHandle
    where
        F: Fn() + Send + Sync + 'static,
    {
        let counters = Arc::new(TickCounters::default());
        let tick = Arc::new(tick);
        let task_counters = Arc::clone(&counters);
        let Scheduler { interval, overlap } = self;

        let task = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;

                if overlap == OverlapPolicy::Skip
                    && task_counters
                        .running
                        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                        .is_err()
                {
                    task_counters.skipped.fetch_add(1, Ordering::Relaxed);
                    tracing::warn!(
                        interval_secs = interval.as_secs_f64(),
                        "previous pass still running, skipping tick"
                    );
                    continue;
                }

                let n = task_counters.fired.fetch_add(1, Ordering::Relaxed) + 1;
                tracing::debug!(tick = n, "tick fired");

                let tick = Arc::clone(&tick);
                let guard = match overlap {
                    OverlapPolicy::Skip => Some(RunningGuard(Arc::clone(&task_counters))),
                    OverlapPolicy::Concurrent => None,
                };
                tokio::task::spawn_blocking(move || {
                    let _guard = guard;
                    tick();
                });
            }
        });

        SchedulerHandle { task, counters }
    }
}

/// Handle to a running scheduler
#[derive(Debug)]
pub struct SchedulerHandle {
    task: JoinHandle<()>,
    counters: Arc<TickCounters>,
}

impl SchedulerHandle {
    /// Number of ticks that ran (or are running)
    pub fn ticks_fired(&self) -> u64 {
        self.counters.fired.load(Ordering::Relaxed)
    }

    /// Number of ticks dropped because the previous one was still running
    pub fn ticks_skipped(&self) -> u64 {
        self.counters.skipped.load(Ordering::Relaxed)
    }

    /// Whether a tick is running right now (tracked under `Skip` only)
    pub fn is_tick_running(&self) -> bool {
        self.counters.running.load(Ordering::Acquire)
    }

    /// Stop firing new ticks
    ///
    /// A tick already running is left to finish.
    pub fn stop(self) {
        self.task.abort();
    }
}
