//! Main mirror command

use crate::config::Config;
use crate::logging::LogSink;
use crate::reconciler::Reconciler;
use crate::scheduler::{Scheduler, SchedulerHandle};
use crate::types::{MirrorError, PassOutcome};
use crate::ui::write_started_banner;
use std::io::{self, ErrorKind};
use std::sync::Arc;

/// Run one pass for `config` right away
pub fn run_pass(config: &Config, sink: &dyn LogSink) -> PassOutcome {
    Reconciler::new(sink).reconcile(&config.source, &config.destination)
}

/// Start the periodic passes for `config`
///
/// Must be called from within a tokio runtime.
pub fn start(config: &Config, sink: Arc<dyn LogSink>) -> SchedulerHandle {
    let scheduler = Scheduler::new(config.interval).with_overlap_policy(config.overlap);
    let config = config.clone();

    scheduler.start(move || {
        if let PassOutcome::Completed(stats) = run_pass(&config, sink.as_ref()) {
            if stats.changes() > 0 {
                tracing::info!(changes = stats.changes(), "destination updated");
            }
        }
    })
}

/// Run the periodic passes until Enter is pressed or stdin closes
pub async fn run(config: Config, sink: Arc<dyn LogSink>) -> Result<(), MirrorError> {
    let handle = start(&config, sink);
    write_started_banner(&mut io::stdout())?;

    wait_for_enter().await?;

    tracing::debug!(
        fired = handle.ticks_fired(),
        skipped = handle.ticks_skipped(),
        "stopping scheduler"
    );
    handle.stop();
    Ok(())
}

async fn wait_for_enter() -> Result<(), MirrorError> {
    tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        io::stdin().read_line(&mut line).map(|_| ())
    })
    .await
    .map_err(|e| MirrorError::Io(io::Error::new(ErrorKind::Other, e)))??;
    Ok(())
}
