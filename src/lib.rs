pub mod config;
pub mod errors;
pub mod guard;
pub mod scheduler;
pub mod warning;

use std::sync::Arc;

use tokio::sync::mpsc;

pub use crate::errors::{GuardError, GuardResult};
pub use crate::guard::{Decision, RatioGuard, RatioPolicy};
pub use crate::scheduler::{Scheduler, ScreenController, TaskEvent, TaskEventKind, POST_STOP_ENTRY};
pub use crate::warning::{WarningSink, ASPECT_RATIO_WARNING};

/// Installs the tracing subscriber (RATIOGUARD_LOG / RUST_LOG env filter,
/// default `debug`). Call once from the host process.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();
}

/// Drains host lifecycle events from a channel and runs the guard on each.
///
/// Alternative to wiring `RatioGuard::on_task_event` into a callback
/// directly: the host pushes events into the sender and drops it on
/// shutdown, which ends this loop. Events are handled one at a time in
/// arrival order.
pub async fn run_guard(
    guard: RatioGuard,
    mut events: mpsc::Receiver<TaskEvent>,
    scheduler: Arc<dyn Scheduler>,
) {
    while let Some(event) = events.recv().await {
        guard.on_task_event(&event, scheduler.as_ref()).await;
    }
    tracing::debug!("task event channel closed, ratio guard exiting");
}
