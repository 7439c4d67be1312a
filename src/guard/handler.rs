use std::sync::Arc;

use image::GenericImageView;

use crate::guard::decision::RatioPolicy;
use crate::scheduler::{Scheduler, TaskEvent, TaskEventKind, POST_STOP_ENTRY};
use crate::warning::{StdoutWarning, WarningSink, ASPECT_RATIO_WARNING};

/// Checks the cached screen capture before a task runs and stops the task
/// when the display is not approximately 16:9.
///
/// Holds only immutable configuration, so a shared instance is safe to
/// invoke concurrently from the host's event dispatch.
pub struct RatioGuard {
    policy: RatioPolicy,
    warnings: Arc<dyn WarningSink>,
}

impl Default for RatioGuard {
    fn default() -> Self {
        Self::new(RatioPolicy::default(), Arc::new(StdoutWarning))
    }
}

impl RatioGuard {
    pub fn new(policy: RatioPolicy, warnings: Arc<dyn WarningSink>) -> Self {
        Self { policy, warnings }
    }

    /// Hook for host task-lifecycle notifications.
    ///
    /// Infrastructure failures (no controller, capture error) are logged and
    /// skipped so the guard never becomes a source of task failure itself;
    /// an out-of-tolerance ratio is the only path that stops the task.
    pub async fn on_task_event(&self, event: &TaskEvent, scheduler: &dyn Scheduler) {
        if event.kind != TaskEventKind::Starting {
            return;
        }

        if event.entry == POST_STOP_ENTRY {
            // Our own stop request triggers a post-stop dispatch; re-checking
            // it would loop.
            tracing::debug!(task_id = event.task_id, "post-stop event, skipping ratio check");
            return;
        }

        tracing::debug!(
            task_id = event.task_id,
            entry = %event.entry,
            "checking aspect ratio before task execution"
        );

        let Some(controller) = scheduler.controller() else {
            tracing::error!(task_id = event.task_id, "failed to get controller from scheduler");
            return;
        };

        let frame = match controller.cached_frame().await {
            Ok(frame) => frame,
            Err(e) => {
                tracing::error!(task_id = event.task_id, error = %e, "failed to get cached image");
                return;
            }
        };

        let (width, height) = frame.dimensions();
        tracing::debug!(width, height, "got screenshot dimensions");

        let decision = self.policy.evaluate(width, height);
        if decision.accepted {
            tracing::debug!(width, height, "resolution check passed: 16:9");
            return;
        }

        tracing::error!(
            width,
            height,
            actual_ratio = decision.ratio,
            target_ratio = self.policy.target,
            task_id = event.task_id,
            entry = %event.entry,
            "resolution is not 16:9, task will be stopped"
        );
        self.warnings.emit(ASPECT_RATIO_WARNING);
        scheduler.post_stop();
    }
}
