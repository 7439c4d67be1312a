use std::sync::Arc;

use async_trait::async_trait;
use image::DynamicImage;

use crate::errors::GuardResult;

/// Device controller owned by the host. The guard only reads the most
/// recently cached capture; it never triggers a fresh screenshot.
#[async_trait]
pub trait ScreenController: Send + Sync {
    /// Returns the last cached screen capture. Expected to be a bounded,
    /// fast operation; failures are environmental, not policy violations.
    async fn cached_frame(&self) -> GuardResult<DynamicImage>;
}

/// Host task scheduler as seen by the guard: a controller accessor and a
/// one-shot stop request. Task teardown semantics stay with the host.
pub trait Scheduler: Send + Sync {
    fn controller(&self) -> Option<Arc<dyn ScreenController>>;

    /// Asynchronously requests cessation of the active task.
    fn post_stop(&self);
}
