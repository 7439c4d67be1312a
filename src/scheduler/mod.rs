pub mod events;
pub mod traits;

pub use events::{TaskEvent, TaskEventKind, POST_STOP_ENTRY};
pub use traits::{Scheduler, ScreenController};
