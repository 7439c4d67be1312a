use serde::{Deserialize, Serialize};

/// Entry name the host dispatches for post-stop bookkeeping. Starting events
/// carrying this entry must not re-trigger the ratio check.
pub const POST_STOP_ENTRY: &str = "PostStop";

/// Lifecycle phases reported by the host scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskEventKind {
    Starting,
    Running,
    Stopping,
    Stopped,
}

/// One lifecycle notification pushed by the host scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskEvent {
    pub kind: TaskEventKind,
    pub task_id: u64,
    /// Entry-point name of the task pipeline being started.
    pub entry: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl TaskEvent {
    pub fn new(kind: TaskEventKind, task_id: u64, entry: impl Into<String>) -> Self {
        Self {
            kind,
            task_id,
            entry: entry.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}
