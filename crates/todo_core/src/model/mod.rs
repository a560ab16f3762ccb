mod task;

pub use task::{DEFAULT_PRIORITY, HIGH_PRIORITY, Task, TaskKind, TaskStatus};
