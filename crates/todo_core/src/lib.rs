pub mod config;
pub mod error;
pub mod model;
pub mod reminder;
pub mod reminder_manager;
pub mod task_manager;

pub use error::AppError;
pub use model::{Task, TaskKind, TaskStatus};
pub use reminder::{Reminder, ReminderChannel};
pub use reminder_manager::ReminderManager;
pub use task_manager::TaskManager;
