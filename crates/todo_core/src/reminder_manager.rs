use crate::error::AppError;
use crate::model::Task;
use crate::reminder::Reminder;
use std::io::Write;

/// Sends reminders through one channel for whichever tasks it is handed.
#[derive(Debug, Clone)]
pub struct ReminderManager {
    reminder: Reminder,
}

impl ReminderManager {
    pub fn new(reminder: Reminder) -> Self {
        Self { reminder }
    }

    pub fn reminder(&self) -> &Reminder {
        &self.reminder
    }

    /// Tasks that `send_task_reminders` would remind about, in input order.
    pub fn pending_tasks<'a>(&self, tasks: &'a [Task]) -> impl Iterator<Item = &'a Task> + 'a {
        tasks.iter().filter(|task| !task.is_completed())
    }

    pub fn send_task_reminders<W: Write>(
        &self,
        tasks: &[Task],
        out: &mut W,
    ) -> Result<(), AppError> {
        for task in tasks {
            if task.is_completed() {
                tracing::debug!(title = task.title(), "reminder skipped for completed task");
                continue;
            }
            self.reminder.send_reminder(task, out)?;
        }
        Ok(())
    }
}
