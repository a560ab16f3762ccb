use crate::error::AppError;
use crate::model::Task;
use std::io::Write;

/// Ordered task list. Insertion order is kept and duplicates are allowed.
#[derive(Debug, Clone, Default)]
pub struct TaskManager {
    tasks: Vec<Task>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_task(&mut self, task: Task) {
        tracing::debug!(
            title = task.title(),
            priority = task.priority(),
            kind = task.kind().label(),
            position = self.tasks.len() + 1,
            "task added"
        );
        self.tasks.push(task);
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Zero-based mutable access, used to update a stored task's status.
    pub fn task_mut(&mut self, index: usize) -> Option<&mut Task> {
        self.tasks.get_mut(index)
    }

    /// Writes one line per task, numbered from 1.
    pub fn show_tasks<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        for (idx, task) in self.tasks.iter().enumerate() {
            writeln!(out, "{}", task_line(idx + 1, task))?;
        }
        Ok(())
    }
}

pub fn task_line(index: usize, task: &Task) -> String {
    format!(
        "{}. {} (Priority: {}, Status: {})",
        index,
        task.title(),
        task.priority(),
        task.status().label()
    )
}
