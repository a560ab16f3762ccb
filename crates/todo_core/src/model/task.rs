use time::{OffsetDateTime, UtcOffset};

/// Priority given to tasks that do not name one.
pub const DEFAULT_PRIORITY: &str = "Medium";
/// Priority given to priority tasks that do not name one.
pub const HIGH_PRIORITY: &str = "High";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Standard,
    Priority,
    /// Recurrence is a label only ("Daily", "Weekly", ...); nothing reschedules it.
    Recurring { recurrence: String },
}

impl TaskKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Priority => "priority",
            Self::Recurring { .. } => "recurring",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }
}

/// A unit of work. Titles and priorities are free text and never validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    title: String,
    completed: bool,
    priority: String,
    created_at: OffsetDateTime,
    kind: TaskKind,
}

impl Task {
    pub fn new<T: Into<String>>(title: T) -> Self {
        Self::build(title.into(), DEFAULT_PRIORITY.to_string(), TaskKind::Standard)
    }

    pub fn with_priority<T: Into<String>, P: Into<String>>(title: T, priority: P) -> Self {
        Self::build(title.into(), priority.into(), TaskKind::Standard)
    }

    pub fn priority_task<T: Into<String>>(title: T) -> Self {
        Self::build(title.into(), HIGH_PRIORITY.to_string(), TaskKind::Priority)
    }

    pub fn priority_task_with<T: Into<String>, P: Into<String>>(title: T, priority: P) -> Self {
        Self::build(title.into(), priority.into(), TaskKind::Priority)
    }

    pub fn recurring<T: Into<String>, R: Into<String>>(title: T, recurrence: R) -> Self {
        Self::build(
            title.into(),
            DEFAULT_PRIORITY.to_string(),
            TaskKind::Recurring {
                recurrence: recurrence.into(),
            },
        )
    }

    fn build(title: String, priority: String, kind: TaskKind) -> Self {
        Self {
            title,
            completed: false,
            priority,
            created_at: now_local(),
            kind,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn priority(&self) -> &str {
        &self.priority
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn status(&self) -> TaskStatus {
        if self.completed {
            TaskStatus::Completed
        } else {
            TaskStatus::Pending
        }
    }

    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn recurrence(&self) -> Option<&str> {
        match &self.kind {
            TaskKind::Recurring { recurrence } => Some(recurrence),
            _ => None,
        }
    }

    /// Sets the completion flag. Either direction is allowed.
    pub fn update_status(&mut self, status: bool) {
        tracing::debug!(title = %self.title, completed = status, "task status updated");
        self.completed = status;
    }
}

fn now_local() -> OffsetDateTime {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetDateTime::now_utc().to_offset(offset)
}
