use crate::config::canonical_name;
use crate::error::AppError;
use crate::model::Task;
use std::fmt;
use std::io::Write;

pub const EMAIL_LABEL: &str = "Email";
pub const SMS_LABEL: &str = "SMS";

/// Known delivery channels that can be picked by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReminderChannel {
    #[default]
    Email,
    Sms,
}

impl ReminderChannel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => EMAIL_LABEL,
            Self::Sms => SMS_LABEL,
        }
    }

    /// Parses a channel name, ignoring case and separators.
    pub fn from_name(raw: &str) -> Result<Self, AppError> {
        match canonical_name(raw).as_str() {
            "email" | "e_mail" | "mail" => Ok(Self::Email),
            "sms" | "text" => Ok(Self::Sms),
            "" => Err(AppError::invalid_input("reminder channel is required")),
            _ => Err(AppError::invalid_input(format!(
                "unknown reminder channel '{}'",
                raw.trim()
            ))),
        }
    }
}

impl fmt::Display for ReminderChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Emits a notification line for a task, labelled with its channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    reminder_type: String,
}

impl Reminder {
    pub fn new<T: Into<String>>(reminder_type: T) -> Self {
        Self {
            reminder_type: reminder_type.into(),
        }
    }

    pub fn email() -> Self {
        Self::new(EMAIL_LABEL)
    }

    pub fn sms() -> Self {
        Self::new(SMS_LABEL)
    }

    pub fn for_channel(channel: ReminderChannel) -> Self {
        Self::new(channel.label())
    }

    pub fn reminder_type(&self) -> &str {
        &self.reminder_type
    }

    pub fn message(&self, task: &Task) -> String {
        format!(
            "Reminder sent for task: {} via {}",
            task.title(),
            self.reminder_type
        )
    }

    pub fn send_reminder<W: Write>(&self, task: &Task, out: &mut W) -> Result<(), AppError> {
        writeln!(out, "{}", self.message(task))?;
        tracing::debug!(
            title = task.title(),
            channel = %self.reminder_type,
            "reminder sent"
        );
        Ok(())
    }
}
