use std::io::Write;
use tabled::{Table, Tabled};
use time::format_description::well_known::Rfc3339;
use todo_core::error::AppError;
use todo_core::model::Task;
use todo_core::reminder::Reminder;
use todo_core::reminder_manager::ReminderManager;
use todo_core::task_manager::TaskManager;

pub const LIST_HEADER: &str = "\n--- To-Do List ---";
pub const UPDATED_LIST_HEADER: &str = "\n--- Updated To-Do List ---";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Table,
    Json,
}

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Recurrence")]
    recurrence: String,
}

/// The three sample tasks, in display order.
pub fn sample_tasks() -> TaskManager {
    let mut manager = TaskManager::new();
    manager.add_task(Task::with_priority("Study Data Structures", "High"));
    manager.add_task(Task::recurring("Exercise", "Daily"));
    manager.add_task(Task::priority_task("Complete Python Project"));
    manager
}

/// List, remind, complete the first task, list again.
pub fn run_demo<W: Write>(
    reminder: Reminder,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), AppError> {
    let mut task_manager = sample_tasks();
    let reminder_manager = ReminderManager::new(reminder);

    if format == OutputFormat::Json {
        let tasks = tasks_json(task_manager.tasks())?;
        let reminders = reminders_json(&reminder_manager, task_manager.tasks())?;
        complete_first(&mut task_manager);
        let payload = serde_json::json!({
            "tasks": tasks,
            "reminders": reminders,
            "updated_tasks": tasks_json(task_manager.tasks())?,
        });
        writeln!(out, "{}", payload)?;
        return Ok(());
    }

    writeln!(out, "{LIST_HEADER}")?;
    show(&task_manager, format, out)?;

    reminder_manager.send_task_reminders(task_manager.tasks(), out)?;

    complete_first(&mut task_manager);
    writeln!(out, "{UPDATED_LIST_HEADER}")?;
    show(&task_manager, format, out)?;

    Ok(())
}

fn complete_first(task_manager: &mut TaskManager) {
    if let Some(task) = task_manager.task_mut(0) {
        task.update_status(true);
    }
}

fn show<W: Write>(
    task_manager: &TaskManager,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Table => {
            let rows = task_manager
                .tasks()
                .iter()
                .enumerate()
                .map(|(idx, task)| TaskRow {
                    index: idx + 1,
                    title: task.title().to_string(),
                    priority: task.priority().to_string(),
                    status: task.status().label(),
                    recurrence: task.recurrence().unwrap_or("-").to_string(),
                });
            writeln!(out, "{}", Table::new(rows))?;
            Ok(())
        }
        _ => task_manager.show_tasks(out),
    }
}

fn tasks_json(tasks: &[Task]) -> Result<serde_json::Value, AppError> {
    let mut payload = Vec::with_capacity(tasks.len());
    for (idx, task) in tasks.iter().enumerate() {
        let created_at = task
            .created_at()
            .format(&Rfc3339)
            .map_err(|err| AppError::invalid_data(err.to_string()))?;
        payload.push(serde_json::json!({
            "index": idx + 1,
            "title": task.title(),
            "priority": task.priority(),
            "status": task.status().label(),
            "kind": task.kind().label(),
            "recurrence": task.recurrence(),
            "created_at": created_at,
        }));
    }
    Ok(serde_json::Value::Array(payload))
}

/// Sends through the manager into a buffer, then pairs each line sent with
/// the task it was sent for.
fn reminders_json(
    reminder_manager: &ReminderManager,
    tasks: &[Task],
) -> Result<serde_json::Value, AppError> {
    let mut sent = Vec::new();
    reminder_manager.send_task_reminders(tasks, &mut sent)?;
    let sent = String::from_utf8(sent).map_err(|err| AppError::invalid_data(err.to_string()))?;

    let channel = reminder_manager.reminder().reminder_type();
    Ok(reminder_manager
        .pending_tasks(tasks)
        .zip(sent.lines())
        .map(|(task, message)| {
            serde_json::json!({
                "title": task.title(),
                "channel": channel,
                "message": message,
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{OutputFormat, run_demo, sample_tasks};
    use todo_core::reminder::Reminder;

    fn render(reminder: Reminder, format: OutputFormat) -> String {
        let mut out = Vec::new();
        run_demo(reminder, format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn sample_tasks_cover_each_variant() {
        let manager = sample_tasks();
        let priorities: Vec<&str> = manager.tasks().iter().map(|task| task.priority()).collect();

        assert_eq!(priorities, vec!["High", "Medium", "High"]);
        assert_eq!(manager.tasks()[1].recurrence(), Some("Daily"));
        assert!(manager.tasks().iter().all(|task| !task.is_completed()));
    }

    #[test]
    fn plain_demo_matches_expected_transcript() {
        let expected = "\n--- To-Do List ---\n\
            1. Study Data Structures (Priority: High, Status: Pending)\n\
            2. Exercise (Priority: Medium, Status: Pending)\n\
            3. Complete Python Project (Priority: High, Status: Pending)\n\
            Reminder sent for task: Study Data Structures via Email\n\
            Reminder sent for task: Exercise via Email\n\
            Reminder sent for task: Complete Python Project via Email\n\
            \n--- Updated To-Do List ---\n\
            1. Study Data Structures (Priority: High, Status: Completed)\n\
            2. Exercise (Priority: Medium, Status: Pending)\n\
            3. Complete Python Project (Priority: High, Status: Pending)\n";

        assert_eq!(render(Reminder::email(), OutputFormat::Plain), expected);
    }

    #[test]
    fn sms_demo_labels_reminders() {
        let output = render(Reminder::sms(), OutputFormat::Plain);
        assert!(output.contains("Reminder sent for task: Exercise via SMS\n"));
        assert!(!output.contains("via Email"));
    }

    #[test]
    fn json_demo_reports_both_listings() {
        let output = render(Reminder::email(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();

        assert_eq!(value["tasks"].as_array().unwrap().len(), 3);
        assert_eq!(value["tasks"][0]["status"], "Pending");
        assert_eq!(value["tasks"][1]["kind"], "recurring");
        assert_eq!(value["tasks"][1]["recurrence"], "Daily");
        assert!(value["tasks"][0]["recurrence"].is_null());
        assert!(value["tasks"][0]["created_at"].is_string());

        assert_eq!(value["reminders"].as_array().unwrap().len(), 3);
        assert_eq!(value["reminders"][2]["channel"], "Email");
        assert_eq!(value["reminders"][2]["title"], "Complete Python Project");
        assert_eq!(
            value["reminders"][0]["message"],
            "Reminder sent for task: Study Data Structures via Email"
        );

        assert_eq!(value["updated_tasks"][0]["status"], "Completed");
        assert_eq!(value["updated_tasks"][1]["status"], "Pending");
        assert_eq!(value["updated_tasks"][2]["status"], "Pending");
    }

    #[test]
    fn table_demo_keeps_headers_and_reminder_lines() {
        let output = render(Reminder::email(), OutputFormat::Table);

        assert!(output.contains("--- To-Do List ---"));
        assert!(output.contains("--- Updated To-Do List ---"));
        assert!(output.contains("Recurrence"));
        assert!(output.contains("Reminder sent for task: Exercise via Email"));
        assert!(output.contains("Completed"));
        assert!(!output.contains("1. Study Data Structures"));
    }
}
