use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(file_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("todoapp-{nanos}-{file_name}"))
}

const EXPECTED: &str = "
--- To-Do List ---
1. Study Data Structures (Priority: High, Status: Pending)
2. Exercise (Priority: Medium, Status: Pending)
3. Complete Python Project (Priority: High, Status: Pending)
Reminder sent for task: Study Data Structures via Email
Reminder sent for task: Exercise via Email
Reminder sent for task: Complete Python Project via Email

--- Updated To-Do List ---
1. Study Data Structures (Priority: High, Status: Completed)
2. Exercise (Priority: Medium, Status: Pending)
3. Complete Python Project (Priority: High, Status: Pending)
";

#[test]
fn cli_smoke_help() {
    let exe = env!("CARGO_BIN_EXE_todo_cli");
    let output = Command::new(exe)
        .arg("--help")
        .output()
        .expect("failed to run todo_cli --help");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--channel"));
}

#[test]
fn default_run_prints_demo_transcript() {
    let exe = env!("CARGO_BIN_EXE_todo_cli");
    let config_path = temp_path("demo-missing-config.json");
    let output = Command::new(exe)
        .env("TODOAPP_CONFIG_PATH", &config_path)
        .env_remove("TODOAPP_DEBUG")
        .output()
        .expect("failed to run todo_cli");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
    assert!(output.stderr.is_empty());
}

#[test]
fn debug_logging_goes_to_stderr_only() {
    let exe = env!("CARGO_BIN_EXE_todo_cli");
    let config_path = temp_path("demo-debug-config.json");
    let output = Command::new(exe)
        .env("TODOAPP_CONFIG_PATH", &config_path)
        .env("TODOAPP_DEBUG", "1")
        .output()
        .expect("failed to run todo_cli");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("task added"));
}

#[test]
fn unknown_flag_reports_invalid_input() {
    let exe = env!("CARGO_BIN_EXE_todo_cli");
    let output = Command::new(exe)
        .arg("--bogus")
        .output()
        .expect("failed to run todo_cli --bogus");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: invalid_input"));
}
