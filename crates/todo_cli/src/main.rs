use clap::Parser;
use clap::error::ErrorKind;
use std::io;
use todo_cli::cli::{self, Cli};
use todo_cli::demo;
use todo_core::config;
use todo_core::error::AppError;
use todo_core::reminder::Reminder;

const DEBUG_ENV_VAR: &str = "TODOAPP_DEBUG";

fn init_logging() {
    if std::env::var(DEBUG_ENV_VAR).is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("todo_core=debug,todo_cli=debug")
            .with_writer(io::stderr)
            .init();
    }
}

fn normalize_parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    AppError::invalid_input(message)
}

fn run(cli: Cli) -> Result<(), AppError> {
    let overrides = cli::config_overrides(&cli.config_override)?;
    let choice = cli::resolve_channel(
        cli.channel.as_deref(),
        &overrides,
        config::load_config_with_fallback,
    )?;
    for warning in &choice.warnings {
        eprintln!("WARNING: config ignored: {}", warning);
    }

    let channel = choice.channel;
    tracing::debug!(%channel, format = ?cli.output_format(), "starting demo");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run_demo(Reminder::for_channel(channel), cli.output_format(), &mut out)
}

fn main() {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            eprintln!("ERROR: {}", normalize_parse_error(err));
            std::process::exit(1);
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}
