use clap::Parser;
use todo_core::config::{ConfigLoad, ConfigOverrides, canonical_name};
use todo_core::error::AppError;
use todo_core::reminder::ReminderChannel;

use crate::demo::OutputFormat;

/// Runs the to-do list demonstration: list tasks, send reminders, complete
/// the first task and list again.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Reminder channel (email or sms)
    ///
    /// Example: todo_cli --channel sms
    #[arg(long, value_name = "NAME")]
    pub channel: Option<String>,

    /// Output JSON
    #[arg(long, conflicts_with = "table")]
    pub json: bool,

    /// Render task listings as tables
    #[arg(long)]
    pub table: bool,

    /// Override configuration values (format KEY=VALUE)
    #[arg(long = "config-override", value_name = "KEY=VALUE")]
    pub config_override: Vec<String>,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.table {
            OutputFormat::Table
        } else {
            OutputFormat::Plain
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOverrideTarget {
    ReminderChannel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedConfigOverride {
    pub target: ConfigOverrideTarget,
    pub value: String,
}

/// Parse a raw `KEY=VALUE` override string into a structured target.
pub fn parse_config_override(raw: &str) -> Result<ParsedConfigOverride, String> {
    let (key_raw, value_raw) = raw
        .trim()
        .split_once('=')
        .ok_or_else(|| "override must be in KEY=VALUE format".to_string())?;

    let key = canonical_name(key_raw);
    if key.is_empty() {
        return Err("override key cannot be empty".to_string());
    }

    match key.as_str() {
        "reminder_channel" | "channel" => Ok(ParsedConfigOverride {
            target: ConfigOverrideTarget::ReminderChannel,
            value: value_raw.trim().to_string(),
        }),
        other => Err(format!("unknown config field '{other}'")),
    }
}

/// Folds every `--config-override` argument into one set; later ones win.
pub fn config_overrides(raw: &[String]) -> Result<ConfigOverrides, AppError> {
    let mut overrides = ConfigOverrides::default();
    for entry in raw {
        let parsed = parse_config_override(entry).map_err(AppError::invalid_input)?;
        match parsed.target {
            ConfigOverrideTarget::ReminderChannel => {
                overrides.reminder_channel = Some(parsed.value);
            }
        }
    }
    Ok(overrides)
}

/// The channel to remind through, plus config problems that were skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelChoice {
    pub channel: ReminderChannel,
    pub warnings: Vec<AppError>,
}

impl ChannelChoice {
    fn from_name(name: &str) -> Result<Self, AppError> {
        Ok(Self {
            channel: ReminderChannel::from_name(name)?,
            warnings: Vec::new(),
        })
    }
}

/// `--channel` beats overrides, which beat the config file.
///
/// Names typed on the command line must be valid. The config file is only
/// loaded when neither decides; if it cannot be read or names an unknown
/// channel, email is used and the problem is returned as a warning.
pub fn resolve_channel<F>(
    flag: Option<&str>,
    overrides: &ConfigOverrides,
    load: F,
) -> Result<ChannelChoice, AppError>
where
    F: FnOnce() -> ConfigLoad,
{
    if let Some(name) = flag {
        return ChannelChoice::from_name(name);
    }
    if let Some(name) = overrides.reminder_channel.as_deref() {
        return ChannelChoice::from_name(name);
    }

    let loaded = load();
    let mut warnings: Vec<AppError> = loaded.error.into_iter().collect();
    let channel = match loaded.config.channel() {
        Ok(channel) => channel,
        Err(err) => {
            warnings.push(err);
            ReminderChannel::default()
        }
    };

    Ok(ChannelChoice { channel, warnings })
}
