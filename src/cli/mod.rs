use std::path::PathBuf;

use clap::Parser;

use crate::config::Overrides;

pub mod display;
pub mod repl;
pub mod ui;

pub use repl::{run_once, ReplSession};

#[derive(Parser, Debug)]
#[command(name = "lifebook")]
#[command(about = "Contacts, todos and events from the command line")]
#[command(version)]
pub struct Cli {
    /// JSON data file (default: <config dir>/lifebook/lifebook.json)
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "lifebook=trace"
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// How many days ahead the startup reminder looks
    #[arg(long, value_name = "N")]
    pub due_soon_days: Option<i64>,

    /// Run one command and exit, e.g. `lifebook list task`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            data_file: self.data_file.clone(),
            log_level: self.log_level.clone(),
            due_soon_days: self.due_soon_days,
        }
    }

    /// The trailing words joined back into one command line.
    pub fn command_line(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_command() {
        let cli = Cli::parse_from([
            "lifebook",
            "--data-file",
            "/tmp/x.json",
            "add",
            "todo",
            "desc/Submit report",
            "date/01-01-2025",
            "time/1800",
        ]);
        assert_eq!(cli.data_file, Some(PathBuf::from("/tmp/x.json")));
        assert_eq!(
            cli.command_line().as_deref(),
            Some("add todo desc/Submit report date/01-01-2025 time/1800")
        );
    }

    #[test]
    fn test_no_command_means_repl() {
        let cli = Cli::parse_from(["lifebook", "--due-soon-days", "3"]);
        assert!(cli.command_line().is_none());
        assert_eq!(cli.overrides().due_soon_days, Some(3));
    }
}
