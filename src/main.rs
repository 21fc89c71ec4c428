use std::process::ExitCode;

use clap::Parser;
use lifebook::cli::{run_once, Cli, ReplSession};
use lifebook::config::Config;
use lifebook::{logging, Logic};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(cli.overrides())?;
    logging::init(&config.log_level)?;

    let mut logic = Logic::open(&config)?;

    match cli.command_line() {
        None => {
            ReplSession::new(logic, config.due_soon_days).run()?;
        }
        Some(line) => {
            if let Err(e) = run_once(&mut logic, &line) {
                eprintln!("{}", e);
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
