mod cli;
mod command_box;
mod output;
mod repl;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use command_box::CommandBox;
use output::OutputFormat;
use std::process::ExitCode;
use twodo_core::AppConfig;
use twodo_domain::Logic;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    if let Ok(log_path) = std::env::var("TWODO_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "twodo", &mut std::io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = match cli.config {
        Some(ref path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };
    if cli.no_categories {
        config.categories = false;
    }
    tracing::debug!("Loaded config: {:?}", config);

    let format = OutputFormat::from_json_flag(cli.json);
    let mut command_box = CommandBox::new(Logic::new(&config));

    match cli.command {
        Some(Commands::Run { inputs }) => {
            let summary = repl::run_batch(&mut command_box, &inputs, format)?;
            if summary.failures > 0 {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Completions { .. }) => {}
        None => {
            repl::run_interactive(&mut command_box, format).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
