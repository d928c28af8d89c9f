use crate::command_box::CommandBox;
use crate::output::{self, OutputFormat};
use std::io::{IsTerminal, Write};
use tokio::io::{AsyncBufReadExt, BufReader};

const WELCOME: &str = "Welcome to twodo! Type 'help' to see all commands.";
const PROMPT: &str = "> ";

/// Whether any input was rejected during the session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub failures: usize,
}

/// Read lines from stdin until `exit` or end of input.
pub async fn run_interactive(
    command_box: &mut CommandBox,
    format: OutputFormat,
) -> anyhow::Result<SessionSummary> {
    let interactive = std::io::stdin().is_terminal() && format == OutputFormat::Text;
    if interactive {
        println!("{WELCOME}");
        prompt()?;
    }

    let mut summary = SessionSummary::default();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        command_box.set_text(line);
        if submit(command_box, format, &mut summary)? {
            break;
        }
        if interactive {
            prompt()?;
        }
    }
    tracing::debug!("Session ended with {} failed inputs", summary.failures);
    Ok(summary)
}

/// Execute each input in order, stopping early on `exit`.
pub fn run_batch(
    command_box: &mut CommandBox,
    inputs: &[String],
    format: OutputFormat,
) -> anyhow::Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    for input in inputs {
        command_box.set_text(input.as_str());
        if submit(command_box, format, &mut summary)? {
            break;
        }
    }
    Ok(summary)
}

/// Returns true once the user asked to exit.
fn submit(
    command_box: &mut CommandBox,
    format: OutputFormat,
    summary: &mut SessionSummary,
) -> anyhow::Result<bool> {
    match command_box.submit() {
        None => Ok(false),
        Some(Ok(result)) => {
            output::output_success(format, &result)?;
            Ok(result.is_exit())
        }
        Some(Err(e)) => {
            summary.failures += 1;
            output::output_error(format, &e)?;
            Ok(false)
        }
    }
}

fn prompt() -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{PROMPT}")?;
    stdout.flush()?;
    Ok(())
}
