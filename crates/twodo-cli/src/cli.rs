use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "twodo")]
#[command(about = "A keyboard-driven task manager with undo and redo", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Path to a config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH", env = "TWODO_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Print every result as a JSON envelope
    #[arg(long, global = true)]
    pub json: bool,

    /// Run without category tracking
    #[arg(long, global = true)]
    pub no_categories: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Execute each input in order, then exit
    Run {
        /// Raw command lines, e.g. "add n/Buy milk"
        #[arg(required = true, value_name = "INPUT")]
        inputs: Vec<String>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_starts_interactive() {
        let cli = Cli::try_parse_from(["twodo"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
        assert!(!cli.no_categories);
    }

    #[test]
    fn test_run_collects_inputs_in_order() {
        let cli =
            Cli::try_parse_from(["twodo", "--json", "run", "add n/Buy milk", "list"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Some(Commands::Run { inputs }) => assert_eq!(inputs, vec!["add n/Buy milk", "list"]),
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_run_requires_input() {
        assert!(Cli::try_parse_from(["twodo", "run"]).is_err());
    }
}
