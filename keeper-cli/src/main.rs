use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use keeper_core::config::KeeperConfig;
use keeper_core::errors::{KeeperErrorCode, PipelineError};

mod commands;

use commands::{conventions, unused, validate, Outcome};

#[derive(Parser)]
#[command(name = "keeper")]
#[command(
    about = "Keeper - unreferenced asset detection and naming convention checks",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Project root containing keeper.toml
    #[arg(long, global = true, env = "KEEPER_ROOT", default_value = ".")]
    root: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report assets not reachable from any entry point
    Unused(unused::UnusedArgs),

    /// Check object names against the naming rules
    Validate(validate::ValidateArgs),

    /// Export rule definitions as a naming-conventions CSV table
    Conventions(conventions::ConventionsArgs),

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    keeper_core::logging::init(cli.verbose);

    match execute(&cli) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("error[{}]: {err}", err.error_code());
            ExitCode::from(2)
        }
    }
}

fn execute(cli: &Cli) -> Result<Outcome, PipelineError> {
    match &cli.command {
        Commands::Unused(args) => unused::run(&cli.root, args),
        Commands::Validate(args) => validate::run(&cli.root, args),
        Commands::Conventions(args) => conventions::run(&cli.root, args),
        Commands::Config => {
            let config = KeeperConfig::load(&cli.root, None)?;
            print!("{}", config.to_toml()?);
            Ok(Outcome::Clean)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_unused_with_repeated_entries() {
        let cli = Cli::try_parse_from([
            "keeper", "-vv", "unused", "--cache", "cache", "--entry", "/Game/Maps/Main", "--entry",
            "Maps/.*", "--policy", "reachability-wins", "--full",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Unused(args) = cli.command else {
            panic!("expected unused");
        };
        assert_eq!(args.entry.len(), 2);
        assert_eq!(args.policy, Some(keeper_core::config::ForcedPolicy::ReachabilityWins));
        assert!(args.full);
    }
}
