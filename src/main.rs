use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxrates::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List exchange rates against the base currency
    List {
        /// Only show currencies whose code contains this text
        #[arg(short, long)]
        filter: Option<String>,

        /// Print one "CODE - rate" line per currency instead of a table
        #[arg(long)]
        plain: bool,
    },
    /// Show details for a single currency
    Show {
        /// Currency code, e.g. EUR
        code: String,
    },
}

impl From<Commands> for fxrates::AppCommand {
    fn from(cmd: Commands) -> fxrates::AppCommand {
        match cmd {
            Commands::List { filter, plain } => fxrates::AppCommand::List { filter, plain },
            Commands::Show { code } => fxrates::AppCommand::Show { code },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxrates::cli::setup::setup(),
        Some(cmd) => fxrates::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
