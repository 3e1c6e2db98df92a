use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use fxm::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

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
    /// Display an amount with its currency symbol
    Show {
        /// Decimal amount, e.g. 12.345
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Currency code, defaults to the configured currency
        currency: Option<String>,
    },
    /// Convert an amount using the latest exchange rate
    Convert {
        /// Decimal amount, e.g. 10
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Target currency code
        to: String,
        /// Source currency code, defaults to the configured currency
        #[arg(short, long)]
        from: Option<String>,
    },
    /// List supported currencies
    Currencies,
}

impl From<Commands> for fxm::AppCommand {
    fn from(cmd: Commands) -> fxm::AppCommand {
        match cmd {
            Commands::Show { value, currency } => fxm::AppCommand::Show { value, currency },
            Commands::Convert { value, to, from } => fxm::AppCommand::Convert { value, from, to },
            Commands::Currencies => fxm::AppCommand::Currencies,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxm::cli::setup::setup(),
        Some(cmd) => fxm::run_command(cmd.into(), cli.config_path.as_deref()).await,
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
