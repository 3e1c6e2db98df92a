pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    /// Render an amount, in the configured currency unless one is given
    Show {
        value: String,
        currency: Option<String>,
    },
    /// Convert an amount into `to` at the provider's latest rate
    Convert {
        value: String,
        from: Option<String>,
        to: String,
    },
    /// List the supported currencies
    Currencies,
}

fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");
    Ok(config)
}

/// Runs `command` and returns what should be printed.
pub async fn execute(command: AppCommand, config_path: Option<&str>) -> Result<String> {
    match command {
        AppCommand::Currencies => Ok(cli::currencies::display_currencies()),
        AppCommand::Show { value, currency } => {
            let config = load_config(config_path)?;
            let code = currency.as_deref().unwrap_or(&config.currency);
            cli::show::run(&value, code)
        }
        AppCommand::Convert { value, from, to } => {
            let config = load_config(config_path)?;
            let from = from.as_deref().unwrap_or(&config.currency);
            let provider = providers::FixerProvider::new(config.rates_base_url());

            info!("Converting {} {} to {}", value, from, to);
            let conversion = cli::convert::convert(&value, from, &to, &provider).await?;
            Ok(conversion.display_as_table())
        }
    }
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let output = execute(command, config_path).await?;
    println!("{output}");
    Ok(())
}
