pub mod cli;
pub mod core;
pub mod providers;

use anyhow::Result;
use tracing::{debug, info};

use crate::core::Side;
use crate::core::config::AppConfig;
use crate::providers::dolarapi::DolarApiProvider;

/// A parsed user action, ready to run against the loaded configuration.
///
/// `market` and `side` fall back to the configured defaults when absent.
#[derive(Debug, Clone)]
pub enum AppCommand {
    Convert {
        amount: f64,
        manual_rate: Option<f64>,
        market: Option<String>,
        side: Option<Side>,
    },
    Rate {
        market: Option<String>,
        side: Option<Side>,
    },
    Markets,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("cambio starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let provider = DolarApiProvider::new(config.base_url());

    match command {
        AppCommand::Convert {
            amount,
            manual_rate,
            market,
            side,
        } => {
            let market = market.unwrap_or_else(|| config.market.clone());
            let side = side.unwrap_or(config.side);
            cli::convert::run(&provider, amount, manual_rate, &market, side).await
        }
        AppCommand::Rate { market, side } => {
            let market = market.unwrap_or_else(|| config.market.clone());
            let side = side.unwrap_or(config.side);
            cli::rate::run(&provider, &market, side).await
        }
        AppCommand::Markets => cli::markets::run(&provider).await,
    }
}
