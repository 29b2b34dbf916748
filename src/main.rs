use anyhow::Result;
use cambio::core::log::init_logging;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

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

#[derive(Clone, Copy, ValueEnum)]
enum SideArg {
    /// Use the bid leg of the quote
    Buy,
    /// Use the ask leg of the quote
    Sell,
    /// Use the mean of bid and ask
    Average,
}

impl From<SideArg> for cambio::core::Side {
    fn from(side: SideArg) -> cambio::core::Side {
        match side {
            SideArg::Buy => cambio::core::Side::Buy,
            SideArg::Sell => cambio::core::Side::Sell,
            SideArg::Average => cambio::core::Side::Average,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an ARS amount to USD
    Convert {
        /// Amount in Argentine pesos
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Manual ARS/USD rate; skips the live lookup entirely
        #[arg(short, long)]
        rate: Option<f64>,
        /// Market to quote (oficial, blue, bolsa, ...)
        #[arg(short, long)]
        market: Option<String>,
        /// Quote leg to use
        #[arg(short, long, value_enum)]
        side: Option<SideArg>,
    },
    /// Fetch and display the current rate for a market
    Rate {
        /// Market to quote (oficial, blue, bolsa, ...)
        #[arg(short, long)]
        market: Option<String>,
        /// Quote leg to use
        #[arg(short, long, value_enum)]
        side: Option<SideArg>,
    },
    /// Display the full quote board
    Markets,
}

impl From<Commands> for cambio::AppCommand {
    fn from(cmd: Commands) -> cambio::AppCommand {
        match cmd {
            Commands::Convert {
                amount,
                rate,
                market,
                side,
            } => cambio::AppCommand::Convert {
                amount,
                manual_rate: rate,
                market,
                side: side.map(Into::into),
            },
            Commands::Rate { market, side } => cambio::AppCommand::Rate {
                market,
                side: side.map(Into::into),
            },
            Commands::Markets => cambio::AppCommand::Markets,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => cambio::cli::setup::setup(),
        Some(cmd) => cambio::run_command(cmd.into(), cli.config_path.as_deref()).await,
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
