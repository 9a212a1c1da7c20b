//! greenblatt CLI binary.
//!
//! Computes earnings yield and return on tangible capital for a ticker from
//! Alpha Vantage data.

mod client;
mod cmd;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use output::OutputFormat;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "greenblatt")]
#[command(about = "Earnings yield and return on tangible capital for a ticker", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Per-request timeout in seconds (overrides ALPHAVANTAGE_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available ratios
    Ratios {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show the latest annual balance sheet
    Balance {
        /// Ticker symbol
        #[arg(value_parser = client::parse_ticker)]
        ticker: String,
    },

    /// Show the latest annual income statement
    Income {
        /// Ticker symbol
        #[arg(value_parser = client::parse_ticker)]
        ticker: String,
    },

    /// Show the current price
    Price {
        /// Ticker symbol
        #[arg(value_parser = client::parse_ticker)]
        ticker: String,
    },

    /// Earnings yield (EBIT / enterprise value)
    Ey {
        /// Ticker symbol
        #[arg(value_parser = client::parse_ticker)]
        ticker: String,
    },

    /// Return on tangible capital (EBIT / (net working capital + net fixed assets))
    Rotc {
        /// Ticker symbol
        #[arg(value_parser = client::parse_ticker)]
        ticker: String,
    },

    /// Both ratios with their components
    Snapshot {
        /// Ticker symbol
        #[arg(value_parser = client::parse_ticker)]
        ticker: String,
    },

    /// Average of monthly open/close midpoints over twelve months
    AvgPrice {
        /// Ticker symbol
        #[arg(value_parser = client::parse_ticker)]
        ticker: String,

        /// Month offset (1-12, defaults to the current month)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },

    /// Compute one ratio for several tickers
    Score {
        /// Ratio name or alias (see `greenblatt ratios`)
        ratio: String,

        /// Ticker symbols
        #[arg(value_delimiter = ',', required = true, value_parser = client::parse_ticker)]
        tickers: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Log filter used when `RUST_LOG` is unset.
const fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let format = cli.format;
    let timeout = cli.timeout;
    // listing ratios needs no API key
    let analyzer = || client::build_analyzer(timeout);

    match cli.command {
        Commands::Ratios { category } => cmd::list::list_ratios(category.as_deref(), format)?,
        Commands::Balance { ticker } => {
            cmd::statements::balance(&analyzer()?, &ticker, format).await?;
        }
        Commands::Income { ticker } => {
            cmd::statements::income(&analyzer()?, &ticker, format).await?;
        }
        Commands::Price { ticker } => {
            cmd::statements::price(&analyzer()?, &ticker, format).await?;
        }
        Commands::Ey { ticker } => {
            cmd::ratios::earnings_yield(&analyzer()?, &ticker, format).await?;
        }
        Commands::Rotc { ticker } => {
            cmd::ratios::return_on_tangible_capital(&analyzer()?, &ticker, format).await?;
        }
        Commands::Snapshot { ticker } => {
            cmd::ratios::snapshot(&analyzer()?, &ticker, format).await?;
        }
        Commands::AvgPrice { ticker, month } => {
            cmd::ratios::average_price(&analyzer()?, &ticker, month, format).await?;
        }
        Commands::Score { ratio, tickers } => {
            cmd::score::score(&analyzer()?, &ratio, &tickers, format).await?;
        }
    }

    Ok(())
}
