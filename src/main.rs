use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use binance_bar::{menu, pipeline, BarError, BinanceClient, Config};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Variant {
    /// Full coin list in fetch order (fast refresh).
    Flat,
    /// Top 5 / bottom 5 / all coins sorted by symbol (slow refresh).
    Ranked,
}

/// Binance spot prices in JPY as BitBar/xbar plugin text.
#[derive(Debug, Parser)]
#[command(name = "binance-bar", version)]
struct Args {
    /// Output variant.
    #[arg(long, value_enum, default_value_t = Variant::Ranked)]
    variant: Variant,

    /// Path to the JSON config file (credentials and colors).
    #[arg(long, default_value = "config.json")]
    config: PathBuf,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args).await {
        Ok(text) => print!("{text}"),
        Err(e) => {
            // The host keeps polling; show one error row instead of stale or
            // partial output.
            error!("Run failed: {e}");
            print!("{}", menu::render(&menu::error_menu()));
        }
    }
}

async fn run(args: &Args) -> Result<String, BarError> {
    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            warn!("Config not loaded ({e}), using defaults without credentials");
            Config::default()
        }
    };

    let client = BinanceClient::new()?;
    let snapshot = client.fetch_market(&config).await?;
    let coins = pipeline::merged_coins(&snapshot)?;

    let items = match args.variant {
        Variant::Flat => menu::flat_menu(&coins, &config.colors),
        Variant::Ranked => menu::ranked_menu(&coins, &config.colors),
    };
    Ok(menu::render(&items))
}
