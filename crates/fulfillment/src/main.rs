use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::de::DeserializeOwned;

use cellar_fulfillment::{FulfillConfig, OrderProcessor};
use cellar_inventory::Inventory;
use cellar_sales::Order;

#[derive(Parser)]
#[command(name = "cellar-fulfill")]
#[command(about = "Check an order against an inventory snapshot and print the delivery outcome", long_about = None)]
struct Cli {
    /// Order document (JSON)
    order: PathBuf,

    /// Inventory snapshot document (JSON)
    inventory: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = FulfillConfig::from_env();
    cellar_observability::init_with(config.log_format);
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    let order: Order = read_json(&cli.order)?;
    let inventory: Inventory = read_json(&cli.inventory)?;

    let processor = OrderProcessor::with_log(config.audit.order_log());
    let outcome = processor.process(&order, &inventory);

    let rendered = serde_json::to_string_pretty(&outcome).context("failed to encode outcome")?;
    println!("{rendered}");
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
