use std::{io, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use pizza_core::{OrderCalculator, OrderForm, PricingConfig};
use tracing::{debug, info};

use pizza_ui::{
    ConsoleSession, config,
    logging::{self, LogSettings},
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Pizza order form.
///
/// Pick a crust, a size and toppings, then order to print a receipt with
/// subtotal, tax and total.
#[derive(Debug, Parser)]
#[command(name = "pizza-order", version, about, long_about = None)]
struct Cli {
    /// TOML price list. The built-in prices are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `pizza_core=debug`. Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(&LogSettings {
        filter: cli.log_level,
        file: cli.log_file,
    })?;

    let pricing = match &cli.config {
        Some(path) => config::load_pricing(path)
            .with_context(|| format!("failed to load prices from {}", path.display()))?,
        None => PricingConfig::default(),
    };
    debug!(?pricing, "price list ready");

    let calculator = OrderCalculator::new(pricing).context("invalid price list")?;
    let mut form = OrderForm::new(calculator);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = ConsoleSession::new(stdin.lock(), stdout.lock());
    session.run(&mut form).context("console session failed")?;

    info!("order form closed");
    Ok(())
}
