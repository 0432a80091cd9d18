//! goldcalc binary
//!
//! Prices a manufactured gold item from the terminal.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use goldcalc_cli::{CliConfig, Session};
use goldcalc_common::VERSION;
use goldcalc_form::{Field, GoldForm};
use goldcalc_pricing::PricingService;

fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for receipts
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting goldcalc v{}", VERSION);

    // Load configuration
    let config = CliConfig::load()?;
    debug!(?config, "Loaded configuration");

    let service = Arc::new(PricingService::new(config.pricing.clone()));

    let mut form = GoldForm::new(Arc::clone(&service));
    form.edit(Field::SellerProfitPercent, &config.seller_profit_percent)
        .context("GOLDCALC_SELLER_PROFIT_PERCENT")?;
    form.edit(Field::VatPercent, &config.vat_percent)
        .context("GOLDCALC_VAT_PERCENT")?;

    let mut session = Session::new(form, service, config.output);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut out = std::io::stdout().lock();
    let mut err = std::io::stderr().lock();

    if !args.is_empty() {
        session.run_args(&args, &mut out, &mut err)?;
    } else {
        session.run(std::io::stdin().lock(), &mut out, &mut err)?;
    }

    info!("goldcalc finished");
    Ok(())
}
