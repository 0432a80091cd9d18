//! goldcalc configuration

use anyhow::{bail, Context, Result};
use goldcalc_common::{DEFAULT_SELLER_PROFIT_PERCENT, DEFAULT_VAT_PERCENT};
use goldcalc_pricing::PricingConfig;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the receipt is printed after each edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format '{other}', expected 'text' or 'json'"),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Initial seller profit field text
    pub seller_profit_percent: String,
    /// Initial VAT field text
    pub vat_percent: String,
    /// Receipt output format
    pub output: OutputFormat,
    /// Pricing service settings
    pub pricing: PricingConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seller_profit_percent: DEFAULT_SELLER_PROFIT_PERCENT.to_string(),
            vat_percent: DEFAULT_VAT_PERCENT.to_string(),
            output: OutputFormat::Text,
            pricing: PricingConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from `.env` and the process environment
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from `GOLDCALC_*` variables supplied by `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(val) = lookup("GOLDCALC_SELLER_PROFIT_PERCENT") {
            cfg.seller_profit_percent = val;
        }
        if let Some(val) = lookup("GOLDCALC_VAT_PERCENT") {
            cfg.vat_percent = val;
        }
        if let Some(val) = lookup("GOLDCALC_OUTPUT") {
            cfg.output = val.parse::<OutputFormat>().context("GOLDCALC_OUTPUT")?;
        }

        // Cache settings
        if let Some(val) = lookup("GOLDCALC_CACHE_ENABLED") {
            cfg.pricing.cache_enabled = val
                .trim()
                .parse::<bool>()
                .with_context(|| format!("GOLDCALC_CACHE_ENABLED must be true or false, got '{val}'"))?;
        }
        if let Some(val) = lookup("GOLDCALC_CACHE_MAX_ENTRIES") {
            cfg.pricing.cache_max_entries = val
                .trim()
                .parse::<usize>()
                .with_context(|| format!("GOLDCALC_CACHE_MAX_ENTRIES must be a count, got '{val}'"))?;
        }

        Ok(cfg)
    }
}
