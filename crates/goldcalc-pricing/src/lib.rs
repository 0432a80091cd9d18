//! # Goldcalc Pricing
//!
//! Pricing engine for manufactured gold items.
//!
//! ## Pricing Formula
//!
//! ```text
//! Raw    = weight × price per gram
//! Fee    = Raw × fee%
//! Profit = (Raw + Fee) × profit%
//! VAT    = (Fee + Profit) × vat%
//! Final  = Raw + Fee + Profit + VAT
//! ```
//!
//! Gold price and weight must both be positive; otherwise there is no price.

pub mod pricing;

use goldcalc_common::{CalculationInputs, CalculationResult, PricingError};
use serde::{Deserialize, Serialize};
use tracing::instrument;

pub use pricing::{compute_price, CacheStats, PricingEngine, QuoteCache};

/// Pricing service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Memoize outcomes per input snapshot
    pub cache_enabled: bool,
    /// Upper bound on memoized snapshots
    pub cache_max_entries: usize,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            cache_enabled: true,
            cache_max_entries: 1024,
        }
    }
}

/// Pricing service: the engine behind an optional quote cache
pub struct PricingService {
    config: PricingConfig,
    cache: Option<QuoteCache>,
}

impl PricingService {
    pub fn new(config: PricingConfig) -> Self {
        let cache = config
            .cache_enabled
            .then(|| QuoteCache::new(config.cache_max_entries));
        Self { config, cache }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Price an input snapshot; `None` when it is not computable yet
    #[instrument(skip(self))]
    pub fn quote(&self, inputs: &CalculationInputs) -> Option<CalculationResult> {
        match &self.cache {
            Some(cache) => cache.get_or_compute(inputs, compute_price),
            None => compute_price(inputs),
        }
    }

    /// Price an input snapshot, reporting why it is not computable.
    ///
    /// Bypasses the cache.
    pub fn evaluate(&self, inputs: &CalculationInputs) -> Result<CalculationResult, PricingError> {
        PricingEngine::evaluate(inputs)
    }

    /// Cache statistics, if caching is enabled
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(QuoteCache::stats)
    }

    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }
}

impl Default for PricingService {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}
