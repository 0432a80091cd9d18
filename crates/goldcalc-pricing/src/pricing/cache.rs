//! In-memory quote cache
//!
//! Memoizes outcomes of the pricing engine per input snapshot. Lookups never
//! change what a caller sees: a cached outcome is identical to a fresh
//! computation, including the "not computable" outcome.

use dashmap::DashMap;
use goldcalc_common::{CalculationInputs, CalculationResult};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Cache key: digest of the normalized input fields
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
struct CacheKey([u8; 32]);

impl From<&CalculationInputs> for CacheKey {
    fn from(inputs: &CalculationInputs) -> Self {
        // Normalized so 1.50 and 1.5 share an entry
        let hash = blake3::hash(
            format!(
                "{}:{}:{}:{}:{}",
                inputs.gold_price_per_gram.normalize(),
                inputs.weight.normalize(),
                inputs.manuf_fee_percent.normalize(),
                inputs.seller_profit_percent.normalize(),
                inputs.vat_percent.normalize()
            )
            .as_bytes(),
        );
        Self(*hash.as_bytes())
    }
}

/// Bounded memo of pricing outcomes
pub struct QuoteCache {
    cache: DashMap<CacheKey, Option<CalculationResult>>,
    max_entries: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl QuoteCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            cache: DashMap::new(),
            max_entries,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Cached outcome for a snapshot.
    ///
    /// The outer `Option` is the cache lookup, the inner one the engine
    /// outcome.
    pub fn get(&self, inputs: &CalculationInputs) -> Option<Option<CalculationResult>> {
        let key = CacheKey::from(inputs);
        match self.cache.get(&key) {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Quote cache hit");
                Some(*entry.value())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!("Quote cache miss");
                None
            }
        }
    }

    /// Store the outcome for a snapshot.
    ///
    /// Evicts arbitrary other entries after the insert until the cache is
    /// back within `max_entries`, so concurrent writers cannot leave it over
    /// capacity.
    pub fn set(&self, inputs: &CalculationInputs, outcome: Option<CalculationResult>) {
        if self.max_entries == 0 {
            return;
        }

        let key = CacheKey::from(inputs);
        self.cache.insert(key, outcome);

        while self.cache.len() > self.max_entries {
            // Bind the victim first: removing while iterating would deadlock the shard
            let victim = self
                .cache
                .iter()
                .map(|entry| *entry.key())
                .find(|candidate| *candidate != key);
            match victim {
                Some(victim) => {
                    self.cache.remove(&victim);
                }
                None => break,
            }
        }
    }

    /// Get the cached outcome, computing and storing it on a miss
    pub fn get_or_compute<F>(&self, inputs: &CalculationInputs, compute: F) -> Option<CalculationResult>
    where
        F: FnOnce(&CalculationInputs) -> Option<CalculationResult>,
    {
        if let Some(outcome) = self.get(inputs) {
            return outcome;
        }
        let outcome = compute(inputs);
        self.set(inputs, outcome);
        outcome
    }

    pub fn clear(&self) {
        self.cache.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entry_count: self.cache.len() as u64,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cached outcomes
    pub entry_count: u64,
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that had to compute
    pub misses: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::compute_price;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn inputs(price: u64) -> CalculationInputs {
        CalculationInputs::new(price.into(), dec!(1)).with_manuf_fee(dec!(10))
    }

    #[test]
    fn test_cache_key_ignores_scale() {
        let a = CalculationInputs::new(dec!(1000000), dec!(1.50));
        let b = CalculationInputs::new(dec!(1000000.0), dec!(1.5));
        assert_eq!(CacheKey::from(&a), CacheKey::from(&b));

        let c = CalculationInputs::new(dec!(1000000), dec!(1.51));
        assert_ne!(CacheKey::from(&a), CacheKey::from(&c));
    }

    #[test]
    fn test_in_memory_cache() {
        let cache = QuoteCache::new(100);
        let snapshot = inputs(1000000);

        // Should be empty initially
        assert!(cache.get(&snapshot).is_none());

        let fresh = compute_price(&snapshot);
        cache.set(&snapshot, fresh);

        let cached = cache.get(&snapshot);
        assert_eq!(cached, Some(fresh));
        assert_eq!(cached.flatten().unwrap().final_price, dec!(1100000));
    }

    #[test]
    fn test_caches_invalid_outcome() {
        let cache = QuoteCache::new(10);
        let snapshot = CalculationInputs::new(dec!(0), dec!(5));

        assert_eq!(cache.get_or_compute(&snapshot, compute_price), None);
        assert_eq!(cache.get(&snapshot), Some(None));
    }

    #[test]
    fn test_get_or_compute_counts() {
        let cache = QuoteCache::new(10);
        let snapshot = inputs(2000000);

        let first = cache.get_or_compute(&snapshot, compute_price);
        let second = cache.get_or_compute(&snapshot, |_| unreachable!("served from cache"));

        assert_eq!(first, second);
        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entry_count, 1);
    }

    #[test]
    fn test_in_memory_cache_eviction() {
        let cache = QuoteCache::new(2);

        for i in 1..=5 {
            let snapshot = inputs(i * 1000);
            cache.set(&snapshot, compute_price(&snapshot));
        }

        assert!(cache.len() <= 2);
    }

    #[test]
    fn test_concurrent_writers_respect_capacity() {
        let cache = Arc::new(QuoteCache::new(4));

        let handles: Vec<_> = (0..8u64)
            .map(|thread| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    for i in 0..50u64 {
                        let snapshot = inputs(thread * 1000 + i + 1);
                        cache.get_or_compute(&snapshot, compute_price);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert!(cache.len() <= 4);
    }

    #[test]
    fn test_latest_insert_survives_eviction() {
        let cache = QuoteCache::new(1);
        let first = inputs(1000);
        let second = inputs(2000);

        cache.set(&first, compute_price(&first));
        cache.set(&second, compute_price(&second));

        assert_eq!(cache.len(), 1);
        assert!(cache.get(&second).is_some());
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let cache = QuoteCache::new(0);
        let snapshot = inputs(1000);
        cache.get_or_compute(&snapshot, compute_price);
        assert!(cache.is_empty());
    }
}
