use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A spot-rate snapshot priced against a single pivot fiat.
///
/// Contains one entry per known crypto symbol plus the identity entry
/// `rates[base] = 1.0`. Fiat symbols other than the base are present
/// with `NaN` — the snapshot never crosses two fiats in one query.
///
/// A snapshot is built fresh for every conversion request. Two
/// snapshots fetched seconds apart may disagree; callers must not
/// assume temporal consistency between them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSnapshot {
    /// Pivot fiat symbol the rates are priced in (e.g., "usd")
    pub base: String,

    /// symbol → spot price in `base`. NaN marks an unresolvable rate.
    pub rates: HashMap<String, f64>,
}

impl RateSnapshot {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().to_lowercase(),
            rates: HashMap::new(),
        }
    }

    /// Get the rate for a symbol, if present.
    #[must_use]
    pub fn rate(&self, symbol: &str) -> Option<f64> {
        self.rates.get(&symbol.to_lowercase()).copied()
    }

    /// Get the rate for a symbol, or NaN when absent.
    /// Mirrors the "absent behaves like unresolvable" lookup rule.
    #[must_use]
    pub fn rate_or_nan(&self, symbol: &str) -> f64 {
        self.rate(symbol).unwrap_or(f64::NAN)
    }

    /// A rate is usable for division/multiplication only when it is
    /// finite and nonzero.
    #[must_use]
    pub fn is_resolvable(rate: f64) -> bool {
        rate.is_finite() && rate != 0.0
    }

    pub fn set_rate(&mut self, symbol: impl Into<String>, rate: f64) {
        self.rates.insert(symbol.into().to_lowercase(), rate);
    }
}
