// ═══════════════════════════════════════════════════════════════════
// Provider Tests — MarketDataProvider trait, CoinGecko construction,
// bundled fallback snapshot
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;

use coin_converter_core::catalog::AssetCatalog;
use coin_converter_core::errors::CoreError;
use coin_converter_core::models::series::SeriesPoint;
use coin_converter_core::providers::coingecko::CoinGeckoProvider;
use coin_converter_core::providers::fallback;
use coin_converter_core::providers::traits::MarketDataProvider;

// ═══════════════════════════════════════════════════════════════════
// Test Helpers — Mock Providers
// ═══════════════════════════════════════════════════════════════════

/// A mock provider serving a fixed id → price table regardless of fiat.
struct MockProvider {
    prices: HashMap<String, f64>,
}

impl MockProvider {
    fn new(prices: &[(&str, f64)]) -> Self {
        Self {
            prices: prices
                .iter()
                .map(|(id, p)| (id.to_string(), *p))
                .collect(),
        }
    }
}

#[async_trait]
impl MarketDataProvider for MockProvider {
    fn name(&self) -> &str {
        "Mock"
    }

    async fn spot_prices(
        &self,
        canonical_ids: &[&str],
        _vs_fiat: &str,
    ) -> Result<HashMap<String, f64>, CoreError> {
        let mut out = HashMap::new();
        for id in canonical_ids {
            if let Some(price) = self.prices.get(*id) {
                out.insert(id.to_string(), *price);
            }
        }
        Ok(out)
    }

    async fn market_history(
        &self,
        canonical_id: &str,
        _vs_fiat: &str,
        days: u32,
    ) -> Result<Vec<SeriesPoint>, CoreError> {
        let price = self.prices.get(canonical_id).copied().ok_or_else(|| {
            CoreError::Parse {
                provider: "Mock".into(),
                message: format!("no history for {canonical_id}"),
            }
        })?;
        let now = Utc::now();
        Ok((0..days)
            .map(|i| SeriesPoint::new(now - Duration::days((days - 1 - i) as i64), price))
            .collect())
    }
}

// ═══════════════════════════════════════════════════════════════════
// MarketDataProvider trait (via MockProvider)
// ═══════════════════════════════════════════════════════════════════

mod trait_contract {
    use super::*;

    #[tokio::test]
    async fn spot_prices_returns_requested_ids_only() {
        let provider = MockProvider::new(&[("bitcoin", 60000.0), ("ethereum", 2800.0)]);
        let prices = provider
            .spot_prices(&["bitcoin"], "usd")
            .await
            .unwrap();
        assert_eq!(prices.len(), 1);
        assert_eq!(prices.get("bitcoin"), Some(&60000.0));
    }

    #[tokio::test]
    async fn spot_prices_omits_unknown_ids() {
        let provider = MockProvider::new(&[("bitcoin", 60000.0)]);
        let prices = provider
            .spot_prices(&["bitcoin", "dogecoin"], "usd")
            .await
            .unwrap();
        assert_eq!(prices.len(), 1);
        assert!(!prices.contains_key("dogecoin"));
    }

    #[tokio::test]
    async fn market_history_is_ascending() {
        let provider = MockProvider::new(&[("solana", 160.0)]);
        let points = provider.market_history("solana", "usd", 7).await.unwrap();
        assert_eq!(points.len(), 7);
        assert!(points.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    }

    #[tokio::test]
    async fn market_history_unknown_id_fails() {
        let provider = MockProvider::new(&[]);
        let err = provider.market_history("bitcoin", "usd", 7).await.unwrap_err();
        assert!(matches!(err, CoreError::Parse { .. }));
    }
}

// ═══════════════════════════════════════════════════════════════════
// CoinGeckoProvider — construction (no network)
// ═══════════════════════════════════════════════════════════════════

mod coingecko {
    use super::*;

    #[test]
    fn name_is_coingecko() {
        let provider = CoinGeckoProvider::new();
        assert_eq!(provider.name(), "CoinGecko");
    }

    #[test]
    fn default_matches_new() {
        let provider = CoinGeckoProvider::default();
        assert_eq!(provider.name(), "CoinGecko");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Bundled fallback snapshot
// ═══════════════════════════════════════════════════════════════════

mod bundled_snapshot {
    use super::*;

    #[test]
    fn parses_successfully() {
        assert!(fallback::bundled_snapshot().is_ok());
    }

    #[test]
    fn is_priced_in_usd() {
        let snapshot = fallback::bundled_snapshot().unwrap();
        assert_eq!(snapshot.base, "usd");
        assert_eq!(snapshot.rate("usd"), Some(1.0));
    }

    #[test]
    fn covers_every_catalog_symbol() {
        let snapshot = fallback::bundled_snapshot().unwrap();
        let catalog = AssetCatalog::new();
        for symbol in catalog.symbols() {
            assert!(
                snapshot.rate(symbol).is_some(),
                "bundled snapshot is missing {symbol}"
            );
        }
    }

    #[test]
    fn crypto_rates_are_positive_and_finite() {
        let snapshot = fallback::bundled_snapshot().unwrap();
        let catalog = AssetCatalog::new();
        for asset in catalog.cryptos() {
            let rate = snapshot.rate(&asset.symbol).unwrap();
            assert!(rate.is_finite() && rate > 0.0);
        }
    }

    #[test]
    fn loads_are_identical() {
        let a = fallback::bundled_snapshot().unwrap();
        let b = fallback::bundled_snapshot().unwrap();
        assert_eq!(a.base, b.base);
        assert_eq!(a.rates.len(), b.rates.len());
        for (symbol, rate) in &a.rates {
            assert_eq!(b.rates.get(symbol), Some(rate));
        }
    }
}
