use std::sync::Arc;

use crate::catalog::AssetCatalog;
use crate::errors::CoreError;
use crate::models::rates::RateSnapshot;
use crate::providers::fallback;
use crate::providers::traits::MarketDataProvider;

/// Resolves spot-rate snapshots.
///
/// Primary path is one batched provider query for every catalog
/// crypto; any failure there (transport, status, payload shape, or a
/// single missing price) selects the bundled static snapshot instead.
/// The two paths are kept separate so each can be tested on its own.
pub struct RateService {
    provider: Arc<dyn MarketDataProvider>,
    catalog: AssetCatalog,
}

impl RateService {
    pub fn new(provider: Arc<dyn MarketDataProvider>, catalog: AssetCatalog) -> Self {
        Self { provider, catalog }
    }

    /// Fetch a fresh snapshot priced in `vs_fiat`.
    ///
    /// Never fails for remote reasons — those are absorbed by the
    /// fallback. The only surfaced error is [`CoreError::Resource`]
    /// when the bundled snapshot itself is unreadable.
    pub async fn fetch_rates(&self, vs_fiat: &str) -> Result<RateSnapshot, CoreError> {
        match self.fetch_remote(vs_fiat).await {
            Ok(snapshot) => Ok(snapshot),
            Err(e) => {
                log::warn!(
                    "{} spot query failed ({e}); serving bundled snapshot",
                    self.provider.name()
                );
                fallback::bundled_snapshot()
            }
        }
    }

    /// Primary path: batched provider query → snapshot.
    ///
    /// All-or-nothing: a missing price for any catalog crypto fails
    /// the whole snapshot rather than patching single entries.
    async fn fetch_remote(&self, vs_fiat: &str) -> Result<RateSnapshot, CoreError> {
        let vs = vs_fiat.to_lowercase();
        let ids = self.catalog.canonical_ids();
        let prices = self.provider.spot_prices(&ids, &vs).await?;

        let mut snapshot = RateSnapshot::new(&vs);
        for asset in self.catalog.cryptos() {
            let id = asset.canonical_id.as_deref().unwrap_or(&asset.symbol);
            let price = prices.get(id).copied().ok_or_else(|| CoreError::Parse {
                provider: self.provider.name().to_string(),
                message: format!("No {vs} price returned for {id}"),
            })?;
            snapshot.set_rate(&asset.symbol, price);
        }

        // The snapshot is priced in a single fiat. The requested one
        // gets the identity rate; any other fiat stays unresolvable
        // instead of being cross-converted in the same query.
        snapshot.set_rate(&vs, 1.0);
        for fiat in self.catalog.fiats() {
            if fiat.symbol != vs {
                snapshot.set_rate(&fiat.symbol, f64::NAN);
            }
        }

        Ok(snapshot)
    }
}
