use async_trait::async_trait;
use std::collections::HashMap;

use crate::errors::CoreError;
use crate::models::series::SeriesPoint;

/// Trait abstraction over the remote market-data source.
///
/// The services only ever talk to this trait; swapping the provider
/// (or injecting a mock in tests) touches nothing else.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch spot prices for a batch of canonical ids, priced in
    /// `vs_fiat`. Returns canonical id → price; ids the provider has
    /// no price for in that fiat are simply absent from the map.
    async fn spot_prices(
        &self,
        canonical_ids: &[&str],
        vs_fiat: &str,
    ) -> Result<HashMap<String, f64>, CoreError>;

    /// Fetch the market history of one asset over the trailing `days`
    /// days, priced in `vs_fiat`. Points are sorted by ascending
    /// timestamp; granularity is whatever the provider returns.
    async fn market_history(
        &self,
        canonical_id: &str,
        vs_fiat: &str,
        days: u32,
    ) -> Result<Vec<SeriesPoint>, CoreError>;
}
