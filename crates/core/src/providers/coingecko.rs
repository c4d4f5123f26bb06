use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::MarketDataProvider;
use crate::errors::CoreError;
use crate::models::series::SeriesPoint;

const BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// CoinGecko API provider for cryptocurrency prices.
///
/// - **Free**: No API key required for the public endpoints used here.
/// - **Endpoints**: `/simple/price` (batched spot), `/coins/{id}/market_chart`
///   (history).
///
/// Note: CoinGecko addresses assets by lowercase ids like "bitcoin",
/// "ethereum" — the catalog's canonical ids.
pub struct CoinGeckoProvider {
    client: Client,
}

impl CoinGeckoProvider {
    pub fn new() -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── CoinGecko API response types ────────────────────────────────────

/// `/simple/price` shape: `{ "<id>": { "<fiat>": <price>, ... }, ... }`
type SimplePriceResponse = HashMap<String, HashMap<String, f64>>;

#[derive(Deserialize)]
struct MarketChartResponse {
    /// `[[timestamp_ms, price], ...]`
    prices: Vec<(f64, f64)>,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MarketDataProvider for CoinGeckoProvider {
    fn name(&self) -> &str {
        "CoinGecko"
    }

    async fn spot_prices(
        &self,
        canonical_ids: &[&str],
        vs_fiat: &str,
    ) -> Result<HashMap<String, f64>, CoreError> {
        let ids = canonical_ids.join(",");
        let vs = vs_fiat.to_lowercase();
        let url = format!("{BASE_URL}/simple/price?ids={ids}&vs_currencies={vs}");

        let resp: SimplePriceResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| CoreError::Parse {
                provider: "CoinGecko".into(),
                message: format!("Failed to parse spot prices for [{ids}]: {e}"),
            })?;

        let mut out = HashMap::new();
        for (id, per_fiat) in resp {
            if let Some(price) = per_fiat.get(&vs) {
                out.insert(id, *price);
            }
        }
        Ok(out)
    }

    async fn market_history(
        &self,
        canonical_id: &str,
        vs_fiat: &str,
        days: u32,
    ) -> Result<Vec<SeriesPoint>, CoreError> {
        let vs = vs_fiat.to_lowercase();
        let url =
            format!("{BASE_URL}/coins/{canonical_id}/market_chart?vs_currency={vs}&days={days}");

        let resp: MarketChartResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| CoreError::Parse {
                provider: "CoinGecko".into(),
                message: format!("Failed to parse market chart for {canonical_id}: {e}"),
            })?;

        let mut points: Vec<SeriesPoint> = resp
            .prices
            .iter()
            .filter_map(|&(ts_ms, price)| {
                let ts = chrono::DateTime::from_timestamp_millis(ts_ms as i64)?;
                Some(SeriesPoint::new(ts, price))
            })
            .collect();

        points.sort_by_key(|p| p.timestamp);
        Ok(points)
    }
}
