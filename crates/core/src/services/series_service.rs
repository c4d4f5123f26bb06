use chrono::{Duration, Utc};
use std::sync::Arc;

use super::rate_service::RateService;
use crate::catalog::AssetCatalog;
use crate::errors::CoreError;
use crate::models::rates::RateSnapshot;
use crate::models::series::SeriesPoint;
use crate::providers::traits::MarketDataProvider;

/// Number of daily points in a chart series.
pub const SERIES_DAYS: usize = 7;

/// Produces the 7-day price series behind the chart.
///
/// Primary path is the provider's market history, reduced to one close
/// per UTC day. When that fails, a flat line at the current spot price
/// is synthesized — signalling "no real history available" rather than
/// fabricating a trend.
pub struct SeriesService {
    provider: Arc<dyn MarketDataProvider>,
    catalog: AssetCatalog,
}

impl SeriesService {
    pub fn new(provider: Arc<dyn MarketDataProvider>, catalog: AssetCatalog) -> Self {
        Self { provider, catalog }
    }

    /// Fetch the trailing-week series for one crypto asset, priced in
    /// `vs_fiat`. Always exactly [`SERIES_DAYS`] ascending points.
    ///
    /// `rates` backs the fallback path with a current spot price.
    pub async fn fetch_series(
        &self,
        rates: &RateService,
        canonical_id: &str,
        vs_fiat: &str,
    ) -> Result<Vec<SeriesPoint>, CoreError> {
        match self.fetch_remote(canonical_id, vs_fiat).await {
            Ok(series) => Ok(series),
            Err(e) => {
                log::warn!(
                    "{} market chart for {canonical_id} failed ({e}); synthesizing flat series",
                    self.provider.name()
                );
                self.flat_series(rates, canonical_id, vs_fiat).await
            }
        }
    }

    async fn fetch_remote(
        &self,
        canonical_id: &str,
        vs_fiat: &str,
    ) -> Result<Vec<SeriesPoint>, CoreError> {
        let points = self
            .provider
            .market_history(canonical_id, vs_fiat, SERIES_DAYS as u32)
            .await?;

        // The provider may return sub-daily granularity; keep the last
        // close of each UTC day and the trailing week of those.
        let daily = daily_closes(&points);
        if daily.len() < SERIES_DAYS {
            return Err(CoreError::Parse {
                provider: self.provider.name().to_string(),
                message: format!(
                    "market chart for {canonical_id} covers {} days, expected {SERIES_DAYS}",
                    daily.len()
                ),
            });
        }

        Ok(daily[daily.len() - SERIES_DAYS..].to_vec())
    }

    /// Fallback: one spot price repeated across the trailing week,
    /// one point per day ending now.
    async fn flat_series(
        &self,
        rates: &RateService,
        canonical_id: &str,
        vs_fiat: &str,
    ) -> Result<Vec<SeriesPoint>, CoreError> {
        let snapshot = rates.fetch_rates(vs_fiat).await?;

        let spot = self
            .catalog
            .by_canonical_id(canonical_id)
            .map(|asset| snapshot.rate_or_nan(&asset.symbol))
            .filter(|price| RateSnapshot::is_resolvable(*price))
            .unwrap_or(1.0);

        let now = Utc::now();
        let series = (0..SERIES_DAYS)
            .map(|i| {
                let offset = (SERIES_DAYS - 1 - i) as i64;
                SeriesPoint::new(now - Duration::days(offset), spot)
            })
            .collect();

        Ok(series)
    }
}

/// Collapse an ascending series to the last point of each UTC day.
fn daily_closes(points: &[SeriesPoint]) -> Vec<SeriesPoint> {
    let mut daily: Vec<SeriesPoint> = Vec::new();
    for point in points {
        match daily.last_mut() {
            Some(last) if last.timestamp.date_naive() == point.timestamp.date_naive() => {
                *last = point.clone();
            }
            _ => daily.push(point.clone()),
        }
    }
    daily
}
