pub mod catalog;
pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use std::sync::Arc;

use chrono::Utc;

use catalog::AssetCatalog;
use errors::CoreError;
use models::asset::Asset;
use models::conversion::{ConversionHistory, ConversionResult, Prefill};
use models::rates::RateSnapshot;
use models::series::SeriesPoint;
use models::settings::Settings;
use providers::coingecko::CoinGeckoProvider;
use providers::traits::MarketDataProvider;
use services::conversion_service::ConversionEngine;
use services::rate_service::RateService;
use services::series_service::SeriesService;
use storage::manager::{StorageManager, StoredState};

/// Main entry point for the Coin Converter core library.
/// Holds the asset catalog, the rate/series/conversion services, and
/// the UI-facing state (history, prefill, settings).
#[must_use]
pub struct CoinConverter {
    catalog: AssetCatalog,
    rate_service: RateService,
    series_service: SeriesService,
    engine: ConversionEngine,
    settings: Settings,
    prefill: Prefill,
    history: ConversionHistory,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for CoinConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinConverter")
            .field("assets", &self.catalog.assets().len())
            .field("history", &self.history.len())
            .field("settings", &self.settings)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl CoinConverter {
    /// Create a converter backed by the default CoinGecko provider.
    pub fn new() -> Self {
        Self::with_provider(Arc::new(CoinGeckoProvider::new()))
    }

    /// Create a converter backed by a custom provider (other APIs, mocks).
    pub fn with_provider(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self::build(provider, StoredState::default())
    }

    /// Restore a converter from previously saved state bytes.
    /// Use this for WASM / browser shells where the frontend handles storage.
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, CoreError> {
        let state = StorageManager::load_from_bytes(data)?;
        Ok(Self::build(Arc::new(CoinGeckoProvider::new()), state))
    }

    /// Restore from saved state bytes with a custom provider.
    pub fn with_provider_from_bytes(
        provider: Arc<dyn MarketDataProvider>,
        data: &[u8],
    ) -> Result<Self, CoreError> {
        let state = StorageManager::load_from_bytes(data)?;
        Ok(Self::build(provider, state))
    }

    /// Save the current state to raw bytes the frontend can persist.
    /// Clears the unsaved-changes flag on success.
    pub fn save_to_bytes(&mut self) -> Result<Vec<u8>, CoreError> {
        let bytes = StorageManager::save_to_bytes(&self.stored_state())?;
        self.dirty = false;
        Ok(bytes)
    }

    /// Restore from a state file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<Self, CoreError> {
        let state = StorageManager::load_from_file(path)?;
        Ok(Self::build(Arc::new(CoinGeckoProvider::new()), state))
    }

    /// Save the current state to a file on disk (native only, not WASM).
    /// Clears the unsaved-changes flag on success.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(&mut self, path: &str) -> Result<(), CoreError> {
        StorageManager::save_to_file(&self.stored_state(), path)?;
        self.dirty = false;
        Ok(())
    }

    // ── Assets ──────────────────────────────────────────────────────

    /// All known assets, in stable catalog order (for selection lists).
    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        self.catalog.assets()
    }

    /// Look up one asset by symbol (case-insensitive).
    #[must_use]
    pub fn resolve_asset(&self, symbol: &str) -> Option<&Asset> {
        self.catalog.resolve(symbol)
    }

    // ── Conversion ──────────────────────────────────────────────────

    /// Convert `amount` of `from` into `to` at current rates and
    /// record the result in history.
    ///
    /// Input is validated before any rate lookup; validation failures
    /// surface to the caller and leave history untouched.
    pub async fn convert(
        &mut self,
        amount: f64,
        from: &str,
        to: &str,
    ) -> Result<ConversionResult, CoreError> {
        self.engine.validate(amount, from, to)?;

        let snapshot = self
            .rate_service
            .fetch_rates(&self.settings.pivot_fiat)
            .await?;
        let result = self.engine.convert(amount, from, to, &snapshot)?;

        self.history.record(result.clone());
        self.dirty = true;
        Ok(result)
    }

    // ── Rates & chart ───────────────────────────────────────────────

    /// Fetch a fresh snapshot priced in an arbitrary fiat.
    pub async fn fetch_rates(&self, vs_fiat: &str) -> Result<RateSnapshot, CoreError> {
        self.rate_service.fetch_rates(vs_fiat).await
    }

    /// Fetch a fresh snapshot priced in the configured pivot fiat
    /// (market-overview data).
    pub async fn spot_rates(&self) -> Result<RateSnapshot, CoreError> {
        self.fetch_rates(&self.settings.pivot_fiat).await
    }

    /// Chart data for one asset, priced in the pivot fiat.
    ///
    /// Crypto assets get the 7-day series. Fiat assets have no market
    /// history; they get a single reference point at 1.0 for the chart
    /// to draw flat.
    pub async fn chart_series(&self, symbol: &str) -> Result<Vec<SeriesPoint>, CoreError> {
        let asset = self
            .catalog
            .resolve(symbol)
            .ok_or_else(|| CoreError::UnknownAsset(symbol.to_string()))?;

        match &asset.canonical_id {
            None => Ok(vec![SeriesPoint::new(Utc::now(), 1.0)]),
            Some(id) => {
                self.series_service
                    .fetch_series(&self.rate_service, id, &self.settings.pivot_fiat)
                    .await
            }
        }
    }

    // ── History ─────────────────────────────────────────────────────

    /// All recorded conversions, newest first, capped at 50.
    #[must_use]
    pub fn history(&self) -> &[ConversionResult] {
        self.history.entries()
    }

    #[must_use]
    pub fn history_count(&self) -> usize {
        self.history.len()
    }

    // ── Prefill & settings ──────────────────────────────────────────

    #[must_use]
    pub fn prefill(&self) -> &Prefill {
        &self.prefill
    }

    /// Remember the current form state so it can be restored on startup.
    pub fn set_prefill(&mut self, amount: f64, from: impl Into<String>, to: impl Into<String>) {
        self.prefill = Prefill {
            amount,
            from: from.into().to_lowercase(),
            to: to.into().to_lowercase(),
        };
        self.dirty = true;
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Set the pivot fiat. Must name a fiat currency from the catalog.
    pub fn set_pivot_fiat(&mut self, fiat: &str) -> Result<(), CoreError> {
        let lower = fiat.trim().to_lowercase();
        if !self.catalog.is_fiat(&lower) {
            return Err(CoreError::Validation(format!(
                "'{fiat}' is not a known fiat currency"
            )));
        }
        self.settings.pivot_fiat = lower;
        self.dirty = true;
        Ok(())
    }

    /// Clear history and restore prefill defaults ("reset all").
    pub fn reset(&mut self) {
        self.history.clear();
        self.prefill = Prefill::default();
        self.dirty = true;
    }

    /// Returns `true` if state has been modified since the last save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Internal ────────────────────────────────────────────────────

    fn stored_state(&self) -> StoredState {
        StoredState {
            prefill: self.prefill.clone(),
            history: self.history.clone(),
            settings: self.settings.clone(),
        }
    }

    fn build(provider: Arc<dyn MarketDataProvider>, state: StoredState) -> Self {
        let catalog = AssetCatalog::new();
        let rate_service = RateService::new(Arc::clone(&provider), catalog.clone());
        let series_service = SeriesService::new(provider, catalog.clone());

        Self {
            catalog,
            rate_service,
            series_service,
            engine: ConversionEngine::new(),
            settings: state.settings,
            prefill: state.prefill,
            history: state.history,
            dirty: false,
        }
    }
}

impl Default for CoinConverter {
    fn default() -> Self {
        Self::new()
    }
}
