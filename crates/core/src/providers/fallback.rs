use crate::errors::CoreError;
use crate::models::rates::RateSnapshot;

/// Static rate snapshot shipped with the library, priced in USD.
/// Last line of defense when the remote provider is unreachable.
const FALLBACK_RATES: &str = include_str!("../../assets/fallback_rates.json");

/// Load the bundled rate snapshot.
///
/// This must not fail under normal conditions — the document is
/// compiled into the binary. An unreadable document is a build defect
/// and surfaces as [`CoreError::Resource`] rather than being swallowed.
pub fn bundled_snapshot() -> Result<RateSnapshot, CoreError> {
    serde_json::from_str(FALLBACK_RATES)
        .map_err(|e| CoreError::Resource(format!("bundled rate snapshot is unreadable: {e}")))
}
