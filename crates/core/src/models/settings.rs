use serde::{Deserialize, Serialize};

/// User-configurable settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// The fiat currency every rate snapshot is priced against and
    /// cross-asset conversions route through (e.g., "usd").
    pub pivot_fiat: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pivot_fiat: "usd".to_string(),
        }
    }
}
