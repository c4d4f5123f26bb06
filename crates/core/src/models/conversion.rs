use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of conversions kept in history.
pub const HISTORY_CAPACITY: usize = 50;

/// Ticket id prefix for completed conversions.
const TICKET_PREFIX: &str = "CC";

/// A completed conversion, immutable once created.
///
/// Invariants: `fee = round8(gross * fee_rate)` and
/// `net = round8(gross - fee)`, both rounded to 8 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Unique ticket id (e.g., "CC-3FA9C1")
    pub id: String,

    /// When the conversion was performed
    pub timestamp: DateTime<Utc>,

    /// Source asset symbol (lowercase)
    pub from_symbol: String,

    /// Target asset symbol (lowercase)
    pub to_symbol: String,

    /// Input amount in the source asset (always > 0)
    pub amount: f64,

    /// Result before fee, in the target asset
    pub gross: f64,

    /// Fee charged, in the target asset
    pub fee: f64,

    /// Result after fee, in the target asset
    pub net: f64,
}

impl ConversionResult {
    pub fn new(
        from_symbol: impl Into<String>,
        to_symbol: impl Into<String>,
        amount: f64,
        gross: f64,
        fee: f64,
        net: f64,
    ) -> Self {
        Self {
            id: Self::ticket_id(),
            timestamp: Utc::now(),
            from_symbol: from_symbol.into(),
            to_symbol: to_symbol.into(),
            amount,
            gross,
            fee,
            net,
        }
    }

    /// Generate a fresh short ticket id from a v4 UUID.
    fn ticket_id() -> String {
        let raw = Uuid::new_v4().simple().to_string();
        format!("{TICKET_PREFIX}-{}", raw[..6].to_uppercase())
    }
}

/// Bounded conversion history, newest-first, capped at
/// [`HISTORY_CAPACITY`] entries.
///
/// The conversion engine only produces [`ConversionResult`] values;
/// recording them here is the facade's job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionHistory {
    entries: Vec<ConversionResult>,
}

impl ConversionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a result and drop anything beyond capacity.
    pub fn record(&mut self, result: ConversionResult) {
        self.entries.insert(0, result);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// All recorded conversions, newest first.
    #[must_use]
    pub fn entries(&self) -> &[ConversionResult] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Saved form state, restored on startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prefill {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

impl Default for Prefill {
    fn default() -> Self {
        Self {
            amount: 100.0,
            from: "btc".to_string(),
            to: "usd".to_string(),
        }
    }
}
