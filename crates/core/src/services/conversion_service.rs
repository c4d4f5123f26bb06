use crate::errors::CoreError;
use crate::models::conversion::ConversionResult;
use crate::models::rates::RateSnapshot;

/// Fee rate applied to every conversion (0.35%).
pub const FEE_RATE: f64 = 0.0035;

/// Converts an amount between two assets by routing through the
/// snapshot's pivot fiat.
///
/// The engine is pure: it consumes a snapshot and produces an
/// immutable [`ConversionResult`]. Recording results in history is
/// the caller's job.
pub struct ConversionEngine;

impl ConversionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Reject bad input. Exposed separately so callers can fail fast
    /// before any rate lookup — an equal-symbol pair must never reach
    /// the network.
    pub fn validate(
        &self,
        amount: f64,
        from_symbol: &str,
        to_symbol: &str,
    ) -> Result<(), CoreError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CoreError::Validation(format!(
                "Amount must be a positive finite number, got {amount}"
            )));
        }
        if from_symbol.eq_ignore_ascii_case(to_symbol) {
            return Err(CoreError::Validation(
                "Source and target assets must differ".to_string(),
            ));
        }
        Ok(())
    }

    /// Convert `amount` of `from_symbol` into `to_symbol` using the
    /// given snapshot.
    ///
    /// Routing: convert the source leg into the pivot fiat, then the
    /// pivot into the target leg. The three branches are not
    /// algebraically equivalent — only the last one substitutes a unit
    /// divisor when the target leg is unresolved, so collapsing them
    /// into a single formula would change behavior.
    pub fn convert(
        &self,
        amount: f64,
        from_symbol: &str,
        to_symbol: &str,
        snapshot: &RateSnapshot,
    ) -> Result<ConversionResult, CoreError> {
        let from = from_symbol.to_lowercase();
        let to = to_symbol.to_lowercase();
        self.validate(amount, &from, &to)?;

        let pivot = snapshot.base.as_str();
        let price_from = if from == pivot {
            1.0
        } else {
            snapshot.rate_or_nan(&from)
        };
        let price_to = if to == pivot {
            1.0
        } else {
            snapshot.rate_or_nan(&to)
        };

        let gross = if from == pivot && RateSnapshot::is_resolvable(price_to) {
            amount / price_to
        } else if to == pivot && RateSnapshot::is_resolvable(price_from) {
            amount * price_from
        } else {
            // Crypto-to-crypto, or a pivot leg with no usable rate.
            // An unresolved divisor degrades to 1 instead of dividing
            // by zero or NaN.
            let in_pivot = amount * price_from;
            let divisor = if RateSnapshot::is_resolvable(price_to) {
                price_to
            } else {
                1.0
            };
            in_pivot / divisor
        };

        let fee = round8(gross * FEE_RATE);
        let net = round8(gross - fee);

        Ok(ConversionResult::new(from, to, amount, gross, fee, net))
    }
}

impl Default for ConversionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to 8 decimal places.
pub fn round8(value: f64) -> f64 {
    (value * 1e8).round() / 1e8
}
