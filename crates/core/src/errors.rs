use thiserror::Error;

/// Unified error type for the entire coin-converter-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Remote provider ─────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error ({provider}): {message}")]
    Parse {
        provider: String,
        message: String,
    },

    // ── Bundled fallback resource ───────────────────────────────────
    // Unreadable fallback data is fatal: there is nothing left to fall
    // back to, so this is never converted into another path.
    #[error("Fallback resource error: {0}")]
    Resource(String),

    // ── Business logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown asset: {0}")]
    UnknownAsset(String),

    // ── Persistence ─────────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Strip query parameters from URLs embedded in reqwest error
        // messages; they carry the full request target.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
