use serde::{Deserialize, Serialize};

/// The class of a convertible asset.
/// Determines how rates are resolved: crypto assets are priced by the
/// remote provider, fiat assets only ever carry the identity rate
/// against themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    /// Cryptocurrencies (btc, eth, ...) — queried by canonical id
    Crypto,
    /// Fiat currencies (usd, eur) — no canonical id, identity rate only
    Fiat,
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetKind::Crypto => write!(f, "Crypto"),
            AssetKind::Fiat => write!(f, "Fiat"),
        }
    }
}

/// A convertible asset known to the catalog.
///
/// **Equality and hashing** are based solely on `symbol`, NOT on the
/// display name. Symbols are normalized to lowercase so lookups behave
/// the same regardless of input casing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// Short symbol, lowercased (e.g., "btc", "usd")
    pub symbol: String,

    /// Provider-specific identifier (e.g., "bitcoin"). `None` for fiat.
    pub canonical_id: Option<String>,

    /// Human-readable name (e.g., "Bitcoin", "US Dollar (USD)")
    pub name: String,

    /// Asset class — decides the rate-resolution path
    pub kind: AssetKind,
}

impl PartialEq for Asset {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for Asset {}

impl std::hash::Hash for Asset {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}

impl Asset {
    /// Create a crypto asset with its provider identifier.
    pub fn crypto(
        symbol: impl Into<String>,
        canonical_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into().to_lowercase(),
            canonical_id: Some(canonical_id.into()),
            name: name.into(),
            kind: AssetKind::Crypto,
        }
    }

    /// Create a fiat asset. Fiat currencies carry no canonical id.
    pub fn fiat(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into().to_lowercase(),
            canonical_id: None,
            name: name.into(),
            kind: AssetKind::Fiat,
        }
    }

    #[must_use]
    pub fn is_fiat(&self) -> bool {
        self.kind == AssetKind::Fiat
    }
}
