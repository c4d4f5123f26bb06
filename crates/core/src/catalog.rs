use crate::models::asset::{Asset, AssetKind};

/// Static registry of every convertible asset.
///
/// Constructed once at startup, read-only thereafter — there is no
/// ambient global. Declaration order is the stable enumeration order
/// used to populate selection lists.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    assets: Vec<Asset>,
}

impl AssetCatalog {
    /// Create the default catalog: the supported cryptos followed by
    /// the supported fiats.
    pub fn new() -> Self {
        Self {
            assets: vec![
                Asset::crypto("btc", "bitcoin", "Bitcoin"),
                Asset::crypto("eth", "ethereum", "Ethereum"),
                Asset::crypto("sol", "solana", "Solana"),
                Asset::crypto("xrp", "ripple", "XRP"),
                Asset::crypto("ada", "cardano", "Cardano"),
                Asset::fiat("usd", "US Dollar (USD)"),
                Asset::fiat("eur", "Euro (EUR)"),
            ],
        }
    }

    /// Look up an asset by symbol (case-insensitive).
    #[must_use]
    pub fn resolve(&self, symbol: &str) -> Option<&Asset> {
        let lower = symbol.to_lowercase();
        self.assets.iter().find(|a| a.symbol == lower)
    }

    /// Reverse lookup by provider identifier. Only crypto assets carry one.
    #[must_use]
    pub fn by_canonical_id(&self, canonical_id: &str) -> Option<&Asset> {
        self.assets
            .iter()
            .find(|a| a.canonical_id.as_deref() == Some(canonical_id))
    }

    /// All assets in declaration order.
    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// All symbols in declaration order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.assets.iter().map(|a| a.symbol.as_str())
    }

    /// The crypto subset, in declaration order.
    pub fn cryptos(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter().filter(|a| a.kind == AssetKind::Crypto)
    }

    /// The fiat subset, in declaration order.
    pub fn fiats(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter().filter(|a| a.kind == AssetKind::Fiat)
    }

    /// Provider identifiers of every crypto asset, in declaration
    /// order. Used to build the batched spot-price query.
    #[must_use]
    pub fn canonical_ids(&self) -> Vec<&str> {
        self.cryptos()
            .filter_map(|a| a.canonical_id.as_deref())
            .collect()
    }

    /// Whether a symbol names a known fiat currency.
    #[must_use]
    pub fn is_fiat(&self, symbol: &str) -> bool {
        self.resolve(symbol).is_some_and(Asset::is_fiat)
    }
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::new()
    }
}
