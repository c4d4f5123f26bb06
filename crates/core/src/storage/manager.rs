use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::conversion::{ConversionHistory, Prefill};
use crate::models::settings::Settings;

/// Everything worth persisting between sessions: the saved form state,
/// the capped conversion history, and the user settings.
///
/// Persistence is best-effort local cache — no integrity guarantees.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredState {
    #[serde(default)]
    pub prefill: Prefill,

    #[serde(default)]
    pub history: ConversionHistory,

    #[serde(default)]
    pub settings: Settings,
}

/// High-level storage operations: save/load state to/from JSON bytes or files.
pub struct StorageManager;

impl StorageManager {
    /// Serialize state to plain JSON bytes. The frontend hands these
    /// to whatever storage it has (localStorage, a file picker, ...).
    pub fn save_to_bytes(state: &StoredState) -> Result<Vec<u8>, CoreError> {
        serde_json::to_vec(state)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize state: {e}")))
    }

    /// Deserialize state from JSON bytes.
    pub fn load_from_bytes(data: &[u8]) -> Result<StoredState, CoreError> {
        serde_json::from_slice(data)
            .map_err(|e| CoreError::Deserialization(format!("Failed to deserialize state: {e}")))
    }

    /// Save state to a file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(state: &StoredState, path: &str) -> Result<(), CoreError> {
        let bytes = Self::save_to_bytes(state)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Load state from a file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<StoredState, CoreError> {
        let bytes = std::fs::read(path)?;
        Self::load_from_bytes(&bytes)
    }
}
