use serde::{Deserialize, Serialize};

/// What kind of credential a provider adapter is running with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyType {
    /// No key configured; the adapter serves fallback data only.
    None,
    /// Full catalog access.
    Catalog,
    /// Key accepted for map tiles but rejected by the catalog API.
    MapOnly,
    /// Web search API key.
    Search,
}

/// Health snapshot for one provider adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub working: bool,
    pub key_type: KeyType,
    pub message: String,
}
