use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Slow-changing per-ticker fields supplied by an external cache
///
/// Sector, subsector, statement lines and whatever else the cache holds that
/// the raw scrape does not. Keys are free-form (whatever casing the cache
/// stored them under); the merge step re-normalizes them to the canonical
/// key convention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CachedDetail {
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl CachedDetail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for the common sector/subsector pair
    pub fn with_sector(sector: impl Into<String>, subsector: impl Into<String>) -> Self {
        let mut detail = Self::new();
        detail.insert("setor", serde_json::Value::String(sector.into()));
        detail.insert("subsetor", serde_json::Value::String(subsector.into()));
        detail
    }

    pub fn insert(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.fields.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_sector() {
        let detail = CachedDetail::with_sector("Mineração", "Minerais Metálicos");
        assert_eq!(
            detail.get("setor"),
            Some(&serde_json::Value::String("Mineração".to_string()))
        );
        assert_eq!(
            detail.get("subsetor"),
            Some(&serde_json::Value::String("Minerais Metálicos".to_string()))
        );
    }
}
