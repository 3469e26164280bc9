use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::values::Timestamp;

/// One raw table row: locale-specific column label -> raw cell text
pub type RawRecord = BTreeMap<String, String>;

/// One scraped table snapshot, as delivered by the acquisition layer
///
/// The engine treats the snapshot as immutable input. Metadata (`id`,
/// `captured_at`) travels through to the ranked output untouched; it is
/// never scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSnapshot {
    pub id: Uuid,
    pub captured_at: Timestamp,
    pub rows: Vec<RawRecord>,
}

impl RawSnapshot {
    /// Create a snapshot with explicit metadata
    pub fn with_metadata(id: Uuid, captured_at: Timestamp, rows: Vec<RawRecord>) -> Self {
        Self {
            id,
            captured_at,
            rows,
        }
    }

    /// Create a snapshot stamped with current system time
    /// Note: for reproducible runs, prefer `with_metadata` with caller-provided metadata
    pub fn new(rows: Vec<RawRecord>) -> Self {
        Self::with_metadata(Uuid::new_v4(), Utc::now(), rows)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_metadata_is_preserved() {
        let id = Uuid::new_v4();
        let captured_at = Utc::now();
        let snapshot = RawSnapshot::with_metadata(id, captured_at, vec![]);

        assert_eq!(snapshot.id, id);
        assert_eq!(snapshot.captured_at, captured_at);
        assert!(snapshot.is_empty());
    }
}
