//! Identification history.
//!
//! Append/query/delete store of identification records, partitioned by
//! owning account at read time. All owners share one substrate key.

use std::sync::Arc;

use chrono::Utc;
use herb_core::entities::{IdentificationRecord, NewIdentification};
use herb_core::ids;

use crate::substrate::{read_list, write_list};
use crate::{HISTORY_KEY, Substrate};

/// Store of identification records.
pub struct HistoryStore {
    substrate: Arc<dyn Substrate>,
}

impl HistoryStore {
    #[must_use]
    pub fn new(substrate: Arc<dyn Substrate>) -> Self {
        Self { substrate }
    }

    /// Records owned by `owner_id`, most recent first.
    ///
    /// Returns a fresh list; ties on `created_at` keep insertion order
    /// (stable sort).
    #[must_use]
    pub fn history_for(&self, owner_id: &str) -> Vec<IdentificationRecord> {
        let mut records: Vec<IdentificationRecord> =
            read_list(self.substrate.as_ref(), HISTORY_KEY)
                .into_iter()
                .filter(|r: &IdentificationRecord| r.owner_id == owner_id)
                .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
    }

    /// Complete and persist a record: assigns a fresh id and stamps
    /// `created_at` with the moment of the call.
    pub fn append(&self, new: NewIdentification) -> IdentificationRecord {
        let mut all: Vec<IdentificationRecord> = read_list(self.substrate.as_ref(), HISTORY_KEY);

        let record = IdentificationRecord {
            id: ids::generate(ids::PREFIX_RECORD),
            owner_id: new.owner_id,
            image_name: new.image_name,
            image_preview_ref: new.image_preview_ref,
            predicted_label: new.predicted_label,
            category: new.category,
            description: new.description,
            created_at: Utc::now(),
        };

        all.push(record.clone());
        write_list(self.substrate.as_ref(), HISTORY_KEY, &all);
        tracing::debug!(record = %record.id, owner = %record.owner_id, "record appended");
        record
    }

    /// Remove the record with this id, if present; no-op otherwise.
    ///
    /// Deletion is by id alone: ownership is not re-checked here.
    pub fn delete_by_id(&self, id: &str) {
        let mut all: Vec<IdentificationRecord> = read_list(self.substrate.as_ref(), HISTORY_KEY);
        let before = all.len();
        all.retain(|r| r.id != id);
        if all.len() != before {
            write_list(self.substrate.as_ref(), HISTORY_KEY, &all);
            tracing::debug!(record = id, "record deleted");
        }
    }
}
