use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::Category;

/// A registered user identity.
///
/// The email is the identity key (case-sensitive, unique across accounts);
/// the id is assigned at creation and never changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Display metadata attached to a classifier label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KnowledgeEntry {
    pub category: Category,
    pub description: String,
}

/// A persisted, immutable result of one classification event, owned by an
/// account. Created only by the ingestion pipeline; deleted only by explicit
/// user action; never updated in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentificationRecord {
    pub id: String,
    pub owner_id: String,
    pub image_name: String,
    pub image_preview_ref: String,
    pub predicted_label: String,
    pub category: Category,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// The caller-supplied portion of an identification record. The store
/// completes it with a fresh id and timestamp on append.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewIdentification {
    pub owner_id: String,
    pub image_name: String,
    pub image_preview_ref: String,
    pub predicted_label: String,
    pub category: Category,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn account_serialization_roundtrip() {
        let account = Account {
            id: "usr-a3f8b2c1".to_string(),
            email: "ana@x.com".to_string(),
            name: "Ana".to_string(),
        };

        let json = serde_json::to_string(&account).unwrap();
        let back: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(back, account);
    }

    #[test]
    fn record_serializes_category_snake_case() {
        let record = IdentificationRecord {
            id: "idn-00000001".to_string(),
            owner_id: "usr-a3f8b2c1".to_string(),
            image_name: "leaf.png".to_string(),
            image_preview_ref: "blob:1".to_string(),
            predicted_label: "kelor".to_string(),
            category: Category::Herbal,
            description: "test".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["category"], "herbal");
    }
}
