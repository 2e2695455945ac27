//! Item and document types for the checklist catalog.
//!
//! `FengShuiItem` is the value every lookup returns. `CatalogDocument` is the
//! JSON interchange shape (see `schema/fengshui_catalog.schema.json`); its
//! categories are an array so declaration order survives a round trip.

use crate::catalog::identity::Category;
use serde::{Deserialize, Serialize};

/// Only schema version this crate reads or writes.
pub const CATALOG_SCHEMA_VERSION: &str = "fengshui_catalog_v1";

const LOCALIZATION_ROOT: &str = "fengShuiItems";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One checklist entry.
///
/// `label_key` and `advice_key` point into an external localization resource
/// and are never resolved here. `score` is a raw weight: positive is
/// favorable, negative unfavorable.
pub struct FengShuiItem {
    pub id: String,
    pub label_key: String,
    pub advice_key: String,
    pub score: i32,
}

impl FengShuiItem {
    /// Build an item whose keys follow `fengShuiItems.<category>.<id>.{label,advice}`.
    pub fn with_standard_keys(category: Category, id: &str, score: i32) -> Self {
        let prefix = format!("{LOCALIZATION_ROOT}.{}.{id}", category.as_str());
        Self {
            id: id.to_string(),
            label_key: format!("{prefix}.label"),
            advice_key: format!("{prefix}.advice"),
            score,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Catalog as stored on disk.
pub struct CatalogDocument {
    pub schema_version: String,
    pub categories: Vec<CategoryGroup>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Items declared for one category, in display order.
pub struct CategoryGroup {
    pub key: Category,
    pub items: Vec<FengShuiItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn standard_keys_embed_category_and_id() {
        let item = FengShuiItem::with_standard_keys(Category::LivingRoom, "livingSofaWall", 3);
        assert_eq!(item.label_key, "fengShuiItems.livingRoom.livingSofaWall.label");
        assert_eq!(
            item.advice_key,
            "fengShuiItems.livingRoom.livingSofaWall.advice"
        );
        assert_eq!(item.score, 3);
    }

    #[test]
    fn item_serializes_with_camel_case_keys() {
        let item = FengShuiItem::with_standard_keys(Category::Door, "doorSeeMirror", -2);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "doorSeeMirror",
                "labelKey": "fengShuiItems.door.doorSeeMirror.label",
                "adviceKey": "fengShuiItems.door.doorSeeMirror.advice",
                "score": -2
            })
        );
    }

    #[test]
    fn document_rejects_unknown_category_key() {
        let raw = json!({
            "schema_version": CATALOG_SCHEMA_VERSION,
            "categories": [{ "key": "garage", "items": [] }]
        });
        let err = serde_json::from_value::<CatalogDocument>(raw).unwrap_err();
        assert!(err.to_string().contains("category not found: garage"));
    }
}
