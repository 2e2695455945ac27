//! Indexed, read-only view of a checklist catalog.
//!
//! A `Catalog` keeps the category groups in declaration order, the flattened
//! item list derived from them, and an id index for direct lookup. Loading is
//! strict about duplicate ids and repeated categories so two items can never
//! answer to the same id.

use crate::catalog::schema::validate_document_value;
use crate::catalog::{
    CATALOG_SCHEMA_VERSION, CatalogDocument, CatalogError, Category, CategoryGroup, FengShuiItem,
};
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Category groups plus the derived flat list and id index.
pub struct Catalog {
    groups: Vec<(Category, Vec<FengShuiItem>)>,
    all: Vec<FengShuiItem>,
    by_id: BTreeMap<String, (Category, usize)>,
}

impl Catalog {
    /// Validate and index ordered category groups.
    pub fn from_groups(groups: Vec<(Category, Vec<FengShuiItem>)>) -> Result<Self> {
        validate_groups(&groups)?;
        Ok(Self::assemble(groups))
    }

    /// Index groups without validation; used for data already checked by tests.
    pub(crate) fn assemble(groups: Vec<(Category, Vec<FengShuiItem>)>) -> Self {
        let all: Vec<FengShuiItem> = groups
            .iter()
            .flat_map(|(_, items)| items.iter().cloned())
            .collect();

        let mut by_id = BTreeMap::new();
        let mut position = 0;
        for (category, items) in &groups {
            for item in items {
                by_id.insert(item.id.clone(), (*category, position));
                position += 1;
            }
        }

        debug!(
            categories = groups.len(),
            items = all.len(),
            "indexed feng shui catalog"
        );
        Self { groups, all, by_id }
    }

    pub fn from_document(document: CatalogDocument) -> Result<Self> {
        if document.schema_version != CATALOG_SCHEMA_VERSION {
            bail!(
                "schema_version '{}' not supported (expected {})",
                document.schema_version,
                CATALOG_SCHEMA_VERSION
            );
        }
        let groups = document
            .categories
            .into_iter()
            .map(|group| (group.key, group.items))
            .collect();
        Self::from_groups(groups)
    }

    /// Load a catalog document from disk.
    ///
    /// Validates against the bundled schema first, then applies the id and
    /// category uniqueness rules.
    pub fn load(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("opening catalog {}", path.display()))?;
        let value: Value = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing catalog {}", path.display()))?;
        validate_document_value(&value)
            .with_context(|| format!("validating catalog {}", path.display()))?;

        let document: CatalogDocument = serde_json::from_value(value)
            .with_context(|| format!("decoding catalog {}", path.display()))?;
        debug!(path = %path.display(), "loaded catalog document");
        Self::from_document(document)
            .with_context(|| format!("indexing catalog {}", path.display()))
    }

    /// Export the catalog in its on-disk document shape.
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            schema_version: CATALOG_SCHEMA_VERSION.to_string(),
            categories: self
                .groups
                .iter()
                .map(|(key, items)| CategoryGroup {
                    key: *key,
                    items: items.clone(),
                })
                .collect(),
        }
    }

    /// Items for a category key, in declared order.
    ///
    /// Unknown keys, and known categories this catalog does not declare, both
    /// report `CategoryNotFound`.
    pub fn by_category(&self, key: &str) -> Result<&[FengShuiItem], CatalogError> {
        let category: Category = key.parse()?;
        self.group(category)
            .ok_or_else(|| CatalogError::CategoryNotFound(key.to_string()))
    }

    /// Items for a category, or an empty slice when it is not declared.
    pub fn items(&self, category: Category) -> &[FengShuiItem] {
        self.group(category).unwrap_or(&[])
    }

    /// Declared categories in order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.groups.iter().map(|(category, _)| *category)
    }

    /// Every item, category by category.
    pub fn all_items(&self) -> &[FengShuiItem] {
        &self.all
    }

    pub fn find_by_id(&self, id: &str) -> Option<&FengShuiItem> {
        self.by_id.get(id).map(|(_, position)| &self.all[*position])
    }

    pub fn category_of(&self, id: &str) -> Option<Category> {
        self.by_id.get(id).map(|(category, _)| *category)
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    fn group(&self, category: Category) -> Option<&[FengShuiItem]> {
        self.groups
            .iter()
            .find(|(key, _)| *key == category)
            .map(|(_, items)| items.as_slice())
    }
}

/// Cross-item rules the schema cannot express.
pub(crate) fn validate_groups(groups: &[(Category, Vec<FengShuiItem>)]) -> Result<()> {
    let mut seen_categories = BTreeSet::new();
    let mut seen_ids: BTreeMap<&str, Category> = BTreeMap::new();

    for (category, items) in groups {
        if !seen_categories.insert(*category) {
            bail!("category {category} declared more than once");
        }
        for item in items {
            if item.id.trim().is_empty() {
                bail!("category {category} contains an item with no id");
            }
            if item.label_key.trim().is_empty() || item.advice_key.trim().is_empty() {
                bail!("item {} is missing a localization key", item.id);
            }
            if let Some(previous) = seen_ids.insert(item.id.as_str(), *category) {
                bail!(
                    "duplicate item id {} (in {previous} and {category})",
                    item.id
                );
            }
        }
    }
    Ok(())
}
