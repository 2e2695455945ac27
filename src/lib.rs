//! Static feng shui checklist catalog.
//!
//! The crate exposes the checklist items grouped by household area, the
//! flattened item list, and id lookups. Crate-level functions read the
//! built-in catalog; `Catalog` values loaded from a document answer the same
//! queries. Localization keys are returned as-is; resolving them to display
//! text and aggregating scores belong to callers.

use anyhow::Result;
use std::borrow::Cow;
use std::env;
use std::path::{Path, PathBuf};

pub mod catalog;
pub mod logging;

pub use catalog::{
    CATALOG_SCHEMA_VERSION, Catalog, CatalogDocument, CatalogError, Category, CategoryGroup,
    FengShuiItem, builtin::builtin,
};

/// Environment variable naming a catalog document to use instead of the built-in data.
pub const CATALOG_PATH_ENV: &str = "FENGSHUI_CATALOG";

/// Items of the built-in catalog for a category key, in declared order.
pub fn items_by_category(key: &str) -> Result<&'static [FengShuiItem], CatalogError> {
    builtin().by_category(key)
}

/// Built-in category keys in declaration order.
pub fn categories() -> impl Iterator<Item = Category> {
    builtin().categories()
}

/// Every built-in item, category by category.
pub fn all_items() -> &'static [FengShuiItem] {
    builtin().all_items()
}

/// Look up a built-in item by id.
pub fn find_by_id(id: &str) -> Option<&'static FengShuiItem> {
    builtin().find_by_id(id)
}

/// Category of a built-in item.
pub fn category_of(id: &str) -> Option<Category> {
    builtin().category_of(id)
}

/// Pick the catalog document path: an explicit path wins, then `FENGSHUI_CATALOG`.
///
/// An empty environment value counts as unset.
pub fn catalog_path_override(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    env::var_os(CATALOG_PATH_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Resolve the catalog to serve: a loaded document when a path is given,
/// otherwise the built-in data.
pub fn resolve_catalog(path: Option<&Path>) -> Result<Cow<'static, Catalog>> {
    match path {
        Some(path) => Ok(Cow::Owned(Catalog::load(path)?)),
        None => Ok(Cow::Borrowed(builtin())),
    }
}
