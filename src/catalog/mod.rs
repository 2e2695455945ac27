//! Feng shui checklist catalog wiring.
//!
//! `builtin` holds the literal checklist compiled into the crate; `index`
//! turns ordered category groups into a `Catalog` with the flattened list and
//! an id index; `model` describes items and the JSON document shape used to
//! export or load alternative catalogs, which `schema` validates.

pub mod builtin;
pub mod error;
pub mod identity;
pub mod index;
pub mod model;
pub mod schema;

pub use error::CatalogError;
pub use identity::Category;
pub use index::Catalog;
pub use model::{CATALOG_SCHEMA_VERSION, CatalogDocument, CategoryGroup, FengShuiItem};
