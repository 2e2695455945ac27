use thiserror::Error;

/// Lookup failures surfaced by catalog reads.
///
/// Item lookups by id never fail; a missing id is reported as `None`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("category not found: {0}")]
    CategoryNotFound(String),
}
