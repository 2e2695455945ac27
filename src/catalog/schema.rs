//! Bundled JSON Schema for catalog documents.
//!
//! The schema ships inside the binary so validation does not depend on the
//! working directory. Structural checks live here; cross-item rules (unique
//! ids, unique categories) are enforced when the catalog is indexed.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;

/// Raw text of `schema/fengshui_catalog.schema.json`.
pub const CATALOG_SCHEMA_JSON: &str = include_str!("../../schema/fengshui_catalog.schema.json");

/// Parsed copy of the bundled schema.
pub fn catalog_schema() -> Result<Value> {
    serde_json::from_str(CATALOG_SCHEMA_JSON).context("parsing bundled catalog schema")
}

/// Validate a JSON value against the bundled catalog schema.
///
/// All schema violations are collected into one error, one per line.
pub fn validate_document_value(value: &Value) -> Result<()> {
    let schema = catalog_schema()?;
    let compiled = JSONSchema::compile(&schema)
        .map_err(|err| anyhow!("compiling bundled catalog schema: {err}"))?;

    if let Err(errors) = compiled.validate(value) {
        let details = errors
            .map(|err| format!("{}: {}", err.instance_path, err))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("catalog document failed schema validation:\n{details}");
    }
    Ok(())
}
