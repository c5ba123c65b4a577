//! Catalog load/save helpers with schema + invariant validation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::core::invariants::validate_invariants;

pub const CATALOG_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/catalog/v1.schema.json"
));

/// Load and validate the catalog (schema + invariants).
///
/// A missing file is an empty data source and yields an empty catalog.
pub fn load_catalog(catalog_path: &Path) -> Result<Catalog> {
    if !catalog_path.exists() {
        warn!(path = %catalog_path.display(), "catalog missing, listing no casinos");
        return Ok(Catalog::default());
    }
    let contents = fs::read_to_string(catalog_path)
        .with_context(|| format!("read catalog {}", catalog_path.display()))?;
    let catalog = parse_catalog(&contents)
        .with_context(|| format!("load catalog {}", catalog_path.display()))?;
    debug!(
        path = %catalog_path.display(),
        casinos = catalog.casinos.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Parse and validate catalog JSON text.
pub fn parse_catalog(contents: &str) -> Result<Catalog> {
    if contents.trim().is_empty() {
        return Ok(Catalog::default());
    }
    let value: Value = serde_json::from_str(contents).context("parse catalog json")?;
    validate_schema(&value)?;
    let catalog: Catalog = serde_json::from_value(value).context("deserialize catalog")?;
    validate_catalog_invariants(&catalog)?;
    Ok(catalog)
}

/// Write catalog to disk as pretty JSON with a trailing newline.
pub fn write_catalog(catalog_path: &Path, catalog: &Catalog) -> Result<()> {
    validate_catalog_invariants(catalog)?;
    let mut buf = serde_json::to_string_pretty(catalog).context("serialize catalog")?;
    buf.push('\n');
    fs::write(catalog_path, buf)
        .with_context(|| format!("write catalog {}", catalog_path.display()))
}

fn validate_schema(catalog: &Value) -> Result<()> {
    let schema_value: Value =
        serde_json::from_str(CATALOG_SCHEMA).context("parse embedded catalog schema")?;
    let compiled =
        validator_for(&schema_value).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(catalog) {
        let messages = compiled
            .iter_errors(catalog)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "catalog schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}

fn validate_catalog_invariants(catalog: &Catalog) -> Result<()> {
    let errors = validate_invariants(&catalog.casinos);
    if errors.is_empty() {
        return Ok(());
    }
    Err(anyhow!("catalog invariants failed: {}", errors.join("; ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{sample_catalog, sample_catalog_json};

    #[test]
    fn sample_passes_schema_and_invariants() {
        let catalog = parse_catalog(sample_catalog_json()).expect("parse");
        assert_eq!(catalog.casinos.len(), 10);
    }

    #[test]
    fn load_and_write_catalog_round_trip() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("catalog.json");
        write_catalog(&path, &sample_catalog()).expect("write");
        let loaded = load_catalog(&path).expect("load");
        assert_eq!(loaded, sample_catalog());
    }

    #[test]
    fn missing_or_blank_catalog_is_empty() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("catalog.json");
        assert!(load_catalog(&path).expect("missing").casinos.is_empty());
        fs::write(&path, "\n").expect("write");
        assert!(load_catalog(&path).expect("blank").casinos.is_empty());
    }

    #[test]
    fn schema_rejects_out_of_range_rating() {
        let raw = sample_catalog_json().replacen("\"rating\": 4.9", "\"rating\": 7.5", 1);
        let err = parse_catalog(&raw).expect_err("schema");
        assert!(format!("{:#}", err).contains("schema validation failed"));
    }

    #[test]
    fn schema_rejects_negative_deposit() {
        let raw = sample_catalog_json().replacen("\"minDeposit\": 500", "\"minDeposit\": -5", 1);
        assert!(parse_catalog(&raw).is_err());
    }

    #[test]
    fn invariants_reject_duplicate_ids() {
        let raw = sample_catalog_json().replacen("\"id\": \"2\"", "\"id\": \"1\"", 1);
        let err = parse_catalog(&raw).expect_err("duplicate");
        assert!(format!("{:#}", err).contains("duplicate id '1'"));
    }
}
