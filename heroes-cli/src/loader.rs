//! JSON bulk loader for the record store
//!
//! The backing document is a single JSON array with one object per hero.
//! A document that is not an array, or any element that fails to
//! deserialize, fails the whole load.

use anyhow::{Context, Result};
use heroes_core::{Hero, RecordSource, StoreError};
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Parse a JSON array document into heroes, all or nothing
pub fn parse_heroes(document: &str) -> Result<Vec<Hero>, StoreError> {
    let value: Value =
        serde_json::from_str(document).map_err(|e| StoreError::Malformed(e.to_string()))?;

    let elements = match value {
        Value::Array(elements) => elements,
        other => return Err(StoreError::NotAnArray(json_kind(&other).to_string())),
    };

    let mut heroes = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        let hero: Hero = serde_json::from_value(element).map_err(|e| StoreError::InvalidRecord {
            index,
            reason: e.to_string(),
        })?;
        heroes.push(hero);
    }

    debug!("Parsed {} hero records", heroes.len());
    Ok(heroes)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Records stored as a JSON array in a file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Source backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonFileSource {
    fn load_records(&self) -> Result<Vec<Hero>, StoreError> {
        info!("Loading heroes from {}", self.path.display());
        let document = fs::read_to_string(&self.path)?;
        parse_heroes(&document)
    }
}

/// Records held as an in-memory JSON document
#[derive(Debug, Clone)]
pub struct JsonStrSource<'a> {
    document: &'a str,
}

impl<'a> JsonStrSource<'a> {
    /// Source over `document`
    pub fn new(document: &'a str) -> Self {
        Self { document }
    }
}

impl RecordSource for JsonStrSource<'_> {
    fn load_records(&self) -> Result<Vec<Hero>, StoreError> {
        parse_heroes(self.document)
    }
}

/// Read a single hero object from a JSON file
pub fn read_hero(path: &str) -> Result<Hero> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read hero file: {}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid hero document: {}", path))
}

/// Write `value` as pretty JSON to `path` ("-" for stdout)
pub fn write_json<T: serde::Serialize + ?Sized>(path: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).with_context(|| "Failed to serialize report")?;

    if path == "-" {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", json)?;
    } else {
        fs::write(path, json).with_context(|| format!("Failed to write output file: {}", path))?;
        info!("Report written to: {}", path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_array_of_heroes() {
        let heroes = parse_heroes(r#"[{"id": 1, "name": "A-Bomb"}, {"id": 2, "name": "Abe Sapien"}]"#)
            .unwrap();
        assert_eq!(heroes.len(), 2);
        assert_eq!(heroes[1].name, "Abe Sapien");
    }

    #[test]
    fn rejects_non_array_document() {
        let err = parse_heroes(r#"{"id": 1, "name": "A-Bomb"}"#).unwrap_err();
        assert_eq!(err, StoreError::NotAnArray("object".to_string()));
    }

    #[test]
    fn one_bad_element_fails_whole_load() {
        let err = parse_heroes(r#"[{"id": 1, "name": "A-Bomb"}, {"id": "two"}]"#).unwrap_err();
        assert!(matches!(err, StoreError::InvalidRecord { index: 1, .. }));
    }

    #[test]
    fn str_source_feeds_store() {
        use heroes_core::HeroStore;

        let document = r#"[{"id": 3, "name": "Abin Sur"}]"#;
        let store = HeroStore::from_source(&JsonStrSource::new(document));
        assert_eq!(store.find_by_name("Abin Sur").map(|h| h.id), Some(3));

        let empty = HeroStore::from_source(&JsonStrSource::new("42"));
        assert!(empty.is_empty());
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(parse_heroes("[{"), Err(StoreError::Malformed(_))));
    }
}
