// Schema cache and validation
//
// The Zed theme schema is fetched over HTTP and cached to disk with a 7-day
// freshness window. Every failure path degrades: a stale cache is better
// than no schema, and no schema means the run proceeds unvalidated. Only an
// actual validation FAILURE of the merged document aborts the run - that
// happens before the write, so an invalid file is never persisted.

use crate::error::SyncError;
use crate::theme::ThemeFamily;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

/// Cached schema copies older than this are refetched.
const CACHE_MAX_AGE: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Load the schema document, preferring a fresh cache over the network and a
/// stale cache over nothing. Returns None when no copy can be obtained.
pub async fn load_schema(
    client: &reqwest::Client,
    url: &str,
    cache_path: &Path,
) -> Option<Value> {
    if cache_is_fresh(cache_path) {
        if let Some(schema) = read_cache(cache_path) {
            tracing::debug!("using cached schema at {}", cache_path.display());
            return Some(schema);
        }
    }

    match fetch_schema(client, url).await {
        Ok((schema, body)) => {
            write_cache(cache_path, &body);
            Some(schema)
        }
        Err(e) => {
            // Fall back to the cached copy even past its freshness window
            match read_cache(cache_path) {
                Some(schema) => {
                    tracing::warn!("schema fetch failed ({e:#}), using stale cached copy");
                    Some(schema)
                }
                None => {
                    tracing::warn!("schema fetch failed ({e:#}) and no cache exists, skipping validation");
                    None
                }
            }
        }
    }
}

async fn fetch_schema(client: &reqwest::Client, url: &str) -> anyhow::Result<(Value, String)> {
    let body = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())?
        .text()
        .await?;
    let schema = serde_json::from_str(&body)?;
    Ok((schema, body))
}

fn cache_is_fresh(path: &Path) -> bool {
    let Ok(metadata) = std::fs::metadata(path) else {
        return false;
    };
    metadata
        .modified()
        .ok()
        .and_then(|mtime| mtime.elapsed().ok())
        .map(|age| age < CACHE_MAX_AGE)
        .unwrap_or(false)
}

fn read_cache(path: &Path) -> Option<Value> {
    let contents = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&contents).ok()
}

fn write_cache(path: &Path, body: &str) {
    // Cache writes are best-effort; a failed write only costs a refetch
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Err(e) = std::fs::write(path, body) {
        tracing::warn!("could not write schema cache {}: {e}", path.display());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Validation
// ─────────────────────────────────────────────────────────────────────────────

/// Extract the set of style property names the schema recognizes.
///
/// Locates the style-content definition by looking for the object under
/// `definitions`/`$defs` whose properties include "background.appearance",
/// which only the style block defines.
pub fn style_keys(schema: &Value) -> Option<HashSet<String>> {
    let definitions = schema
        .get("definitions")
        .or_else(|| schema.get("$defs"))?
        .as_object()?;

    definitions
        .values()
        .filter_map(|def| def.get("properties")?.as_object())
        .find(|props| props.contains_key("background.appearance"))
        .map(|props| props.keys().cloned().collect())
}

/// Check every variant's style keys against the schema's property set.
///
/// A schema without a recognizable style definition skips the check with a
/// warning rather than failing the run on our own extraction shortcomings.
pub fn validate(family: &ThemeFamily, schema: &Value) -> Result<(), SyncError> {
    let Some(allowed) = style_keys(schema) else {
        tracing::warn!("schema has no recognizable style definition, skipping validation");
        return Ok(());
    };

    let mut unknown: Vec<String> = Vec::new();
    for variant in &family.themes {
        for key in variant.style.keys() {
            if !allowed.contains(key) {
                unknown.push(format!("{}: {key}", variant.name));
            }
        }
    }

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(SyncError::Validation(format!(
            "style keys not present in the schema: {}",
            unknown.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Appearance, Variant};
    use serde_json::Map;

    fn schema_fixture() -> Value {
        serde_json::json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "definitions": {
                "AppearanceContent": {
                    "enum": ["light", "dark"]
                },
                "ThemeStyleContent": {
                    "properties": {
                        "background.appearance": { "type": "string" },
                        "background": { "type": "string" },
                        "surface.background": { "type": "string" },
                        "syntax": { "type": "object" }
                    }
                }
            }
        })
    }

    fn family_with_style(style: Map<String, Value>) -> ThemeFamily {
        ThemeFamily {
            schema: None,
            name: "Catppuccin Blur".to_string(),
            author: "test".to_string(),
            themes: vec![Variant {
                name: "Catppuccin Mocha (Blur)".to_string(),
                appearance: Appearance::Dark,
                style,
                extra: Map::new(),
            }],
            extra: Map::new(),
        }
    }

    #[test]
    fn test_style_keys_extraction() {
        let keys = style_keys(&schema_fixture()).unwrap();
        assert!(keys.contains("background"));
        assert!(keys.contains("surface.background"));
        // The enum-only definition is not mistaken for the style block
        assert!(!keys.contains("light"));
    }

    #[test]
    fn test_style_keys_missing_definitions() {
        assert!(style_keys(&serde_json::json!({"type": "object"})).is_none());
    }

    #[test]
    fn test_validate_accepts_known_keys() {
        let mut style = Map::new();
        style.insert("background".to_string(), Value::from("#1e1e2ed7"));
        style.insert("syntax".to_string(), serde_json::json!({}));

        validate(&family_with_style(style), &schema_fixture()).unwrap();
    }

    #[test]
    fn test_validate_rejects_unknown_keys() {
        let mut style = Map::new();
        style.insert("background".to_string(), Value::from("#1e1e2ed7"));
        style.insert("not.a.real.key".to_string(), Value::from("#000000ff"));

        let err = validate(&family_with_style(style), &schema_fixture()).unwrap_err();
        match err {
            SyncError::Validation(msg) => assert!(msg.contains("not.a.real.key")),
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn test_cache_freshness() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");

        // Absent file is never fresh
        assert!(!cache_is_fresh(&path));

        // A just-written file is fresh
        std::fs::write(&path, "{}").unwrap();
        assert!(cache_is_fresh(&path));
    }

    #[test]
    fn test_read_cache_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(read_cache(&path).is_none());
    }
}
