use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use super::id::new_id;
use super::LinkRecord;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));
static URL_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.\-]*://").expect("valid scheme pattern"));

/// Result of [`ensure_ids`]: the usable records plus whether any of them had
/// to be repaired, in which case the caller should write the list back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Migration {
    pub links: Vec<LinkRecord>,
    pub changed: bool,
}

/// Trim and collapse internal whitespace runs to a single space. This is the
/// stored form of a link name.
pub fn collapse_whitespace(input: &str) -> String {
    WHITESPACE_RUN.replace_all(input.trim(), " ").into_owned()
}

/// Key used for duplicate-name detection only; never stored.
pub fn canonicalize_name(name: &str) -> String {
    collapse_whitespace(name).to_lowercase()
}

/// Trim and prepend `https://` when the input carries no scheme. Does not
/// check that the result parses.
pub fn normalize_url(input: &str) -> String {
    let raw = input.trim();
    if raw.is_empty() {
        return String::new();
    }
    if URL_SCHEME.is_match(raw) {
        return raw.to_string();
    }
    if raw.starts_with("//") {
        return format!("https:{raw}");
    }
    format!("https://{raw}")
}

/// Turn whatever was read from storage into link records, minting an id for
/// every entry that lacks a usable one.
pub fn ensure_ids(raw: Value) -> Migration {
    let Value::Array(items) = raw else {
        return Migration::default();
    };

    let mut changed = false;
    let mut links = Vec::with_capacity(items.len());
    for item in items {
        let mut fields = match item {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        if !fields.get("id").is_some_and(is_truthy) {
            fields.insert("id".to_string(), Value::String(new_id()));
            changed = true;
        }
        links.push(LinkRecord::from_fields(fields));
    }
    Migration { links, changed }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn url_normalization_follows_scheme_rules() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("//example.com"), "https://example.com");
        assert_eq!(normalize_url("ftp://x.com"), "ftp://x.com");
        assert_eq!(normalize_url(""), "");
        assert_eq!(normalize_url("   "), "");
        assert_eq!(normalize_url("  http://a.b/c  "), "http://a.b/c");
        assert_eq!(normalize_url("svn+ssh://host"), "svn+ssh://host");
        assert_eq!(normalize_url("mailto:me@x.com"), "https://mailto:me@x.com");
    }

    #[test]
    fn names_collapse_and_fold() {
        assert_eq!(collapse_whitespace("  My \t  Show\n"), "My Show");
        assert_eq!(canonicalize_name("My   SHOW "), "my show");
        assert_eq!(canonicalize_name("my show"), canonicalize_name(" MY\u{a0}Show"));
    }

    #[test]
    fn non_array_input_is_an_empty_list() {
        for raw in [json!(null), json!({"id": "x"}), json!("text"), json!(42)] {
            let migration = ensure_ids(raw);
            assert!(migration.links.is_empty());
            assert!(!migration.changed);
        }
    }

    #[test]
    fn records_with_ids_pass_through_unchanged() {
        let raw = json!([
            {"id": "a", "name": "A", "url": "https://a.com", "iconUrl": "https://a.com/i.png"},
            {"id": "b", "name": "B", "url": "https://b.com", "iconUrl": "https://b.com/i.png"}
        ]);
        let migration = ensure_ids(raw);
        assert!(!migration.changed);
        let ids: Vec<_> = migration.links.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(migration.links[1].icon_url, "https://b.com/i.png");
    }

    #[test]
    fn missing_or_falsy_ids_are_minted() {
        let raw = json!([
            {"name": "No id", "url": "https://a.com"},
            {"id": "", "name": "Empty id"},
            {"id": 0, "name": "Zero id"},
            {"id": "keep", "name": "Kept"},
            null
        ]);
        let migration = ensure_ids(raw);
        assert!(migration.changed);
        assert_eq!(migration.links.len(), 5);
        assert_eq!(migration.links[0].name, "No id");
        assert_eq!(migration.links[0].url, "https://a.com");
        assert_eq!(migration.links[3].id, "keep");
        assert_eq!(migration.links[4].name, "");

        let mut ids: Vec<_> = migration.links.iter().map(|l| l.id.clone()).collect();
        assert!(ids.iter().all(|id| !id.is_empty()));
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn truthy_non_string_ids_are_kept() {
        let migration = ensure_ids(json!([{"id": 7, "name": "Seven"}]));
        assert!(!migration.changed);
        assert_eq!(migration.links[0].id, "7");
    }

    #[test]
    fn unknown_fields_survive_migration() {
        let migration = ensure_ids(json!([{"name": "Legacy", "color": "red"}]));
        assert_eq!(migration.links[0].extra.get("color"), Some(&json!("red")));
    }

    #[test]
    fn minted_ids_are_written_after_existing_fields() -> anyhow::Result<()> {
        let migration = ensure_ids(json!([
            {"name": "Legacy", "url": "https://a.com"},
            {"name": "Blank", "id": "", "url": "https://b.com"}
        ]));
        let saved = serde_json::to_value(&migration.links)?;
        let keys = |index: usize| -> Vec<String> {
            saved[index]
                .as_object()
                .map(|fields| fields.keys().cloned().collect())
                .unwrap_or_default()
        };
        assert_eq!(keys(0), vec!["name", "url", "id", "iconUrl"]);
        assert_eq!(keys(1), vec!["name", "id", "url", "iconUrl"]);
        Ok(())
    }
}
