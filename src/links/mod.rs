//! Ordered, validated registry of named links and its storage slot.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

mod error;
mod id;
mod normalize;
mod registry;
mod seed;
mod slot;

pub use error::{LinkError, RequiredField};
pub use id::new_id;
pub use normalize::{canonicalize_name, collapse_whitespace, ensure_ids, normalize_url, Migration};
pub use registry::{LinkRegistry, ReorderTarget};
pub use seed::seed_links;
pub use slot::{LinkSlot, SlotContents, LINKS_KEY};

/// One selectable channel: a display name, the page to embed and its thumbnail.
///
/// A record read from storage remembers the order its keys were stored in and
/// writes them back in that order, so re-saving an unchanged list reproduces
/// the stored text. New records are written as `id`, `name`, `url`, `iconUrl`.
#[derive(Debug, Clone, Eq)]
pub struct LinkRecord {
    pub id: String,
    pub name: String,
    pub url: String,
    pub icon_url: String,
    /// Fields written by older versions; carried through untouched.
    pub extra: Map<String, Value>,
    layout: Vec<String>,
}

const ID_KEY: &str = "id";
const NAME_KEY: &str = "name";
const URL_KEY: &str = "url";
const ICON_URL_KEY: &str = "iconUrl";

impl LinkRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
        icon_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            icon_url: icon_url.into(),
            extra: Map::new(),
            layout: Vec::new(),
        }
    }

    /// Build a record from a stored JSON object, keeping its key order.
    pub fn from_fields(mut fields: Map<String, Value>) -> Self {
        let layout = fields.keys().cloned().collect();
        Self {
            id: lenient_string(fields.shift_remove(ID_KEY)),
            name: lenient_string(fields.shift_remove(NAME_KEY)),
            url: lenient_string(fields.shift_remove(URL_KEY)),
            icon_url: lenient_string(fields.shift_remove(ICON_URL_KEY)),
            extra: fields,
            layout,
        }
    }

    fn known_field(&self, key: &str) -> Option<&str> {
        match key {
            ID_KEY => Some(&self.id),
            NAME_KEY => Some(&self.name),
            URL_KEY => Some(&self.url),
            ICON_URL_KEY => Some(&self.icon_url),
            _ => None,
        }
    }
}

impl PartialEq for LinkRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.url == other.url
            && self.icon_url == other.icon_url
            && self.extra == other.extra
    }
}

impl Serialize for LinkRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for key in &self.layout {
            if let Some(text) = self.known_field(key) {
                map.serialize_entry(key, text)?;
            } else if let Some(value) = self.extra.get(key) {
                map.serialize_entry(key, value)?;
            }
        }
        for key in [ID_KEY, NAME_KEY, URL_KEY, ICON_URL_KEY] {
            if !self.layout.iter().any(|seen| seen == key) {
                map.serialize_entry(key, self.known_field(key).unwrap_or_default())?;
            }
        }
        for (key, value) in &self.extra {
            if !self.layout.contains(key) {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LinkRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::deserialize(deserializer).map(Self::from_fields)
    }
}

// Stored data is hand-editable; anything that is not a string is kept as its
// JSON text rather than rejecting the whole record.
fn lenient_string(value: Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_browser_field_names() -> anyhow::Result<()> {
        let link = LinkRecord::new("a1", "News", "https://news.example", "https://news.example/i.png");
        let json = serde_json::to_string(&link)?;
        assert_eq!(
            json,
            r#"{"id":"a1","name":"News","url":"https://news.example","iconUrl":"https://news.example/i.png"}"#
        );
        Ok(())
    }

    #[test]
    fn lenient_fields_accept_non_strings() -> anyhow::Result<()> {
        let link: LinkRecord =
            serde_json::from_str(r#"{"id":12,"name":null,"url":true,"pinned":1}"#)?;
        assert_eq!(link.id, "12");
        assert_eq!(link.name, "");
        assert_eq!(link.url, "true");
        assert_eq!(link.icon_url, "");
        assert_eq!(link.extra.get("pinned"), Some(&Value::from(1)));
        Ok(())
    }

    #[test]
    fn stored_key_order_survives_edits() -> anyhow::Result<()> {
        let mut link: LinkRecord = serde_json::from_str(
            r#"{"zeta":1,"name":"Old","url":"https://old.example","alpha":2,"iconUrl":"","id":"x1"}"#,
        )?;
        link.name = "New".to_string();
        assert_eq!(
            serde_json::to_string(&link)?,
            r#"{"zeta":1,"name":"New","url":"https://old.example","alpha":2,"iconUrl":"","id":"x1"}"#
        );
        Ok(())
    }

    #[test]
    fn missing_fields_are_appended_after_stored_ones() -> anyhow::Result<()> {
        let link: LinkRecord = serde_json::from_str(r#"{"url":"https://a.example","name":"A"}"#)?;
        assert_eq!(
            serde_json::to_string(&link)?,
            r#"{"url":"https://a.example","name":"A","id":"","iconUrl":""}"#
        );
        Ok(())
    }
}
