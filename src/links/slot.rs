use anyhow::{Context, Result};
use serde_json::Value;

use super::LinkRecord;
use crate::storage::KeyValueStore;

pub const LINKS_KEY: &str = "iframe_links_v1";

/// What the link slot held when it was read.
#[derive(Debug)]
pub enum SlotContents {
    /// Never written, or written as an empty string.
    Absent,
    Present(Value),
    /// Written, but not JSON.
    Corrupt(serde_json::Error),
}

/// Whole-document access to the stored link list. There is no partial update:
/// every save replaces the slot.
#[derive(Debug, Clone)]
pub struct LinkSlot<S> {
    store: S,
}

impl<S: KeyValueStore> LinkSlot<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Result<SlotContents> {
        let raw = match self.raw()? {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(SlotContents::Absent),
        };
        Ok(match serde_json::from_str(&raw) {
            Ok(value) => SlotContents::Present(value),
            Err(err) => SlotContents::Corrupt(err),
        })
    }

    pub fn save(&self, links: &[LinkRecord]) -> Result<()> {
        let json = serde_json::to_string(links).context("serializing link list")?;
        self.store
            .set(LINKS_KEY, &json)
            .context("saving link list")?;
        tracing::debug!(count = links.len(), "link list saved");
        Ok(())
    }

    pub fn raw(&self) -> Result<Option<String>> {
        self.store.get(LINKS_KEY).context("reading link list")
    }
}
