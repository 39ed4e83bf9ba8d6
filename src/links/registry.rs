use url::Url;

use super::normalize::{canonicalize_name, collapse_whitespace, ensure_ids, normalize_url};
use super::slot::{LinkSlot, SlotContents, LINKS_KEY};
use super::{new_id, seed_links, LinkError, LinkRecord, Migration, RequiredField};
use crate::config::LinkOptions;
use crate::storage::KeyValueStore;

/// Where [`LinkRegistry::reorder`] should put the moved record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderTarget {
    /// Immediately before the record with this id.
    Before(String),
    /// At this index once the record has been taken out of its old position,
    /// i.e. the index of the item a drag ended on.
    Index(usize),
}

/// Cleaned user input that passed validation.
struct Draft {
    name: String,
    url: String,
    icon_url: String,
}

/// Owner of the ordered link list and sole writer of its storage slot.
///
/// Every successful mutation is written to storage before the in-memory list
/// is replaced, so the two never disagree. `add`, `update` and `remove` start
/// from a fresh read of the slot rather than the in-memory copy, which keeps
/// writes made by another view of the same storage since our last read.
pub struct LinkRegistry<S> {
    slot: LinkSlot<S>,
    options: LinkOptions,
    links: Vec<LinkRecord>,
    loaded: bool,
}

impl<S: KeyValueStore> LinkRegistry<S> {
    pub fn new(store: S, options: LinkOptions) -> Self {
        Self {
            slot: LinkSlot::new(store),
            options,
            links: Vec::new(),
            loaded: false,
        }
    }

    /// Load the stored list, seeding or migrating it as needed. Never fails:
    /// unreadable storage leaves the registry with an empty list.
    pub fn initialize(&mut self) -> &[LinkRecord] {
        self.links = self.load_initial();
        self.loaded = true;
        &self.links
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn links(&self) -> &[LinkRecord] {
        &self.links
    }

    pub fn get(&self, id: &str) -> Option<&LinkRecord> {
        self.links.iter().find(|link| link.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.links.iter().position(|link| link.id == id)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn add(&mut self, name: &str, url: &str, icon_url: &str) -> Result<LinkRecord, LinkError> {
        self.ensure_loaded();
        let draft = self.validate(name, url, icon_url, None)?;

        let mut links = self.fresh_links()?.unwrap_or_default();
        let link = LinkRecord::new(new_id(), draft.name, draft.url, draft.icon_url);
        links.push(link.clone());
        self.commit(links)?;
        tracing::info!(id = %link.id, name = %link.name, "link added");
        Ok(link)
    }

    pub fn update(
        &mut self,
        id: &str,
        name: &str,
        url: &str,
        icon_url: &str,
    ) -> Result<LinkRecord, LinkError> {
        self.ensure_loaded();
        let draft = self.validate(name, url, icon_url, Some(id))?;

        let mut links = self.fresh_links()?.unwrap_or_default();
        let Some(link) = links.iter_mut().find(|link| link.id == id) else {
            return Err(LinkError::NotFound { id: id.to_string() });
        };
        link.name = draft.name;
        link.url = draft.url;
        link.icon_url = draft.icon_url;
        let updated = link.clone();
        self.commit(links)?;
        tracing::info!(id, name = %updated.name, "link updated");
        Ok(updated)
    }

    /// Delete a record. Unknown ids are not an error; the removed record, if
    /// any, is returned.
    pub fn remove(&mut self, id: &str) -> Result<Option<LinkRecord>, LinkError> {
        self.ensure_loaded();
        let Some(mut links) = self.fresh_links()? else {
            return Ok(None);
        };
        let removed = links
            .iter()
            .position(|link| link.id == id)
            .map(|index| links.remove(index));
        self.commit(links)?;
        if removed.is_some() {
            tracing::info!(id, "link removed");
        }
        Ok(removed)
    }

    /// Move one record, keeping everything else in relative order. Returns
    /// whether anything moved; unknown ids, out-of-range indices and moves
    /// onto the current position leave the list and storage untouched.
    pub fn reorder(&mut self, id: &str, target: ReorderTarget) -> Result<bool, LinkError> {
        self.ensure_loaded();
        let Some(from) = self.position(id) else {
            return Ok(false);
        };
        let to = match target {
            ReorderTarget::Index(index) => index,
            ReorderTarget::Before(before) => match self.position(&before) {
                Some(index) if index > from => index - 1,
                Some(index) => index,
                None => return Ok(false),
            },
        };
        if to == from || to >= self.links.len() {
            return Ok(false);
        }

        let mut links = self.links.clone();
        let link = links.remove(from);
        links.insert(to, link);
        self.commit(links)?;
        tracing::debug!(id, from, to, "link moved");
        Ok(true)
    }

    fn ensure_loaded(&mut self) {
        if !self.loaded {
            tracing::debug!("link registry used before initialize, loading now");
            self.initialize();
        }
    }

    fn load_initial(&self) -> Vec<LinkRecord> {
        let contents = match self.slot.load() {
            Ok(contents) => contents,
            Err(err) => {
                tracing::error!(error = %format!("{err:#}"), "cannot read link list, starting empty");
                return Vec::new();
            }
        };

        match contents {
            SlotContents::Absent if self.options.seed_on_first_run => {
                let seed = seed_links();
                tracing::info!(count = seed.len(), "seeding first-run channel list");
                self.write_back(&seed);
                seed
            }
            SlotContents::Absent => Vec::new(),
            SlotContents::Corrupt(source) => {
                let err = LinkError::StorageCorrupt {
                    key: LINKS_KEY,
                    source,
                };
                tracing::warn!(error = %err, "starting with an empty channel list");
                Vec::new()
            }
            SlotContents::Present(value) => {
                let Migration { links, changed } = ensure_ids(value);
                if changed {
                    tracing::info!(count = links.len(), "migrated stored links to carry ids");
                    self.write_back(&links);
                }
                links
            }
        }
    }

    fn write_back(&self, links: &[LinkRecord]) {
        if let Err(err) = self.slot.save(links) {
            tracing::warn!(error = %format!("{err:#}"), "could not write link list back");
        }
    }

    /// Current stored list with ids ensured; `None` if the slot was never written.
    fn fresh_links(&self) -> Result<Option<Vec<LinkRecord>>, LinkError> {
        match self.slot.load()? {
            SlotContents::Absent => Ok(None),
            SlotContents::Present(value) => Ok(Some(ensure_ids(value).links)),
            SlotContents::Corrupt(source) => {
                let err = LinkError::StorageCorrupt {
                    key: LINKS_KEY,
                    source,
                };
                tracing::warn!(error = %err, "continuing from the in-memory list");
                Ok(Some(self.links.clone()))
            }
        }
    }

    fn commit(&mut self, links: Vec<LinkRecord>) -> Result<(), LinkError> {
        self.slot.save(&links)?;
        self.links = links;
        Ok(())
    }

    fn validate(
        &self,
        name: &str,
        url: &str,
        icon_url: &str,
        except_id: Option<&str>,
    ) -> Result<Draft, LinkError> {
        let name = collapse_whitespace(name);
        let url = normalize_url(url);
        let icon_url = normalize_url(icon_url);

        if name.is_empty() {
            return Err(LinkError::MissingField {
                field: RequiredField::Name,
            });
        }
        if url.is_empty() {
            return Err(LinkError::MissingField {
                field: RequiredField::Url,
            });
        }
        if self.has_duplicate_name(&name, except_id) {
            return Err(LinkError::DuplicateName { name });
        }
        if let Err(source) = Url::parse(&url) {
            return Err(LinkError::InvalidUrl { url, source });
        }
        if let Err(source) = Url::parse(&icon_url) {
            return Err(LinkError::InvalidIconUrl {
                url: icon_url,
                source,
            });
        }
        Ok(Draft {
            name,
            url,
            icon_url,
        })
    }

    fn has_duplicate_name(&self, name: &str, except_id: Option<&str>) -> bool {
        let key = canonicalize_name(name);
        self.links
            .iter()
            .any(|link| canonicalize_name(&link.name) == key && Some(link.id.as_str()) != except_id)
    }
}
