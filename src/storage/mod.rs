use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use time::OffsetDateTime;

use crate::config::StorageOptions;

mod memory;
mod schema;

pub use memory::MemoryStore;

/// Synchronous, whole-value key/value storage. Every `set` fully replaces the
/// previous value for the key; there is no partial update.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WalCheckpointStats {
    pub busy_frames: i64,
    pub wal_frames: i64,
    pub checkpointed_frames: i64,
}

#[derive(Clone)]
pub struct StorageHandle {
    db_path: Arc<PathBuf>,
    options: Arc<StorageOptions>,
}

impl StorageHandle {
    pub fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&*self.db_path)
            .with_context(|| format!("opening database {}", self.db_path.display()))?;
        prepare_connection(&conn, &self.options)?;
        Ok(conn)
    }

    pub fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.connect()?;
        f(&conn)
    }

    pub fn run_wal_health_check(&self) -> Result<WalCheckpointStats> {
        self.with_connection(|conn| {
            let mut stmt = conn
                .prepare("PRAGMA wal_checkpoint(PASSIVE)")
                .context("preparing wal checkpoint pragma")?;
            let mut rows = stmt.query([]).context("executing wal checkpoint pragma")?;
            if let Some(row) = rows.next()? {
                Ok(WalCheckpointStats {
                    busy_frames: row.get(0)?,
                    wal_frames: row.get(1)?,
                    checkpointed_frames: row.get(2)?,
                })
            } else {
                bail!("wal checkpoint returned no rows");
            }
        })
    }

    pub fn keys(&self) -> Result<Vec<String>> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare("SELECT key FROM kv_slots ORDER BY key")?;
            let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
            rows.collect::<Result<Vec<_>, _>>()
                .context("listing storage keys")
        })
    }
}

impl KeyValueStore for StorageHandle {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.with_connection(|conn| {
            conn.query_row(
                "SELECT value FROM kv_slots WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .with_context(|| format!("reading storage slot '{key}'"))
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        self.with_connection(|conn| {
            conn.execute(
                "INSERT INTO kv_slots (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                                updated_at = excluded.updated_at",
                params![key, value, now],
            )
            .with_context(|| format!("writing storage slot '{key}'"))?;
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.with_connection(|conn| {
            conn.execute("DELETE FROM kv_slots WHERE key = ?1", params![key])
                .with_context(|| format!("removing storage slot '{key}'"))?;
            Ok(())
        })
    }
}

pub fn init(storage: &StorageOptions) -> Result<StorageHandle> {
    let db_path = &storage.database_path;
    if db_path.as_os_str().is_empty() {
        bail!("no database path configured");
    }
    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating data directory {}", parent.display()))?;
    }
    let conn = Connection::open(db_path)
        .with_context(|| format!("opening database {}", db_path.display()))?;
    prepare_connection(&conn, storage)?;
    schema::apply(&conn)?;
    Ok(StorageHandle {
        db_path: Arc::new(db_path.clone()),
        options: Arc::new(storage.clone()),
    })
}

fn prepare_connection(conn: &Connection, storage: &StorageOptions) -> Result<()> {
    conn.pragma_update(None, "journal_mode", "WAL")
        .context("setting journal_mode=WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")
        .context("setting synchronous=NORMAL")?;
    conn.pragma_update(
        None,
        "wal_autocheckpoint",
        storage.wal_autocheckpoint.to_string(),
    )
    .context("setting wal_autocheckpoint")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigPaths, StorageOptions};
    use tempfile::TempDir;

    fn temp_paths(root: &TempDir) -> ConfigPaths {
        let base = root.path();
        let config_dir = base.join("config");
        let data_dir = base.join("data");
        ConfigPaths {
            config_dir: config_dir.clone(),
            config_file: config_dir.join("config.toml"),
            data_dir: data_dir.clone(),
            database_path: data_dir.join("channels.db"),
        }
    }

    fn options_for(paths: &ConfigPaths) -> StorageOptions {
        StorageOptions {
            database_path: paths.database_path.clone(),
            ..StorageOptions::default()
        }
    }

    fn init_storage() -> anyhow::Result<(TempDir, StorageHandle)> {
        let temp = TempDir::new()?;
        let paths = temp_paths(&temp);
        paths.ensure_directories()?;
        let storage = init(&options_for(&paths))?;
        Ok((temp, storage))
    }

    #[test]
    fn missing_slot_reads_as_none() -> anyhow::Result<()> {
        let (_temp, storage) = init_storage()?;
        assert_eq!(storage.get("iframe_links_v1")?, None);
        Ok(())
    }

    #[test]
    fn set_overwrites_previous_value() -> anyhow::Result<()> {
        let (_temp, storage) = init_storage()?;
        storage.set("theme", "dark")?;
        storage.set("theme", "light")?;
        assert_eq!(storage.get("theme")?.as_deref(), Some("light"));
        assert_eq!(storage.keys()?, vec!["theme".to_string()]);
        Ok(())
    }

    #[test]
    fn remove_clears_slot_and_tolerates_missing_keys() -> anyhow::Result<()> {
        let (_temp, storage) = init_storage()?;
        storage.set("viewCode", "grid")?;
        storage.remove("viewCode")?;
        storage.remove("viewCode")?;
        assert_eq!(storage.get("viewCode")?, None);
        Ok(())
    }

    #[test]
    fn values_survive_reopening_the_database() -> anyhow::Result<()> {
        let temp = TempDir::new()?;
        let paths = temp_paths(&temp);
        let options = options_for(&paths);
        init(&options)?.set("iframe_links_v1", "[]")?;

        let reopened = init(&options)?;
        assert_eq!(reopened.get("iframe_links_v1")?.as_deref(), Some("[]"));
        Ok(())
    }

    #[test]
    fn opens_the_configured_database_file() -> anyhow::Result<()> {
        let temp = TempDir::new()?;
        let options = StorageOptions {
            database_path: temp.path().join("nested/custom.db"),
            ..StorageOptions::default()
        };
        init(&options)?.set("theme", "dark")?;

        assert!(options.database_path.is_file());
        assert!(!temp.path().join("data/channels.db").exists());
        Ok(())
    }

    #[test]
    fn unresolved_database_path_is_an_error() {
        assert!(init(&StorageOptions::default()).is_err());
    }

    #[test]
    fn wal_health_check_runs() -> anyhow::Result<()> {
        let (_temp, storage) = init_storage()?;
        let stats = storage.run_wal_health_check()?;
        assert!(
            stats.busy_frames >= 0 && stats.wal_frames >= 0 && stats.checkpointed_frames >= 0,
            "expected non-negative wal stats, got {:?}",
            stats
        );
        Ok(())
    }
}
