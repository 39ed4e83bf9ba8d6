use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

pub mod preferences;

pub use preferences::{Preferences, Theme, ViewMode};

const APP_DOMAIN: &str = "io";
const APP_ORG: &str = "ChannelPicker";
const APP_NAME: &str = "channel-picker";

pub const CONFIG_ENV: &str = "CHANNEL_PICKER_CONFIG";
pub const DATA_ENV: &str = "CHANNEL_PICKER_DATA";

pub struct ConfigLoader {
    paths: ConfigPaths,
}

impl ConfigLoader {
    pub fn discover() -> Result<Self> {
        let paths = ConfigPaths::discover()?;
        Ok(Self { paths })
    }

    pub fn with_paths(paths: ConfigPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    pub fn load_or_init(&self) -> Result<AppConfig> {
        self.paths.ensure_directories()?;
        if !self.paths.config_file.exists() {
            let mut default_cfg = AppConfig::default();
            default_cfg.post_load(&self.paths);
            self.write_default_config(&default_cfg)?;
            return Ok(default_cfg);
        }

        self.load()
    }

    pub fn load(&self) -> Result<AppConfig> {
        let raw = fs::read_to_string(&self.paths.config_file)
            .with_context(|| format!("reading config {}", self.paths.config_file.display()))?;
        let mut cfg: AppConfig = toml::from_str(&raw).context("parsing config toml")?;
        cfg.post_load(&self.paths);
        Ok(cfg)
    }

    fn write_default_config(&self, cfg: &AppConfig) -> Result<()> {
        let toml = toml::to_string_pretty(cfg).context("serializing default config")?;
        if let Some(parent) = self.paths.config_file.parent() {
            fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        let mut file = fs::File::create(&self.paths.config_file)
            .with_context(|| format!("creating config {}", self.paths.config_file.display()))?;
        file.write_all(toml.as_bytes())
            .context("writing default config")?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_dir: PathBuf,
    pub config_file: PathBuf,
    pub data_dir: PathBuf,
    pub database_path: PathBuf,
}

impl ConfigPaths {
    pub fn discover() -> Result<Self> {
        let override_config = env::var(CONFIG_ENV).ok().map(PathBuf::from);
        let override_data = env::var(DATA_ENV).ok().map(PathBuf::from);

        let project_dirs = ProjectDirs::from(APP_DOMAIN, APP_ORG, APP_NAME)
            .context("resolving XDG project directories")?;

        let config_dir = override_config
            .clone()
            .map(|p| {
                if p.is_dir() {
                    p
                } else {
                    p.parent().map(Path::to_path_buf).unwrap_or(p)
                }
            })
            .unwrap_or_else(|| project_dirs.config_dir().to_path_buf());

        let config_file = override_config
            .filter(|p| p.is_file() || p.extension().is_some())
            .unwrap_or_else(|| config_dir.join("config.toml"));

        let data_dir = override_data.unwrap_or_else(|| project_dirs.data_dir().to_path_buf());
        let database_path = data_dir.join("channels.db");

        Ok(Self {
            config_dir,
            config_file,
            data_dir,
            database_path,
        })
    }

    pub fn ensure_directories(&self) -> Result<()> {
        for dir in [&self.config_dir, &self.data_dir] {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating application directory {}", dir.display()))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageOptions,
    pub links: LinkOptions,
}

impl AppConfig {
    fn post_load(&mut self, paths: &ConfigPaths) {
        self.storage.resolve(paths);
        if self.storage.wal_autocheckpoint == 0 {
            tracing::warn!("wal_autocheckpoint = 0 disables checkpointing, using 1000");
            self.storage.wal_autocheckpoint = StorageOptions::default().wal_autocheckpoint;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageOptions {
    /// SQLite file holding the slots; relative paths are taken from the data
    /// directory. Defaults to `channels.db` there.
    #[serde(skip_serializing)]
    pub database_path: PathBuf,
    pub wal_autocheckpoint: u32,
}

impl Default for StorageOptions {
    fn default() -> Self {
        Self {
            database_path: PathBuf::new(),
            wal_autocheckpoint: 1000,
        }
    }
}

impl StorageOptions {
    fn resolve(&mut self, paths: &ConfigPaths) {
        if self.database_path.as_os_str().is_empty() {
            self.database_path = paths.database_path.clone();
        } else if self.database_path.is_relative() {
            self.database_path = paths.data_dir.join(&self.database_path);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkOptions {
    /// Write the built-in channel list when no saved list exists yet
    pub seed_on_first_run: bool,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            seed_on_first_run: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_paths(root: &TempDir) -> ConfigPaths {
        let base = root.path();
        ConfigPaths {
            config_dir: base.join("config"),
            config_file: base.join("config/config.toml"),
            data_dir: base.join("data"),
            database_path: base.join("data/channels.db"),
        }
    }

    #[test]
    fn first_load_writes_defaults() -> Result<()> {
        let temp = TempDir::new()?;
        let loader = ConfigLoader::with_paths(temp_paths(&temp));

        let cfg = loader.load_or_init()?;
        assert!(cfg.links.seed_on_first_run);
        assert_eq!(cfg.storage.wal_autocheckpoint, 1000);
        assert_eq!(cfg.storage.database_path, loader.paths().database_path);
        assert!(loader.paths().config_file.exists());

        let reloaded = loader.load()?;
        assert!(reloaded.links.seed_on_first_run);
        Ok(())
    }

    #[test]
    fn partial_config_keeps_defaults_for_missing_fields() -> Result<()> {
        let temp = TempDir::new()?;
        let loader = ConfigLoader::with_paths(temp_paths(&temp));
        loader.paths().ensure_directories()?;
        fs::write(
            &loader.paths().config_file,
            "[links]\nseed_on_first_run = false\n",
        )?;

        let cfg = loader.load_or_init()?;
        assert!(!cfg.links.seed_on_first_run);
        assert_eq!(cfg.storage.wal_autocheckpoint, 1000);
        Ok(())
    }

    #[test]
    fn database_path_can_be_moved_within_the_data_dir() -> Result<()> {
        let temp = TempDir::new()?;
        let loader = ConfigLoader::with_paths(temp_paths(&temp));
        loader.paths().ensure_directories()?;
        fs::write(
            &loader.paths().config_file,
            "[storage]\ndatabase_path = \"links.sqlite\"\n",
        )?;

        let cfg = loader.load()?;
        assert_eq!(
            cfg.storage.database_path,
            loader.paths().data_dir.join("links.sqlite")
        );
        let storage = crate::storage::init(&cfg.storage)?;
        assert!(storage.run_wal_health_check().is_ok());
        assert!(cfg.storage.database_path.is_file());
        Ok(())
    }

    #[test]
    fn malformed_config_is_an_error() -> Result<()> {
        let temp = TempDir::new()?;
        let loader = ConfigLoader::with_paths(temp_paths(&temp));
        loader.paths().ensure_directories()?;
        fs::write(&loader.paths().config_file, "[links\n")?;

        assert!(loader.load().is_err());
        Ok(())
    }
}
