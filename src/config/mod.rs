use crate::core::repository::{DEFAULT_STORAGE_KEY, EntryRepository};
use crate::errors::AppResult;
use crate::export::DEFAULT_EXPORT_FILE;
use crate::storage::SqliteStore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}
fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            storage_key: default_storage_key(),
            export_file: default_export_file(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (~/.rtimesheet)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rtimesheet")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        tracing::debug!(?cfg, "loaded configuration");
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the configuration file (unless `is_test`) and return the
    /// configuration that was produced.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        // DB path: user provided (relative to the config dir) or default
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Self::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            fs::write(Self::config_file(), config.to_yaml()?)?;
        }

        Ok(config)
    }

    /// Open the configured database and load the entry collection.
    pub fn open_repository(&self) -> AppResult<EntryRepository<SqliteStore>> {
        if let Some(parent) = Path::new(&self.database).parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let store = SqliteStore::open(&self.database)?;
        Ok(EntryRepository::load(store, &self.storage_key))
    }
}
