use crate::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "emptrack.json";
pub const DATABASE_ENV: &str = "EMPTRACK_DB";
const DEFAULT_DATABASE: &str = "employee_tracker.db";

/// Connection settings, read from `emptrack.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Path to the SQLite database file
    #[serde(default = "default_database")]
    pub database: PathBuf,

    /// Enforce foreign keys on the connection
    #[serde(default = "default_foreign_keys")]
    pub foreign_keys: bool,
}

fn default_database() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE)
}

fn default_foreign_keys() -> bool {
    true
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            foreign_keys: default_foreign_keys(),
        }
    }
}

impl TrackerConfig {
    /// Load `emptrack.json` from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_file(config_path)
    }

    /// Load an explicitly named config file. Unlike [`TrackerConfig::load`] the
    /// file has to exist.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TrackerError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: TrackerConfig = serde_json::from_str(&content)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply the `EMPTRACK_DB` override, looked up through `lookup`.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(db) = lookup(DATABASE_ENV).filter(|v| !v.is_empty()) {
            self.database = PathBuf::from(db);
        }
        self
    }

    pub fn with_database(mut self, database: Option<PathBuf>) -> Self {
        if let Some(db) = database {
            self.database = db;
        }
        self
    }

    /// Defaults, then the config file, then the environment, then the flag.
    pub fn resolve(
        config_file: Option<&Path>,
        cwd: &Path,
        database_flag: Option<PathBuf>,
    ) -> Result<Self> {
        let config = match config_file {
            Some(path) => Self::load_file(path)?,
            None => Self::load(cwd)?,
        };
        Ok(config
            .with_env(|key| std::env::var(key).ok())
            .with_database(database_flag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::default();
        assert_eq!(config.database, PathBuf::from("employee_tracker.db"));
        assert!(config.foreign_keys);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = TrackerConfig::load(dir.path()).unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_load_partial_config_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{ "database": "staff.db" }"#,
        )
        .unwrap();

        let config = TrackerConfig::load(dir.path()).unwrap();
        assert_eq!(config.database, PathBuf::from("staff.db"));
        assert!(config.foreign_keys);
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = TempDir::new().unwrap();
        let result = TrackerConfig::load_file(dir.path().join("nope.json"));
        assert!(matches!(result, Err(TrackerError::Config(_))));
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ database: ").unwrap();
        assert!(matches!(
            TrackerConfig::load_file(&path),
            Err(TrackerError::Serialization(_))
        ));
    }

    #[test]
    fn test_env_then_flag_precedence() {
        let env = |key: &str| (key == DATABASE_ENV).then(|| "from_env.db".to_string());

        let config = TrackerConfig::default().with_env(env);
        assert_eq!(config.database, PathBuf::from("from_env.db"));

        let config = config.with_database(Some(PathBuf::from("from_flag.db")));
        assert_eq!(config.database, PathBuf::from("from_flag.db"));
    }

    #[test]
    fn test_empty_env_is_ignored() {
        let config = TrackerConfig::default().with_env(|_| Some(String::new()));
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_resolve_prefers_flag_over_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{ "database": "staff.db", "foreign_keys": false }"#,
        )
        .unwrap();

        let config =
            TrackerConfig::resolve(None, dir.path(), Some(PathBuf::from("flag.db"))).unwrap();
        assert_eq!(config.database, PathBuf::from("flag.db"));
        assert!(!config.foreign_keys);
    }
}
