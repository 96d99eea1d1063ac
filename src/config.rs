use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PantryConfig {
    pub database: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("pantry.toml")
}

pub fn default_database_path_in(base: &Path) -> PathBuf {
    base.join(".pantry").join("pantry.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<PantryConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: PantryConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &PantryConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Resolve the database path: CLI flag wins, then the config file, then
/// the default location under the current directory.
pub fn resolve_database_path(
    flag: Option<PathBuf>,
    config: Option<&PantryConfig>,
) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    if let Some(db) = config.and_then(|c| c.database.as_deref()) {
        return PathBuf::from(db);
    }
    default_database_path_in(Path::new("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pantry.toml");

        let loaded = load_config(Some(&path)).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_write_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pantry.toml");

        let config = PantryConfig {
            database: Some("data/pantry.db".to_string()),
        };
        write_config(&path, &config, false).unwrap();

        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded.database.as_deref(), Some("data/pantry.db"));
    }

    #[test]
    fn test_write_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pantry.toml");

        write_config(&path, &PantryConfig::default(), false).unwrap();
        assert!(write_config(&path, &PantryConfig::default(), false).is_err());
        assert!(write_config(&path, &PantryConfig::default(), true).is_ok());
    }

    #[test]
    fn test_resolve_precedence() {
        let config = PantryConfig {
            database: Some("from-config.db".to_string()),
        };

        let flag = resolve_database_path(Some(PathBuf::from("from-flag.db")), Some(&config));
        assert_eq!(flag, PathBuf::from("from-flag.db"));

        let from_config = resolve_database_path(None, Some(&config));
        assert_eq!(from_config, PathBuf::from("from-config.db"));

        let fallback = resolve_database_path(None, None);
        assert_eq!(fallback, default_database_path_in(Path::new(".")));
    }
}
