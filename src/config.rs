//! API key configuration
//!
//! Resolves the OpenWeather API key from the environment, falling back to a
//! TOML config file in the platform config directory. A missing key is not
//! an error here: the query pipeline sends it as-is and surfaces the
//! provider's rejection through the normal error path.

use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable checked first
pub const API_KEY_ENV: &str = "CLIMA_API_KEY";

/// Config file contents
///
/// Example `config.toml`:
/// ```toml
/// api_key = "..."
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    api_key: String,
}

/// Resolves the API key
///
/// Order: `CLIMA_API_KEY` if set and non-blank, then `api_key` from the
/// config file, then the empty string.
pub fn api_key() -> String {
    if let Ok(key) = std::env::var(API_KEY_ENV) {
        let key = key.trim();
        if !key.is_empty() {
            return key.to_string();
        }
    }

    config_file_path()
        .map(|path| load_key_from_file(&path))
        .unwrap_or_default()
}

/// Path to the config file (`~/.config/clima/config.toml` on Linux)
///
/// Returns `None` if the platform config directory cannot be determined.
pub fn config_file_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "clima")?;
    Some(dirs.config_dir().join("config.toml"))
}

/// Reads the key from a config file, degrading to empty on any problem
fn load_key_from_file(path: &Path) -> String {
    let Ok(content) = fs::read_to_string(path) else {
        return String::new();
    };

    toml::from_str::<ConfigFile>(&content)
        .map(|cfg| cfg.api_key)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).expect("Failed to write config file");
        path
    }

    #[test]
    fn test_load_key_from_valid_file() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = write_config(&dir, "api_key = \"abc123\"\n");

        assert_eq!(load_key_from_file(&path), "abc123");
    }

    #[test]
    fn test_load_key_from_missing_file_is_empty() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("config.toml");

        assert_eq!(load_key_from_file(&path), "");
    }

    #[test]
    fn test_load_key_from_malformed_file_is_empty() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = write_config(&dir, "api_key = [broken");

        assert_eq!(load_key_from_file(&path), "");
    }

    #[test]
    fn test_load_key_when_field_absent_is_empty() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = write_config(&dir, "other = \"value\"\n");

        assert_eq!(load_key_from_file(&path), "");
    }

    #[test]
    fn test_config_file_path_mentions_project() {
        if let Some(path) = config_file_path() {
            let path_str = path.to_string_lossy();
            assert!(path_str.contains("clima"));
            assert!(path_str.ends_with("config.toml"));
        }
        // Passes if no platform config dir (e.g., bare CI environment)
    }
}
