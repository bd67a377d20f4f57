use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use cryptnote_core::crypto::DEFAULT_KEY_LENGTH;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CryptnoteConfig {
    pub seal: SealSection,
    pub keygen: KeygenSection,
    pub share: ShareSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SealSection {
    pub high_security: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct KeygenSection {
    pub length: usize,
}

impl Default for KeygenSection {
    fn default() -> Self {
        Self {
            length: DEFAULT_KEY_LENGTH,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareSection {
    pub base_url: String,
    pub embed_key: bool,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<CryptnoteConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Load the config at `path`, treating a missing file as all defaults.
pub fn load_config(path: &Path) -> anyhow::Result<CryptnoteConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(CryptnoteConfig::default());
    }
    read_config(path)
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("cryptnote"));
        }
    }
    Ok(home_dir()?.join(".config").join("cryptnote"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: CryptnoteConfig = toml::from_str("").unwrap();
        assert!(!config.seal.high_security);
        assert_eq!(config.keygen.length, 16);
        assert_eq!(config.share.base_url, "");
        assert!(!config.share.embed_key);
    }

    #[test]
    fn test_partial_sections() {
        let config: CryptnoteConfig = toml::from_str(
            "[seal]\nhigh_security = true\n\n[share]\nbase_url = \"https://notes.example\"\n",
        )
        .unwrap();
        assert!(config.seal.high_security);
        assert_eq!(config.keygen.length, 16);
        assert_eq!(config.share.base_url, "https://notes.example");
        assert!(!config.share.embed_key);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.keygen.length, 16);
    }

    #[test]
    fn test_read_invalid_toml_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[keygen\nlength = ").unwrap();

        let err = read_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
        assert!(err.to_string().contains("config.toml"));
    }
}
