// src/config/config_load.rs
//
// loading config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use super::config_types::{LinkConfig, OscConfig, StyleConfig, WindowConfig};
use crate::error::{DisplayError, Result};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub osc: OscConfig,
    pub window: WindowConfig,
    pub style: StyleConfig,
    pub link: LinkConfig,
}

impl Config {
    /// Looks for config.toml next to the executable, then in the working
    /// directory. No file at all means defaults; a file that can't be read or
    /// parsed is an error.
    pub fn load() -> Result<Self> {
        let candidates = [Self::exe_dir_path(), Some(PathBuf::from(CONFIG_FILE))];

        for path in candidates.into_iter().flatten() {
            if path.exists() {
                info!("Loading config from {}", path.display());
                return Self::load_from(&path);
            }
        }

        warn!("No {} found, using defaults", CONFIG_FILE);
        Ok(Self::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| DisplayError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| DisplayError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn link_timeout(&self) -> Duration {
        // negative or NaN would panic in from_secs_f32
        if self.link.timeout_secs.is_finite() && self.link.timeout_secs > 0.0 {
            Duration::from_secs_f32(self.link.timeout_secs)
        } else {
            Duration::from_secs_f32(LinkConfig::default().timeout_secs)
        }
    }

    fn exe_dir_path() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        Some(exe_dir.join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.osc.host, "0.0.0.0");
        assert_eq!(config.osc.port, 9999);
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::parse(
            r#"
            [osc]
            port = 7000

            [style]
            alert_color = [0.0, 0.0, 1.0]
            "#,
        )
        .unwrap();

        assert_eq!(config.osc.host, "0.0.0.0");
        assert_eq!(config.osc.port, 7000);
        assert_eq!(config.style.alert_color, [0.0, 0.0, 1.0]);
        assert_eq!(config.style.base_color, StyleConfig::default().base_color);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_bad_types_are_rejected() {
        assert!(Config::parse("[osc]\nport = \"nine\"").is_err());
        assert!(Config::parse("[osc]\nport = 70000").is_err());
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Config::load_from(Path::new("/definitely/not/here/config.toml")).unwrap_err();
        assert!(matches!(err, DisplayError::ConfigRead { .. }));
    }

    #[test]
    fn test_repo_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(CONFIG_FILE);
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_link_timeout_falls_back() {
        let mut config = Config::default();
        assert_eq!(config.link_timeout(), Duration::from_secs(5));

        config.link.timeout_secs = 0.5;
        assert_eq!(config.link_timeout(), Duration::from_millis(500));

        config.link.timeout_secs = -1.0;
        assert_eq!(config.link_timeout(), Duration::from_secs(5));
    }
}
