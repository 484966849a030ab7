use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

const APP_DIR: &str = "owx";
const PREFS_FILE: &str = "prefs.json";

/// The last search, kept between runs.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub city_name: Option<String>,
    pub state_code: Option<String>,
    pub country_code: Option<String>,
}

impl Preferences {
    /// Reads preferences from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no saved preferences");
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Platform config directory for owx (`$XDG_CONFIG_HOME/owx` on Linux).
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

pub fn prefs_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(PREFS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFS_FILE);
        assert_eq!(Preferences::load(&path).unwrap(), Preferences::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(APP_DIR).join(PREFS_FILE);
        let prefs = Preferences {
            city_name: Some("Madison".to_string()),
            state_code: Some("WI".to_string()),
            country_code: None,
        };
        prefs.save(&path).unwrap();
        assert_eq!(Preferences::load(&path).unwrap(), prefs);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFS_FILE);
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Preferences::load(&path),
            Err(crate::error::Error::Json(_))
        ));
    }

    #[test]
    fn test_config_dir_is_absolute() {
        std::env::set_var("XDG_CONFIG_HOME", "relative/cfg");
        if let Some(dir) = config_dir() {
            assert!(dir.is_absolute());
            assert!(dir.ends_with(APP_DIR));
        }
        if let Some(path) = prefs_path() {
            assert!(path.is_absolute());
            assert!(path.ends_with(Path::new(APP_DIR).join(PREFS_FILE)));
        }
    }
}
