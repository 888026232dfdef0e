use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Theme;

/// Errors that can occur when touching the preference file
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Encode error: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// On-disk shape of the preference file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PrefsFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
}

/// Single-slot preference store backed by a small TOML file
///
/// The store fails soft in both directions: a missing, unreadable, or
/// unparseable file reads as "no preference", and a failed write is logged
/// and dropped. Nothing here is ever fatal.
#[derive(Debug, Clone)]
pub struct PrefStore {
    path: PathBuf,
}

impl PrefStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted theme, if any
    pub fn theme(&self) -> Option<Theme> {
        match self.read() {
            Ok(prefs) => prefs.theme.as_deref().and_then(Theme::parse),
            Err(PrefsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Preference read failed ({}), treating as unset", e);
                None
            }
        }
    }

    /// Persist the theme, best effort
    pub fn set_theme(&self, theme: Theme) {
        let mut prefs = self.read().unwrap_or_default();
        prefs.theme = Some(theme.as_str().to_string());

        if let Err(e) = self.write(&prefs) {
            tracing::warn!("Preference write failed ({}), keeping in-memory state", e);
        } else {
            tracing::debug!("Preference stored: theme={}", theme.as_str());
        }
    }

    fn read(&self) -> Result<PrefsFile, PrefsError> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&raw)?)
    }

    fn write(&self, prefs: &PrefsFile) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let raw = toml::to_string(prefs)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
