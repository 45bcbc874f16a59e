//! Persisted viewer preferences.
//!
//! Language and theme are process-wide state with a defined lifecycle:
//! read once from a TOML file at construction, mutated only through the
//! setters here, which update memory and persist the full document in one
//! step. A missing or unreadable file yields defaults rather than an error.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
    Uz,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct PrefsDocument {
    language: Language,
    theme: Theme,
}

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("failed to write preferences file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode preferences: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Store for viewer preferences, injected where needed rather than held
/// as an ambient global.
pub struct PrefsStore {
    path: PathBuf,
    current: RwLock<PrefsDocument>,
}

impl PrefsStore {
    /// Read preferences from `path` once. Missing or malformed content
    /// falls back to defaults; the file is only (re)written by a setter.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = read_document(&path);
        Self {
            path,
            current: RwLock::new(current),
        }
    }

    pub fn language(&self) -> Language {
        self.snapshot().language
    }

    pub fn theme(&self) -> Theme {
        self.snapshot().theme
    }

    /// Set the language and persist the full document.
    pub fn set_language(&self, language: Language) -> Result<(), PrefsError> {
        self.update(|doc| doc.language = language)
    }

    /// Set the theme and persist the full document.
    pub fn set_theme(&self, theme: Theme) -> Result<(), PrefsError> {
        self.update(|doc| doc.theme = theme)
    }

    fn snapshot(&self) -> PrefsDocument {
        match self.current.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    fn update(&self, apply: impl FnOnce(&mut PrefsDocument)) -> Result<(), PrefsError> {
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut next = *guard;
        apply(&mut next);

        let encoded = toml::to_string_pretty(&next)?;
        fs::write(&self.path, encoded)?;

        *guard = next;
        Ok(())
    }
}

fn read_document(path: &Path) -> PrefsDocument {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return PrefsDocument::default(),
    };
    match toml::from_str(&raw) {
        Ok(doc) => doc,
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "preferences file could not be parsed; using defaults"
            );
            PrefsDocument::default()
        }
    }
}
