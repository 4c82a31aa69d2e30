//! Light/dark mode and its single persisted preference

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::{Error, Result};

/// Key under which the theme preference is stored
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Class applied to `<body>`
    pub fn body_class(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark-mode",
            ThemeMode::Light => "light-mode",
        }
    }

    /// Icon shown on the toggle button
    pub fn icon(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "fas fa-moon",
            ThemeMode::Light => "fas fa-sun",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            other => Err(Error::Preference(format!("unknown theme '{}'", other))),
        }
    }
}

/// String key-value store for user preferences
pub trait PreferenceStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Process-local store; nothing survives a restart
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON object on disk, rewritten on every `set`
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        Ok(())
    }
}

/// Current mode plus the store it is persisted in
pub struct ThemeController {
    mode: ThemeMode,
    store: Box<dyn PreferenceStore>,
}

impl fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController").field("mode", &self.mode).finish_non_exhaustive()
    }
}

impl ThemeController {
    /// Read the saved preference once; unreadable or unknown values fall back to dark
    pub fn load(store: Box<dyn PreferenceStore>) -> Self {
        let mode = match store.get(THEME_KEY) {
            Ok(Some(saved)) => saved.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring saved theme");
                ThemeMode::default()
            }),
            Ok(None) => ThemeMode::default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read theme preference");
                ThemeMode::default()
            }
        };
        Self { mode, store }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip the mode and persist it
    ///
    /// The in-memory mode flips even when the write fails; the error is returned.
    pub fn toggle(&mut self) -> Result<ThemeMode> {
        self.set(self.mode.toggled())
    }

    pub fn set(&mut self, mode: ThemeMode) -> Result<ThemeMode> {
        self.mode = mode;
        tracing::debug!(theme = %mode, "theme changed");
        self.store.set(THEME_KEY, mode.as_str())?;
        Ok(mode)
    }
}
