//! Path management for Globetrotter
//!
//! ## Path Resolution Order
//!
//! 1. `GLOBETROTTER_HOME` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/globetrotter` or `~/.config/globetrotter`
//! 3. Windows: `%APPDATA%\globetrotter`

use std::path::{Path, PathBuf};

use crate::error::GlobeError;

/// Manages the paths used by Globetrotter
#[derive(Debug, Clone)]
pub struct GlobePaths {
    base_dir: PathBuf,
}

impl GlobePaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, GlobeError> {
        let base_dir = match std::env::var("GLOBETROTTER_HOME") {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default location of a user-supplied dataset
    pub fn dataset_file(&self) -> PathBuf {
        self.base_dir.join("dataset.json")
    }

    /// Create the base directory if it does not exist yet
    pub fn ensure_directories(&self) -> Result<(), GlobeError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| GlobeError::Io(format!("Failed to create config directory: {}", e)))
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, GlobeError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Ok(PathBuf::from(xdg).join("globetrotter"));
        }
    }
    let home = std::env::var("HOME")
        .map_err(|_| GlobeError::Config("HOME environment variable not set".into()))?;
    Ok(PathBuf::from(home).join(".config").join("globetrotter"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, GlobeError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| GlobeError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("globetrotter"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GlobePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.dataset_file(), temp_dir.path().join("dataset.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("globetrotter");
        let paths = GlobePaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.is_dir());
    }
}
