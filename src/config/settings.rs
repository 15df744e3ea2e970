//! User settings for Globetrotter
//!
//! Display preferences for the calendar and itinerary views, plus the knobs
//! of the mock authentication provider.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::GlobePaths;
use crate::error::GlobeError;

/// User settings, persisted as JSON in the config directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// First column of the calendar grid (0 = Sunday, 1 = Monday)
    #[serde(default)]
    pub first_day_of_week: u8,

    /// Trips listed inline in a calendar cell before "+N more"
    #[serde(default = "default_calendar_inline_trips")]
    pub calendar_inline_trips: usize,

    /// E-mail address that is granted the admin dashboard
    #[serde(default = "default_admin_email")]
    pub admin_email: String,

    /// Simulated latency of the mock authentication provider
    #[serde(default)]
    pub auth_latency_ms: u64,

    /// Dataset file to load instead of the built-in mock data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_path: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_calendar_inline_trips() -> usize {
    2
}

fn default_admin_email() -> String {
    "admin@globaltrotter.com".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            first_day_of_week: 0,
            calendar_inline_trips: default_calendar_inline_trips(),
            admin_email: default_admin_email(),
            auth_latency_ms: 0,
            dataset_path: None,
        }
    }
}

impl Settings {
    pub fn auth_latency(&self) -> Duration {
        Duration::from_millis(self.auth_latency_ms)
    }

    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &GlobePaths) -> Result<Self, GlobeError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| GlobeError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| GlobeError::Config(format!("Failed to parse settings file: {}", e)))?;

        if settings.first_day_of_week > 1 {
            return Err(GlobeError::Config(format!(
                "first_day_of_week must be 0 (Sunday) or 1 (Monday), got {}",
                settings.first_day_of_week
            )));
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &GlobePaths) -> Result<(), GlobeError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| GlobeError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| GlobeError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.first_day_of_week, 0);
        assert_eq!(settings.calendar_inline_trips, 2);
        assert_eq!(settings.admin_email, "admin@globaltrotter.com");
        assert_eq!(settings.auth_latency(), Duration::ZERO);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GlobePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            calendar_inline_trips: 3,
            currency_symbol: "€".into(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"first_day_of_week": 1}"#).unwrap();
        assert_eq!(settings.first_day_of_week, 1);
        assert_eq!(settings.calendar_inline_trips, 2);
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_rejects_unknown_first_weekday() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GlobePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"first_day_of_week": 4}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, GlobeError::Config(_)));
    }
}
