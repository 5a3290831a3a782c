//! Configuration key access and validation.
//!
//! This module provides a type-safe interface for getting and setting
//! configuration values by key name. Values are validated with the same
//! parsers used when reading `config.ini`.

use std::str::FromStr;
use thiserror::Error;

use super::parser::{
    parse_aerodromes, parse_filter_mode, parse_optional_path, parse_path, parse_positive_count,
};
use super::settings::ConfigFile;
use super::writer::path_to_string;

/// Errors that can occur when getting or setting configuration values.
#[derive(Debug, Error)]
pub enum ConfigKeyError {
    /// Unknown configuration key.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    /// Validation failed for the value.
    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
///
/// Each key maps to a specific field in [`ConfigFile`] and knows how to
/// get and set its value with proper validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    // Zone settings
    ZoneAerodromes,
    ZoneFilterMode,
    ZoneMaxTrackedCallsigns,

    // Printer settings
    PrinterExecutable,
    PrinterTempDir,

    // Logging settings
    LoggingFile,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|key| key.name() == lower)
            .ok_or_else(|| ConfigKeyError::UnknownKey(s.to_string()))
    }
}

impl ConfigKey {
    /// Get the canonical key name (e.g., "zone.filter_mode").
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::ZoneAerodromes => "zone.aerodromes",
            ConfigKey::ZoneFilterMode => "zone.filter_mode",
            ConfigKey::ZoneMaxTrackedCallsigns => "zone.max_tracked_callsigns",
            ConfigKey::PrinterExecutable => "printer.executable",
            ConfigKey::PrinterTempDir => "printer.temp_dir",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    /// Get the INI section name (e.g., "zone").
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or_default()
    }

    /// Get the key name within the section (e.g., "filter_mode").
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or_default()
    }

    /// Get the current value as it would appear in config.ini.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::ZoneAerodromes => config.zone.aerodromes.to_string(),
            ConfigKey::ZoneFilterMode => config.zone.filter_mode.to_string(),
            ConfigKey::ZoneMaxTrackedCallsigns => config.zone.max_tracked_callsigns.to_string(),
            ConfigKey::PrinterExecutable => path_to_string(&config.printer.executable),
            ConfigKey::PrinterTempDir => config
                .printer
                .temp_dir
                .as_deref()
                .map(path_to_string)
                .unwrap_or_default(),
            ConfigKey::LoggingFile => path_to_string(&config.logging.file),
        }
    }

    /// Set a value on the config.
    ///
    /// The config is left untouched if the value is invalid.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        let invalid = |reason: String| ConfigKeyError::ValidationFailed {
            key: self.name().to_string(),
            reason,
        };

        match self {
            ConfigKey::ZoneAerodromes => {
                config.zone.aerodromes = parse_aerodromes(value).map_err(invalid)?;
            }
            ConfigKey::ZoneFilterMode => {
                config.zone.filter_mode = parse_filter_mode(value).map_err(invalid)?;
            }
            ConfigKey::ZoneMaxTrackedCallsigns => {
                config.zone.max_tracked_callsigns = parse_positive_count(value).map_err(invalid)?;
            }
            ConfigKey::PrinterExecutable => {
                config.printer.executable = parse_path(value).map_err(invalid)?;
            }
            ConfigKey::PrinterTempDir => {
                config.printer.temp_dir = parse_optional_path(value).map_err(invalid)?;
            }
            ConfigKey::LoggingFile => {
                config.logging.file = parse_path(value).map_err(invalid)?;
            }
        }
        Ok(())
    }

    /// Validate a value without applying it.
    pub fn validate(&self, value: &str) -> Result<(), ConfigKeyError> {
        self.set(&mut ConfigFile::default(), value)
    }

    /// Get all supported configuration keys.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::ZoneAerodromes,
            ConfigKey::ZoneFilterMode,
            ConfigKey::ZoneMaxTrackedCallsigns,
            ConfigKey::PrinterExecutable,
            ConfigKey::PrinterTempDir,
            ConfigKey::LoggingFile,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::FilterMode;
    use std::path::PathBuf;

    #[test]
    fn test_config_key_parsing() {
        assert_eq!(
            "zone.aerodromes".parse::<ConfigKey>().unwrap(),
            ConfigKey::ZoneAerodromes
        );
        assert_eq!(
            "PRINTER.Temp_Dir".parse::<ConfigKey>().unwrap(),
            ConfigKey::PrinterTempDir
        );
        assert!(matches!(
            "zone.radius".parse::<ConfigKey>(),
            Err(ConfigKeyError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_key_name_parts() {
        let key = ConfigKey::ZoneMaxTrackedCallsigns;
        assert_eq!(key.section(), "zone");
        assert_eq!(key.key_name(), "max_tracked_callsigns");
    }

    #[test]
    fn test_get_value() {
        let config = ConfigFile::default();
        assert_eq!(ConfigKey::ZoneFilterMode.get(&config), "both");
        assert_eq!(ConfigKey::PrinterExecutable.get(&config), "StripPrinter.exe");
        assert_eq!(ConfigKey::PrinterTempDir.get(&config), "");
    }

    #[test]
    fn test_set_value() {
        let mut config = ConfigFile::default();

        ConfigKey::ZoneFilterMode
            .set(&mut config, "DEPARTURES")
            .unwrap();
        ConfigKey::ZoneAerodromes
            .set(&mut config, "cytz,cyyz")
            .unwrap();
        ConfigKey::PrinterTempDir
            .set(&mut config, "/var/tmp")
            .unwrap();

        assert_eq!(config.zone.filter_mode, FilterMode::Departures);
        assert_eq!(ConfigKey::ZoneAerodromes.get(&config), "CYTZ, CYYZ");
        assert_eq!(config.printer.temp_dir, Some(PathBuf::from("/var/tmp")));
    }

    #[test]
    fn test_set_invalid_value_fails_and_keeps_config() {
        let mut config = ConfigFile::default();

        let err = ConfigKey::ZoneFilterMode
            .set(&mut config, "sideways")
            .unwrap_err();

        assert!(matches!(err, ConfigKeyError::ValidationFailed { .. }));
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_validate() {
        assert!(ConfigKey::ZoneMaxTrackedCallsigns.validate("100").is_ok());
        assert!(ConfigKey::ZoneMaxTrackedCallsigns.validate("0").is_err());
        assert!(ConfigKey::ZoneAerodromes.validate("").is_err());
        assert!(ConfigKey::PrinterExecutable.validate("  ").is_err());
        assert!(ConfigKey::PrinterTempDir.validate("").is_ok());
    }

    #[test]
    fn test_clear_optional_value() {
        let mut config = ConfigFile::default();
        ConfigKey::PrinterTempDir.set(&mut config, "/tmp/strips").unwrap();
        ConfigKey::PrinterTempDir.set(&mut config, "").unwrap();
        assert!(config.printer.temp_dir.is_none());
    }

    #[test]
    fn test_all_keys_round_trip_names() {
        for key in ConfigKey::all() {
            assert_eq!(key.name().parse::<ConfigKey>().unwrap(), *key);
        }
    }
}
