//! Settings structs for each configuration section.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

use crate::zone::{AerodromeList, FilterMode, ZoneConfig};

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Control zone settings
    pub zone: ZoneSettings,
    /// External printing tool settings
    pub printer: PrinterSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Control zone configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneSettings {
    /// Controlled aerodrome ICAO codes
    pub aerodromes: AerodromeList,
    /// Which end of a flight must be in the zone
    pub filter_mode: FilterMode,
    /// Distinct callsigns tracked before a warning is logged
    pub max_tracked_callsigns: usize,
}

/// Printing tool configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PrinterSettings {
    /// Printing tool, invoked as `<executable> --file <path>`
    pub executable: PathBuf,
    /// Directory for payload files (system temp dir when unset)
    pub temp_dir: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}

impl ConfigFile {
    /// The immutable zone configuration handed to the classifier.
    pub fn zone_config(&self) -> ZoneConfig {
        ZoneConfig::new(self.zone.aerodromes.clone(), self.zone.filter_mode)
    }
}
