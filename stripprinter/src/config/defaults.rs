//! Default values for all configuration settings.

use std::path::PathBuf;

use super::file::config_directory;
use super::settings::*;
use crate::dispatch::DEFAULT_PRINTER_EXECUTABLE;
use crate::session::DEFAULT_MAX_TRACKED_CALLSIGNS;
use crate::zone::{AerodromeList, FilterMode};

/// Aerodromes controlled when none are configured (Toronto area).
pub const DEFAULT_AERODROMES: [&str; 4] = ["CYTZ", "CYYZ", "CYXU", "CYKF"];

/// Default filter mode.
pub const DEFAULT_FILTER_MODE: FilterMode = FilterMode::Both;

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "stripprinter.log";

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            zone: ZoneSettings::default(),
            printer: PrinterSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for ZoneSettings {
    fn default() -> Self {
        Self {
            aerodromes: AerodromeList::new(DEFAULT_AERODROMES),
            filter_mode: DEFAULT_FILTER_MODE,
            max_tracked_callsigns: DEFAULT_MAX_TRACKED_CALLSIGNS,
        }
    }
}

impl Default for PrinterSettings {
    fn default() -> Self {
        Self {
            executable: PathBuf::from(DEFAULT_PRINTER_EXECUTABLE),
            temp_dir: None,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: config_directory().join(DEFAULT_LOG_FILE_NAME),
        }
    }
}
