//! User configuration (`~/.stripprinter/config.ini`).
//!
//! The file is read once at startup. Its `[zone]` section becomes the
//! immutable [`ZoneConfig`](crate::zone::ZoneConfig) the classifier filters on.
//!
//! # Example
//!
//! ```
//! use stripprinter::config::{ConfigFile, ConfigKey};
//! use stripprinter::zone::FilterMode;
//!
//! let mut config = ConfigFile::default();
//! ConfigKey::ZoneFilterMode.set(&mut config, "arrivals").unwrap();
//!
//! let zone = config.zone_config();
//! assert_eq!(zone.mode(), FilterMode::Arrivals);
//! assert!(zone.is_relevant("KJFK", "CYTZ"));
//! ```

mod defaults;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use defaults::{DEFAULT_AERODROMES, DEFAULT_FILTER_MODE, DEFAULT_LOG_FILE_NAME};
pub use file::{config_directory, config_file_path, ConfigFileError, CONFIG_DIR_NAME};
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::{ConfigFile, LoggingSettings, PrinterSettings, ZoneSettings};
