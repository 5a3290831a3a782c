//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let temp_dir = config
        .printer
        .temp_dir
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();

    format!(
        r#"[zone]
; Controlled aerodromes (ICAO codes, comma separated)
aerodromes = {}
; Which end of a flight must be in the zone:
;   departures - origin is a controlled aerodrome
;   arrivals   - destination is a controlled aerodrome
;   both       - either end (default)
filter_mode = {}
; Distinct callsigns tracked in one session before a warning is logged (default: 5000)
; Tracking continues past this limit
max_tracked_callsigns = {}

[printer]
; Printing tool, invoked as: <executable> --file <payload file>
executable = {}
; Directory for payload files (ESFP*.tmp)
; If empty, uses the system temporary directory
temp_dir = {}

[logging]
; Log file path, cleared at the start of each session
file = {}
"#,
        config.zone.aerodromes,
        config.zone.filter_mode,
        config.zone.max_tracked_callsigns,
        path_to_string(&config.printer.executable),
        temp_dir,
        path_to_string(&config.logging.file),
    )
}

/// Convert path to string, using ~ for the home directory.
pub(super) fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
