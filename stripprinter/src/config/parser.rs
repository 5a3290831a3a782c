//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and the value parsers it
//! shares with [`super::keys`]. It is the single place where INI key names
//! are mapped to struct fields.

use ini::{Ini, Properties};
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::zone::{AerodromeList, FilterMode};

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [zone] section
    if let Some(section) = ini.section(Some("zone")) {
        if let Some(v) = get(section, "zone", "aerodromes", parse_aerodromes)? {
            config.zone.aerodromes = v;
        }
        if let Some(v) = get(section, "zone", "filter_mode", parse_filter_mode)? {
            config.zone.filter_mode = v;
        }
        if let Some(v) = get(section, "zone", "max_tracked_callsigns", parse_positive_count)? {
            config.zone.max_tracked_callsigns = v;
        }
    }

    // [printer] section
    if let Some(section) = ini.section(Some("printer")) {
        if let Some(v) = get(section, "printer", "executable", parse_path)? {
            config.printer.executable = v;
        }
        if let Some(v) = get(section, "printer", "temp_dir", parse_optional_path)? {
            config.printer.temp_dir = v;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = get(section, "logging", "file", parse_path)? {
            config.logging.file = v;
        }
    }

    Ok(config)
}

/// Look up `key` and run it through `parse`, mapping failures to `InvalidValue`.
fn get<T>(
    section: &Properties,
    section_name: &str,
    key: &str,
    parse: fn(&str) -> Result<T, String>,
) -> Result<Option<T>, ConfigFileError> {
    section
        .get(key)
        .map(|v| {
            parse(v).map_err(|reason| ConfigFileError::InvalidValue {
                section: section_name.to_string(),
                key: key.to_string(),
                value: v.to_string(),
                reason,
            })
        })
        .transpose()
}

/// Comma-separated ICAO codes; at least one, letters and digits only.
pub(super) fn parse_aerodromes(value: &str) -> Result<AerodromeList, String> {
    let codes: Vec<&str> = value
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .collect();

    if let Some(bad) = codes
        .iter()
        .find(|code| !code.chars().all(|c| c.is_ascii_alphanumeric()))
    {
        return Err(format!(
            "'{}' is not an aerodrome code (letters and digits only)",
            bad
        ));
    }
    if codes.is_empty() {
        return Err("at least one aerodrome code is required".to_string());
    }

    Ok(AerodromeList::new(codes))
}

pub(super) fn parse_filter_mode(value: &str) -> Result<FilterMode, String> {
    value.parse().map_err(|e: crate::zone::ParseFilterModeError| e.to_string())
}

pub(super) fn parse_positive_count(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err("must be a positive integer".to_string()),
    }
}

/// Required path; `~/` is expanded.
pub(super) fn parse_path(value: &str) -> Result<PathBuf, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("path cannot be empty".to_string());
    }
    Ok(expand_tilde(value))
}

/// Optional path; empty clears it.
pub(super) fn parse_optional_path(value: &str) -> Result<Option<PathBuf>, String> {
    let value = value.trim();
    if value.is_empty() {
        Ok(None)
    } else {
        Ok(Some(expand_tilde(value)))
    }
}

/// Expand tilde (~) in paths to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
