//! Relevance filter.

use std::fmt;
use std::str::FromStr;

use super::AerodromeList;
use crate::flight_plan::normalize_code;

/// Which end of a flight must touch the zone for it to be printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Origin must be a controlled aerodrome.
    Departures,
    /// Destination must be a controlled aerodrome.
    Arrivals,
    /// Either end may be a controlled aerodrome.
    #[default]
    Both,
}

impl FilterMode {
    /// Config-file spelling of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::Departures => "departures",
            FilterMode::Arrivals => "arrivals",
            FilterMode::Both => "both",
        }
    }

    /// All modes, in config documentation order.
    pub fn all() -> [FilterMode; 3] {
        [FilterMode::Departures, FilterMode::Arrivals, FilterMode::Both]
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unrecognised filter mode string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter mode '{0}' (expected departures, arrivals or both)")]
pub struct ParseFilterModeError(pub String);

impl FromStr for FilterMode {
    type Err = ParseFilterModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "departures" => Ok(FilterMode::Departures),
            "arrivals" => Ok(FilterMode::Arrivals),
            "both" => Ok(FilterMode::Both),
            _ => Err(ParseFilterModeError(s.to_string())),
        }
    }
}

/// Does a flight from `origin` to `destination` belong to the zone?
///
/// Codes are compared case-insensitively. Empty codes never match. Callers
/// reject updates with neither an origin nor a destination before asking.
pub fn is_relevant(
    origin: &str,
    destination: &str,
    mode: FilterMode,
    aerodromes: &AerodromeList,
) -> bool {
    let departs_zone = aerodromes.contains(&normalize_code(origin));
    let arrives_zone = aerodromes.contains(&normalize_code(destination));

    match mode {
        FilterMode::Departures => departs_zone,
        FilterMode::Arrivals => arrives_zone,
        FilterMode::Both => departs_zone || arrives_zone,
    }
}
