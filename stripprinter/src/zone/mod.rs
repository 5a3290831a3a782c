//! Control zone definition and relevance filtering.
//!
//! A [`ZoneConfig`] is built once at startup from the config file and handed
//! to the classifier. It never changes for the lifetime of the session.
//!
//! ```
//! use stripprinter::zone::{AerodromeList, FilterMode, ZoneConfig};
//!
//! let zone = ZoneConfig::new(AerodromeList::new(["cytz", "cyyz"]), FilterMode::Departures);
//! assert!(zone.is_relevant("CYYZ", "KJFK"));
//! assert!(!zone.is_relevant("KJFK", "CYYZ"));
//! ```

mod aerodromes;
mod filter;

pub use aerodromes::AerodromeList;
pub use filter::{is_relevant, FilterMode, ParseFilterModeError};

/// Immutable zone configuration: which aerodromes, and which end must match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneConfig {
    aerodromes: AerodromeList,
    mode: FilterMode,
}

impl ZoneConfig {
    /// Create a zone configuration.
    pub fn new(aerodromes: AerodromeList, mode: FilterMode) -> Self {
        Self { aerodromes, mode }
    }

    /// The controlled aerodromes.
    pub fn aerodromes(&self) -> &AerodromeList {
        &self.aerodromes
    }

    /// The filter mode.
    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Relevance of a flight under this zone's aerodromes and mode.
    pub fn is_relevant(&self, origin: &str, destination: &str) -> bool {
        is_relevant(origin, destination, self.mode, &self.aerodromes)
    }
}
