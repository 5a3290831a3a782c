//! Classification outcomes and counters.

use std::fmt;

use crate::strip::StripTitle;

/// Why an update was dropped before change detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuppressReason {
    /// No callsign on the update.
    NoCallsign,
    /// Neither origin nor destination is known.
    NoEndpoints,
    /// Origin/destination do not touch the zone under the filter mode.
    OutsideZone,
}

impl fmt::Display for SuppressReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCallsign => write!(f, "no callsign"),
            Self::NoEndpoints => write!(f, "no origin or destination"),
            Self::OutsideZone => write!(f, "outside control zone"),
        }
    }
}

/// Result of classifying one flight plan update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateOutcome {
    /// Dropped; no state touched, nothing printed.
    Suppressed(SuppressReason),
    /// First relevant sighting; a flight strip was dispatched.
    Initial,
    /// Origin, destination or route changed; an amendment was dispatched.
    Amendment,
    /// Already tracked with the same signature; nothing printed.
    NoChange,
}

impl UpdateOutcome {
    /// Strip title to print, if this outcome prints.
    pub fn strip_title(&self) -> Option<StripTitle> {
        match self {
            UpdateOutcome::Initial => Some(StripTitle::FlightStrip),
            UpdateOutcome::Amendment => Some(StripTitle::Amendment),
            UpdateOutcome::Suppressed(_) | UpdateOutcome::NoChange => None,
        }
    }

    /// True for outcomes that dispatch a strip.
    pub fn prints(&self) -> bool {
        self.strip_title().is_some()
    }

    /// True for any suppression.
    pub fn is_suppressed(&self) -> bool {
        matches!(self, UpdateOutcome::Suppressed(_))
    }
}

impl fmt::Display for UpdateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Suppressed(reason) => write!(f, "suppressed ({})", reason),
            Self::Initial => write!(f, "initial"),
            Self::Amendment => write!(f, "amendment"),
            Self::NoChange => write!(f, "no change"),
        }
    }
}

/// Running totals of outcomes for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifierStats {
    pub initial: u64,
    pub amendments: u64,
    pub no_change: u64,
    pub suppressed: u64,
}

impl ClassifierStats {
    /// Count one outcome.
    pub fn record(&mut self, outcome: UpdateOutcome) {
        match outcome {
            UpdateOutcome::Initial => self.initial += 1,
            UpdateOutcome::Amendment => self.amendments += 1,
            UpdateOutcome::NoChange => self.no_change += 1,
            UpdateOutcome::Suppressed(_) => self.suppressed += 1,
        }
    }

    /// Updates seen.
    pub fn total(&self) -> u64 {
        self.initial + self.amendments + self.no_change + self.suppressed
    }

    /// Strips dispatched.
    pub fn printed(&self) -> u64 {
        self.initial + self.amendments
    }
}

impl fmt::Display for ClassifierStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} updates: {} initial strips, {} amendments, {} unchanged, {} suppressed",
            self.total(),
            self.initial,
            self.amendments,
            self.no_change,
            self.suppressed
        )
    }
}
