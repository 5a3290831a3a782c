//! Update classification: the per-callsign state machine.
//!
//! Each callsign is either *unseen* (no entry in the [`SessionStore`]) or
//! *tracked* (entry holding the last printed [`Signature`]). For every update:
//!
//! | Condition                                  | Outcome      | State change          |
//! |--------------------------------------------|--------------|-----------------------|
//! | empty callsign                             | `Suppressed` | none                  |
//! | no origin and no destination               | `Suppressed` | none                  |
//! | outside the zone under the filter mode     | `Suppressed` | none                  |
//! | unseen                                     | `Initial`    | store signature       |
//! | tracked, signature differs                 | `Amendment`  | overwrite signature   |
//! | tracked, signature equal                   | `NoChange`   | none                  |
//!
//! `Initial` prints a `FLIGHT STRIP`, `Amendment` prints an `AMENDMENT`.
//! The state change is committed before the strip is dispatched and is never
//! undone when printing fails.
//!
//! ```
//! use stripprinter::classifier::{FlightPlanHandler, UpdateClassifier, UpdateOutcome};
//! use stripprinter::dispatch::RecordingDispatcher;
//! use stripprinter::flight_plan::FlightPlanSnapshot;
//! use stripprinter::zone::{AerodromeList, FilterMode, ZoneConfig};
//!
//! let zone = ZoneConfig::new(AerodromeList::new(["CYTZ", "CYYZ"]), FilterMode::Both);
//! let mut classifier = UpdateClassifier::new(zone, RecordingDispatcher::new());
//!
//! let fp = FlightPlanSnapshot::new("ACA123", "CYYZ", "KJFK", "A B C");
//! assert_eq!(classifier.handle_update(&fp), UpdateOutcome::Initial);
//! assert_eq!(classifier.handle_update(&fp), UpdateOutcome::NoChange);
//! assert_eq!(classifier.dispatcher().len(), 1);
//! ```

mod outcome;

use std::sync::Arc;

use crate::dispatch::PrintDispatcher;
use crate::flight_plan::FlightPlanSnapshot;
use crate::log::{Logger, NoOpLogger};
use crate::session::{Recorded, SessionStore};
use crate::signature::Signature;
use crate::strip::format_snapshot;
use crate::zone::ZoneConfig;
use crate::{log_debug, log_info, log_trace, log_warn};

pub use outcome::{ClassifierStats, SuppressReason, UpdateOutcome};

/// The capability a flight data host drives: one call per plan update.
pub trait FlightPlanHandler {
    /// React to a "flight plan data updated" event.
    fn handle_update(&mut self, snapshot: &FlightPlanSnapshot) -> UpdateOutcome;
}

/// Classifies updates against the zone and session state, printing strips as needed.
pub struct UpdateClassifier<D: PrintDispatcher> {
    zone: ZoneConfig,
    session: SessionStore,
    dispatcher: D,
    logger: Arc<dyn Logger>,
    stats: ClassifierStats,
}

impl<D: PrintDispatcher> UpdateClassifier<D> {
    /// Create a classifier with an empty session.
    pub fn new(zone: ZoneConfig, dispatcher: D) -> Self {
        Self {
            zone,
            session: SessionStore::new(),
            dispatcher,
            logger: Arc::new(NoOpLogger),
            stats: ClassifierStats::default(),
        }
    }

    /// Use `logger` for classification messages.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Start from `session` instead of an empty store.
    pub fn with_session(mut self, session: SessionStore) -> Self {
        self.session = session;
        self
    }

    /// Run the state machine for one update without printing.
    ///
    /// State is updated exactly as [`FlightPlanHandler::handle_update`] would.
    pub fn classify(&mut self, snapshot: &FlightPlanSnapshot) -> UpdateOutcome {
        let outcome = self.transition(snapshot);
        self.stats.record(outcome);
        outcome
    }

    fn transition(&mut self, snapshot: &FlightPlanSnapshot) -> UpdateOutcome {
        let callsign = snapshot.normalized_callsign();
        if callsign.is_empty() {
            return self.suppress(snapshot, SuppressReason::NoCallsign);
        }
        if snapshot.lacks_endpoints() {
            return self.suppress(snapshot, SuppressReason::NoEndpoints);
        }
        if !self
            .zone
            .is_relevant(&snapshot.origin, &snapshot.destination)
        {
            return self.suppress(snapshot, SuppressReason::OutsideZone);
        }

        match self.session.record(&callsign, Signature::of(snapshot)) {
            Recorded::New => {
                if self.session.just_exceeded_soft_limit() {
                    log_warn!(
                        self.logger,
                        "Tracking more than {} callsigns this session",
                        self.session.soft_limit()
                    );
                }
                UpdateOutcome::Initial
            }
            Recorded::Replaced => UpdateOutcome::Amendment,
            Recorded::Unchanged => {
                log_debug!(self.logger, "{}: no substantive change", callsign);
                UpdateOutcome::NoChange
            }
        }
    }

    fn suppress(&self, snapshot: &FlightPlanSnapshot, reason: SuppressReason) -> UpdateOutcome {
        log_trace!(
            self.logger,
            "'{}' {}-{} suppressed: {}",
            snapshot.callsign,
            snapshot.origin,
            snapshot.destination,
            reason
        );
        UpdateOutcome::Suppressed(reason)
    }

    /// The zone this classifier filters on.
    pub fn zone(&self) -> &ZoneConfig {
        &self.zone
    }

    /// Session state.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// The print dispatcher.
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Outcome counters since creation.
    pub fn stats(&self) -> ClassifierStats {
        self.stats
    }
}

impl<D: PrintDispatcher> FlightPlanHandler for UpdateClassifier<D> {
    fn handle_update(&mut self, snapshot: &FlightPlanSnapshot) -> UpdateOutcome {
        let outcome = self.classify(snapshot);

        if let Some(title) = outcome.strip_title() {
            let callsign = snapshot.normalized_callsign();
            log_info!(
                self.logger,
                "{} for {} ({}-{})",
                title,
                callsign,
                snapshot.normalized_origin(),
                snapshot.normalized_destination()
            );
            self.dispatcher.dispatch(&format_snapshot(title, snapshot));
            if outcome == UpdateOutcome::Initial {
                self.session.mark_initial_printed(&callsign);
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::RecordingDispatcher;
    use crate::log::{LogLevel, MemoryLogger};
    use crate::zone::{AerodromeList, FilterMode};

    fn classifier(mode: FilterMode) -> UpdateClassifier<RecordingDispatcher> {
        let zone = ZoneConfig::new(AerodromeList::new(["CYTZ", "CYYZ"]), mode);
        UpdateClassifier::new(zone, RecordingDispatcher::new())
    }

    #[test]
    fn test_initial_amendment_no_change_sequence() {
        let mut c = classifier(FilterMode::Both);

        let first = FlightPlanSnapshot::new("ACA123", "CYYZ", "KJFK", "A B C");
        assert_eq!(c.handle_update(&first), UpdateOutcome::Initial);

        let amended = FlightPlanSnapshot::new("ACA123", "CYYZ", "KJFK", "A B D");
        assert_eq!(c.handle_update(&amended), UpdateOutcome::Amendment);
        assert_eq!(c.handle_update(&amended), UpdateOutcome::NoChange);

        let payloads = c.dispatcher().payloads();
        assert_eq!(payloads.len(), 2);
        assert!(payloads[0].starts_with("================ FLIGHT STRIP ================\n"));
        assert!(payloads[0].contains("ROUTE: A B C\n"));
        assert!(payloads[1].starts_with("================ AMENDMENT ================\n"));
        assert!(payloads[1].contains("ROUTE: A B D\n"));
    }

    #[test]
    fn test_callsign_case_insensitive() {
        let mut c = classifier(FilterMode::Both);
        c.handle_update(&FlightPlanSnapshot::new("aca123", "CYYZ", "KJFK", "A"));
        assert_eq!(
            c.handle_update(&FlightPlanSnapshot::new("ACA123", "cyyz", "kjfk", "A")),
            UpdateOutcome::NoChange
        );
        assert!(c.session().contains("ACA123"));
        assert!(c.dispatcher().payloads()[0].contains("CS: ACA123 "));
    }

    #[test]
    fn test_outside_zone_suppressed_regardless_of_history() {
        let mut c = classifier(FilterMode::Both);
        c.handle_update(&FlightPlanSnapshot::new("DAL1", "CYYZ", "KBOS", "A"));

        let outcome = c.handle_update(&FlightPlanSnapshot::new("DAL1", "KJFK", "KBOS", "A"));

        assert_eq!(
            outcome,
            UpdateOutcome::Suppressed(SuppressReason::OutsideZone)
        );
        assert_eq!(
            c.session().signature_of("DAL1"),
            Some(&Signature::new("CYYZ", "KBOS", "A"))
        );
        assert_eq!(c.dispatcher().len(), 1);
    }

    #[test]
    fn test_guards() {
        let mut c = classifier(FilterMode::Both);
        assert_eq!(
            c.handle_update(&FlightPlanSnapshot::new("", "CYYZ", "KJFK", "A")),
            UpdateOutcome::Suppressed(SuppressReason::NoCallsign)
        );
        assert_eq!(
            c.handle_update(&FlightPlanSnapshot::new("N123AB", "", "", "A")),
            UpdateOutcome::Suppressed(SuppressReason::NoEndpoints)
        );
        assert!(c.session().is_empty());
        assert!(c.dispatcher().is_empty());
    }

    #[test]
    fn test_filter_mode_applies() {
        let mut c = classifier(FilterMode::Arrivals);
        assert!(c
            .handle_update(&FlightPlanSnapshot::new("ACA1", "CYYZ", "KJFK", ""))
            .is_suppressed());
        assert_eq!(
            c.handle_update(&FlightPlanSnapshot::new("ACA2", "KJFK", "CYTZ", "")),
            UpdateOutcome::Initial
        );
    }

    #[test]
    fn test_non_signature_fields_never_reprint() {
        let mut c = classifier(FilterMode::Both);
        let base = FlightPlanSnapshot::new("ACA123", "CYYZ", "KJFK", "A B C");
        c.handle_update(&base.clone().with_squawk("2301"));

        let outcome = c.handle_update(
            &base
                .with_squawk("7000")
                .with_cruise_altitude(39000)
                .with_aircraft_type("B789"),
        );

        assert_eq!(outcome, UpdateOutcome::NoChange);
        assert_eq!(c.dispatcher().len(), 1);
    }

    #[test]
    fn test_classify_does_not_print_or_mark() {
        let mut c = classifier(FilterMode::Both);
        let fp = FlightPlanSnapshot::new("ACA123", "CYYZ", "KJFK", "A");

        assert_eq!(c.classify(&fp), UpdateOutcome::Initial);

        assert!(c.session().contains("ACA123"));
        assert!(!c.session().has_printed_initial("ACA123"));
        assert!(c.dispatcher().is_empty());
    }

    #[test]
    fn test_initial_print_marked() {
        let mut c = classifier(FilterMode::Both);
        c.handle_update(&FlightPlanSnapshot::new("ACA123", "CYYZ", "KJFK", "A"));
        assert!(c.session().has_printed_initial("ACA123"));
    }

    #[test]
    fn test_stats_follow_outcomes() {
        let mut c = classifier(FilterMode::Both);
        let fp = FlightPlanSnapshot::new("ACA123", "CYYZ", "KJFK", "A");
        c.handle_update(&fp);
        c.handle_update(&fp);
        c.handle_update(&FlightPlanSnapshot::new("ACA123", "CYYZ", "KJFK", "B"));
        c.handle_update(&FlightPlanSnapshot::new("", "", "", ""));

        let stats = c.stats();
        assert_eq!(stats.initial, 1);
        assert_eq!(stats.no_change, 1);
        assert_eq!(stats.amendments, 1);
        assert_eq!(stats.suppressed, 1);
    }

    #[test]
    fn test_soft_limit_warning_logged_once() {
        let logger = Arc::new(MemoryLogger::new());
        let mut c = classifier(FilterMode::Both)
            .with_session(SessionStore::with_soft_limit(1))
            .with_logger(logger.clone());

        for cs in ["A1", "A2", "A3"] {
            c.handle_update(&FlightPlanSnapshot::new(cs, "CYYZ", "KJFK", ""));
        }

        assert_eq!(logger.messages_at(LogLevel::Warn).len(), 1);
        assert_eq!(c.session().len(), 3);
    }

    #[test]
    fn test_prints_are_logged_at_info() {
        let logger = Arc::new(MemoryLogger::new());
        let mut c = classifier(FilterMode::Both).with_logger(logger.clone());

        c.handle_update(&FlightPlanSnapshot::new("aca123", "cyyz", "kjfk", "A"));

        assert!(logger.contains(LogLevel::Info, "FLIGHT STRIP for ACA123 (CYYZ-KJFK)"));
    }
}
