//! Per-callsign session state.

use std::collections::{HashMap, HashSet};

use crate::signature::Signature;

/// Default soft ceiling on distinct callsigns tracked in one session.
///
/// A controller shift rarely sees more than a few hundred flights; crossing
/// this means the store is being fed from a long-running source.
pub const DEFAULT_MAX_TRACKED_CALLSIGNS: usize = 5_000;

/// Last-known signature for every callsign printed this session.
///
/// Keys are upper-cased callsigns. Entries are created on the first relevant
/// sighting, replaced on amendment, and never removed; the store lives for
/// one controller session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    last_signature: HashMap<String, Signature>,
    printed_initial: HashSet<String>,
    soft_limit: usize,
}

/// What the store did with a recorded signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recorded {
    /// First sighting; a new entry was created.
    New,
    /// Existing entry replaced with a different signature.
    Replaced,
    /// Existing entry already held this signature; nothing changed.
    Unchanged,
}

impl SessionStore {
    /// Create an empty store with the default soft ceiling.
    pub fn new() -> Self {
        Self::with_soft_limit(DEFAULT_MAX_TRACKED_CALLSIGNS)
    }

    /// Create an empty store that reports when `soft_limit` callsigns are exceeded.
    pub fn with_soft_limit(soft_limit: usize) -> Self {
        Self {
            last_signature: HashMap::new(),
            printed_initial: HashSet::new(),
            soft_limit,
        }
    }

    /// Compare `signature` with the stored one and update in place.
    pub fn record(&mut self, callsign: &str, signature: Signature) -> Recorded {
        match self.last_signature.get_mut(callsign) {
            None => {
                self.last_signature.insert(callsign.to_string(), signature);
                Recorded::New
            }
            Some(stored) if *stored != signature => {
                *stored = signature;
                Recorded::Replaced
            }
            Some(_) => Recorded::Unchanged,
        }
    }

    /// Note that the initial strip for `callsign` has been handed to the printer.
    pub fn mark_initial_printed(&mut self, callsign: &str) {
        self.printed_initial.insert(callsign.to_string());
    }

    /// Has an initial strip been issued for `callsign`?
    pub fn has_printed_initial(&self, callsign: &str) -> bool {
        self.printed_initial.contains(callsign)
    }

    /// Is `callsign` tracked?
    pub fn contains(&self, callsign: &str) -> bool {
        self.last_signature.contains_key(callsign)
    }

    /// Stored signature for `callsign`.
    pub fn signature_of(&self, callsign: &str) -> Option<&Signature> {
        self.last_signature.get(callsign)
    }

    /// Number of tracked callsigns.
    pub fn len(&self) -> usize {
        self.last_signature.len()
    }

    /// True when no callsign is tracked.
    pub fn is_empty(&self) -> bool {
        self.last_signature.is_empty()
    }

    /// Configured soft ceiling.
    pub fn soft_limit(&self) -> usize {
        self.soft_limit
    }

    /// True exactly when the latest insertion took the store past its ceiling.
    pub fn just_exceeded_soft_limit(&self) -> bool {
        self.soft_limit.checked_add(1) == Some(self.len())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(route: &str) -> Signature {
        Signature::new("CYYZ", "KJFK", route)
    }

    #[test]
    fn test_record_transitions() {
        let mut store = SessionStore::new();
        assert_eq!(store.record("ACA123", sig("A B C")), Recorded::New);
        assert_eq!(store.record("ACA123", sig("A B C")), Recorded::Unchanged);
        assert_eq!(store.record("ACA123", sig("A B D")), Recorded::Replaced);
        assert_eq!(store.signature_of("ACA123"), Some(&sig("A B D")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_initial_bookkeeping_is_separate() {
        let mut store = SessionStore::new();
        store.record("WJA456", sig("DCT"));
        assert!(store.contains("WJA456"));
        assert!(!store.has_printed_initial("WJA456"));

        store.mark_initial_printed("WJA456");
        assert!(store.has_printed_initial("WJA456"));
    }

    #[test]
    fn test_soft_limit_crossing_reported_once() {
        let mut store = SessionStore::with_soft_limit(2);
        store.record("A1", sig("x"));
        store.record("A2", sig("x"));
        assert!(!store.just_exceeded_soft_limit());

        store.record("A3", sig("x"));
        assert!(store.just_exceeded_soft_limit());

        store.record("A4", sig("x"));
        assert!(!store.just_exceeded_soft_limit());
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_unbounded_soft_limit_never_reports() {
        let mut store = SessionStore::with_soft_limit(usize::MAX);
        store.record("A1", sig("x"));
        assert!(!store.just_exceeded_soft_limit());
    }

    #[test]
    fn test_default_is_empty() {
        let store = SessionStore::default();
        assert!(store.is_empty());
        assert_eq!(store.soft_limit(), DEFAULT_MAX_TRACKED_CALLSIGNS);
    }
}
