//! Change-detection fingerprint for flight plans.

use std::fmt;

use crate::flight_plan::{normalize_code, FlightPlanSnapshot};

/// Field separator. Not expected in ICAO codes or route strings.
pub const SIGNATURE_SEPARATOR: char = '|';

/// Structural key over the fields whose change warrants a new strip.
///
/// Built from the upper-cased origin and destination and the verbatim route.
/// Altitude, squawk, aircraft type and every other field are deliberately
/// left out: changes there never trigger a reprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(String);

impl Signature {
    /// Compute the signature of three raw fields.
    pub fn new(origin: &str, destination: &str, route: &str) -> Self {
        let origin = normalize_code(origin);
        let destination = normalize_code(destination);
        let mut key = String::with_capacity(origin.len() + destination.len() + route.len() + 2);
        key.push_str(&origin);
        key.push(SIGNATURE_SEPARATOR);
        key.push_str(&destination);
        key.push(SIGNATURE_SEPARATOR);
        key.push_str(route);
        Self(key)
    }

    /// Signature of a snapshot.
    pub fn of(snapshot: &FlightPlanSnapshot) -> Self {
        Self::new(&snapshot.origin, &snapshot.destination, &snapshot.route)
    }

    /// The underlying key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
