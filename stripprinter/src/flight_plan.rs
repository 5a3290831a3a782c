//! Flight plan snapshots delivered by the feed.

use serde::{Deserialize, Deserializer};

/// One "flight plan data updated" event.
///
/// Every field may be empty: VFR or not-yet-filed flights routinely lack an
/// origin, destination or route, and some feeds deliver updates before the
/// callsign is assigned. Only `origin`, `destination` and `route` take part in
/// change detection; the remaining fields are carried for display and never
/// cause a reprint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FlightPlanSnapshot {
    /// Callsign as sent by the feed (any case).
    #[serde(deserialize_with = "null_as_empty")]
    pub callsign: String,
    /// Departure ICAO code.
    #[serde(deserialize_with = "null_as_empty")]
    pub origin: String,
    /// Arrival ICAO code.
    #[serde(deserialize_with = "null_as_empty")]
    pub destination: String,
    /// Free-form route string, kept verbatim.
    #[serde(deserialize_with = "null_as_empty")]
    pub route: String,
    /// ICAO aircraft type designator.
    #[serde(deserialize_with = "null_as_empty")]
    pub aircraft_type: String,
    /// Assigned transponder code.
    #[serde(deserialize_with = "null_as_empty")]
    pub squawk: String,
    /// Filed cruise altitude in feet, if any.
    pub cruise_altitude: Option<u32>,
}

impl FlightPlanSnapshot {
    /// Create a snapshot with the fields that drive classification.
    pub fn new(callsign: &str, origin: &str, destination: &str, route: &str) -> Self {
        Self {
            callsign: callsign.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            route: route.to_string(),
            ..Self::default()
        }
    }

    /// Set the aircraft type.
    pub fn with_aircraft_type(mut self, aircraft_type: &str) -> Self {
        self.aircraft_type = aircraft_type.to_string();
        self
    }

    /// Set the squawk code.
    pub fn with_squawk(mut self, squawk: &str) -> Self {
        self.squawk = squawk.to_string();
        self
    }

    /// Set the cruise altitude.
    pub fn with_cruise_altitude(mut self, feet: u32) -> Self {
        self.cruise_altitude = Some(feet);
        self
    }

    /// Upper-cased callsign; the session store key.
    pub fn normalized_callsign(&self) -> String {
        self.callsign.to_uppercase()
    }

    /// Upper-cased origin code.
    pub fn normalized_origin(&self) -> String {
        normalize_code(&self.origin)
    }

    /// Upper-cased destination code.
    pub fn normalized_destination(&self) -> String {
        normalize_code(&self.destination)
    }

    /// True when neither an origin nor a destination is known.
    pub fn lacks_endpoints(&self) -> bool {
        self.normalized_origin().is_empty() && self.normalized_destination().is_empty()
    }
}

/// Feeds send `null` for fields that were never filed.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Normalize an aerodrome code for comparison.
pub(crate) fn normalize_code(code: &str) -> String {
    code.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_upper_cases() {
        let fp = FlightPlanSnapshot::new("aca123", "cyyz", "kJfK", "a b c");
        assert_eq!(fp.normalized_callsign(), "ACA123");
        assert_eq!(fp.normalized_origin(), "CYYZ");
        assert_eq!(fp.normalized_destination(), "KJFK");
        assert_eq!(fp.route, "a b c");
    }

    #[test]
    fn test_lacks_endpoints() {
        assert!(FlightPlanSnapshot::new("ACA1", "", "", "DCT").lacks_endpoints());
        assert!(!FlightPlanSnapshot::new("ACA1", "CYYZ", "", "").lacks_endpoints());
        assert!(!FlightPlanSnapshot::new("ACA1", "", "CYYZ", "").lacks_endpoints());
    }

    #[test]
    fn test_deserialize_tolerates_missing_and_unknown_fields() {
        let fp: FlightPlanSnapshot =
            serde_json::from_str(r#"{"callsign":"WJA456","destination":"CYTZ","rules":"V"}"#)
                .unwrap();
        assert_eq!(fp.callsign, "WJA456");
        assert_eq!(fp.origin, "");
        assert_eq!(fp.destination, "CYTZ");
        assert_eq!(fp.route, "");
        assert_eq!(fp.cruise_altitude, None);
    }

    #[test]
    fn test_deserialize_null_fields_as_empty() {
        let fp: FlightPlanSnapshot =
            serde_json::from_str(r#"{"callsign":"N123AB","origin":null,"route":null}"#).unwrap();
        assert_eq!(fp.origin, "");
        assert_eq!(fp.route, "");
    }

    #[test]
    fn test_builders_set_display_fields() {
        let fp = FlightPlanSnapshot::new("ACA123", "CYYZ", "KJFK", "A B C")
            .with_aircraft_type("A320")
            .with_squawk("2301")
            .with_cruise_altitude(35000);
        assert_eq!(fp.aircraft_type, "A320");
        assert_eq!(fp.squawk, "2301");
        assert_eq!(fp.cruise_altitude, Some(35000));
    }
}
