//! Strip payload formatting.
//!
//! A strip is plain UTF-8 text, four lines, meant to be printed as-is in a
//! monospace font:
//!
//! ```text
//! ================ FLIGHT STRIP ================
//! CS: ACA123   DEP: CYYZ   ARR: KJFK
//! ROUTE: DCT YCF J576 YRI
//! ==============================================
//! ```

mod source;
mod templates;

use std::fmt;

use crate::flight_plan::{normalize_code, FlightPlanSnapshot};

pub use source::{PayloadError, PayloadSource};
pub use templates::test_strip;

/// Closing banner, independent of the title width.
pub const CLOSING_BANNER: &str = "==============================================";

/// Heading printed at the top of a strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripTitle {
    /// First relevant sighting of a callsign.
    FlightStrip,
    /// Route, origin or destination changed since the last strip.
    Amendment,
}

impl StripTitle {
    /// Banner text.
    pub fn as_str(&self) -> &'static str {
        match self {
            StripTitle::FlightStrip => "FLIGHT STRIP",
            StripTitle::Amendment => "AMENDMENT",
        }
    }
}

impl fmt::Display for StripTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a strip.
///
/// Origin and destination are upper-cased; callsign and route are printed as
/// given. Empty fields render as empty text.
pub fn format_payload(
    title: &str,
    callsign: &str,
    origin: &str,
    destination: &str,
    route: &str,
) -> String {
    format!(
        "================ {title} ================\n\
         CS: {callsign}   DEP: {dep}   ARR: {arr}\n\
         ROUTE: {route}\n\
         {CLOSING_BANNER}\n",
        dep = normalize_code(origin),
        arr = normalize_code(destination),
    )
}

/// Render a strip for a snapshot, using its upper-cased callsign.
pub fn format_snapshot(title: StripTitle, snapshot: &FlightPlanSnapshot) -> String {
    format_payload(
        title.as_str(),
        &snapshot.normalized_callsign(),
        &snapshot.origin,
        &snapshot.destination,
        &snapshot.route,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_layout() {
        let payload = format_payload("FLIGHT STRIP", "ACA123", "cyyz", "kjfk", "A B C");
        assert_eq!(
            payload,
            "================ FLIGHT STRIP ================\n\
             CS: ACA123   DEP: CYYZ   ARR: KJFK\n\
             ROUTE: A B C\n\
             ==============================================\n"
        );
    }

    #[test]
    fn test_empty_fields_render_empty() {
        let payload = format_payload("AMENDMENT", "N123AB", "", "", "");
        let lines: Vec<&str> = payload.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "================ AMENDMENT ================");
        assert_eq!(lines[1], "CS: N123AB   DEP:    ARR: ");
        assert_eq!(lines[2], "ROUTE: ");
        assert_eq!(lines[3], CLOSING_BANNER);
    }

    #[test]
    fn test_route_kept_verbatim() {
        let payload = format_payload("AMENDMENT", "X", "A", "B", "dct yyz/n0450f350");
        assert!(payload.contains("ROUTE: dct yyz/n0450f350\n"));
    }

    #[test]
    fn test_format_snapshot_uses_normalized_callsign() {
        let fp = FlightPlanSnapshot::new("aca123", "CYYZ", "KJFK", "A B C");
        let payload = format_snapshot(StripTitle::Amendment, &fp);
        assert!(payload.starts_with("================ AMENDMENT ================\n"));
        assert!(payload.contains("CS: ACA123   "));
    }

    #[test]
    fn test_titles() {
        assert_eq!(StripTitle::FlightStrip.to_string(), "FLIGHT STRIP");
        assert_eq!(StripTitle::Amendment.as_str(), "AMENDMENT");
    }
}
