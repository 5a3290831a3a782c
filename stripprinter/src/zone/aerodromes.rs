//! Normalized set of controlled aerodromes.

use std::collections::BTreeSet;
use std::fmt;

use crate::flight_plan::normalize_code;

/// The ICAO codes that make up the control zone.
///
/// Codes are upper-cased once, when the list is built. Blank entries are
/// dropped so that an absent origin or destination can never match the zone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AerodromeList {
    codes: BTreeSet<String>,
}

impl AerodromeList {
    /// Build a list from raw codes in any case.
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codes = codes
            .into_iter()
            .map(|code| normalize_code(code.as_ref().trim()))
            .filter(|code| !code.is_empty())
            .collect();
        Self { codes }
    }

    /// Membership test for an already upper-cased code.
    ///
    /// The empty string is never a member.
    pub fn contains(&self, normalized_code: &str) -> bool {
        !normalized_code.is_empty() && self.codes.contains(normalized_code)
    }

    /// Number of distinct aerodromes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if the zone has no aerodromes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Codes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }
}

impl fmt::Display for AerodromeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        f.write_str(&joined.join(", "))
    }
}
