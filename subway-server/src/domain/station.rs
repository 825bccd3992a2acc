//! Station name type.

use std::fmt;

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStationName {
    reason: &'static str,
}

/// A validated station name.
///
/// Station names are free text, but never empty and never contain control
/// characters or `/`, so every name fits in a single URL path segment.
/// Surrounding whitespace is trimmed on parse, so `" Union "` and `"Union"`
/// name the same station. Names are case-sensitive.
///
/// # Examples
///
/// ```
/// use subway_server::domain::StationName;
///
/// let union = StationName::parse("  Union ").unwrap();
/// assert_eq!(union.as_str(), "Union");
///
/// // Blank names are rejected
/// assert!(StationName::parse("").is_err());
/// assert!(StationName::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationName(String);

impl StationName {
    /// Parse a station name from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationName> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidStationName {
                reason: "must not be blank",
            });
        }

        if trimmed.chars().any(char::is_control) {
            return Err(InvalidStationName {
                reason: "must not contain control characters",
            });
        }

        if trimmed.contains('/') {
            return Err(InvalidStationName {
                reason: "must not contain '/'",
            });
        }

        Ok(StationName(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
