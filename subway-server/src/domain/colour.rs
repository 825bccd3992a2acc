//! Subway line colour type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a line colour is missing or unknown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line colour: {reason}")]
pub struct InvalidColour {
    reason: &'static str,
}

/// The colour of a subway line.
///
/// Colours label connections: two stations may be joined by several
/// connections as long as each has a different colour. There is no
/// "unset" colour; an unset or unknown value is rejected when it is parsed.
///
/// Each colour has a numeric code (1 to 6, in declaration order). Code 0
/// means "not set" and is always rejected.
///
/// # Examples
///
/// ```
/// use subway_server::domain::Colour;
///
/// assert_eq!(Colour::parse("green").unwrap(), Colour::Green);
/// assert_eq!(Colour::parse("3").unwrap(), Colour::Green);
/// assert_eq!(Colour::from_code(6).unwrap(), Colour::Orange);
///
/// // Not set
/// assert!(Colour::from_code(0).is_err());
/// // Unknown
/// assert!(Colour::parse("magenta").is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Colour {
    Red,
    Yellow,
    Green,
    Blue,
    Purple,
    Orange,
}

impl Colour {
    /// Every colour, in code order.
    pub const ALL: [Colour; 6] = [
        Colour::Red,
        Colour::Yellow,
        Colour::Green,
        Colour::Blue,
        Colour::Purple,
        Colour::Orange,
    ];

    /// Look up a colour by its numeric code.
    pub fn from_code(code: u8) -> Result<Self, InvalidColour> {
        match code {
            0 => Err(InvalidColour {
                reason: "colour not set",
            }),
            1..=6 => Ok(Self::ALL[usize::from(code - 1)]),
            _ => Err(InvalidColour {
                reason: "code must be between 1 and 6",
            }),
        }
    }

    /// Parse a colour from its name (any case) or its numeric code.
    pub fn parse(s: &str) -> Result<Self, InvalidColour> {
        let s = s.trim();

        if let Ok(code) = s.parse::<u8>() {
            return Self::from_code(code);
        }

        Self::ALL
            .into_iter()
            .find(|colour| colour.name().eq_ignore_ascii_case(s))
            .ok_or(InvalidColour {
                reason: "unknown colour name",
            })
    }

    /// Returns the numeric code (1 to 6).
    pub fn code(self) -> u8 {
        match self {
            Colour::Red => 1,
            Colour::Yellow => 2,
            Colour::Green => 3,
            Colour::Blue => 4,
            Colour::Purple => 5,
            Colour::Orange => 6,
        }
    }

    /// Returns the capitalised colour name.
    pub fn name(self) -> &'static str {
        match self {
            Colour::Red => "Red",
            Colour::Yellow => "Yellow",
            Colour::Green => "Green",
            Colour::Blue => "Blue",
            Colour::Purple => "Purple",
            Colour::Orange => "Orange",
        }
    }
}

impl TryFrom<String> for Colour {
    type Error = InvalidColour;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Colour::parse(&value)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
