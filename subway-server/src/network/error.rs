//! Network store error types.

use crate::domain::{Colour, StationName};

/// Why a change to the subway map was rejected.
///
/// Every variant is an expected outcome. A rejected change never modifies
/// the map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// The named station is not on the map
    #[error("station {0} does not exist")]
    StationNotFound(StationName),

    /// A station with this name is already on the map
    #[error("station {0} already exists")]
    StationExists(StationName),

    /// The two stations are already joined on this line
    #[error("{from} and {to} are already connected on the {colour} line")]
    ConnectionExists {
        from: StationName,
        to: StationName,
        colour: Colour,
    },

    /// The two stations are not joined on this line
    #[error("{from} and {to} are not connected on the {colour} line")]
    ConnectionNotFound {
        from: StationName,
        to: StationName,
        colour: Colour,
    },

    /// A station cannot be connected to itself
    #[error("station {0} cannot be connected to itself")]
    SelfLoop(StationName),
}
