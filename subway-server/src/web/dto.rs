//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Colour;
use crate::network::{Connection, Station};
use crate::planner::{Hop, Route};

/// Request to add a station.
#[derive(Debug, Deserialize)]
pub struct CreateStationRequest {
    /// Station name
    pub name: String,
}

/// A station in the station list.
#[derive(Debug, Serialize)]
pub struct StationSummary {
    pub name: String,

    /// Number of connections touching the station
    pub connections: usize,
}

/// Response listing all stations.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    /// Stations sorted by name
    pub stations: Vec<StationSummary>,
}

/// A station with its connections.
#[derive(Debug, Serialize)]
pub struct StationDetail {
    pub name: String,

    /// Connections, most recently added first
    pub links: Vec<LinkResult>,
}

impl StationDetail {
    /// Create from a network Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            name: station.name().to_string(),
            links: station
                .links()
                .map(|link| LinkResult {
                    target: link.target.to_string(),
                    colour: link.colour,
                })
                .collect(),
        }
    }
}

/// One connection as seen from a station.
#[derive(Debug, Serialize)]
pub struct LinkResult {
    /// Station at the other end
    pub target: String,
    pub colour: Colour,
}

/// Response after removing a station.
#[derive(Debug, Serialize)]
pub struct RemoveStationResponse {
    pub name: String,

    /// Number of connections removed along with the station
    pub connections_removed: usize,
}

/// Request to add or remove a connection.
///
/// Sent as a JSON body to add, and as query parameters to remove.
#[derive(Debug, Deserialize)]
pub struct ConnectionRequest {
    pub from: String,
    pub to: String,

    /// Colour name (e.g. "red") or code ("1" to "6")
    pub colour: String,
}

/// A connection between two stations.
#[derive(Debug, Serialize)]
pub struct ConnectionResult {
    pub from: String,
    pub to: String,
    pub colour: Colour,
}

impl ConnectionResult {
    /// Create from a network Connection.
    pub fn from_connection(connection: &Connection) -> Self {
        let (from, to) = connection.endpoints();
        Self {
            from: from.to_string(),
            to: to.to_string(),
            colour: connection.colour(),
        }
    }
}

/// Response listing the connections on one line.
#[derive(Debug, Serialize)]
pub struct LineResponse {
    pub colour: Colour,
    pub connections: Vec<ConnectionResult>,
}

/// Request for a shortest route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin station name
    pub from: String,

    /// Destination station name
    pub to: String,
}

/// A hop of a route.
#[derive(Debug, Serialize)]
pub struct HopResult {
    pub from: String,
    pub to: String,

    /// Every line serving the hop
    pub colours: Vec<Colour>,
}

impl HopResult {
    /// Create from a planner Hop.
    pub fn from_hop(hop: &Hop) -> Self {
        Self {
            from: hop.from.to_string(),
            to: hop.to.to_string(),
            colours: hop.colours.clone(),
        }
    }
}

/// Response for a route query.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Stations from origin to destination, inclusive
    pub stops: Vec<String>,

    pub hops: Vec<HopResult>,

    /// Number of line changes
    pub changes: usize,

    /// One-line human-readable summary
    pub summary: String,
}

impl RouteResponse {
    /// Create from a planner Route.
    pub fn from_route(route: &Route) -> Self {
        Self {
            stops: route.stops().iter().map(ToString::to_string).collect(),
            hops: route.hops().iter().map(HopResult::from_hop).collect(),
            changes: route.changes(),
            summary: route.to_string(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
