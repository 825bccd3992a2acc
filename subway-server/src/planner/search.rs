//! BFS shortest-route search.
//!
//! Finds a route with the fewest hops between two stations, ignoring line
//! colour while searching. Colours are recovered afterwards for each hop.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{debug, trace};

use crate::domain::StationName;
use crate::network::{Station, SubwayMap};

use super::route::{Hop, Route};

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// One of the endpoints is not on the map
    #[error("station {0} does not exist")]
    StationNotFound(StationName),

    /// The endpoints are in disconnected parts of the network
    #[error("no route from {from} to {to}")]
    NoRoute { from: StationName, to: StationName },
}

/// Shortest-route finder over a subway map.
///
/// Visited stations and predecessors live in the search call, so a finder
/// only ever reads the map and any number of searches may share it.
///
/// When several routes have the same number of hops, the one returned is
/// decided by exploration order: stations are expanded first-in first-out,
/// and each station's links are followed most recently added first.
pub struct RouteFinder<'a> {
    map: &'a SubwayMap,
}

impl<'a> RouteFinder<'a> {
    pub fn new(map: &'a SubwayMap) -> Self {
        Self { map }
    }

    /// Find a minimum-hop route from `from` to `to`.
    ///
    /// A route from a station to itself has one stop and no hops.
    pub fn find(&self, from: &StationName, to: &StationName) -> Result<Route, RouteError> {
        let origin = self
            .map
            .station(from)
            .ok_or_else(|| RouteError::StationNotFound(from.clone()))?;
        if !self.map.contains_station(to) {
            return Err(RouteError::StationNotFound(to.clone()));
        }

        if from == to {
            return Ok(Route::trivial(from.clone()));
        }

        let Some(predecessors) = self.search(origin, to) else {
            debug!(from = %from, to = %to, "no route");
            return Err(RouteError::NoRoute {
                from: from.clone(),
                to: to.clone(),
            });
        };

        // Walk back from the destination
        let mut stops = vec![to.clone()];
        let mut current = to;
        while let Some(&previous) = predecessors.get(current) {
            stops.push(previous.clone());
            current = previous;
        }
        stops.reverse();
        debug_assert_eq!(stops.first(), Some(from));

        let hops: Vec<Hop> = stops
            .windows(2)
            .map(|pair| Hop {
                from: pair[0].clone(),
                to: pair[1].clone(),
                colours: self.map.colours_between(&pair[0], &pair[1]),
            })
            .collect();

        let route = Route::new(stops, hops);
        debug!(
            from = %from,
            to = %to,
            hops = route.hop_count(),
            changes = route.changes(),
            "route found"
        );
        Ok(route)
    }

    /// Breadth-first search from `origin`, stopping as soon as `target` is
    /// discovered. Returns the predecessor of every discovered station, or
    /// `None` if `target` is unreachable.
    fn search(
        &self,
        origin: &'a Station,
        target: &StationName,
    ) -> Option<HashMap<&'a StationName, &'a StationName>> {
        let mut visited: HashSet<&StationName> = HashSet::new();
        let mut predecessors: HashMap<&StationName, &StationName> = HashMap::new();
        let mut queue: VecDeque<&Station> = VecDeque::new();
        let mut explored = 0usize;

        visited.insert(origin.name());
        queue.push_back(origin);

        while let Some(station) = queue.pop_front() {
            explored += 1;
            trace!(
                station = %station.name(),
                links = station.degree(),
                queued = queue.len(),
                "BFS exploring station"
            );

            for link in station.links() {
                if !visited.insert(&link.target) {
                    continue;
                }
                predecessors.insert(&link.target, station.name());

                if &link.target == target {
                    debug!(explored, "BFS reached destination");
                    return Some(predecessors);
                }

                if let Some(next) = self.map.station(&link.target) {
                    queue.push_back(next);
                }
            }
        }

        debug!(explored, "BFS exhausted");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Colour;

    fn name(s: &str) -> StationName {
        StationName::parse(s).unwrap()
    }

    #[test]
    fn error_display() {
        let err = RouteError::StationNotFound(name("Gotham"));
        assert_eq!(err.to_string(), "station Gotham does not exist");

        let err = RouteError::NoRoute {
            from: name("A"),
            to: name("B"),
        };
        assert_eq!(err.to_string(), "no route from A to B");
    }

    #[test]
    fn missing_origin_reported_first() {
        let map = SubwayMap::new();
        let finder = RouteFinder::new(&map);
        assert_eq!(
            finder.find(&name("X"), &name("Y")),
            Err(RouteError::StationNotFound(name("X")))
        );
    }

    #[test]
    fn missing_destination() {
        let mut map = SubwayMap::new();
        map.insert_station(name("A")).unwrap();
        let finder = RouteFinder::new(&map);
        assert_eq!(
            finder.find(&name("A"), &name("Y")),
            Err(RouteError::StationNotFound(name("Y")))
        );
    }

    #[test]
    fn finder_does_not_modify_map() {
        let mut map = SubwayMap::new();
        map.insert_station(name("A")).unwrap();
        map.insert_station(name("B")).unwrap();
        map.insert_connection(&name("A"), &name("B"), Colour::Red)
            .unwrap();
        let before = map.clone();

        let finder = RouteFinder::new(&map);
        finder.find(&name("A"), &name("B")).unwrap();
        finder.find(&name("B"), &name("A")).unwrap();

        assert_eq!(map, before);
    }
}
