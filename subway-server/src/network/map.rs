//! The subway map: stations and the coloured connections between them.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::domain::{Colour, StationName};

use super::connection::{Connection, Link};
use super::error::NetworkError;

/// A station on the map.
///
/// Holds the station's links in most-recently-added-first order. Links are
/// only ever changed through [`SubwayMap`], which keeps them mirrored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    name: StationName,
    links: VecDeque<Link>,
}

impl Station {
    fn new(name: StationName) -> Self {
        Self {
            name,
            links: VecDeque::new(),
        }
    }

    pub fn name(&self) -> &StationName {
        &self.name
    }

    /// Iterate over this station's links, most recently added first.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.links.iter()
    }

    /// Number of links (half-edges) stored on this station.
    pub fn degree(&self) -> usize {
        self.links.len()
    }

    /// Distinct neighbouring stations, in the order they first appear in
    /// [`links`](Self::links).
    pub fn neighbours(&self) -> Vec<&StationName> {
        let mut seen = HashSet::new();
        self.links
            .iter()
            .map(|link| &link.target)
            .filter(|target| seen.insert(*target))
            .collect()
    }

    /// Every colour linking this station to `target`, in stored order.
    pub fn colours_to(&self, target: &StationName) -> Vec<Colour> {
        self.links
            .iter()
            .filter(|link| &link.target == target)
            .map(|link| link.colour)
            .collect()
    }

    fn position_of(&self, target: &StationName, colour: Colour) -> Option<usize> {
        self.links
            .iter()
            .position(|link| &link.target == target && link.colour == colour)
    }
}

/// A subway network: named stations joined by coloured connections.
///
/// Two stations may be joined by several connections, one per colour.
/// Connections are undirected: each is stored once in a canonical set and
/// mirrored as a [`Link`] on both of its stations.
///
/// All changes go through the four mutating operations, each of which
/// either succeeds completely or leaves the map untouched.
///
/// # Examples
///
/// ```
/// use subway_server::domain::{Colour, StationName};
/// use subway_server::network::SubwayMap;
///
/// let reid = StationName::parse("Reid").unwrap();
/// let union = StationName::parse("Union").unwrap();
///
/// let mut map = SubwayMap::new();
/// map.insert_station(reid.clone()).unwrap();
/// map.insert_station(union.clone()).unwrap();
/// map.insert_connection(&reid, &union, Colour::Yellow).unwrap();
///
/// assert_eq!(map.colours_between(&union, &reid), vec![Colour::Yellow]);
/// assert_eq!(map.remove_station(&reid), Ok(1));
/// assert_eq!(map.connection_count(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubwayMap {
    stations: HashMap<StationName, Station>,
    connections: HashSet<Connection>,
}

impl SubwayMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station with no connections.
    pub fn insert_station(&mut self, name: StationName) -> Result<(), NetworkError> {
        match self.stations.entry(name) {
            Entry::Occupied(entry) => {
                return Err(NetworkError::StationExists(entry.key().clone()));
            }
            Entry::Vacant(entry) => {
                debug!(station = %entry.key(), "station inserted");
                let station = Station::new(entry.key().clone());
                entry.insert(station);
            }
        }
        debug_assert!(self.is_consistent());
        Ok(())
    }

    /// Remove a station and every connection touching it.
    ///
    /// Returns the number of connections removed. Each one takes a link off
    /// this station and its mirror off the neighbour.
    pub fn remove_station(&mut self, name: &StationName) -> Result<usize, NetworkError> {
        self.require(name)?;

        let touching: Vec<Connection> = self
            .connections
            .iter()
            .filter(|connection| connection.touches(name))
            .cloned()
            .collect();

        for connection in &touching {
            self.unlink(connection);
        }
        self.stations.remove(name);
        debug_assert!(self.is_consistent());

        debug!(
            station = %name,
            connections_removed = touching.len(),
            "station removed"
        );

        Ok(touching.len())
    }

    /// Join two stations on the given line.
    ///
    /// Fails if either station is missing, if both names are the same
    /// station, or if the two are already joined on this line.
    pub fn insert_connection(
        &mut self,
        from: &StationName,
        to: &StationName,
        colour: Colour,
    ) -> Result<(), NetworkError> {
        self.require(from)?;
        self.require(to)?;

        if from == to {
            return Err(NetworkError::SelfLoop(from.clone()));
        }

        let connection = Connection::new(from.clone(), to.clone(), colour);
        if self.connections.contains(&connection) {
            return Err(NetworkError::ConnectionExists {
                from: from.clone(),
                to: to.clone(),
                colour,
            });
        }

        self.link(from, to, colour);
        self.connections.insert(connection);
        debug_assert!(self.is_consistent());

        debug!(from = %from, to = %to, colour = %colour, "connection inserted");
        Ok(())
    }

    /// Remove the connection joining two stations on the given line.
    ///
    /// Other colours between the same two stations are left in place.
    pub fn remove_connection(
        &mut self,
        from: &StationName,
        to: &StationName,
        colour: Colour,
    ) -> Result<(), NetworkError> {
        self.require(from)?;
        self.require(to)?;

        let connection = Connection::new(from.clone(), to.clone(), colour);
        if !self.unlink(&connection) {
            return Err(NetworkError::ConnectionNotFound {
                from: from.clone(),
                to: to.clone(),
                colour,
            });
        }
        debug_assert!(self.is_consistent());

        debug!(from = %from, to = %to, colour = %colour, "connection removed");
        Ok(())
    }

    /// Whether a station with this name is on the map.
    pub fn contains_station(&self, name: &StationName) -> bool {
        self.stations.contains_key(name)
    }

    /// Look up a station by name.
    pub fn station(&self, name: &StationName) -> Option<&Station> {
        self.stations.get(name)
    }

    /// Iterate over all stations, in no particular order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// All station names, sorted.
    pub fn station_names(&self) -> Vec<&StationName> {
        let mut names: Vec<&StationName> = self.stations.keys().collect();
        names.sort();
        names
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of connections (each counted once, not once per direction).
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Whether the two stations are joined on the given line.
    pub fn has_connection(&self, a: &StationName, b: &StationName, colour: Colour) -> bool {
        self.connections
            .contains(&Connection::new(a.clone(), b.clone(), colour))
    }

    /// Every colour joining `from` to `to`, in the order stored on `from`.
    ///
    /// Empty if the stations are not adjacent or either is missing.
    pub fn colours_between(&self, from: &StationName, to: &StationName) -> Vec<Colour> {
        self.stations
            .get(from)
            .map(|station| station.colours_to(to))
            .unwrap_or_default()
    }

    /// All connections on one line, sorted.
    pub fn connections_on(&self, colour: Colour) -> Vec<&Connection> {
        let mut on_line: Vec<&Connection> = self
            .connections
            .iter()
            .filter(|c| c.colour() == colour)
            .collect();
        on_line.sort();
        on_line
    }

    /// Check that every connection is mirrored by exactly one link on each
    /// endpoint and that no link exists without a connection.
    pub fn is_consistent(&self) -> bool {
        let link_count: usize = self.stations.values().map(Station::degree).sum();
        if link_count != 2 * self.connections.len() {
            return false;
        }

        self.connections.iter().all(|connection| {
            let (a, b) = connection.endpoints();
            [a, b].into_iter().all(|end| {
                connection
                    .other(end)
                    .is_some_and(|there| self.link_count(end, there, connection.colour()) == 1)
            })
        })
    }

    fn link_count(&self, from: &StationName, to: &StationName, colour: Colour) -> usize {
        self.stations.get(from).map_or(0, |station| {
            station
                .links
                .iter()
                .filter(|link| &link.target == to && link.colour == colour)
                .count()
        })
    }

    fn require(&self, name: &StationName) -> Result<&Station, NetworkError> {
        self.stations
            .get(name)
            .ok_or_else(|| NetworkError::StationNotFound(name.clone()))
    }

    /// Prepend mirrored links on both stations. Both must exist.
    fn link(&mut self, from: &StationName, to: &StationName, colour: Colour) {
        if let Some(station) = self.stations.get_mut(from) {
            station.links.push_front(Link {
                target: to.clone(),
                colour,
            });
        }
        if let Some(station) = self.stations.get_mut(to) {
            station.links.push_front(Link {
                target: from.clone(),
                colour,
            });
        }
    }

    /// Drop a connection and both of its links. Returns false if the
    /// connection was not present.
    fn unlink(&mut self, connection: &Connection) -> bool {
        if !self.connections.remove(connection) {
            return false;
        }

        let (a, b) = connection.endpoints();
        for (here, there) in [(a, b), (b, a)] {
            if let Some(station) = self.stations.get_mut(here) {
                if let Some(pos) = station.position_of(there, connection.colour()) {
                    station.links.remove(pos);
                }
            }
        }
        true
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const NAMES: [&str; 5] = ["A", "B", "C", "D", "E"];

    #[derive(Debug, Clone)]
    enum Op {
        InsertStation(usize),
        RemoveStation(usize),
        InsertConnection(usize, usize, Colour),
        RemoveConnection(usize, usize, Colour),
    }

    fn colour() -> impl Strategy<Value = Colour> {
        proptest::sample::select(Colour::ALL.to_vec())
    }

    fn op() -> impl Strategy<Value = Op> {
        let idx = 0..NAMES.len();
        prop_oneof![
            idx.clone().prop_map(Op::InsertStation),
            idx.clone().prop_map(Op::RemoveStation),
            (idx.clone(), idx.clone(), colour())
                .prop_map(|(a, b, c)| Op::InsertConnection(a, b, c)),
            (idx.clone(), idx, colour()).prop_map(|(a, b, c)| Op::RemoveConnection(a, b, c)),
        ]
    }

    fn name(i: usize) -> StationName {
        StationName::parse(NAMES[i]).unwrap()
    }

    fn apply(map: &mut SubwayMap, op: &Op) -> Result<(), NetworkError> {
        match op {
            Op::InsertStation(a) => map.insert_station(name(*a)),
            Op::RemoveStation(a) => map.remove_station(&name(*a)).map(|_| ()),
            Op::InsertConnection(a, b, c) => map.insert_connection(&name(*a), &name(*b), *c),
            Op::RemoveConnection(a, b, c) => map.remove_connection(&name(*a), &name(*b), *c),
        }
    }

    proptest! {
        /// Links stay mirrored after every operation, and failures change nothing
        #[test]
        fn symmetry_holds(ops in proptest::collection::vec(op(), 0..60)) {
            let mut map = SubwayMap::new();
            for op in &ops {
                let before = map.clone();
                if apply(&mut map, op).is_err() {
                    prop_assert_eq!(&map, &before);
                }
                prop_assert!(map.is_consistent());
            }
        }

        /// Removing a station removes twice its connection count in links
        #[test]
        fn remove_station_counts(ops in proptest::collection::vec(op(), 0..60), victim in 0..NAMES.len()) {
            let mut map = SubwayMap::new();
            for op in &ops {
                let _ = apply(&mut map, op);
            }
            let Some(station) = map.station(&name(victim)) else {
                return Ok(());
            };
            let degree = station.degree();
            let links_before: usize = map.stations().map(Station::degree).sum();

            let removed = map.remove_station(&name(victim)).unwrap();

            let links_after: usize = map.stations().map(Station::degree).sum();
            prop_assert_eq!(removed, degree);
            prop_assert_eq!(links_before - links_after, 2 * removed);
            prop_assert!(map.stations().all(|s| s.links().all(|l| l.target != name(victim))));
        }
    }
}
