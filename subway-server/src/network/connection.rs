//! Connections between stations.

use std::fmt;

use crate::domain::{Colour, StationName};

/// One side of a connection, as seen from the station that stores it.
///
/// A link on station A with `target` B and colour Red reads "A reaches B
/// on the Red line". Every link has a mirror on its target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link {
    /// The station at the other end
    pub target: StationName,
    /// Line colour of the connection
    pub colour: Colour,
}

/// An undirected, coloured connection between two distinct stations.
///
/// Endpoints are stored in sorted order, so a connection built from
/// `(A, B, Red)` is equal to (and hashes like) one built from `(B, A, Red)`.
///
/// # Examples
///
/// ```
/// use subway_server::domain::{Colour, StationName};
/// use subway_server::network::Connection;
///
/// let a = StationName::parse("Reid").unwrap();
/// let b = StationName::parse("Niagra").unwrap();
///
/// assert_eq!(
///     Connection::new(a.clone(), b.clone(), Colour::Blue),
///     Connection::new(b.clone(), a.clone(), Colour::Blue),
/// );
/// assert_ne!(
///     Connection::new(a.clone(), b.clone(), Colour::Blue),
///     Connection::new(a, b, Colour::Purple),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Connection {
    colour: Colour,
    low: StationName,
    high: StationName,
}

impl Connection {
    /// Create a connection between two stations.
    pub fn new(a: StationName, b: StationName, colour: Colour) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Self { colour, low, high }
    }

    /// Returns both endpoints, in sorted order.
    pub fn endpoints(&self) -> (&StationName, &StationName) {
        (&self.low, &self.high)
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// Whether `station` is one of the endpoints.
    pub fn touches(&self, station: &StationName) -> bool {
        &self.low == station || &self.high == station
    }

    /// Returns the endpoint opposite `station`, or `None` if `station` is
    /// not an endpoint.
    pub fn other(&self, station: &StationName) -> Option<&StationName> {
        if &self.low == station {
            Some(&self.high)
        } else if &self.high == station {
            Some(&self.low)
        } else {
            None
        }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-{}-> {}", self.low, self.colour, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> StationName {
        StationName::parse(s).unwrap()
    }

    #[test]
    fn endpoints_are_sorted() {
        let c = Connection::new(name("Union"), name("Hamilton"), Colour::Green);
        let (low, high) = c.endpoints();
        assert_eq!(low.as_str(), "Hamilton");
        assert_eq!(high.as_str(), "Union");
    }

    #[test]
    fn direction_does_not_matter() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Connection::new(name("A"), name("B"), Colour::Red));
        assert!(set.contains(&Connection::new(name("B"), name("A"), Colour::Red)));
        assert!(!set.contains(&Connection::new(name("A"), name("B"), Colour::Green)));
    }

    #[test]
    fn other_endpoint() {
        let c = Connection::new(name("Reid"), name("Union"), Colour::Yellow);
        assert_eq!(c.other(&name("Reid")), Some(&name("Union")));
        assert_eq!(c.other(&name("Union")), Some(&name("Reid")));
        assert_eq!(c.other(&name("Water")), None);
    }

    #[test]
    fn touches() {
        let c = Connection::new(name("Reid"), name("Union"), Colour::Yellow);
        assert!(c.touches(&name("Reid")));
        assert!(c.touches(&name("Union")));
        assert!(!c.touches(&name("Water")));
    }

    #[test]
    fn display() {
        let c = Connection::new(name("Trail"), name("Terminal"), Colour::Yellow);
        assert_eq!(c.to_string(), "Terminal <-Yellow-> Trail");
    }

    #[test]
    fn ordered_by_colour_first() {
        let mut connections = vec![
            Connection::new(name("A"), name("B"), Colour::Blue),
            Connection::new(name("C"), name("D"), Colour::Red),
            Connection::new(name("A"), name("C"), Colour::Red),
        ];
        connections.sort();
        assert_eq!(connections[0], Connection::new(name("A"), name("C"), Colour::Red));
        assert_eq!(connections[1], Connection::new(name("C"), name("D"), Colour::Red));
        assert_eq!(connections[2], Connection::new(name("A"), name("B"), Colour::Blue));
    }
}
