//! Fluent construction of subway maps, and the demonstration network.

use tracing::warn;

use crate::domain::{Colour, StationName};

use super::error::NetworkError;
use super::map::SubwayMap;

/// Builder for creating subway maps.
///
/// Steps that fail (an invalid name, a duplicate connection) are logged and
/// skipped, so a hand-written topology never aborts halfway through.
#[derive(Debug, Default)]
pub struct SubwayMapBuilder {
    inner: SubwayMap,
}

impl SubwayMapBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station.
    pub fn station(mut self, name: &str) -> Self {
        if let Some(station) = parse(name) {
            if let Err(e) = self.inner.insert_station(station) {
                warn!(error = %e, "skipping station");
            }
        }
        self
    }

    /// Join two existing stations.
    pub fn connect(mut self, from: &str, to: &str, colour: Colour) -> Self {
        if let (Some(from), Some(to)) = (parse(from), parse(to)) {
            if let Err(e) = self.inner.insert_connection(&from, &to, colour) {
                warn!(error = %e, "skipping connection");
            }
        }
        self
    }

    /// Add a line running through `stops` in order.
    ///
    /// Stations not yet on the map are added; each consecutive pair of stops
    /// is joined with `colour`.
    pub fn line(mut self, colour: Colour, stops: &[&str]) -> Self {
        for stop in stops {
            if let Some(station) = parse(stop) {
                match self.inner.insert_station(station) {
                    Ok(()) | Err(NetworkError::StationExists(_)) => {}
                    Err(e) => warn!(error = %e, "skipping station"),
                }
            }
        }
        for pair in stops.windows(2) {
            self = self.connect(pair[0], pair[1], colour);
        }
        self
    }

    /// Build the map.
    pub fn build(self) -> SubwayMap {
        self.inner
    }
}

fn parse(name: &str) -> Option<StationName> {
    match StationName::parse(name) {
        Ok(station) => Some(station),
        Err(e) => {
            warn!(name, error = %e, "skipping invalid station name");
            None
        }
    }
}

/// Create the demonstration network.
///
/// Twenty-six stations on five lines, with Terminal, Reid and Union as the
/// main interchanges. Connections are inserted in a fixed order, so route
/// tie-breaks are reproducible.
pub fn demo_map() -> SubwayMap {
    SubwayMapBuilder::new()
        .line(
            Colour::Red,
            &[
                "Dublin",
                "Towerhill",
                "Terminal",
                "Peterborough",
                "Trail",
                "Otonabee",
                "Toronto",
            ],
        )
        .line(
            Colour::Green,
            &[
                "Gotham",
                "Raymond",
                "Towerhill",
                "Terminal",
                "Peterborough",
                "Mcdonnel",
                "Union",
                "Hamilton",
                "York",
            ],
        )
        // Green branch
        .line(Colour::Green, &["Hamilton", "Sadleir", "Waterloo"])
        .line(
            Colour::Blue,
            &[
                "Benson",
                "Terminal",
                "Landsdowne",
                "Reid",
                "Niagra",
                "Aylmer",
                "Scarborough",
                "Chemong",
                "Saenz",
            ],
        )
        .line(
            Colour::Purple,
            &["Hillard", "Bethune", "Niagra", "Reid", "Landsdowne", "Terminal"],
        )
        // Yellow loops back to Terminal
        .line(
            Colour::Yellow,
            &["Terminal", "Reid", "Union", "Water", "Trail", "Terminal"],
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> StationName {
        StationName::parse(s).unwrap()
    }

    #[test]
    fn builder_stations_and_connections() {
        let map = SubwayMapBuilder::new()
            .station("A")
            .station("B")
            .connect("A", "B", Colour::Red)
            .build();

        assert_eq!(map.station_count(), 2);
        assert!(map.has_connection(&name("A"), &name("B"), Colour::Red));
    }

    #[test]
    fn builder_skips_failures() {
        let map = SubwayMapBuilder::new()
            .station("A")
            .station("A") // duplicate
            .station("   ") // blank
            .connect("A", "Nowhere", Colour::Red) // missing station
            .connect("A", "A", Colour::Red) // self loop
            .build();

        assert_eq!(map.station_count(), 1);
        assert_eq!(map.connection_count(), 0);
    }

    #[test]
    fn line_adds_missing_stations() {
        let map = SubwayMapBuilder::new()
            .station("B")
            .line(Colour::Orange, &["A", "B", "C"])
            .build();

        assert_eq!(map.station_count(), 3);
        assert_eq!(map.connection_count(), 2);
        assert!(map.has_connection(&name("A"), &name("B"), Colour::Orange));
        assert!(map.has_connection(&name("B"), &name("C"), Colour::Orange));
        assert!(!map.has_connection(&name("A"), &name("C"), Colour::Orange));
    }

    #[test]
    fn line_can_loop() {
        let map = SubwayMapBuilder::new()
            .line(Colour::Yellow, &["A", "B", "C", "A"])
            .build();

        assert_eq!(map.station_count(), 3);
        assert_eq!(map.connection_count(), 3);
        assert!(map.has_connection(&name("C"), &name("A"), Colour::Yellow));
    }

    #[test]
    fn demo_map_shape() {
        let map = demo_map();

        assert_eq!(map.station_count(), 26);
        assert_eq!(map.connection_count(), 34);
        assert!(map.is_consistent());

        assert_eq!(map.connections_on(Colour::Red).len(), 6);
        assert_eq!(map.connections_on(Colour::Green).len(), 10);
        assert_eq!(map.connections_on(Colour::Blue).len(), 8);
        assert_eq!(map.connections_on(Colour::Purple).len(), 5);
        assert_eq!(map.connections_on(Colour::Yellow).len(), 5);
        assert!(map.connections_on(Colour::Orange).is_empty());
    }

    #[test]
    fn demo_map_parallel_lines() {
        let map = demo_map();

        // Green was laid after Red, so it comes first
        assert_eq!(
            map.colours_between(&name("Towerhill"), &name("Terminal")),
            vec![Colour::Green, Colour::Red]
        );
        assert_eq!(
            map.colours_between(&name("Reid"), &name("Niagra")),
            vec![Colour::Purple, Colour::Blue]
        );
    }

    #[test]
    fn demo_map_hillard_is_connected() {
        let map = demo_map();
        assert!(map.has_connection(&name("Hillard"), &name("Bethune"), Colour::Purple));
    }
}
