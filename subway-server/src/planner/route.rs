//! Route types.
//!
//! A `Route` is the answer to a shortest-route query: the stations passed
//! through, in order, and for each hop every line that runs between the two
//! stations.

use std::fmt;

use crate::domain::{Colour, StationName};

/// One hop of a route: two adjacent stations and the lines joining them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    pub from: StationName,
    pub to: StationName,
    /// Every line joining `from` to `to`, most recently added first.
    pub colours: Vec<Colour>,
}

impl Hop {
    /// Whether this hop and `next` share a line, so no change is needed
    /// between them.
    pub fn shares_line_with(&self, next: &Hop) -> bool {
        self.colours.iter().any(|c| next.colours.contains(c))
    }

    /// Colour names joined with `/`, e.g. `Green/Red`.
    pub fn colours_label(&self) -> String {
        self.colours
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -[{}]-> {}", self.from, self.colours_label(), self.to)
    }
}

/// A minimum-hop route between two stations.
///
/// # Invariants
///
/// - At least one stop
/// - `hops().len() == stops().len() - 1`
/// - Hop `i` runs from stop `i` to stop `i + 1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stops: Vec<StationName>,
    hops: Vec<Hop>,
}

impl Route {
    /// The route from a station to itself: one stop, no hops.
    pub fn trivial(station: StationName) -> Self {
        Self {
            stops: vec![station],
            hops: Vec::new(),
        }
    }

    pub(crate) fn new(stops: Vec<StationName>, hops: Vec<Hop>) -> Self {
        debug_assert!(!stops.is_empty());
        debug_assert_eq!(hops.len() + 1, stops.len());
        Self { stops, hops }
    }

    /// Stations passed through, origin first and destination last.
    pub fn stops(&self) -> &[StationName] {
        &self.stops
    }

    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    pub fn origin(&self) -> &StationName {
        &self.stops[0]
    }

    pub fn destination(&self) -> &StationName {
        &self.stops[self.stops.len() - 1]
    }

    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }

    /// Whether origin and destination are the same station.
    pub fn is_trivial(&self) -> bool {
        self.hops.is_empty()
    }

    /// Number of places where the rider must change line, i.e. consecutive
    /// hops with no colour in common.
    pub fn changes(&self) -> usize {
        self.hops
            .windows(2)
            .filter(|pair| !pair[0].shares_line_with(&pair[1]))
            .count()
    }
}

impl fmt::Display for Route {
    /// Formats as `Shortest path from A to C: (A)|Red -> (B)|Green/Blue -> (C)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shortest path from {} to {}:",
            self.origin(),
            self.destination()
        )?;
        for (i, stop) in self.stops.iter().enumerate() {
            write!(f, " ({stop})")?;
            if let Some(hop) = self.hops.get(i) {
                write!(f, "|{} ->", hop.colours_label())?;
            }
        }
        Ok(())
    }
}
