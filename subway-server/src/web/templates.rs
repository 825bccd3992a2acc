//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::Colour;
use crate::network::{Station, SubwayMap};
use crate::planner::{Hop, Route};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page: stations, lines and a route form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub stations: Vec<StationView>,
    pub lines: Vec<LineView>,
}

impl IndexTemplate {
    /// Build the page from the current map.
    pub fn from_map(map: &SubwayMap) -> Self {
        let stations = map
            .station_names()
            .into_iter()
            .filter_map(|name| map.station(name))
            .map(StationView::from_station)
            .collect();

        let lines = Colour::ALL
            .into_iter()
            .map(|colour| LineView {
                name: colour.name().to_string(),
                css_class: colour.name().to_lowercase(),
                connections: map
                    .connections_on(colour)
                    .iter()
                    .map(|c| {
                        let (a, b) = c.endpoints();
                        format!("{a} – {b}")
                    })
                    .collect(),
            })
            .filter(|line| !line.connections.is_empty())
            .collect();

        Self { stations, lines }
    }
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Route result fragment.
#[derive(Template)]
#[template(path = "route_result.html")]
pub struct RouteResultTemplate {
    pub route: RouteView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Station view model for templates.
#[derive(Debug, Clone)]
pub struct StationView {
    pub name: String,
    pub connections: usize,
    /// Neighbouring station names, comma separated
    pub neighbours: String,
}

impl StationView {
    /// Create from a network Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            name: station.name().to_string(),
            connections: station.degree(),
            neighbours: station
                .neighbours()
                .iter()
                .map(|n| n.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Line view model for templates.
#[derive(Debug, Clone)]
pub struct LineView {
    pub name: String,
    pub css_class: String,
    pub connections: Vec<String>,
}

/// Route view model for templates.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub origin: String,
    pub destination: String,
    pub hops: Vec<HopView>,
    pub changes: usize,
    pub summary: String,
}

impl RouteView {
    /// Create from a planner Route.
    pub fn from_route(route: &Route) -> Self {
        Self {
            origin: route.origin().to_string(),
            destination: route.destination().to_string(),
            hops: route.hops().iter().map(HopView::from_hop).collect(),
            changes: route.changes(),
            summary: route.to_string(),
        }
    }

    pub fn is_trivial(&self) -> bool {
        self.hops.is_empty()
    }

    /// Returns e.g. "3 stops, 1 change".
    pub fn length_display(&self) -> String {
        let stops = self.hops.len();
        let stops_word = if stops == 1 { "stop" } else { "stops" };
        let changes_word = if self.changes == 1 { "change" } else { "changes" };
        format!("{stops} {stops_word}, {} {changes_word}", self.changes)
    }
}

/// Hop view model for templates.
#[derive(Debug, Clone)]
pub struct HopView {
    pub from: String,
    pub to: String,
    /// Colour names joined with "/"
    pub colours: String,
    /// CSS class of the first (most recently added) colour
    pub css_class: String,
}

impl HopView {
    /// Create from a planner Hop.
    pub fn from_hop(hop: &Hop) -> Self {
        Self {
            from: hop.from.to_string(),
            to: hop.to.to_string(),
            colours: hop.colours_label(),
            css_class: hop
                .colours
                .first()
                .map(|c| c.name().to_lowercase())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationName;
    use crate::network::SubwayMapBuilder;
    use crate::planner::RouteFinder;

    fn name(s: &str) -> StationName {
        StationName::parse(s).unwrap()
    }

    #[test]
    fn route_view_length_display() {
        let map = SubwayMapBuilder::new()
            .line(Colour::Red, &["A", "B", "C"])
            .line(Colour::Blue, &["C", "D"])
            .build();
        let finder = RouteFinder::new(&map);

        let view = RouteView::from_route(&finder.find(&name("A"), &name("D")).unwrap());
        assert_eq!(view.length_display(), "3 stops, 1 change");

        let view = RouteView::from_route(&finder.find(&name("A"), &name("B")).unwrap());
        assert_eq!(view.length_display(), "1 stop, 0 changes");

        let view = RouteView::from_route(&finder.find(&name("A"), &name("A")).unwrap());
        assert!(view.is_trivial());
    }

    #[test]
    fn hop_view_colours() {
        let map = SubwayMapBuilder::new()
            .line(Colour::Red, &["A", "B"])
            .connect("A", "B", Colour::Purple)
            .build();
        let route = RouteFinder::new(&map).find(&name("A"), &name("B")).unwrap();

        let view = HopView::from_hop(&route.hops()[0]);
        assert_eq!(view.colours, "Purple/Red");
        assert_eq!(view.css_class, "purple");
    }

    #[test]
    fn index_lists_stations_and_nonempty_lines() {
        let map = SubwayMapBuilder::new()
            .line(Colour::Green, &["B", "A"])
            .station("C")
            .build();

        let page = IndexTemplate::from_map(&map);

        let names: Vec<&str> = page.stations.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(page.stations[0].neighbours, "B");
        assert_eq!(page.stations[2].connections, 0);

        assert_eq!(page.lines.len(), 1);
        assert_eq!(page.lines[0].name, "Green");
        assert_eq!(page.lines[0].connections, vec!["A – B"]);
    }

    #[test]
    fn templates_render() {
        let map = SubwayMapBuilder::new()
            .line(Colour::Yellow, &["Reid", "Union"])
            .build();

        let html = IndexTemplate::from_map(&map).render().unwrap();
        assert!(html.contains("Reid"));
        assert!(html.contains("Yellow"));

        let route = RouteFinder::new(&map)
            .find(&name("Reid"), &name("Union"))
            .unwrap();
        let html = RouteResultTemplate {
            route: RouteView::from_route(&route),
        }
        .render()
        .unwrap();
        assert!(html.contains("Union"));
        assert!(html.contains("1 stop, 0 changes"));
    }
}
