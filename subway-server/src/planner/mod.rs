//! Route finder using BFS search.
//!
//! This module answers: "what is the route with the fewest stops between
//! these two stations, and which lines can I ride on each hop?"
//!
//! The search is an unweighted breadth-first search over the subway map.
//! Line colours play no part in choosing the route; they are read back from
//! the map once the route is known, so a hop served by several lines lists
//! all of them.

mod route;
mod search;


pub use route::{Hop, Route};
pub use search::{RouteError, RouteFinder};
