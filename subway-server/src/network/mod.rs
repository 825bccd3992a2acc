//! The network store.
//!
//! Owns the stations of a subway map and the coloured connections between
//! them. Any pair of stations may be joined by several connections, one per
//! line colour. Each connection is stored once and mirrored as a link on
//! both of its stations; the store keeps the two sides in step on every
//! insert and removal.

mod builder;
mod connection;
mod error;
mod map;

pub use builder::{SubwayMapBuilder, demo_map};
pub use connection::{Connection, Link};
pub use error::NetworkError;
pub use map::{Station, SubwayMap};
