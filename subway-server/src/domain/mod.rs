//! Domain types for the subway map.
//!
//! Station names and line colours are validated when they are parsed, so
//! code that receives these types can trust their validity.

mod colour;
mod station;

pub use colour::{Colour, InvalidColour};
pub use station::{InvalidStationName, StationName};
