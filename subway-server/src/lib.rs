//! Subway map server.
//!
//! Keeps a network of stations joined by coloured lines and answers:
//! "what is the route with the fewest stops from here to there, and which
//! lines can I take on each hop?"

pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
