//! Web layer for the subway map.
//!
//! Provides HTTP endpoints for editing the map and finding routes.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
