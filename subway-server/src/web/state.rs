//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::network::SubwayMap;

/// Shared application state.
///
/// The whole subway map sits behind one lock. Edits take it for writing;
/// route queries and listings take it for reading, since a search keeps its
/// visited set to itself.
#[derive(Clone)]
pub struct AppState {
    /// The subway map
    pub map: Arc<RwLock<SubwayMap>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(map: SubwayMap) -> Self {
        Self {
            map: Arc::new(RwLock::new(map)),
        }
    }
}
