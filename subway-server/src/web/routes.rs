//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::domain::{Colour, StationName};
use crate::network::{Connection, NetworkError};
use crate::planner::{RouteError, RouteFinder};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/stations", get(list_stations).post(create_station))
        .route(
            "/api/stations/:name",
            get(station_detail).delete(remove_station),
        )
        .route("/api/lines/:colour", get(line_connections))
        .route(
            "/api/connections",
            axum::routing::post(create_connection).delete(remove_connection),
        )
        .route("/route", get(find_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page listing stations and lines.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let map = state.map.read().await;
    let html = IndexTemplate::from_map(&map)
        .render()
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;
    Ok(Html(html))
}

/// List all stations, sorted by name.
async fn list_stations(State(state): State<AppState>) -> Json<StationListResponse> {
    let map = state.map.read().await;
    let stations = map
        .station_names()
        .into_iter()
        .filter_map(|name| map.station(name))
        .map(|station| StationSummary {
            name: station.name().to_string(),
            connections: station.degree(),
        })
        .collect();

    Json(StationListResponse { stations })
}

/// Add a station.
async fn create_station(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<StationDetail>), AppError> {
    let req: CreateStationRequest = parse_json(&body)?;
    let name = parse_station(&req.name)?;

    let mut map = state.map.write().await;
    map.insert_station(name.clone())?;
    info!(station = %name, "station added");

    let detail = map
        .station(&name)
        .map(StationDetail::from_station)
        .ok_or_else(|| AppError::Internal {
            message: format!("station {name} missing after insert"),
        })?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// Show a station and its connections.
async fn station_detail(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StationDetail>, AppError> {
    let name = parse_station(&name)?;
    let map = state.map.read().await;
    let station = map
        .station(&name)
        .ok_or(NetworkError::StationNotFound(name))?;
    Ok(Json(StationDetail::from_station(station)))
}

/// Remove a station and every connection touching it.
async fn remove_station(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RemoveStationResponse>, AppError> {
    let name = parse_station(&name)?;

    let mut map = state.map.write().await;
    let connections_removed = map.remove_station(&name)?;
    info!(station = %name, connections_removed, "station removed");

    Ok(Json(RemoveStationResponse {
        name: name.to_string(),
        connections_removed,
    }))
}

/// List the connections on one line.
async fn line_connections(
    State(state): State<AppState>,
    Path(colour): Path<String>,
) -> Result<Json<LineResponse>, AppError> {
    let colour = parse_colour(&colour)?;
    let map = state.map.read().await;
    let connections = map
        .connections_on(colour)
        .into_iter()
        .map(ConnectionResult::from_connection)
        .collect();

    Ok(Json(LineResponse {
        colour,
        connections,
    }))
}

/// Add a connection between two stations.
async fn create_connection(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ConnectionResult>), AppError> {
    let req: ConnectionRequest = parse_json(&body)?;
    let (from, to, colour) = parse_connection(&req)?;

    let mut map = state.map.write().await;
    map.insert_connection(&from, &to, colour)?;
    info!(%from, %to, %colour, "connection added");

    let connection = Connection::new(from, to, colour);
    Ok((
        StatusCode::CREATED,
        Json(ConnectionResult::from_connection(&connection)),
    ))
}

/// Remove one coloured connection between two stations.
async fn remove_connection(
    State(state): State<AppState>,
    query: Result<Query<ConnectionRequest>, QueryRejection>,
) -> Result<Json<ConnectionResult>, AppError> {
    let req = parse_query(query)?;
    let (from, to, colour) = parse_connection(&req)?;

    let mut map = state.map.write().await;
    map.remove_connection(&from, &to, colour)?;
    info!(%from, %to, %colour, "connection removed");

    let connection = Connection::new(from, to, colour);
    Ok(Json(ConnectionResult::from_connection(&connection)))
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Find the route with the fewest stops between two stations.
async fn find_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<RouteRequest>, QueryRejection>,
) -> Result<Response, AppError> {
    let req = parse_query(query)?;
    let from = parse_station(&req.from)?;
    let to = parse_station(&req.to)?;

    let map = state.map.read().await;
    let route = RouteFinder::new(&map).find(&from, &to)?;

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = RouteResultTemplate {
            route: RouteView::from_route(&route),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(RouteResponse::from_route(&route)).into_response())
    }
}

/// Parse a JSON body by hand so malformed input gets the usual error body.
fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest {
        message: format!("Invalid JSON: {e}"),
    })
}

/// Unwrap query parameters, turning a rejection into the usual error body.
fn parse_query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    query
        .map(|Query(req)| req)
        .map_err(|e| AppError::BadRequest {
            message: e.body_text(),
        })
}

fn parse_station(raw: &str) -> Result<StationName, AppError> {
    StationName::parse(raw).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })
}

fn parse_colour(raw: &str) -> Result<Colour, AppError> {
    Colour::parse(raw).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })
}

fn parse_connection(req: &ConnectionRequest) -> Result<(StationName, StationName, Colour), AppError> {
    Ok((
        parse_station(&req.from)?,
        parse_station(&req.to)?,
        parse_colour(&req.colour)?,
    ))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        let message = e.to_string();
        match e {
            NetworkError::StationNotFound(_) | NetworkError::ConnectionNotFound { .. } => {
                AppError::NotFound { message }
            }
            NetworkError::StationExists(_) | NetworkError::ConnectionExists { .. } => {
                AppError::Conflict { message }
            }
            NetworkError::SelfLoop(_) => AppError::BadRequest { message },
        }
    }
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        AppError::NotFound {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
