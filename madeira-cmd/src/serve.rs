//! HTTP server for the dashboard.
//!
//! The table is loaded once before the listener binds; a missing or
//! malformed file stops startup. Handlers share it read-only and keep no
//! per-client state: each request carries the page's state snapshot and the
//! event, and the response carries the new snapshot and the outputs to redraw.
//!
//! # Routes
//!
//! - `GET /` -- dashboard page
//! - `GET /assets/js/:name` -- embedded D3.js scripts
//! - `GET /api/layout` -- dropdown options plus the initial outputs
//! - `POST /api/update` -- `{ event, state }` -> `{ state, updates }`
//!
//! Every rejected API request answers with a `{ "error": ... }` JSON body.
//! - `GET /health`

use anyhow::Context;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path as UrlPath, Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{info, warn};
use madeira_chart_ui::assets;
use madeira_chart_ui::{CallbackGraph, DashboardError, DashboardState, Dispatch, Event, OutputUpdate};
use madeira_sales::SalesTable;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;

#[derive(Clone)]
pub struct AppState {
    table: Arc<SalesTable>,
    graph: Arc<CallbackGraph>,
}

impl AppState {
    pub fn new(table: SalesTable) -> anyhow::Result<Self> {
        Ok(Self {
            table: Arc::new(table),
            graph: Arc::new(CallbackGraph::dashboard()?),
        })
    }
}

/// One dropdown entry: the species name and its position.
#[derive(Debug, Serialize, PartialEq)]
pub struct SpeciesOption {
    pub label: String,
    pub value: usize,
}

#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub species: Vec<SpeciesOption>,
    pub state: DashboardState,
    pub updates: Vec<OutputUpdate>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub event: Event,
    #[serde(default)]
    pub state: DashboardState,
}

/// Rejected API request, reported as `{ "error": ... }`.
pub enum ApiError {
    /// State or event that does not fit the loaded table (400).
    Dashboard(DashboardError),
    /// Body that is not a valid update request; keeps axum's status.
    Body(JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Dashboard(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Body(rejection) => (rejection.status(), rejection.body_text()),
        };
        warn!("rejected dashboard request: {}", message);
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<DashboardError> for ApiError {
    fn from(err: DashboardError) -> Self {
        ApiError::Dashboard(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Body(rejection)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/assets/js/:name", get(script))
        .route("/api/layout", get(layout))
        .route("/api/update", post(update))
        .route("/health", get(health))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(assets::INDEX_HTML)
}

async fn script(UrlPath(name): UrlPath<String>) -> Response {
    match assets::script(&name) {
        Some(body) => ([(header::CONTENT_TYPE, "application/javascript")], body).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn layout(State(app): State<AppState>) -> Result<Json<LayoutResponse>, ApiError> {
    let species = app
        .table
        .species()
        .iter()
        .enumerate()
        .map(|(value, label)| SpeciesOption {
            label: label.clone(),
            value,
        })
        .collect();
    let Dispatch { state, updates } = app.graph.initial(&app.table, DashboardState::default())?;
    Ok(Json(LayoutResponse {
        species,
        state,
        updates,
    }))
}

async fn update(
    State(app): State<AppState>,
    payload: Result<Json<UpdateRequest>, JsonRejection>,
) -> Result<Json<Dispatch>, ApiError> {
    let Json(request) = payload?;
    let dispatch = app
        .graph
        .dispatch(&app.table, request.state, request.event)?;
    Ok(Json(dispatch))
}

async fn health() -> &'static str {
    "ok"
}

async fn log_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    info!(
        "{} {} -> {} in {}ms",
        method,
        path,
        response.status().as_u16(),
        start.elapsed().as_millis()
    );
    response
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

/// Load the sales data, bind `host:port` and serve until Ctrl-C.
pub async fn run_serve(data: &Path, host: &str, port: u16) -> anyhow::Result<()> {
    let table = SalesTable::from_path(data)
        .with_context(|| format!("failed to load sales data from {}", data.display()))?;
    info!(
        "{} species, {} presentations",
        table.species().len(),
        table.presentations().len()
    );

    let app = router(AppState::new(table)?);
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {}:{}", host, port))?;
    info!("dashboard listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
