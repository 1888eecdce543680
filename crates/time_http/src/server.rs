use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::HeaderMap,
    routing::{get, post},
};
use chrono_tz::Tz;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::core::{
    clock::{Clock, SystemClock},
    error::{StartupError, StartupResult, TimeServerResult},
    models::{TimeInZonesRequest, TimeInZonesResponse},
    resolver::{self, ZoneTimeResolver},
};

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    clock: Arc<dyn Clock>,
    resolver: ZoneTimeResolver,
    local_timezone: Tz,
}

impl AppState {
    pub fn new(clock: Arc<dyn Clock>, local_timezone: Tz) -> Self {
        Self {
            clock,
            resolver: ZoneTimeResolver::new(),
            local_timezone,
        }
    }

    /// State backed by the system clock and the detected host timezone
    pub fn system() -> Self {
        Self::new(Arc::new(SystemClock), resolver::detect_local_timezone())
    }

    pub fn local_timezone_name(&self) -> &'static str {
        self.local_timezone.name()
    }
}

/// Build the HTTP routes of the time server
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/time", get(get_time))
        .route("/time/local", get(get_local_time))
        .route("/time/zones", post(post_time_in_zones))
        .route("/headers", get(get_headers))
        .route("/", get(get_headers))
        .with_state(state)
}

/// Current time in the reference zone, as plain text
pub(crate) async fn get_time(State(state): State<AppState>) -> String {
    let time = state.resolver.resolve_reference(state.clock.now());
    tracing::debug!("GET /time -> {}", time);
    time
}

/// Current offset time in the host timezone, as plain text
pub(crate) async fn get_local_time(State(state): State<AppState>) -> String {
    let time = state
        .resolver
        .local_offset_time(state.clock.now(), state.local_timezone);
    tracing::debug!("GET /time/local -> {}", time);
    time
}

/// Current local time in each requested zone, in request order
pub(crate) async fn post_time_in_zones(
    State(state): State<AppState>,
    Json(request): Json<TimeInZonesRequest>,
) -> TimeServerResult<Json<TimeInZonesResponse>> {
    tracing::debug!("POST /time/zones for {:?}", request.time_zones);

    let times = state
        .resolver
        .resolve(state.clock.now(), &request.time_zones)
        .inspect_err(|e| tracing::warn!("Rejected time zones request: {}", e))?;

    Ok(Json(TimeInZonesResponse { times }))
}

/// Echo request headers; the last value wins for repeated headers
pub(crate) async fn get_headers(headers: HeaderMap) -> Json<BTreeMap<String, String>> {
    let mut echoed = BTreeMap::new();
    for (name, value) in headers.iter() {
        echoed.insert(
            name.as_str().to_string(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        );
    }

    tracing::debug!("GET /headers echoing {} headers", echoed.len());
    Json(echoed)
}

/// Serve the time routes on an already bound listener until Ctrl+C
pub async fn serve(listener: TcpListener, state: AppState) -> StartupResult<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

pub async fn run(config: Config) -> StartupResult<()> {
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: config.bind_addr,
            source,
        })?;

    let state = AppState::system();
    tracing::info!(
        "Time server listening on http://{} (local timezone: {})",
        config.bind_addr,
        state.local_timezone_name()
    );

    serve(listener, state).await
}
