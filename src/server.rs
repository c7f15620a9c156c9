use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::info;
use serde::Serialize;

use crate::config::AppConfig;
use crate::data::{SchedRequest, SchedResponse};
use crate::error::SchedError;
use crate::intake::{self, SolveTuning};

#[derive(Debug, Clone, Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
}

async fn sched_handler(
    State(config): State<AppConfig>,
    Json(request): Json<SchedRequest>,
) -> Result<Json<SchedResponse>, SchedError> {
    // the CP search is CPU-bound; keep it off the async workers
    let result = tokio::task::spawn_blocking(move || {
        intake::solve_request(&config, &request, &SolveTuning::default())
    })
    .await
    .expect("scheduling task panicked")?;
    Ok(Json(result))
}

async fn version_handler() -> Json<VersionInfo> {
    Json(VersionInfo {
        name: "course-sched",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router(config: AppConfig) -> Router {
    Router::new()
        .route("/sched", post(sched_handler))
        .route("/version", get(version_handler))
        .with_state(config)
}

pub async fn run_server(config: AppConfig) {
    let app = router(config);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .unwrap();
    info!("listening on http://{}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
