use axum::{extract::State, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::services::coordinator::EventCoordinator;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub active_events: usize,
    pub uptime_seconds: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub coordinator: Arc<EventCoordinator>,
    pub start_time: DateTime<Utc>,
}

pub struct HealthService {
    pub router: Router,
}

impl HealthService {
    pub fn new(coordinator: Arc<EventCoordinator>) -> Self {
        let state = AppState {
            coordinator,
            start_time: Utc::now(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/live", get(liveness_check))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        Self { router }
    }
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = Utc::now()
        .signed_duration_since(state.start_time)
        .num_seconds()
        .max(0) as u64;

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        active_events: state.coordinator.active_events(),
        uptime_seconds: uptime,
    })
}

async fn liveness_check() -> Json<&'static str> {
    // If this endpoint responds, the process is alive
    Json("alive")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_health_endpoint_counts_events() {
        let coordinator = Arc::new(EventCoordinator::in_memory());
        coordinator
            .propose(1, "Sync", "1 января 10:00, 2 января 10:00")
            .unwrap();

        let health_service = HealthService::new(coordinator.clone());
        let server = TestServer::new(health_service.router).expect("Failed to create test server");

        let response = server.get("/health").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let health_response: HealthResponse = response.json();
        assert_eq!(health_response.status, "healthy");
        assert_eq!(health_response.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(health_response.active_events, 1);

        coordinator.finalize(1).unwrap();
        let health_response: HealthResponse = server.get("/health").await.json();
        assert_eq!(health_response.active_events, 0);
    }

    #[tokio::test]
    async fn test_liveness_endpoint() {
        let health_service = HealthService::new(Arc::new(EventCoordinator::in_memory()));
        let server = TestServer::new(health_service.router).expect("Failed to create test server");

        let response = server.get("/health/live").await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let alive_response: String = response.json();
        assert_eq!(alive_response, "alive");
    }
}
