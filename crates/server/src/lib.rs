pub mod error;
pub mod middleware;
pub mod routes;

use axum::Router;
use db::DBService;
use services::services::{
    status_coordinator::StatusCoordinator, status_summary::StatusSummaryService,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Request-scoped application state. The database handle is constructed once
/// at startup and injected; services are built per request on top of it.
#[derive(Clone)]
pub struct AppState {
    pub db: DBService,
}

impl AppState {
    pub fn new(db: DBService) -> Self {
        Self { db }
    }

    pub fn coordinator(&self) -> StatusCoordinator {
        StatusCoordinator::new(self.db.clone())
    }

    pub fn summary_service(&self) -> StatusSummaryService {
        StatusSummaryService::new(self.db.clone())
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
