pub mod projects;
pub mod punchlist_items;
pub mod schedule_projects;

use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(projects::router())
        .merge(schedule_projects::router())
        .merge(punchlist_items::router())
}
