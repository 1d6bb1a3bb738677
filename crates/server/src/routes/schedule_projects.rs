//! Routes for schedule projects under a project.

use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::{
    project::Project,
    schedule_project::{CreateScheduleProject, ScheduleProject},
};
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError, middleware::identity::Identity};

pub async fn list_schedule_projects(
    State(state): State<AppState>,
    identity: Identity,
    Path(project_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Vec<ScheduleProject>>>, ApiError> {
    // Parent must exist in this tenant before exposing children.
    Project::find_by_id(&state.db.pool, project_id, identity.company_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let items =
        ScheduleProject::find_by_project_id(&state.db.pool, project_id, identity.company_id)
            .await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

pub async fn create_schedule_project(
    State(state): State<AppState>,
    identity: Identity,
    Path(project_id): Path<Uuid>,
    axum::Json(payload): axum::Json<CreateScheduleProject>,
) -> Result<ResponseJson<ApiResponse<ScheduleProject>>, ApiError> {
    Project::find_by_id(&state.db.pool, project_id, identity.company_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let item = ScheduleProject::create(
        &state.db.pool,
        &payload,
        Uuid::new_v4(),
        project_id,
        identity.company_id,
    )
    .await?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/projects/{project_id}/schedule-projects",
        get(list_schedule_projects).post(create_schedule_project),
    )
}
