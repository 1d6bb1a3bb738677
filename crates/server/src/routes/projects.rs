//! Routes for projects and status coordination.

use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::{get, post},
};
use db::models::project::{CreateProject, Project, ProjectStatus};
use serde::{Deserialize, Serialize};
use services::services::{
    status_coordinator::{FailedScheduleProject, UpdatedScheduleProject},
    status_summary::ProjectStatusSummary,
    status_validator::StatusValidationResult,
};
use ts_rs::TS;
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError, middleware::identity::Identity};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpdateProjectStatusRequest {
    pub status: ProjectStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ValidateStatusChangeRequest {
    pub new_status: ProjectStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CascadeResults {
    pub schedule_projects_updated: usize,
    pub schedule_projects_skipped: usize,
    pub schedule_projects_failed: usize,
    pub updated_schedule_projects: Vec<UpdatedScheduleProject>,
    pub failed_schedule_projects: Vec<FailedScheduleProject>,
}

/// Body of the coordination endpoint. `project` is absent when the
/// transition was blocked; `blockers` then says why, item by item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct StatusCoordinationResponse {
    pub project: Option<Project>,
    pub warnings: Vec<String>,
    pub blockers: Vec<String>,
    pub cascade_results: CascadeResults,
}

/// POST /api/projects/{project_id}/status-coordinated
///
/// Validates and commits a project status change, cascading to schedule
/// projects per the declared policy.
pub async fn update_project_status_coordinated(
    State(state): State<AppState>,
    identity: Identity,
    Path(project_id): Path<Uuid>,
    axum::Json(payload): axum::Json<serde_json::Value>,
) -> Result<ResponseJson<ApiResponse<StatusCoordinationResponse>>, ApiError> {
    // Parse by hand so a bad status enum is a 400, not the coordinator's
    // blocker classification.
    let payload: UpdateProjectStatusRequest = serde_json::from_value(payload)
        .map_err(|e| ApiError::ValidationFailed(e.to_string()))?;

    let result = state
        .coordinator()
        .update_project_status_with_cascade(
            project_id,
            identity.company_id,
            payload.status,
            payload.notes,
            Some(identity.user_id),
        )
        .await?;

    let response = StatusCoordinationResponse {
        project: result.project,
        warnings: result.warnings,
        blockers: result.blockers,
        cascade_results: CascadeResults {
            schedule_projects_updated: result.updated_count,
            schedule_projects_skipped: result.skipped_count,
            schedule_projects_failed: result.failed_count,
            updated_schedule_projects: result.updated_schedule_projects,
            failed_schedule_projects: result.failed_schedule_projects,
        },
    };

    Ok(ResponseJson(ApiResponse {
        success: result.success,
        data: Some(response),
        message: Some(result.message),
        error: result.error,
    }))
}

/// POST /api/projects/{project_id}/validate-status-change
///
/// Dry-run validation so the UI can warn or block before committing.
pub async fn validate_status_change(
    State(state): State<AppState>,
    identity: Identity,
    Path(project_id): Path<Uuid>,
    axum::Json(payload): axum::Json<serde_json::Value>,
) -> Result<ResponseJson<ApiResponse<StatusValidationResult>>, ApiError> {
    let payload: ValidateStatusChangeRequest = serde_json::from_value(payload)
        .map_err(|e| ApiError::ValidationFailed(e.to_string()))?;

    let validation = state
        .coordinator()
        .validate(project_id, identity.company_id, &payload.new_status)
        .await?;

    Ok(ResponseJson(ApiResponse::success(validation)))
}

/// GET /api/projects/{project_id}/status-summary
pub async fn get_status_summary(
    State(state): State<AppState>,
    identity: Identity,
    Path(project_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<ProjectStatusSummary>>, ApiError> {
    let summary = state
        .summary_service()
        .get_summary(project_id, identity.company_id)
        .await?;
    Ok(ResponseJson(ApiResponse::success(summary)))
}

pub async fn list_projects(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<ResponseJson<ApiResponse<Vec<Project>>>, ApiError> {
    let projects = Project::find_all(&state.db.pool, identity.company_id).await?;
    Ok(ResponseJson(ApiResponse::success(projects)))
}

pub async fn get_project(
    State(state): State<AppState>,
    identity: Identity,
    Path(project_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Project>>, ApiError> {
    let project = Project::find_by_id(&state.db.pool, project_id, identity.company_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(project)))
}

pub async fn create_project(
    State(state): State<AppState>,
    identity: Identity,
    axum::Json(payload): axum::Json<CreateProject>,
) -> Result<ResponseJson<ApiResponse<Project>>, ApiError> {
    let project = Project::create(
        &state.db.pool,
        &payload,
        Uuid::new_v4(),
        identity.company_id,
    )
    .await?;
    Ok(ResponseJson(ApiResponse::success(project)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .nest(
            "/projects/{project_id}",
            Router::new()
                .route("/", get(get_project))
                .route(
                    "/status-coordinated",
                    post(update_project_status_coordinated),
                )
                .route("/validate-status-change", post(validate_status_change))
                .route("/status-summary", get(get_status_summary)),
        )
}
