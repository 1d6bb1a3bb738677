//! Routes for punchlist items under a project.

use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::{
    project::Project,
    punchlist_item::{CreatePunchlistItem, PunchlistItem},
};
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError, middleware::identity::Identity};

pub async fn list_punchlist_items(
    State(state): State<AppState>,
    identity: Identity,
    Path(project_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<Vec<PunchlistItem>>>, ApiError> {
    Project::find_by_id(&state.db.pool, project_id, identity.company_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let items =
        PunchlistItem::find_by_project_id(&state.db.pool, project_id, identity.company_id).await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

pub async fn create_punchlist_item(
    State(state): State<AppState>,
    identity: Identity,
    Path(project_id): Path<Uuid>,
    axum::Json(payload): axum::Json<CreatePunchlistItem>,
) -> Result<ResponseJson<ApiResponse<PunchlistItem>>, ApiError> {
    Project::find_by_id(&state.db.pool, project_id, identity.company_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let item = PunchlistItem::create(
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
        "/projects/{project_id}/punchlist-items",
        get(list_punchlist_items).post(create_punchlist_item),
    )
}
