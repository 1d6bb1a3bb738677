use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool, Type};
use strum_macros::{Display, EnumString};
use ts_rs::TS;
use uuid::Uuid;

#[derive(
    Debug, Clone, Type, Serialize, Deserialize, PartialEq, Eq, Hash, TS, EnumString, Display,
    Default,
)]
#[sqlx(type_name = "project_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    NotStarted,
    InProgress,
    OnTrack,
    AheadOfSchedule,
    BehindSchedule,
    OnHold,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 8] = [
        ProjectStatus::NotStarted,
        ProjectStatus::InProgress,
        ProjectStatus::OnTrack,
        ProjectStatus::AheadOfSchedule,
        ProjectStatus::BehindSchedule,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
        ProjectStatus::Cancelled,
    ];

    /// Terminal statuses require explicit validator approval to exit.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProjectStatus::Completed | ProjectStatus::Cancelled)
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq, TS)]
pub struct Project {
    pub id: Uuid,
    pub company_id: Uuid, // Tenant scope; every query filters on this
    pub name: String,
    pub notes: Option<String>,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateProject {
    pub name: String,
    pub notes: Option<String>,
    pub status: Option<ProjectStatus>,
}

impl Project {
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: Uuid,
        company_id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Project>(
            r#"SELECT id, company_id, name, notes, status, created_at, updated_at
               FROM projects
               WHERE id = $1 AND company_id = $2"#,
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_all(pool: &SqlitePool, company_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Project>(
            r#"SELECT id, company_id, name, notes, status, created_at, updated_at
               FROM projects
               WHERE company_id = $1
               ORDER BY created_at DESC"#,
        )
        .bind(company_id)
        .fetch_all(pool)
        .await
    }

    pub async fn create(
        pool: &SqlitePool,
        data: &CreateProject,
        id: Uuid,
        company_id: Uuid,
    ) -> Result<Self, sqlx::Error> {
        let status = data.status.clone().unwrap_or_default();
        sqlx::query_as::<_, Project>(
            r#"INSERT INTO projects (id, company_id, name, notes, status)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id, company_id, name, notes, status, created_at, updated_at"#,
        )
        .bind(id)
        .bind(company_id)
        .bind(&data.name)
        .bind(&data.notes)
        .bind(status)
        .fetch_one(pool)
        .await
    }

    /// Write the new status only if the row still carries `expected_status`.
    ///
    /// Returns `None` when the guard does not match (the project was mutated
    /// concurrently or does not exist in this tenant); the caller decides
    /// whether to retry or report a conflict.
    pub async fn update_status_guarded(
        pool: &SqlitePool,
        id: Uuid,
        company_id: Uuid,
        expected_status: ProjectStatus,
        new_status: ProjectStatus,
        notes: Option<&str>,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Project>(
            r#"UPDATE projects
               SET status = $4,
                   notes = COALESCE($5, notes),
                   updated_at = datetime('now', 'subsec')
               WHERE id = $1 AND company_id = $2 AND status = $3
               RETURNING id, company_id, name, notes, status, created_at, updated_at"#,
        )
        .bind(id)
        .bind(company_id)
        .bind(expected_status)
        .bind(new_status)
        .bind(notes)
        .fetch_optional(pool)
        .await
    }
}
