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
#[sqlx(type_name = "schedule_project_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ScheduleProjectStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
    Delayed,
    Cancelled,
}

impl ScheduleProjectStatus {
    pub const ALL: [ScheduleProjectStatus; 5] = [
        ScheduleProjectStatus::Planned,
        ScheduleProjectStatus::InProgress,
        ScheduleProjectStatus::Completed,
        ScheduleProjectStatus::Delayed,
        ScheduleProjectStatus::Cancelled,
    ];

    /// Terminal children are never forced back to a non-terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ScheduleProjectStatus::Completed | ScheduleProjectStatus::Cancelled
        )
    }
}

/// Work item scheduled under a project. Weak reference to its parent via
/// `project_id` + `company_id`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq, TS)]
pub struct ScheduleProject {
    pub id: Uuid,
    pub project_id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    pub status: ScheduleProjectStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateScheduleProject {
    pub title: String,
    pub status: Option<ScheduleProjectStatus>,
}

/// Schedule-project counts grouped by status, used by validation and the
/// status summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
pub struct ScheduleProjectStatusCounts {
    pub planned: i64,
    pub in_progress: i64,
    pub completed: i64,
    pub delayed: i64,
    pub cancelled: i64,
}

impl ScheduleProjectStatusCounts {
    pub fn total(&self) -> i64 {
        self.planned + self.in_progress + self.completed + self.delayed + self.cancelled
    }
}

impl ScheduleProject {
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: Uuid,
        company_id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, ScheduleProject>(
            r#"SELECT id, project_id, company_id, title, status, created_at, updated_at
               FROM schedule_projects
               WHERE id = $1 AND company_id = $2"#,
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(pool)
        .await
    }

    /// Full synchronous fetch of every schedule project under a project.
    pub async fn find_by_project_id(
        pool: &SqlitePool,
        project_id: Uuid,
        company_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, ScheduleProject>(
            r#"SELECT id, project_id, company_id, title, status, created_at, updated_at
               FROM schedule_projects
               WHERE project_id = $1 AND company_id = $2
               ORDER BY created_at ASC"#,
        )
        .bind(project_id)
        .bind(company_id)
        .fetch_all(pool)
        .await
    }

    pub async fn create(
        pool: &SqlitePool,
        data: &CreateScheduleProject,
        id: Uuid,
        project_id: Uuid,
        company_id: Uuid,
    ) -> Result<Self, sqlx::Error> {
        let status = data.status.clone().unwrap_or_default();
        sqlx::query_as::<_, ScheduleProject>(
            r#"INSERT INTO schedule_projects (id, project_id, company_id, title, status)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id, project_id, company_id, title, status, created_at, updated_at"#,
        )
        .bind(id)
        .bind(project_id)
        .bind(company_id)
        .bind(&data.title)
        .bind(status)
        .fetch_one(pool)
        .await
    }

    /// Tenant-scoped status write. Returns `None` when the row is gone or
    /// belongs to another tenant.
    pub async fn update_status(
        pool: &SqlitePool,
        id: Uuid,
        company_id: Uuid,
        status: ScheduleProjectStatus,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, ScheduleProject>(
            r#"UPDATE schedule_projects
               SET status = $3, updated_at = datetime('now', 'subsec')
               WHERE id = $1 AND company_id = $2
               RETURNING id, project_id, company_id, title, status, created_at, updated_at"#,
        )
        .bind(id)
        .bind(company_id)
        .bind(status)
        .fetch_optional(pool)
        .await
    }

    pub async fn count_by_status(
        pool: &SqlitePool,
        project_id: Uuid,
        company_id: Uuid,
    ) -> Result<ScheduleProjectStatusCounts, sqlx::Error> {
        let rows: Vec<(ScheduleProjectStatus, i64)> = sqlx::query_as(
            r#"SELECT status, COUNT(*)
               FROM schedule_projects
               WHERE project_id = $1 AND company_id = $2
               GROUP BY status"#,
        )
        .bind(project_id)
        .bind(company_id)
        .fetch_all(pool)
        .await?;

        let mut counts = ScheduleProjectStatusCounts::default();
        for (status, count) in rows {
            match status {
                ScheduleProjectStatus::Planned => counts.planned = count,
                ScheduleProjectStatus::InProgress => counts.in_progress = count,
                ScheduleProjectStatus::Completed => counts.completed = count,
                ScheduleProjectStatus::Delayed => counts.delayed = count,
                ScheduleProjectStatus::Cancelled => counts.cancelled = count,
            }
        }
        Ok(counts)
    }
}
