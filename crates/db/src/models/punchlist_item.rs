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
#[sqlx(type_name = "punchlist_item_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PunchlistItemStatus {
    #[default]
    Open,
    InProgress,
    Completed,
}

#[derive(
    Debug, Clone, Type, Serialize, Deserialize, PartialEq, Eq, Hash, TS, EnumString, Display,
    Default,
)]
#[sqlx(type_name = "punchlist_priority", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PunchlistPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

/// Closeout punch item. Counted by the status coordinator and summary, never
/// mutated by them.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq, TS)]
pub struct PunchlistItem {
    pub id: Uuid,
    pub project_id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    pub status: PunchlistItemStatus,
    pub priority: PunchlistPriority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreatePunchlistItem {
    pub title: String,
    pub status: Option<PunchlistItemStatus>,
    pub priority: Option<PunchlistPriority>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
pub struct PunchlistStatusCounts {
    pub open: i64,
    pub in_progress: i64,
    pub completed: i64,
}

impl PunchlistStatusCounts {
    pub fn total(&self) -> i64 {
        self.open + self.in_progress + self.completed
    }
}

impl PunchlistItem {
    pub async fn find_by_project_id(
        pool: &SqlitePool,
        project_id: Uuid,
        company_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, PunchlistItem>(
            r#"SELECT id, project_id, company_id, title, status, priority, created_at, updated_at
               FROM punchlist_items
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
        data: &CreatePunchlistItem,
        id: Uuid,
        project_id: Uuid,
        company_id: Uuid,
    ) -> Result<Self, sqlx::Error> {
        let status = data.status.clone().unwrap_or_default();
        let priority = data.priority.clone().unwrap_or_default();
        sqlx::query_as::<_, PunchlistItem>(
            r#"INSERT INTO punchlist_items (id, project_id, company_id, title, status, priority)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING id, project_id, company_id, title, status, priority, created_at, updated_at"#,
        )
        .bind(id)
        .bind(project_id)
        .bind(company_id)
        .bind(&data.title)
        .bind(status)
        .bind(priority)
        .fetch_one(pool)
        .await
    }

    pub async fn count_by_status(
        pool: &SqlitePool,
        project_id: Uuid,
        company_id: Uuid,
    ) -> Result<PunchlistStatusCounts, sqlx::Error> {
        let rows: Vec<(PunchlistItemStatus, i64)> = sqlx::query_as(
            r#"SELECT status, COUNT(*)
               FROM punchlist_items
               WHERE project_id = $1 AND company_id = $2
               GROUP BY status"#,
        )
        .bind(project_id)
        .bind(company_id)
        .fetch_all(pool)
        .await?;

        let mut counts = PunchlistStatusCounts::default();
        for (status, count) in rows {
            match status {
                PunchlistItemStatus::Open => counts.open = count,
                PunchlistItemStatus::InProgress => counts.in_progress = count,
                PunchlistItemStatus::Completed => counts.completed = count,
            }
        }
        Ok(counts)
    }

    /// Critical items not yet completed. Feeds validation warnings and the
    /// health thresholds.
    pub async fn count_open_critical(
        pool: &SqlitePool,
        project_id: Uuid,
        company_id: Uuid,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*)
               FROM punchlist_items
               WHERE project_id = $1
                 AND company_id = $2
                 AND priority = 'critical'
                 AND status != 'completed'"#,
        )
        .bind(project_id)
        .bind(company_id)
        .fetch_one(pool)
        .await
    }
}
