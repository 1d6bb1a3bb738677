//! Read-only status summary: child-entity counts plus derived health
//! indicators computed from fixed thresholds.

use db::{
    DBService,
    models::{
        project::{Project, ProjectStatus},
        punchlist_item::{PunchlistItem, PunchlistStatusCounts},
        schedule_project::{ScheduleProject, ScheduleProjectStatusCounts},
    },
};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use ts_rs::TS;
use uuid::Uuid;

use super::status_coordinator::CoordinationError;

const ON_TRACK_COMPLETION_PCT: f64 = 75.0;
const FAIR_COMPLETION_PCT: f64 = 50.0;
const MANAGEABLE_CRITICAL_ITEMS: i64 = 2;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OverallHealth {
    Good,
    Fair,
    NeedsAttention,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct ProjectStatusSummary {
    pub project_id: Uuid,
    pub project_status: ProjectStatus,
    pub schedule_projects: ScheduleProjectStatusCounts,
    pub punchlist_items: PunchlistStatusCounts,
    pub open_critical_punchlist_items: i64,
    /// Percentage of schedule projects completed, 0-100.
    pub completion_rate: f64,
    pub schedule_on_track: bool,
    pub punchlist_manageable: bool,
    pub overall_health: OverallHealth,
}

/// Percentage of schedule projects completed. An empty schedule counts as 0.
pub fn completion_rate(counts: &ScheduleProjectStatusCounts) -> f64 {
    let total = counts.total();
    if total == 0 {
        return 0.0;
    }
    counts.completed as f64 / total as f64 * 100.0
}

pub fn derive_health(completion_rate: f64, open_critical: i64) -> OverallHealth {
    if completion_rate >= ON_TRACK_COMPLETION_PCT && open_critical == 0 {
        OverallHealth::Good
    } else if completion_rate >= FAIR_COMPLETION_PCT && open_critical <= MANAGEABLE_CRITICAL_ITEMS
    {
        OverallHealth::Fair
    } else {
        OverallHealth::NeedsAttention
    }
}

pub struct StatusSummaryService {
    db: DBService,
}

impl StatusSummaryService {
    pub fn new(db: DBService) -> Self {
        Self { db }
    }

    pub async fn get_summary(
        &self,
        project_id: Uuid,
        company_id: Uuid,
    ) -> Result<ProjectStatusSummary, CoordinationError> {
        let project = Project::find_by_id(&self.db.pool, project_id, company_id)
            .await?
            .ok_or(CoordinationError::ProjectNotFound)?;

        let schedule_projects =
            ScheduleProject::count_by_status(&self.db.pool, project_id, company_id).await?;
        let punchlist_items =
            PunchlistItem::count_by_status(&self.db.pool, project_id, company_id).await?;
        let open_critical =
            PunchlistItem::count_open_critical(&self.db.pool, project_id, company_id).await?;

        let rate = completion_rate(&schedule_projects);

        Ok(ProjectStatusSummary {
            project_id,
            project_status: project.status,
            schedule_projects,
            punchlist_items,
            open_critical_punchlist_items: open_critical,
            completion_rate: rate,
            schedule_on_track: rate >= ON_TRACK_COMPLETION_PCT,
            punchlist_manageable: open_critical <= MANAGEABLE_CRITICAL_ITEMS,
            overall_health: derive_health(rate, open_critical),
        })
    }
}
