//! Authoritative project status transitions with cascade to schedule
//! projects.
//!
//! One coordination call validates the transition, performs the single
//! authoritative project write (guarded against concurrent mutation), then
//! applies the declared cascade policy to every schedule project under the
//! project. Child writes are independent and run concurrently; one child's
//! failure never aborts its siblings and is reported in its own bucket.

use db::{
    DBService,
    models::{
        project::{Project, ProjectStatus},
        punchlist_item::PunchlistItem,
        schedule_project::{ScheduleProject, ScheduleProjectStatus},
    },
};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
use ts_rs::TS;
use uuid::Uuid;

use super::status_validator::{ChildEntityCounts, StatusValidationResult, validate_status_change};

#[derive(Debug, Error)]
pub enum CoordinationError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("project not found")]
    ProjectNotFound,
    #[error("project status was changed concurrently")]
    Conflict,
}

/// What the cascade policy does for one (project status, child status) pair.
#[derive(Debug, Clone, PartialEq)]
pub enum CascadeAction {
    Set(ScheduleProjectStatus),
    Skip,
}

pub struct CascadeRule {
    pub project_status: ProjectStatus,
    pub child_status: ScheduleProjectStatus,
    pub action: CascadeAction,
}

/// Declarative cascade policy. Pairs without an entry are skipped, and
/// terminal children are never cascaded regardless of the table. Pace
/// statuses (ahead/behind schedule) deliberately cascade nothing; schedule
/// items track their own delays.
pub const CASCADE_POLICY: &[CascadeRule] = &[
    CascadeRule {
        project_status: ProjectStatus::Completed,
        child_status: ScheduleProjectStatus::Planned,
        action: CascadeAction::Set(ScheduleProjectStatus::Completed),
    },
    CascadeRule {
        project_status: ProjectStatus::Completed,
        child_status: ScheduleProjectStatus::Delayed,
        action: CascadeAction::Set(ScheduleProjectStatus::Completed),
    },
    // Active work is not silently closed out; the validator warns instead.
    CascadeRule {
        project_status: ProjectStatus::Completed,
        child_status: ScheduleProjectStatus::InProgress,
        action: CascadeAction::Skip,
    },
    CascadeRule {
        project_status: ProjectStatus::Cancelled,
        child_status: ScheduleProjectStatus::Planned,
        action: CascadeAction::Set(ScheduleProjectStatus::Cancelled),
    },
    CascadeRule {
        project_status: ProjectStatus::Cancelled,
        child_status: ScheduleProjectStatus::InProgress,
        action: CascadeAction::Set(ScheduleProjectStatus::Cancelled),
    },
    CascadeRule {
        project_status: ProjectStatus::Cancelled,
        child_status: ScheduleProjectStatus::Delayed,
        action: CascadeAction::Set(ScheduleProjectStatus::Cancelled),
    },
    CascadeRule {
        project_status: ProjectStatus::OnHold,
        child_status: ScheduleProjectStatus::Planned,
        action: CascadeAction::Set(ScheduleProjectStatus::Delayed),
    },
    CascadeRule {
        project_status: ProjectStatus::OnHold,
        child_status: ScheduleProjectStatus::InProgress,
        action: CascadeAction::Set(ScheduleProjectStatus::Delayed),
    },
];

/// Resolve the cascade target for one child, or `None` to skip.
///
/// Invariants enforced here rather than trusted from the table: terminal
/// children are never moved, and a child already at the target status is
/// skipped so retries stay idempotent.
pub fn cascade_target(
    project_status: &ProjectStatus,
    child_status: &ScheduleProjectStatus,
) -> Option<ScheduleProjectStatus> {
    if child_status.is_terminal() {
        return None;
    }
    let rule = CASCADE_POLICY
        .iter()
        .find(|r| r.project_status == *project_status && r.child_status == *child_status)?;
    match &rule.action {
        CascadeAction::Set(target) if target != child_status => Some(target.clone()),
        _ => None,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct UpdatedScheduleProject {
    pub id: Uuid,
    pub title: String,
    pub new_status: ScheduleProjectStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct FailedScheduleProject {
    pub id: Uuid,
    pub title: String,
    pub error: String,
}

/// Outcome of one coordination call. Constructed fresh per call, returned to
/// the caller, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct StatusCoordinationResult {
    pub success: bool,
    pub project: Option<Project>,
    pub updated_count: usize,
    pub skipped_count: usize,
    pub failed_count: usize,
    pub updated_schedule_projects: Vec<UpdatedScheduleProject>,
    pub failed_schedule_projects: Vec<FailedScheduleProject>,
    pub warnings: Vec<String>,
    pub blockers: Vec<String>,
    pub message: String,
    pub error: Option<String>,
}

impl StatusCoordinationResult {
    fn blocked(validation: StatusValidationResult) -> Self {
        Self {
            success: false,
            project: None,
            updated_count: 0,
            skipped_count: 0,
            failed_count: 0,
            updated_schedule_projects: Vec::new(),
            failed_schedule_projects: Vec::new(),
            message: format!(
                "Status change blocked: {}",
                validation.blockers.join("; ")
            ),
            warnings: validation.warnings,
            blockers: validation.blockers,
            error: None,
        }
    }
}

/// Orchestrates validated status transitions and their cascade.
pub struct StatusCoordinator {
    db: DBService,
}

impl StatusCoordinator {
    pub fn new(db: DBService) -> Self {
        Self { db }
    }

    /// Current child-entity counts for a project, tenant-scoped.
    pub async fn child_entity_counts(
        &self,
        project_id: Uuid,
        company_id: Uuid,
    ) -> Result<ChildEntityCounts, CoordinationError> {
        let schedule_projects =
            ScheduleProject::count_by_status(&self.db.pool, project_id, company_id).await?;
        let punchlist_items =
            PunchlistItem::count_by_status(&self.db.pool, project_id, company_id).await?;
        let open_critical_punchlist_items =
            PunchlistItem::count_open_critical(&self.db.pool, project_id, company_id).await?;

        Ok(ChildEntityCounts {
            schedule_projects,
            punchlist_items,
            open_critical_punchlist_items,
        })
    }

    /// Dry-run validation of a proposed transition, for the UI to warn or
    /// block before committing.
    pub async fn validate(
        &self,
        project_id: Uuid,
        company_id: Uuid,
        new_status: &ProjectStatus,
    ) -> Result<StatusValidationResult, CoordinationError> {
        let project = Project::find_by_id(&self.db.pool, project_id, company_id)
            .await?
            .ok_or(CoordinationError::ProjectNotFound)?;
        let counts = self.child_entity_counts(project_id, company_id).await?;
        Ok(validate_status_change(&project.status, new_status, &counts))
    }

    /// Validate, commit the project status, and cascade to schedule projects.
    ///
    /// Blocked transitions and partial cascade failures come back as
    /// structured results, not errors; `Err` is reserved for missing
    /// projects, unresolved write conflicts, and database failures.
    pub async fn update_project_status_with_cascade(
        &self,
        project_id: Uuid,
        company_id: Uuid,
        new_status: ProjectStatus,
        notes: Option<String>,
        acting_user_id: Option<Uuid>,
    ) -> Result<StatusCoordinationResult, CoordinationError> {
        let pool = &self.db.pool;

        let project = Project::find_by_id(pool, project_id, company_id)
            .await?
            .ok_or(CoordinationError::ProjectNotFound)?;

        let counts = self.child_entity_counts(project_id, company_id).await?;
        let mut validation = validate_status_change(&project.status, &new_status, &counts);
        if !validation.can_change {
            info!(
                %project_id,
                current_status = %project.status,
                requested_status = %new_status,
                blockers = validation.blockers.len(),
                "status change blocked by validation"
            );
            return Ok(StatusCoordinationResult::blocked(validation));
        }

        // Authoritative write, guarded by the status observed during
        // validation. A stale guard means a concurrent mutation: re-read and
        // retry once, then report a conflict.
        let updated_project = match Project::update_status_guarded(
            pool,
            project_id,
            company_id,
            project.status.clone(),
            new_status.clone(),
            notes.as_deref(),
        )
        .await?
        {
            Some(updated) => updated,
            None => {
                let fresh = Project::find_by_id(pool, project_id, company_id)
                    .await?
                    .ok_or(CoordinationError::ProjectNotFound)?;
                warn!(
                    %project_id,
                    observed_status = %project.status,
                    fresh_status = %fresh.status,
                    "concurrent status change detected, retrying once"
                );
                let fresh_counts = self.child_entity_counts(project_id, company_id).await?;
                validation = validate_status_change(&fresh.status, &new_status, &fresh_counts);
                if !validation.can_change {
                    return Ok(StatusCoordinationResult::blocked(validation));
                }
                Project::update_status_guarded(
                    pool,
                    project_id,
                    company_id,
                    fresh.status,
                    new_status.clone(),
                    notes.as_deref(),
                )
                .await?
                .ok_or(CoordinationError::Conflict)?
            }
        };

        info!(
            %project_id,
            %company_id,
            acting_user_id = ?acting_user_id,
            new_status = %new_status,
            "project status updated"
        );

        let children = ScheduleProject::find_by_project_id(pool, project_id, company_id).await?;

        let mut skipped_count = 0usize;
        let mut pending: Vec<(ScheduleProject, ScheduleProjectStatus)> = Vec::new();
        for child in children {
            match cascade_target(&new_status, &child.status) {
                Some(target) => pending.push((child, target)),
                None => skipped_count += 1,
            }
        }

        // Sibling writes are independent; run them concurrently and collect
        // per-child outcomes without letting one failure abort the rest.
        let outcomes = join_all(pending.into_iter().map(|(child, target)| {
            let pool = pool.clone();
            async move {
                match ScheduleProject::update_status(&pool, child.id, company_id, target).await {
                    Ok(Some(updated)) => Ok(UpdatedScheduleProject {
                        id: updated.id,
                        title: updated.title,
                        new_status: updated.status,
                    }),
                    Ok(None) => Err(FailedScheduleProject {
                        id: child.id,
                        title: child.title,
                        error: "schedule project no longer exists".to_string(),
                    }),
                    Err(e) => Err(FailedScheduleProject {
                        id: child.id,
                        title: child.title,
                        error: e.to_string(),
                    }),
                }
            }
        }))
        .await;

        let mut updated_schedule_projects = Vec::new();
        let mut failed_schedule_projects = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(updated) => updated_schedule_projects.push(updated),
                Err(failed) => {
                    warn!(
                        schedule_project_id = %failed.id,
                        error = %failed.error,
                        "cascade write failed"
                    );
                    failed_schedule_projects.push(failed);
                }
            }
        }

        let updated_count = updated_schedule_projects.len();
        let failed_count = failed_schedule_projects.len();

        let message = if failed_count == 0 {
            format!(
                "Project status updated to {new_status}; {updated_count} schedule project(s) updated, {skipped_count} skipped"
            )
        } else {
            format!(
                "Project status updated to {new_status}; {updated_count} schedule project(s) updated, {skipped_count} skipped, {failed_count} failed"
            )
        };
        let error = (failed_count > 0)
            .then(|| format!("{failed_count} schedule project update(s) failed"));

        Ok(StatusCoordinationResult {
            success: true,
            project: Some(updated_project),
            updated_count,
            skipped_count,
            failed_count,
            updated_schedule_projects,
            failed_schedule_projects,
            warnings: validation.warnings,
            blockers: validation.blockers,
            message,
            error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::models::{
        project::CreateProject, schedule_project::CreateScheduleProject,
    };

    #[test]
    fn policy_never_touches_terminal_children() {
        for rule in CASCADE_POLICY {
            assert!(
                !rule.child_status.is_terminal(),
                "policy must not map terminal child status {}",
                rule.child_status
            );
        }
        for project_status in &ProjectStatus::ALL {
            for child_status in [
                ScheduleProjectStatus::Completed,
                ScheduleProjectStatus::Cancelled,
            ] {
                assert_eq!(cascade_target(project_status, &child_status), None);
            }
        }
    }

    #[test]
    fn policy_never_maps_a_child_onto_its_own_status() {
        for rule in CASCADE_POLICY {
            if let CascadeAction::Set(target) = &rule.action {
                assert_ne!(target, &rule.child_status);
            }
        }
    }

    #[test]
    fn pace_statuses_cascade_nothing() {
        for project_status in [
            ProjectStatus::AheadOfSchedule,
            ProjectStatus::BehindSchedule,
            ProjectStatus::InProgress,
            ProjectStatus::NotStarted,
        ] {
            for child_status in &ScheduleProjectStatus::ALL {
                assert_eq!(cascade_target(&project_status, child_status), None);
            }
        }
    }

    async fn seed(
        db: &DBService,
        company_id: Uuid,
        child_statuses: &[ScheduleProjectStatus],
        project_status: ProjectStatus,
    ) -> Project {
        let project = Project::create(
            &db.pool,
            &CreateProject {
                name: "Main Street Renovation".to_string(),
                notes: None,
                status: Some(project_status),
            },
            Uuid::new_v4(),
            company_id,
        )
        .await
        .unwrap();

        for (i, status) in child_statuses.iter().enumerate() {
            ScheduleProject::create(
                &db.pool,
                &CreateScheduleProject {
                    title: format!("Phase {}", i + 1),
                    status: Some(status.clone()),
                },
                Uuid::new_v4(),
                project.id,
                company_id,
            )
            .await
            .unwrap();
        }

        project
    }

    #[tokio::test]
    async fn completing_project_cascades_planned_and_delayed_children() {
        let db = DBService::new_in_memory().await.unwrap();
        let company_id = Uuid::new_v4();
        let project = seed(
            &db,
            company_id,
            &[
                ScheduleProjectStatus::Planned,
                ScheduleProjectStatus::Planned,
                ScheduleProjectStatus::InProgress,
            ],
            ProjectStatus::InProgress,
        )
        .await;

        let coordinator = StatusCoordinator::new(db.clone());
        let result = coordinator
            .update_project_status_with_cascade(
                project.id,
                company_id,
                ProjectStatus::Completed,
                None,
                None,
            )
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(result.updated_count, 2);
        assert_eq!(result.skipped_count, 1);
        assert_eq!(result.failed_count, 0);
        assert_eq!(
            result.project.as_ref().map(|p| p.status.clone()),
            Some(ProjectStatus::Completed)
        );
        // Active work was warned about, not silently closed.
        assert_eq!(result.warnings.len(), 1);

        let children = ScheduleProject::find_by_project_id(&db.pool, project.id, company_id)
            .await
            .unwrap();
        let completed = children
            .iter()
            .filter(|c| c.status == ScheduleProjectStatus::Completed)
            .count();
        let in_progress = children
            .iter()
            .filter(|c| c.status == ScheduleProjectStatus::InProgress)
            .count();
        assert_eq!(completed, 2);
        assert_eq!(in_progress, 1);
    }

    #[tokio::test]
    async fn repeating_the_same_transition_is_idempotent() {
        let db = DBService::new_in_memory().await.unwrap();
        let company_id = Uuid::new_v4();
        let project = seed(
            &db,
            company_id,
            &[
                ScheduleProjectStatus::Planned,
                ScheduleProjectStatus::Planned,
                ScheduleProjectStatus::InProgress,
            ],
            ProjectStatus::InProgress,
        )
        .await;

        let coordinator = StatusCoordinator::new(db.clone());
        let first = coordinator
            .update_project_status_with_cascade(
                project.id,
                company_id,
                ProjectStatus::Completed,
                None,
                None,
            )
            .await
            .unwrap();
        assert_eq!(first.updated_count, 2);

        let second = coordinator
            .update_project_status_with_cascade(
                project.id,
                company_id,
                ProjectStatus::Completed,
                None,
                None,
            )
            .await
            .unwrap();
        assert!(second.success);
        assert_eq!(second.updated_count, 0);
        assert_eq!(second.skipped_count, 3);
    }

    #[tokio::test]
    async fn cancelling_project_cancels_all_active_children() {
        let db = DBService::new_in_memory().await.unwrap();
        let company_id = Uuid::new_v4();
        let project = seed(
            &db,
            company_id,
            &[
                ScheduleProjectStatus::Planned,
                ScheduleProjectStatus::InProgress,
                ScheduleProjectStatus::Delayed,
                ScheduleProjectStatus::Completed,
            ],
            ProjectStatus::BehindSchedule,
        )
        .await;

        let coordinator = StatusCoordinator::new(db.clone());
        let result = coordinator
            .update_project_status_with_cascade(
                project.id,
                company_id,
                ProjectStatus::Cancelled,
                Some("funding withdrawn".to_string()),
                None,
            )
            .await
            .unwrap();

        assert_eq!(result.updated_count, 3);
        assert_eq!(result.skipped_count, 1);

        let children = ScheduleProject::find_by_project_id(&db.pool, project.id, company_id)
            .await
            .unwrap();
        assert_eq!(
            children
                .iter()
                .filter(|c| c.status == ScheduleProjectStatus::Cancelled)
                .count(),
            3
        );
        // The completed child was left alone.
        assert_eq!(
            children
                .iter()
                .filter(|c| c.status == ScheduleProjectStatus::Completed)
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn putting_project_on_hold_delays_active_children() {
        let db = DBService::new_in_memory().await.unwrap();
        let company_id = Uuid::new_v4();
        let project = seed(
            &db,
            company_id,
            &[
                ScheduleProjectStatus::Planned,
                ScheduleProjectStatus::InProgress,
                ScheduleProjectStatus::Delayed,
            ],
            ProjectStatus::OnTrack,
        )
        .await;

        let coordinator = StatusCoordinator::new(db.clone());
        let result = coordinator
            .update_project_status_with_cascade(
                project.id,
                company_id,
                ProjectStatus::OnHold,
                None,
                None,
            )
            .await
            .unwrap();

        assert_eq!(result.updated_count, 2);
        // The already-delayed child stays put.
        assert_eq!(result.skipped_count, 1);
    }

    #[tokio::test]
    async fn unknown_project_yields_not_found_and_no_writes() {
        let db = DBService::new_in_memory().await.unwrap();
        let company_id = Uuid::new_v4();
        seed(
            &db,
            company_id,
            &[ScheduleProjectStatus::Planned],
            ProjectStatus::InProgress,
        )
        .await;

        let coordinator = StatusCoordinator::new(db.clone());
        let err = coordinator
            .update_project_status_with_cascade(
                Uuid::new_v4(),
                company_id,
                ProjectStatus::Completed,
                None,
                None,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CoordinationError::ProjectNotFound));
    }

    #[tokio::test]
    async fn cross_tenant_access_fails_closed() {
        let db = DBService::new_in_memory().await.unwrap();
        let company_id = Uuid::new_v4();
        let project = seed(
            &db,
            company_id,
            &[ScheduleProjectStatus::Planned],
            ProjectStatus::InProgress,
        )
        .await;

        let coordinator = StatusCoordinator::new(db.clone());
        let err = coordinator
            .update_project_status_with_cascade(
                project.id,
                Uuid::new_v4(),
                ProjectStatus::Completed,
                None,
                None,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CoordinationError::ProjectNotFound));

        // Nothing was written for the real tenant.
        let unchanged = Project::find_by_id(&db.pool, project.id, company_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(unchanged.status, ProjectStatus::InProgress);
    }

    #[tokio::test]
    async fn blocked_transition_writes_nothing() {
        let db = DBService::new_in_memory().await.unwrap();
        let company_id = Uuid::new_v4();
        let project = seed(
            &db,
            company_id,
            &[
                ScheduleProjectStatus::Completed,
                ScheduleProjectStatus::Planned,
            ],
            ProjectStatus::Cancelled,
        )
        .await;

        let coordinator = StatusCoordinator::new(db.clone());
        let result = coordinator
            .update_project_status_with_cascade(
                project.id,
                company_id,
                ProjectStatus::InProgress,
                None,
                None,
            )
            .await
            .unwrap();

        assert!(!result.success);
        assert!(!result.blockers.is_empty());
        assert_eq!(result.updated_count, 0);

        let unchanged = Project::find_by_id(&db.pool, project.id, company_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(unchanged.status, ProjectStatus::Cancelled);
    }

    #[tokio::test]
    async fn reviving_cancelled_project_without_completed_work_succeeds() {
        let db = DBService::new_in_memory().await.unwrap();
        let company_id = Uuid::new_v4();
        let project = seed(
            &db,
            company_id,
            &[ScheduleProjectStatus::Planned],
            ProjectStatus::Cancelled,
        )
        .await;

        let coordinator = StatusCoordinator::new(db.clone());
        let result = coordinator
            .update_project_status_with_cascade(
                project.id,
                company_id,
                ProjectStatus::InProgress,
                None,
                None,
            )
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(
            result.project.map(|p| p.status),
            Some(ProjectStatus::InProgress)
        );
    }

    #[tokio::test]
    async fn one_failing_child_is_reported_without_aborting_siblings() {
        let db = DBService::new_in_memory().await.unwrap();
        let company_id = Uuid::new_v4();
        let project = seed(
            &db,
            company_id,
            &[
                ScheduleProjectStatus::Planned,
                ScheduleProjectStatus::Planned,
            ],
            ProjectStatus::InProgress,
        )
        .await;

        // Reject status writes for one child so its cascade write errors.
        sqlx::query(
            r#"CREATE TRIGGER reject_phase_two_writes
               BEFORE UPDATE ON schedule_projects
               FOR EACH ROW WHEN OLD.title = 'Phase 2'
               BEGIN SELECT RAISE(ABORT, 'schedule project row is locked'); END"#,
        )
        .execute(&db.pool)
        .await
        .unwrap();

        let coordinator = StatusCoordinator::new(db.clone());
        let result = coordinator
            .update_project_status_with_cascade(
                project.id,
                company_id,
                ProjectStatus::Completed,
                None,
                None,
            )
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(result.updated_count, 1);
        assert_eq!(result.skipped_count, 0);
        assert_eq!(result.failed_count, 1);
        assert_eq!(result.failed_schedule_projects.len(), 1);
        assert_eq!(result.failed_schedule_projects[0].title, "Phase 2");
        assert!(!result.failed_schedule_projects[0].error.is_empty());
        assert!(result.error.is_some());
        assert!(result.message.contains("1 failed"));

        // The sibling's write landed despite the failure.
        let children = ScheduleProject::find_by_project_id(&db.pool, project.id, company_id)
            .await
            .unwrap();
        let by_title = |title: &str| {
            children
                .iter()
                .find(|c| c.title == title)
                .map(|c| c.status.clone())
                .unwrap()
        };
        assert_eq!(by_title("Phase 1"), ScheduleProjectStatus::Completed);
        assert_eq!(by_title("Phase 2"), ScheduleProjectStatus::Planned);
    }

    #[tokio::test]
    async fn unresolved_concurrent_mutation_is_a_conflict() {
        let db = DBService::new_in_memory().await.unwrap();
        let company_id = Uuid::new_v4();
        let project = seed(
            &db,
            company_id,
            &[ScheduleProjectStatus::Planned],
            ProjectStatus::InProgress,
        )
        .await;

        // Silently drop every project status write. The guarded update never
        // lands, which from the coordinator's side is indistinguishable from
        // a concurrent writer winning both the first attempt and the retry.
        sqlx::query(
            r#"CREATE TRIGGER drop_project_writes
               BEFORE UPDATE ON projects
               FOR EACH ROW
               BEGIN SELECT RAISE(IGNORE); END"#,
        )
        .execute(&db.pool)
        .await
        .unwrap();

        let coordinator = StatusCoordinator::new(db.clone());
        let err = coordinator
            .update_project_status_with_cascade(
                project.id,
                company_id,
                ProjectStatus::Completed,
                None,
                None,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CoordinationError::Conflict));

        // The cascade never ran.
        let children = ScheduleProject::find_by_project_id(&db.pool, project.id, company_id)
            .await
            .unwrap();
        assert_eq!(children[0].status, ScheduleProjectStatus::Planned);
    }
}
