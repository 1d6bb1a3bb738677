//! Pure validation of project status transitions.
//!
//! The rules live in a declarative table so the policy can be audited and
//! tested without touching coordinator control flow. Validation never fails
//! for well-formed input; findings come back as warnings (surfaced to the
//! caller) or blockers (prevent the transition).

use db::models::{
    project::ProjectStatus, punchlist_item::PunchlistStatusCounts,
    schedule_project::ScheduleProjectStatusCounts,
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Child-entity counts the validator reasons over, grouped by entity type
/// and status.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
pub struct ChildEntityCounts {
    pub schedule_projects: ScheduleProjectStatusCounts,
    pub punchlist_items: PunchlistStatusCounts,
    pub open_critical_punchlist_items: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct StatusValidationResult {
    pub can_change: bool,
    pub warnings: Vec<String>,
    pub blockers: Vec<String>,
    pub child_entity_counts: ChildEntityCounts,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Severity {
    Warning,
    Blocker,
}

/// Matches the current or requested project status in a rule.
#[derive(Debug, Clone, PartialEq)]
enum StatusMatcher {
    Any,
    NonTerminal,
    Exactly(ProjectStatus),
}

impl StatusMatcher {
    fn matches(&self, status: &ProjectStatus) -> bool {
        match self {
            StatusMatcher::Any => true,
            StatusMatcher::NonTerminal => !status.is_terminal(),
            StatusMatcher::Exactly(expected) => status == expected,
        }
    }
}

/// Child-state condition that triggers a rule.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Condition {
    ReopeningCompletedProject,
    ScheduleProjectsInProgress,
    OpenCriticalPunchlistItems,
    CompletedScheduleWorkExists,
}

impl Condition {
    fn finding(&self, counts: &ChildEntityCounts) -> Option<String> {
        match self {
            Condition::ReopeningCompletedProject => Some(
                "project is already completed; reopening will resume progress tracking"
                    .to_string(),
            ),
            Condition::ScheduleProjectsInProgress => {
                let n = counts.schedule_projects.in_progress;
                (n > 0).then(|| format!("{n} schedule project(s) are still in progress"))
            }
            Condition::OpenCriticalPunchlistItems => {
                let n = counts.open_critical_punchlist_items;
                (n > 0).then(|| format!("{n} critical punchlist item(s) remain open"))
            }
            Condition::CompletedScheduleWorkExists => {
                let n = counts.schedule_projects.completed;
                (n > 0).then(|| {
                    format!(
                        "{n} completed schedule project(s) would be orphaned by reopening a cancelled project"
                    )
                })
            }
        }
    }
}

struct TransitionRule {
    from: StatusMatcher,
    to: StatusMatcher,
    condition: Condition,
    severity: Severity,
}

/// The transition policy. Order is insignificant; every matching rule whose
/// condition holds contributes one finding.
const TRANSITION_RULES: &[TransitionRule] = &[
    // Completing a project with active schedule work is allowed but flagged.
    TransitionRule {
        from: StatusMatcher::Any,
        to: StatusMatcher::Exactly(ProjectStatus::Completed),
        condition: Condition::ScheduleProjectsInProgress,
        severity: Severity::Warning,
    },
    TransitionRule {
        from: StatusMatcher::Any,
        to: StatusMatcher::Exactly(ProjectStatus::Completed),
        condition: Condition::OpenCriticalPunchlistItems,
        severity: Severity::Warning,
    },
    TransitionRule {
        from: StatusMatcher::Any,
        to: StatusMatcher::Exactly(ProjectStatus::Cancelled),
        condition: Condition::ScheduleProjectsInProgress,
        severity: Severity::Warning,
    },
    // The one hard blocker: reviving a cancelled project that already has
    // completed schedule work.
    TransitionRule {
        from: StatusMatcher::Exactly(ProjectStatus::Cancelled),
        to: StatusMatcher::NonTerminal,
        condition: Condition::CompletedScheduleWorkExists,
        severity: Severity::Blocker,
    },
    TransitionRule {
        from: StatusMatcher::Exactly(ProjectStatus::Completed),
        to: StatusMatcher::NonTerminal,
        condition: Condition::ReopeningCompletedProject,
        severity: Severity::Warning,
    },
];

/// Decide whether `current -> requested` may proceed given child state.
///
/// Pure: identical input always yields identical output.
pub fn validate_status_change(
    current: &ProjectStatus,
    requested: &ProjectStatus,
    counts: &ChildEntityCounts,
) -> StatusValidationResult {
    let mut warnings = Vec::new();
    let mut blockers = Vec::new();

    if current == requested {
        warnings.push(format!("project is already {requested}"));
    }

    for rule in TRANSITION_RULES {
        if !rule.from.matches(current) || !rule.to.matches(requested) {
            continue;
        }
        if let Some(finding) = rule.condition.finding(counts) {
            match rule.severity {
                Severity::Warning => warnings.push(finding),
                Severity::Blocker => blockers.push(finding),
            }
        }
    }

    StatusValidationResult {
        can_change: blockers.is_empty(),
        warnings,
        blockers,
        child_entity_counts: counts.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts_with(
        in_progress: i64,
        completed: i64,
        open_critical: i64,
    ) -> ChildEntityCounts {
        ChildEntityCounts {
            schedule_projects: ScheduleProjectStatusCounts {
                in_progress,
                completed,
                ..Default::default()
            },
            open_critical_punchlist_items: open_critical,
            ..Default::default()
        }
    }

    #[test]
    fn non_terminal_transitions_are_never_blocked() {
        let counts = counts_with(3, 2, 1);
        for from in &ProjectStatus::ALL {
            if from.is_terminal() {
                continue;
            }
            for to in &ProjectStatus::ALL {
                if to.is_terminal() {
                    continue;
                }
                let result = validate_status_change(from, to, &counts);
                assert!(result.can_change, "{from} -> {to} should be allowed");
                assert!(result.blockers.is_empty());
            }
        }
    }

    #[test]
    fn completing_with_active_work_warns_but_allows() {
        let result = validate_status_change(
            &ProjectStatus::InProgress,
            &ProjectStatus::Completed,
            &counts_with(2, 0, 0),
        );
        assert!(result.can_change);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("in progress"));
    }

    #[test]
    fn reopening_cancelled_project_with_completed_work_is_blocked() {
        let result = validate_status_change(
            &ProjectStatus::Cancelled,
            &ProjectStatus::InProgress,
            &counts_with(0, 1, 0),
        );
        assert!(!result.can_change);
        assert_eq!(result.blockers.len(), 1);
    }

    #[test]
    fn reopening_cancelled_project_without_terminal_children_is_allowed() {
        let result = validate_status_change(
            &ProjectStatus::Cancelled,
            &ProjectStatus::InProgress,
            &counts_with(1, 0, 0),
        );
        assert!(result.can_change);
        assert!(result.blockers.is_empty());
    }

    #[test]
    fn reopening_completed_project_warns() {
        let result = validate_status_change(
            &ProjectStatus::Completed,
            &ProjectStatus::InProgress,
            &ChildEntityCounts::default(),
        );
        assert!(result.can_change);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn same_status_transition_warns() {
        let result = validate_status_change(
            &ProjectStatus::OnHold,
            &ProjectStatus::OnHold,
            &ChildEntityCounts::default(),
        );
        assert!(result.can_change);
        assert!(result.warnings[0].contains("already"));
    }

    #[test]
    fn validation_is_idempotent() {
        let counts = counts_with(1, 2, 3);
        let first =
            validate_status_change(&ProjectStatus::Cancelled, &ProjectStatus::OnTrack, &counts);
        let second =
            validate_status_change(&ProjectStatus::Cancelled, &ProjectStatus::OnTrack, &counts);
        assert_eq!(first, second);
    }
}
