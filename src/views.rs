//! Pure derived-view computations. Every function here is total over a
//! well-formed snapshot: zero denominators and dangling references have
//! defined outputs instead of error paths.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{Assignment, Role, Submission};
use crate::store::Snapshot;

/// Fallback display name when an assignment's admin reference dangles.
pub const UNKNOWN_ADMIN: &str = "Unknown Admin";

/// `round(100 * part / whole)`, defined as 0 for an empty whole.
pub fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        0
    } else {
        (100.0 * part as f64 / whole as f64).round() as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionSummary {
    pub total_students: usize,
    pub submitted_count: usize,
    pub completion_rate: u32,
}

pub fn submission_summary(snapshot: &Snapshot, assignment_id: &str) -> SubmissionSummary {
    let total_students = snapshot
        .users
        .iter()
        .filter(|u| u.role == Role::Student)
        .count();
    let submitted_count = snapshot
        .submissions
        .iter()
        .filter(|s| s.assignment_id == assignment_id && s.is_submitted)
        .count();
    SubmissionSummary {
        total_students,
        submitted_count,
        completion_rate: percent(submitted_count, total_students),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedAssignment {
    #[serde(flatten)]
    pub assignment: Assignment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission: Option<Submission>,
    pub admin_name: String,
}

impl EnrichedAssignment {
    pub fn is_pending(&self) -> bool {
        self.submission
            .as_ref()
            .map(Submission::is_pending)
            .unwrap_or(true)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentBoard {
    pub assignments: Vec<EnrichedAssignment>,
    pub total_assignments: usize,
    pub completed_count: usize,
    pub pending_count: usize,
    pub progress_percent: u32,
}

/// Every assignment, enriched with the student's submission state and the
/// creating admin's name. Ordered soonest-due first; the sort is stable so
/// creation order breaks due-date ties.
pub fn student_board(snapshot: &Snapshot, student_id: &str) -> StudentBoard {
    let mut assignments: Vec<EnrichedAssignment> = snapshot
        .assignments
        .iter()
        .map(|assignment| {
            let submission = snapshot
                .submissions
                .iter()
                .find(|s| s.student_id == student_id && s.assignment_id == assignment.id)
                .cloned();
            let admin_name = snapshot
                .users
                .iter()
                .find(|u| u.id == assignment.admin_id)
                .map(|u| u.name.clone())
                .unwrap_or_else(|| UNKNOWN_ADMIN.to_string());
            EnrichedAssignment {
                assignment: assignment.clone(),
                submission,
                admin_name,
            }
        })
        .collect();
    assignments.sort_by_key(|e| e.assignment.due_date);

    let total_assignments = assignments.len();
    let completed_count = assignments.iter().filter(|e| !e.is_pending()).count();
    StudentBoard {
        total_assignments,
        completed_count,
        pending_count: total_assignments - completed_count,
        progress_percent: percent(completed_count, total_assignments),
        assignments,
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAssignment {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub summary: SubmissionSummary,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminBoard {
    pub total_assignments: usize,
    pub student_count: usize,
    pub total_submitted: usize,
    pub assignments: Vec<AdminAssignment>,
}

/// Global dashboard totals plus the admin's own assignments in creation
/// order, each carrying its submission summary.
pub fn admin_board(snapshot: &Snapshot, admin_id: &str) -> AdminBoard {
    let student_count = snapshot
        .users
        .iter()
        .filter(|u| u.role == Role::Student)
        .count();
    let total_submitted = snapshot
        .submissions
        .iter()
        .filter(|s| s.is_submitted)
        .count();
    let assignments: Vec<AdminAssignment> = snapshot
        .assignments
        .iter()
        .filter(|a| a.admin_id == admin_id)
        .map(|a| AdminAssignment {
            assignment: a.clone(),
            summary: submission_summary(snapshot, &a.id),
        })
        .collect();
    AdminBoard {
        total_assignments: snapshot.assignments.len(),
        student_count,
        total_submitted,
        assignments,
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStatus {
    pub student_id: String,
    pub student_name: String,
    pub is_submitted: bool,
    pub status_text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewModel {
    pub rows: Vec<StudentStatus>,
    pub total_students: usize,
    pub submitted_count: usize,
    pub progress_percent: u32,
}

/// Per-student submission status for one assignment, in user-fixture order.
pub fn review_model(snapshot: &Snapshot, assignment_id: &str) -> ReviewModel {
    let rows: Vec<StudentStatus> = snapshot
        .users
        .iter()
        .filter(|u| u.role == Role::Student)
        .map(|student| {
            let submission = snapshot
                .submissions
                .iter()
                .find(|s| s.student_id == student.id && s.assignment_id == assignment_id);
            let is_submitted = !submission.map(Submission::is_pending).unwrap_or(true);
            StudentStatus {
                student_id: student.id.clone(),
                student_name: student.name.clone(),
                is_submitted,
                status_text: if is_submitted { "Submitted" } else { "Pending" },
                submission_date: submission.and_then(|s| s.submission_date),
            }
        })
        .collect();
    let total_students = rows.len();
    let submitted_count = rows.iter().filter(|r| r.is_submitted).count();
    ReviewModel {
        total_students,
        submitted_count,
        progress_percent: percent(submitted_count, total_students),
        rows,
    }
}
