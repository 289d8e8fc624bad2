//! The single authoritative holder of application state. Every view reads a
//! `Snapshot`; every write goes through one of the operations below.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::fixtures;
use crate::model::{Assignment, Role, Submission, Theme, User};

/// The one accepted mock password. A stand-in for real credential checking,
/// kept only for parity with the seed data; not a security mechanism.
pub const MOCK_PASSWORD: &str = "password";

#[derive(Debug, Error)]
pub enum OpError {
    #[error("User ID not found.")]
    UserNotFound,
    #[error("User ID {user_id} does not match the selected role.")]
    RoleMismatch { user_id: String },
    #[error("Invalid User ID or Password.")]
    InvalidCredentials,
    #[error("missing required fields: {}", missing.join(", "))]
    Validation { missing: Vec<&'static str> },
    #[error("assignment {assignment_id} not found")]
    AssignmentNotFound { assignment_id: String },
    #[error("no authenticated session")]
    NoSession,
    #[error("operation requires the {required} role")]
    Forbidden { required: Role },
}

impl OpError {
    pub fn code(&self) -> &'static str {
        match self {
            OpError::UserNotFound => "user_not_found",
            OpError::RoleMismatch { .. } => "role_mismatch",
            OpError::InvalidCredentials => "invalid_credentials",
            OpError::Validation { .. } => "validation_error",
            OpError::AssignmentNotFound { .. } => "not_found",
            OpError::NoSession => "no_session",
            OpError::Forbidden { .. } => "forbidden",
        }
    }

    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            OpError::Validation { missing } => {
                Some(serde_json::json!({ "missingFields": missing }))
            }
            _ => None,
        }
    }
}

/// Owned, immutable view of the collections at a point in time. Derived-view
/// functions take this, never the live store.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub assignments: Vec<Assignment>,
    pub submissions: Vec<Submission>,
}

#[derive(Debug, Clone, Default)]
pub struct AssignmentDraft {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub drive_link: String,
}

pub struct Store {
    users: Vec<User>,
    assignments: Vec<Assignment>,
    submissions: Vec<Submission>,
    session: Option<User>,
    theme: Theme,
}

impl Store {
    pub fn with_fixtures() -> Self {
        Store {
            users: fixtures::seed_users(),
            assignments: fixtures::seed_assignments(),
            submissions: fixtures::seed_submissions(),
            session: None,
            theme: Theme::default(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            users: self.users.clone(),
            assignments: self.assignments.clone(),
            submissions: self.submissions.clone(),
        }
    }

    pub fn session(&self) -> Option<&User> {
        self.session.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Mock auth gate: case-insensitive id lookup, role check, fixed password.
    /// On success the matched user becomes the process-wide session.
    pub fn authenticate(
        &mut self,
        user_id: &str,
        password: &str,
        claimed_role: Role,
    ) -> Result<User, OpError> {
        let Some(user) = self
            .users
            .iter()
            .find(|u| u.id.eq_ignore_ascii_case(user_id))
        else {
            return Err(OpError::UserNotFound);
        };
        if user.role != claimed_role {
            return Err(OpError::RoleMismatch {
                user_id: user.id.clone(),
            });
        }
        if password != MOCK_PASSWORD {
            return Err(OpError::InvalidCredentials);
        }
        let user = user.clone();
        self.session = Some(user.clone());
        Ok(user)
    }

    pub fn logout(&mut self) {
        self.session = None;
    }

    /// Appends a new assignment stamped with the session admin's id.
    /// Assignments are never edited or deleted once created.
    pub fn create_assignment(&mut self, draft: AssignmentDraft) -> Result<Assignment, OpError> {
        let admin = match &self.session {
            Some(u) if u.role == Role::Admin => u.clone(),
            Some(_) => {
                return Err(OpError::Forbidden {
                    required: Role::Admin,
                })
            }
            None => return Err(OpError::NoSession),
        };

        let mut missing = Vec::new();
        if draft.title.trim().is_empty() {
            missing.push("title");
        }
        if draft.due_date.is_none() {
            missing.push("dueDate");
        }
        if draft.drive_link.trim().is_empty() {
            missing.push("driveLink");
        }
        if !missing.is_empty() {
            return Err(OpError::Validation { missing });
        }
        let due_date = draft.due_date.ok_or(OpError::Validation {
            missing: vec!["dueDate"],
        })?;

        let assignment = Assignment {
            // UUID-based, so it cannot collide with the short fixture ids.
            id: format!("a-{}", Uuid::new_v4()),
            title: draft.title,
            description: draft.description.filter(|d| !d.trim().is_empty()),
            due_date,
            admin_id: admin.id,
            drive_link: draft.drive_link,
        };
        self.assignments.push(assignment.clone());
        Ok(assignment)
    }

    /// Upsert keyed by (assignment_id, session student). An existing record is
    /// replaced in place so sequence order is preserved; repeating the call
    /// with the same arguments leaves the same observable state.
    pub fn confirm_submission(
        &mut self,
        assignment_id: &str,
        today: NaiveDate,
    ) -> Result<Submission, OpError> {
        let student = match &self.session {
            Some(u) if u.role == Role::Student => u.clone(),
            Some(_) => {
                return Err(OpError::Forbidden {
                    required: Role::Student,
                })
            }
            None => return Err(OpError::NoSession),
        };
        if !self.assignments.iter().any(|a| a.id == assignment_id) {
            return Err(OpError::AssignmentNotFound {
                assignment_id: assignment_id.to_string(),
            });
        }

        let record = Submission {
            assignment_id: assignment_id.to_string(),
            student_id: student.id.clone(),
            is_submitted: true,
            submission_date: Some(today),
        };
        let existing = self
            .submissions
            .iter_mut()
            .find(|s| s.assignment_id == assignment_id && s.student_id == student.id);
        match existing {
            Some(slot) => *slot = record.clone(),
            None => self.submissions.push(record.clone()),
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 1).unwrap()
    }

    fn draft(title: &str, due: Option<NaiveDate>, link: &str) -> AssignmentDraft {
        AssignmentDraft {
            title: title.to_string(),
            description: None,
            due_date: due,
            drive_link: link.to_string(),
        }
    }

    #[test]
    fn authenticate_matches_fixture_user() {
        let mut store = Store::with_fixtures();
        let user = store
            .authenticate("s1", "password", Role::Student)
            .expect("login");
        assert_eq!(user.name, "Praveen Kumar");
        assert_eq!(store.session().map(|u| u.id.as_str()), Some("s1"));
    }

    #[test]
    fn authenticate_is_case_insensitive_on_id() {
        let mut store = Store::with_fixtures();
        let user = store
            .authenticate("S1", "password", Role::Student)
            .expect("login");
        assert_eq!(user.id, "s1");
    }

    #[test]
    fn authenticate_failures_map_to_distinct_errors() {
        let mut store = Store::with_fixtures();
        assert!(matches!(
            store.authenticate("zzz", "password", Role::Student),
            Err(OpError::UserNotFound)
        ));
        assert!(matches!(
            store.authenticate("s1", "password", Role::Admin),
            Err(OpError::RoleMismatch { .. })
        ));
        assert!(matches!(
            store.authenticate("s1", "hunter2", Role::Student),
            Err(OpError::InvalidCredentials)
        ));
        assert!(store.session().is_none());
    }

    #[test]
    fn logout_clears_session() {
        let mut store = Store::with_fixtures();
        store
            .authenticate("a1", "password", Role::Admin)
            .expect("login");
        store.logout();
        assert!(store.session().is_none());
    }

    #[test]
    fn create_assignment_requires_admin_session() {
        let mut store = Store::with_fixtures();
        assert!(matches!(
            store.create_assignment(draft("T", Some(today()), "https://x")),
            Err(OpError::NoSession)
        ));
        store
            .authenticate("s1", "password", Role::Student)
            .expect("login");
        assert!(matches!(
            store.create_assignment(draft("T", Some(today()), "https://x")),
            Err(OpError::Forbidden {
                required: Role::Admin
            })
        ));
    }

    #[test]
    fn create_assignment_names_every_missing_field() {
        let mut store = Store::with_fixtures();
        store
            .authenticate("a1", "password", Role::Admin)
            .expect("login");
        let err = store
            .create_assignment(draft("", Some(today()), "https://x"))
            .unwrap_err();
        match err {
            OpError::Validation { missing } => assert_eq!(missing, vec!["title"]),
            other => panic!("unexpected error {other:?}"),
        }
        let err = store.create_assignment(draft("  ", None, "")).unwrap_err();
        match err {
            OpError::Validation { missing } => {
                assert_eq!(missing, vec!["title", "dueDate", "driveLink"])
            }
            other => panic!("unexpected error {other:?}"),
        }
        // Failed attempts must not append anything.
        assert_eq!(store.snapshot().assignments.len(), 3);
    }

    #[test]
    fn create_assignment_appends_with_fresh_id_and_session_admin() {
        let mut store = Store::with_fixtures();
        store
            .authenticate("a2", "password", Role::Admin)
            .expect("login");
        let created = store
            .create_assignment(draft("Final Project Proposal", Some(today()), "https://x"))
            .expect("create");
        assert_eq!(created.admin_id, "a2");
        let snapshot = store.snapshot();
        assert_eq!(snapshot.assignments.len(), 4);
        assert_eq!(snapshot.assignments.last(), Some(&created));
        assert_eq!(
            snapshot
                .assignments
                .iter()
                .filter(|a| a.id == created.id)
                .count(),
            1
        );
    }

    #[test]
    fn confirm_submission_is_idempotent_and_replaces_in_place() {
        let mut store = Store::with_fixtures();
        store
            .authenticate("s2", "password", Role::Student)
            .expect("login");

        // The fixture's pending a1/s2 record sits at index 1.
        let first = store.confirm_submission("a1", today()).expect("confirm");
        let second = store.confirm_submission("a1", today()).expect("confirm");
        assert_eq!(first, second);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.submissions.len(), 9);
        let matching: Vec<_> = snapshot
            .submissions
            .iter()
            .enumerate()
            .filter(|(_, s)| s.assignment_id == "a1" && s.student_id == "s2")
            .collect();
        assert_eq!(matching.len(), 1);
        let (index, record) = matching[0];
        assert_eq!(index, 1);
        assert!(record.is_submitted);
        assert_eq!(record.submission_date, Some(today()));
    }

    #[test]
    fn confirm_submission_appends_when_no_record_exists() {
        let mut store = Store::with_fixtures();
        store
            .authenticate("a1", "password", Role::Admin)
            .expect("login");
        let created = store
            .create_assignment(draft("New Task", Some(today()), "https://x"))
            .expect("create");
        store
            .authenticate("s3", "password", Role::Student)
            .expect("login");
        store
            .confirm_submission(&created.id, today())
            .expect("confirm");
        assert_eq!(store.snapshot().submissions.len(), 10);
    }

    #[test]
    fn confirm_submission_enforces_referential_integrity() {
        let mut store = Store::with_fixtures();
        store
            .authenticate("s1", "password", Role::Student)
            .expect("login");
        assert!(matches!(
            store.confirm_submission("nope", today()),
            Err(OpError::AssignmentNotFound { .. })
        ));
    }

    #[test]
    fn confirm_submission_requires_student_session() {
        let mut store = Store::with_fixtures();
        assert!(matches!(
            store.confirm_submission("a1", today()),
            Err(OpError::NoSession)
        ));
        store
            .authenticate("a1", "password", Role::Admin)
            .expect("login");
        assert!(matches!(
            store.confirm_submission("a1", today()),
            Err(OpError::Forbidden {
                required: Role::Student
            })
        ));
    }

    #[test]
    fn toggle_theme_flips_and_returns_the_new_value() {
        let mut store = Store::with_fixtures();
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.toggle_theme(), Theme::Dark);
        assert_eq!(store.toggle_theme(), Theme::Light);
    }
}
