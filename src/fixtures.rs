//! Fixed seed data loaded once at process start. There is no durable data
//! store behind it; a restart resets everything except the persisted theme.

use chrono::NaiveDate;

use crate::model::{Assignment, Role, Submission, User};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

pub fn seed_users() -> Vec<User> {
    let user = |id: &str, name: &str, role: Role| User {
        id: id.to_string(),
        name: name.to_string(),
        role,
    };
    vec![
        user("s1", "Praveen Kumar", Role::Student),
        user("s2", "Charan S", Role::Student),
        user("s3", "Jahnvi Singh", Role::Student),
        user("a1", "Dr. Parthiban", Role::Admin),
        user("a2", "Prof. Rajesh Kumar", Role::Admin),
    ]
}

pub fn seed_assignments() -> Vec<Assignment> {
    vec![
        Assignment {
            id: "a1".to_string(),
            title: "Data Structures: Hash Map Implementation".to_string(),
            description: Some(
                "Implement a collision-free Hash Map using separate chaining in C++ or Java."
                    .to_string(),
            ),
            due_date: date(2025, 11, 5),
            admin_id: "a1".to_string(),
            drive_link: "https://drive.google.com/link/to/hashmap_specs_a1".to_string(),
        },
        Assignment {
            id: "a2".to_string(),
            title: "Database Design: ER Diagram & Normalization".to_string(),
            description: Some(
                "Design a normalized (up to 3NF) database schema for a Library Management System."
                    .to_string(),
            ),
            due_date: date(2025, 11, 12),
            admin_id: "a1".to_string(),
            drive_link: "https://drive.google.com/link/to/db_guidelines_a2".to_string(),
        },
        Assignment {
            id: "a3".to_string(),
            title: "Operating Systems: Process Scheduling Simulation".to_string(),
            description: Some(
                "Develop a C program to simulate and compare FCFS and SJF scheduling algorithms."
                    .to_string(),
            ),
            due_date: date(2025, 11, 19),
            admin_id: "a2".to_string(),
            drive_link: "https://drive.google.com/link/to/os_project_a3".to_string(),
        },
    ]
}

pub fn seed_submissions() -> Vec<Submission> {
    let submitted = |assignment: &str, student: &str, on: NaiveDate| Submission {
        assignment_id: assignment.to_string(),
        student_id: student.to_string(),
        is_submitted: true,
        submission_date: Some(on),
    };
    let pending = |assignment: &str, student: &str| Submission {
        assignment_id: assignment.to_string(),
        student_id: student.to_string(),
        is_submitted: false,
        submission_date: None,
    };
    vec![
        submitted("a1", "s1", date(2025, 10, 30)),
        pending("a1", "s2"),
        submitted("a1", "s3", date(2025, 10, 29)),
        submitted("a2", "s1", date(2025, 10, 30)),
        submitted("a2", "s2", date(2025, 10, 30)),
        pending("a2", "s3"),
        pending("a3", "s1"),
        pending("a3", "s2"),
        pending("a3", "s3"),
    ]
}
