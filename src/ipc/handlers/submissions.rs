use serde_json::json;

use crate::ipc::error::{err, ok, op_err};
use crate::ipc::helpers::required_str;
use crate::ipc::types::{AppState, Request};
use crate::views;

fn handle_confirm(state: &mut AppState, req: &Request) -> serde_json::Value {
    let assignment_id = match required_str(&req.params, "assignmentId") {
        Ok(v) => v,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };
    let today = chrono::Local::now().date_naive();
    match state.store.confirm_submission(&assignment_id, today) {
        Ok(submission) => ok(&req.id, json!({ "submission": submission })),
        Err(e) => op_err(&req.id, &e),
    }
}

fn handle_summary(state: &mut AppState, req: &Request) -> serde_json::Value {
    let assignment_id = match required_str(&req.params, "assignmentId") {
        Ok(v) => v,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };
    let snapshot = state.store.snapshot();
    ok(
        &req.id,
        json!(views::submission_summary(&snapshot, &assignment_id)),
    )
}

fn handle_review(state: &mut AppState, req: &Request) -> serde_json::Value {
    let assignment_id = match required_str(&req.params, "assignmentId") {
        Ok(v) => v,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };
    let snapshot = state.store.snapshot();
    if !snapshot.assignments.iter().any(|a| a.id == assignment_id) {
        return err(
            &req.id,
            "not_found",
            format!("assignment {} not found", assignment_id),
            None,
        );
    }
    ok(&req.id, json!(views::review_model(&snapshot, &assignment_id)))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "submissions.confirm" => Some(handle_confirm(state, req)),
        "submissions.summary" => Some(handle_summary(state, req)),
        "submissions.review" => Some(handle_review(state, req)),
        _ => None,
    }
}
