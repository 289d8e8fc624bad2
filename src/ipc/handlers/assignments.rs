use serde_json::json;

use crate::ipc::error::{err, ok, op_err};
use crate::ipc::helpers::{optional_date, optional_str};
use crate::ipc::types::{AppState, Request};
use crate::store::AssignmentDraft;

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let snapshot = state.store.snapshot();
    ok(&req.id, json!({ "assignments": snapshot.assignments }))
}

/// Field presence is checked by the store so the validation error can name
/// every missing field at once; only a malformed date is rejected here.
fn handle_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    let due_date = match optional_date(&req.params, "dueDate") {
        Ok(v) => v,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };
    let draft = AssignmentDraft {
        title: optional_str(&req.params, "title").unwrap_or_default(),
        description: optional_str(&req.params, "description"),
        due_date,
        drive_link: optional_str(&req.params, "driveLink").unwrap_or_default(),
    };

    match state.store.create_assignment(draft) {
        Ok(assignment) => {
            log::info!("assignment {} created by {}", assignment.id, assignment.admin_id);
            ok(&req.id, json!({ "assignment": assignment }))
        }
        Err(e) => op_err(&req.id, &e),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "assignments.list" => Some(handle_list(state, req)),
        "assignments.create" => Some(handle_create(state, req)),
        _ => None,
    }
}
