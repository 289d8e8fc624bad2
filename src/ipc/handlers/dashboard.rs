use serde_json::json;

use crate::ipc::error::{ok, op_err};
use crate::ipc::types::{AppState, Request};
use crate::model::Role;
use crate::store::OpError;
use crate::views;

fn require_role(state: &AppState, role: Role) -> Result<String, OpError> {
    match state.store.session() {
        Some(user) if user.role == role => Ok(user.id.clone()),
        Some(_) => Err(OpError::Forbidden { required: role }),
        None => Err(OpError::NoSession),
    }
}

fn handle_student(state: &mut AppState, req: &Request) -> serde_json::Value {
    let student_id = match require_role(state, Role::Student) {
        Ok(id) => id,
        Err(e) => return op_err(&req.id, &e),
    };
    let snapshot = state.store.snapshot();
    ok(&req.id, json!(views::student_board(&snapshot, &student_id)))
}

fn handle_admin(state: &mut AppState, req: &Request) -> serde_json::Value {
    let admin_id = match require_role(state, Role::Admin) {
        Ok(id) => id,
        Err(e) => return op_err(&req.id, &e),
    };
    let snapshot = state.store.snapshot();
    ok(&req.id, json!(views::admin_board(&snapshot, &admin_id)))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "dashboard.student" => Some(handle_student(state, req)),
        "dashboard.admin" => Some(handle_admin(state, req)),
        _ => None,
    }
}
