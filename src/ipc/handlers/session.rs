use serde_json::json;

use crate::ipc::error::{err, ok, op_err};
use crate::ipc::helpers::required_str;
use crate::ipc::types::{AppState, Request};
use crate::model::Role;

fn handle_login(state: &mut AppState, req: &Request) -> serde_json::Value {
    let user_id = match required_str(&req.params, "userId") {
        Ok(v) => v,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };
    let password = match required_str(&req.params, "password") {
        Ok(v) => v,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };
    let role = match required_str(&req.params, "role") {
        Ok(v) => v,
        Err(msg) => return err(&req.id, "bad_params", msg, None),
    };
    let Some(role) = Role::parse(&role) else {
        return err(&req.id, "bad_params", "role must be student or admin", None);
    };

    match state.store.authenticate(&user_id, &password, role) {
        Ok(user) => {
            log::info!("session opened for {} ({})", user.id, user.role);
            ok(&req.id, json!({ "user": user }))
        }
        Err(e) => {
            log::warn!("login rejected for {user_id}: {}", e.code());
            op_err(&req.id, &e)
        }
    }
}

fn handle_logout(state: &mut AppState, req: &Request) -> serde_json::Value {
    state.store.logout();
    ok(&req.id, json!({}))
}

fn handle_session(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "user": state.store.session() }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "auth.login" => Some(handle_login(state, req)),
        "auth.logout" => Some(handle_logout(state, req)),
        "auth.session" => Some(handle_session(state, req)),
        _ => None,
    }
}
