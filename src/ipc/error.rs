use serde_json::json;

use crate::store::OpError;

pub fn ok(id: &str, result: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "ok": true,
        "result": result
    })
}

pub fn err(
    id: &str,
    code: &str,
    message: impl Into<String>,
    details: Option<serde_json::Value>,
) -> serde_json::Value {
    let mut error = json!({
        "code": code,
        "message": message.into(),
    });
    if let Some(d) = details {
        error["details"] = d;
    }
    json!({
        "id": id,
        "ok": false,
        "error": error,
    })
}

/// Maps a core operation error onto the wire: stable code, display message,
/// optional structured details (e.g. the missing field list).
pub fn op_err(id: &str, e: &OpError) -> serde_json::Value {
    err(id, e.code(), e.to_string(), e.details())
}
