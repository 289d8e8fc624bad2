use chrono::NaiveDate;
use serde_json::Value;

pub fn required_str(params: &Value, key: &str) -> Result<String, String> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| format!("missing {}", key))
}

pub fn optional_str(params: &Value, key: &str) -> Option<String> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

/// Absent, null, and empty-string all mean "not provided" (the store reports
/// those as validation failures); anything else must parse as YYYY-MM-DD.
pub fn optional_date(params: &Value, key: &str) -> Result<Option<NaiveDate>, String> {
    let Some(raw) = params.get(key).and_then(|v| v.as_str()) else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    raw.parse::<NaiveDate>()
        .map(Some)
        .map_err(|_| format!("{} must be YYYY-MM-DD", key))
}
