//! Turn a raw model completion into backlog items

use serde_json::Value;

use crate::application::services::GroomingError;
use crate::domain::entities::BacklogItem;

/// Parse a completion and extract its backlog items.
///
/// Accepted shapes are `{"items": [...]}` and a bare `[...]`. Anything else is
/// a `MalformedResponse`. Non-object array entries are dropped; every object
/// entry yields exactly one item.
pub fn normalize(raw: &str) -> Result<Vec<BacklogItem>, GroomingError> {
    let parsed: Value = serde_json::from_str(raw).map_err(|e| {
        GroomingError::MalformedResponse(format!("completion is not valid JSON: {}", e))
    })?;

    let entries = match parsed {
        Value::Object(mut object) => match object.remove("items") {
            Some(Value::Array(entries)) => entries,
            Some(other) => {
                return Err(GroomingError::MalformedResponse(format!(
                    "\"items\" must be an array, got {}",
                    json_type_name(&other)
                )))
            }
            None => {
                return Err(GroomingError::MalformedResponse(
                    "completion object has no \"items\" key".to_string(),
                ))
            }
        },
        Value::Array(entries) => entries,
        other => {
            return Err(GroomingError::MalformedResponse(format!(
                "expected an object or array, got {}",
                json_type_name(&other)
            )))
        }
    };

    let total = entries.len();
    let items = entries
        .into_iter()
        .filter(Value::is_object)
        .map(serde_json::from_value::<BacklogItem>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| GroomingError::MalformedResponse(e.to_string()))?;

    if items.len() < total {
        tracing::warn!(
            "Dropped {} non-object entries from completion",
            total - items.len()
        );
    }

    Ok(items)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
