use crate::domain::{Task, TaskId};
use serde_json::Value;

/// Parse the task file contents, coercing each record into a `Task`.
///
/// Accepts `{"tasks": [...]}` or a bare array. Records that are not JSON
/// objects are skipped. Missing or mistyped fields get defaults:
/// - `id`: kept when a number or string, otherwise a fresh clock-derived id
/// - `text`: stringified, empty when absent
/// - `done`: truthiness of whatever is stored
/// - `createdAt`: `now_ms` unless numeric
/// - `completedAt`: null unless done, then the stored number or `now_ms`
pub fn parse_tasks(content: &str, now_ms: i64) -> Result<Vec<Task>, serde_json::Error> {
    let root: Value = serde_json::from_str(content)?;

    let records = match root {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("tasks") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    let mut tasks: Vec<Task> = Vec::with_capacity(records.len());
    for record in &records {
        if let Some(task) = coerce_task(record, now_ms, &tasks) {
            tasks.push(task);
        }
    }
    Ok(tasks)
}

fn coerce_task(record: &Value, now_ms: i64, seen: &[Task]) -> Option<Task> {
    let fields = record.as_object()?;

    let id = match fields.get("id") {
        Some(Value::Number(n)) => match n.as_i64() {
            Some(n) => TaskId::Number(n),
            None => TaskId::Other(n.clone()),
        },
        Some(Value::String(s)) => TaskId::Text(s.clone()),
        _ => TaskId::next(now_ms, seen),
    };

    let text = match fields.get("text") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    let done = fields.get("done").map(truthy).unwrap_or(false);
    let created_at = fields.get("createdAt").and_then(as_millis).unwrap_or(now_ms);
    let completed_at = if done {
        Some(fields.get("completedAt").and_then(as_millis).unwrap_or(now_ms))
    } else {
        None
    };

    Some(Task {
        id,
        text,
        done,
        created_at,
        completed_at,
    })
}

fn as_millis(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    }
}

/// Loose boolean conversion: false, null, 0, NaN and "" are false
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
