use crate::domain::Task;
use serde::Serialize;

#[derive(Serialize)]
struct TaskFile<'a> {
    tasks: &'a [Task],
}

/// Serialize tasks as a pretty-printed `{"tasks": [...]}` document
pub fn serialize_tasks(tasks: &[Task]) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(&TaskFile { tasks })?;
    json.push('\n');
    Ok(json)
}
