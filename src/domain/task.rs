use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Stable task identifier. Files written by other tools may use strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(i64),
    /// Numeric id that is not an `i64` integer (`1.5`, `1e30`), kept as written
    Other(serde_json::Number),
    Text(String),
}

impl TaskId {
    /// Clock-derived id, bumped past every numeric id already in `tasks`
    pub fn next(now_ms: i64, tasks: &[Task]) -> Self {
        let used: HashSet<i64> = tasks
            .iter()
            .filter_map(|t| match t.id {
                TaskId::Number(n) => Some(n),
                _ => None,
            })
            .collect();

        let bumped = match used.iter().copied().max() {
            Some(n) if n >= now_ms => n.checked_add(1),
            _ => Some(now_ms),
        };

        // Past i64::MAX: take the first free id at or below the clock
        let id = bumped.unwrap_or_else(|| {
            (i64::MIN..=now_ms)
                .rev()
                .find(|candidate| !used.contains(candidate))
                .unwrap_or(i64::MIN)
        });
        TaskId::Number(id)
    }
}

/// A single TODO item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub done: bool,
    /// Epoch milliseconds
    pub created_at: i64,
    /// Epoch milliseconds; set iff `done`
    pub completed_at: Option<i64>,
}

impl Task {
    pub fn new(id: TaskId, text: String, now_ms: i64) -> Self {
        Self {
            id,
            text,
            done: false,
            created_at: now_ms,
            completed_at: None,
        }
    }

    /// Flip `done`, keeping `completed_at` in step
    pub fn toggle(&mut self, now_ms: i64) {
        self.done = !self.done;
        self.completed_at = if self.done { Some(now_ms) } else { None };
    }
}
