use super::task::Task;
use std::collections::VecDeque;

/// Maximum number of undo snapshots kept
pub const HISTORY_LIMIT: usize = 300;

/// Undo/redo stacks of whole-collection snapshots
#[derive(Debug, Clone, Default)]
pub struct History {
    past: VecDeque<Vec<Task>>,
    future: Vec<Vec<Task>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state before a new edit. Invalidates redo.
    pub fn record(&mut self, snapshot: Vec<Task>) {
        self.push_past(snapshot);
        self.future.clear();
    }

    /// Record without touching the redo stack (storage switches)
    pub fn record_keep_future(&mut self, snapshot: Vec<Task>) {
        self.push_past(snapshot);
    }

    /// Step back. `current` goes onto the redo stack.
    pub fn undo(&mut self, current: Vec<Task>) -> Option<Vec<Task>> {
        let previous = self.past.pop_back()?;
        self.future.push(current);
        Some(previous)
    }

    /// Step forward. `current` goes back onto the undo stack.
    pub fn redo(&mut self, current: Vec<Task>) -> Option<Vec<Task>> {
        let next = self.future.pop()?;
        self.push_past(current);
        Some(next)
    }

    pub fn undo_len(&self) -> usize {
        self.past.len()
    }

    pub fn redo_len(&self) -> usize {
        self.future.len()
    }

    fn push_past(&mut self, snapshot: Vec<Task>) {
        if self.past.len() == HISTORY_LIMIT {
            self.past.pop_front();
        }
        self.past.push_back(snapshot);
    }
}
