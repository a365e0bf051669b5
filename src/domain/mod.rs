pub mod enums;
pub mod history;
pub mod task;

pub use enums::{Severity, StorageLocation, UiMode};
pub use history::History;
pub use task::{Task, TaskId};
