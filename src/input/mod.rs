pub mod handler;
pub mod line_editor;

pub use handler::handle_key;
pub use line_editor::{EditOutcome, LineEditor};
