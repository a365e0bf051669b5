pub mod files;
pub mod parser;
pub mod serializer;
pub mod store;

pub use files::TASKS_FILE_NAME;
pub use store::TaskStore;
