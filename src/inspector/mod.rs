mod file;

pub use file::{FileInspector, FileRecord};
