pub mod cli;
pub mod counter;
pub mod error;
pub mod inspector;
pub mod language;
pub mod output;

pub use error::{LangFileError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INSPECTION_FAILED: i32 = 1;
pub const EXIT_USAGE_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
