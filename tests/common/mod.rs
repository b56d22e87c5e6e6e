#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the langfile binary.
#[macro_export]
macro_rules! langfile {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("langfile"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content and returns its path as a string.
    pub fn create_file(&self, relative_path: &str, content: &str) -> String {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path.to_string_lossy().into_owned()
    }

    /// Path string for a file that was never created.
    pub fn missing(&self, relative_path: &str) -> String {
        self.dir
            .path()
            .join(relative_path)
            .to_string_lossy()
            .into_owned()
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Small TypeScript source with one blank line and a trailing newline.
pub const TS_SOURCE: &str = "const x = 1;\n\nconsole.log(x);\n";
