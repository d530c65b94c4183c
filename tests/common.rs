//! Test utilities for verbump integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Companion page used by most tests
pub const PAGE: &str = "<!DOCTYPE html>\n<html>\n<body>\n  <h1>App</h1>\n  <footer>Version: <span id=\"app-version\">1.0.0</span></footer>\n</body>\n</html>\n";

/// A throwaway project directory with the default file layout
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Project {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Project with the companion page already in place
    pub fn with_page() -> Self {
        let project = Self::new();
        project.write("index.html", PAGE);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn record_path(&self) -> PathBuf {
        self.path().join("version.json")
    }

    pub fn page_path(&self) -> PathBuf {
        self.path().join("index.html")
    }

    pub fn write(&self, name: &str, content: &str) {
        fs::write(self.path().join(name), content).unwrap();
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path().join(name)).unwrap()
    }

    /// Writes a record at `version` with a single history entry
    pub fn seed_record(&self, version: &str) {
        let json = format!(
            r#"{{
  "version": "{v}",
  "buildDate": "2023-12-31",
  "changelog": "seed",
  "history": [
    {{
      "version": "{v}",
      "date": "2023-12-31",
      "changelog": "seed",
      "type": "patch"
    }}
  ]
}}
"#,
            v = version
        );
        self.write("version.json", &json);
    }

    /// Parses the record file as untyped JSON
    pub fn record_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read("version.json")).unwrap()
    }
}
