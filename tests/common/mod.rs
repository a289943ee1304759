#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the unexported-guard binary.
#[macro_export]
macro_rules! unexported_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("unexported-guard"))
    };
}

/// A module whose exported function takes a private struct and whose exported
/// type declaration is defined in terms of it.
pub const LEAKING_MANIFEST: &str = r#"{
  "module": "example.com/leaky",
  "types": [
    { "kind": "named", "name": "config", "public": false, "underlying": 1 },
    { "kind": "struct", "fields": [] },
    { "kind": "pointer", "elem": 0 }
  ],
  "declarations": [
    { "kind": "function", "name": "New", "public": true,
      "location": { "file": "leaky.go", "line": 5, "column": 6 },
      "params": [ { "name": "c", "type": 2,
                    "location": { "file": "leaky.go", "line": 5, "column": 10 } } ] },
    { "kind": "type", "name": "Alias", "public": true,
      "location": { "file": "leaky.go", "line": 9, "column": 6 },
      "underlying": 0 }
  ]
}"#;

/// A module whose private receiver hides a method returning a private type,
/// while its exported function only uses builtins.
pub const CLEAN_MANIFEST: &str = r#"{
  "module": "example.com/clean",
  "types": [
    { "kind": "named", "name": "int", "public": false, "builtin": true },
    { "kind": "named", "name": "impl", "public": false, "underlying": 2 },
    { "kind": "struct", "fields": [] }
  ],
  "declarations": [
    { "kind": "function", "name": "Count", "public": true,
      "location": { "file": "clean.go", "line": 3, "column": 6 },
      "results": [ { "type": 0,
                     "location": { "file": "clean.go", "line": 3, "column": 14 } } ] },
    { "kind": "method", "name": "Self", "public": true, "receiver": 1,
      "location": { "file": "clean.go", "line": 7, "column": 16 },
      "results": [ { "type": 1,
                     "location": { "file": "clean.go", "line": 7, "column": 23 } } ] }
  ]
}"#;

/// A module whose only leak is through an interface-backed private type.
pub const INTERFACE_MANIFEST: &str = r#"{
  "module": "example.com/iface",
  "types": [
    { "kind": "named", "name": "reader", "public": false, "underlying": 1 },
    { "kind": "interface", "methods": [] }
  ],
  "declarations": [
    { "kind": "function", "name": "Open", "public": true,
      "location": { "file": "iface.go", "line": 4, "column": 6 },
      "results": [ { "type": 0,
                     "location": { "file": "iface.go", "line": 4, "column": 13 } } ] }
  ]
}"#;

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

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates the local unexported-guard config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".unexported-guard.toml", content);
    }

    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
