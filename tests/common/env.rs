//! Isolated environment for running the `treemenu` binary.
//!
//! Every run points `TREEMENU_CONFIG` at a file inside the temp directory
//! and clears the other `TREEMENU_*` variables, so the developer's own
//! configuration never leaks into a test.

use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

/// Result of running a treemenu CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as NDJSON.
    pub fn events(&self) -> Vec<Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("bad NDJSON line {l:?}: {e}"))
            })
            .collect()
    }

    /// Events of one kind, in output order.
    pub fn events_of(&self, kind: &str) -> Vec<Value> {
        self.events()
            .into_iter()
            .filter(|e| e["event"] == kind)
            .collect()
    }
}

pub struct TestEnv {
    pub dir: TempDir,
    env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            env: Vec::new(),
        }
    }

    /// Write a file into the temp directory and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Write the user config read through `TREEMENU_CONFIG`.
    pub fn write_user_config(&self, content: &str) {
        self.write("user-config.toml", content);
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_treemenu"));
        cmd.current_dir(self.dir.path())
            .args(args)
            .env("TREEMENU_CONFIG", self.dir.path().join("user-config.toml"))
            .env_remove("TREEMENU_INJECT_ID_KEY")
            .env_remove("TREEMENU_ASCII")
            .env_remove("RUST_LOG");
        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        let output = cmd.output().unwrap();
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
