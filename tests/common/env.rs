//! Test environment builder for isolated solpipe runs.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Variables the binary reads. They are removed from every child process so the
/// developer's shell cannot leak into assertions.
const SCRUBBED_VARS: &[&str] = &[
    "PRIVATE_KEY",
    "TBSC_API_KEY",
    "ETH_API_KEY",
    "SOLPIPE_SOLC_VERSION",
    "SOLPIPE_OPTIMIZER",
    "SOLPIPE_OPTIMIZER_RUNS",
    "SOLPIPE_BYTECODE_HASH",
];

/// Result of running a solpipe command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    #[allow(dead_code)]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim()).unwrap_or_else(|e| {
            panic!("stdout is not JSON ({e}):\n{}", self.stdout);
        })
    }
}

/// Isolated project directory with its own environment.
pub struct TestEnv {
    pub project_root: TempDir,
    env: Vec<(String, String)>,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().unwrap(),
            env: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        self.project_root.path()
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.path().join(relative)
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
        self
    }

    /// Write an empty contract under `contracts/`.
    pub fn with_contract(self, relative: &str) -> Self {
        self.with_file(&format!("contracts/{}", relative), super::CONTRACT)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_solpipe"));
        cmd.arg("--project").arg(self.path()).args(args);
        self.execute(cmd)
    }

    /// Run from inside the project directory with the default `--project .`.
    pub fn run_in_root(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_solpipe"));
        cmd.current_dir(self.path()).args(args);
        self.execute(cmd)
    }

    fn execute(&self, mut cmd: Command) -> TestResult {
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        let output = cmd.output().unwrap();

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
