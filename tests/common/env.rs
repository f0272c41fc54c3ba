//! Isolated environment for running the `yams` binary.

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Result of running a yams CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as one JSON document.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim()).unwrap_or_else(|e| {
            panic!(
                "stdout is not JSON ({}):\n{}\nstderr:\n{}",
                e, self.stdout, self.stderr
            )
        })
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Temp directory holding the state file, with a config path that does not exist.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn state_path(&self) -> PathBuf {
        self.dir.path().join("state").join("scores.json")
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.dir.path().join("state").join("preferences.toml")
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_yams"));
        cmd.env("YAMS_STATE_PATH", self.state_path())
            .env("YAMS_CONFIG", self.config_path())
            .env_remove("YAMS_LOG")
            .env_remove("YAMS_NO_PERSIST")
            .env_remove("YAMS_VERBOSITY")
            .env_remove("YAMS_DEFAULT_MODE")
            .env("NO_COLOR", "1")
            .env("TERM", "dumb");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = self.command().args(args).output().unwrap();
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
