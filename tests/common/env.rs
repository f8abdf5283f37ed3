//! Test environment for isolated esmc runs.
//!
//! Provides `TestEnv` - a temp project directory with an `esmc.toml`, plus
//! helpers to run the esmc binary inside it.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::SHELL_COLLABORATORS;

/// Result of running an esmc CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory
pub struct TestEnv {
    pub project_root: TempDir,
    esmc_bin: PathBuf,
}

impl TestEnv {
    /// Project wired to the shell collaborators, with an empty `src/`
    pub fn new() -> Self {
        Self::with_config(SHELL_COLLABORATORS)
    }

    /// Project with a custom `esmc.toml`
    pub fn with_config(toml: &str) -> Self {
        let env = Self {
            project_root: tempfile::tempdir().expect("Failed to create temp project"),
            esmc_bin: PathBuf::from(env!("CARGO_BIN_EXE_esmc")),
        };
        env.write("esmc.toml", toml);
        std::fs::create_dir_all(env.path("src")).expect("Failed to create src");
        env
    }

    /// Get path relative to project root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run esmc in the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run esmc in the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.esmc_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("ESMC_NO_COLOR", "1")
            .env_remove("ESMC_LOG")
            .env_remove("ESMC_CACHE_ROOT")
            .env_remove("ESMC_SOURCE_DIR");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute esmc");
        output_to_result(output)
    }

    /// Write a file to the project directory
    pub fn write(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Read a project file
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Raw bytes of a project file, if it exists
    pub fn read_bytes(&self, relative: &str) -> Option<Vec<u8>> {
        std::fs::read(self.path(relative)).ok()
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Lines of a collaborator log, empty when the collaborator never ran
    pub fn log_lines(&self, name: &str) -> Vec<String> {
        std::fs::read_to_string(self.path(name))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn remove_log(&self, name: &str) {
        let _ = std::fs::remove_file(self.path(name));
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
