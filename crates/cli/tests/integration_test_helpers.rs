//! Test helpers for integration tests

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

// CARGO_BIN_EXE_playground is set by Cargo when running integration tests
const BINARY_NAME: &str = env!("CARGO_BIN_EXE_playground");

/// Test project setup helper
pub struct TestProject {
    #[allow(dead_code)] // Used to keep temp directory alive during tests
    pub temp_dir: TempDir,
    pub project_path: PathBuf,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty project directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let project_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            project_path,
        }
    }

    /// Create a project with a single source file
    #[allow(dead_code)] // Used across multiple test files
    pub fn with_source(file_name: &str, source: &str) -> Self {
        let project = Self::new();
        project.write_file(file_name, source);
        project
    }

    /// Write `.playground/config.yaml`
    #[allow(dead_code)] // Used across multiple test files
    pub fn with_project_config(self, content: &str) -> Self {
        self.write_file(".playground/config.yaml", content);
        self
    }

    /// Get path to a file in the project
    pub fn path(&self, relative_path: &str) -> PathBuf {
        self.project_path.join(relative_path)
    }

    /// Write file content
    pub fn write_file(&self, relative_path: &str, content: &str) {
        let path = self.path(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Run playground command and return output
    pub fn run_command(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(BINARY_NAME);
        cmd.current_dir(&self.project_path);
        cmd.env_remove("RUST_LOG");
        cmd.args(args);
        cmd.output().unwrap()
    }

    /// Run playground command, assert success and return stdout
    #[allow(dead_code)] // Used across multiple test files
    pub fn run_command_success(&self, args: &[&str]) -> String {
        let output = self.run_command(args);
        if !output.status.success() {
            eprintln!("Command failed: playground {}", args.join(" "));
            eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
            eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
            panic!("Command failed with exit code: {:?}", output.status.code());
        }
        String::from_utf8_lossy(&output.stdout).trim_end().to_string()
    }

    /// Run playground command, assert failure and return stderr
    #[allow(dead_code)] // Used across multiple test files
    pub fn run_command_failure(&self, args: &[&str]) -> String {
        let output = self.run_command(args);
        assert!(!output.status.success(), "Command should have failed");
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}

/// Sandbox settings for a JavaScript session with one option override
#[allow(dead_code)] // Used across multiple test files
pub fn javascript_settings() -> String {
    r"filetype: js
compilerOptions:
  noImplicitAny: false
"
    .to_string()
}
