//! Test environment builder for isolated menu-tree CLI testing.
//!
//! Provides `TestEnv` - a temp project directory plus a temp HOME, and
//! helpers to run the `menu-tree` binary inside them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Environment variables read by the binary; cleared for every run
const MENU_TREE_VARS: &[&str] = &[
    "MENU_TREE_SEARCH_MODE",
    "MENU_TREE_MAX_DEPTH",
    "MENU_TREE_OUTPUT",
    "MENU_TREE_UNICODE",
    "MENU_TREE_LOG",
    "RUST_LOG",
];

/// Result of running a menu-tree CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Working directory of every run
    pub project_root: TempDir,
    /// Temporary directory for HOME and XDG_CONFIG_HOME
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Get path relative to home directory
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// Run menu-tree from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run menu-tree from the project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("TERM", "xterm-256color")
            .env_remove("NO_COLOR");

        for key in MENU_TREE_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute menu-tree");
        output_to_result(output)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
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

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Builder for `TestEnv`
#[derive(Default)]
pub struct TestEnvBuilder {
    project_files: Vec<(String, String)>,
    user_config: Option<String>,
}

impl TestEnvBuilder {
    /// Add a file (menu definition, config) to the project directory
    pub fn with_project_file(mut self, name: &str, content: &str) -> Self {
        self.project_files.push((name.to_string(), content.to_string()));
        self
    }

    /// Write `./menu-tree.toml`
    pub fn with_project_config(self, toml: &str) -> Self {
        self.with_project_file("menu-tree.toml", toml)
    }

    /// Write `$XDG_CONFIG_HOME/menu-tree/config.toml`
    pub fn with_user_config(mut self, toml: &str) -> Self {
        self.user_config = Some(toml.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_menu-tree")),
        };

        for (name, content) in &self.project_files {
            env.write_project_file(name, content);
        }
        if let Some(config) = &self.user_config {
            write_file(&env.home_path(".config/menu-tree/config.toml"), config);
        }

        env
    }
}
