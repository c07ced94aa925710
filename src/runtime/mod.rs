//! Runtime abstraction for system operations.
//!
//! Everything that touches the host (environment, target platform, files,
//! child processes) goes through the [`Runtime`] trait so the rest of the
//! crate can be tested against a mock.
//!
//! # Structure
//!
//! - `env` - Environment variables, working directory and target platform
//! - `fs` - File system operations used by downloads
//! - `process` - Child processes (interpreter probe, pip)

mod env;
mod fs;
mod process;

use anyhow::Result;
use std::env as std_env;
use std::path::{Path, PathBuf};

/// Captured result of a finished child process.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;

    /// Operating system this binary was compiled for (`std::env::consts::OS`).
    fn target_os(&self) -> String;

    /// CPU architecture this binary was compiled for (`std::env::consts::ARCH`).
    fn target_arch(&self) -> String;

    // Directories
    fn current_dir(&self) -> Result<PathBuf>;

    // File System
    fn exists(&self, path: &Path) -> bool;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn create_file(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>>;
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;
    fn remove_file(&self, path: &Path) -> Result<()>;

    // Processes
    /// Run a program to completion and capture its output.
    fn command_output(&self, program: &str, args: &[String]) -> Result<CommandOutput>;

    /// Run a program with inherited stdio. Returns its exit code.
    fn command_status(&self, program: &str, args: &[String]) -> Result<Option<i32>>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn target_os(&self) -> String {
        self.target_os_impl()
    }

    fn target_arch(&self) -> String {
        self.target_arch_impl()
    }

    fn current_dir(&self) -> Result<PathBuf> {
        self.current_dir_impl()
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.create_dir_all_impl(path)
    }

    fn create_file(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>> {
        self.create_file_impl(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        self.rename_impl(from, to)
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        self.remove_file_impl(path)
    }

    fn command_output(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        self.command_output_impl(program, args)
    }

    fn command_status(&self, program: &str, args: &[String]) -> Result<Option<i32>> {
        self.command_status_impl(program, args)
    }
}
