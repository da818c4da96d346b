//! External command execution.
//!
//! Every command the workflow runs goes through [`CommandRunner`] so the
//! pipeline can be exercised without spawning processes.

use std::path::Path;
use std::process::{Command, Stdio};

use log::debug;

use crate::error::{Error, Result};

/// Runs a shell command line in a working directory.
pub trait CommandRunner {
    /// Runs `command` with `cwd` as its working directory.
    ///
    /// # Errors
    /// * `Error::CommandError` if the command cannot be spawned or exits
    ///   with a non-zero status
    fn run(&self, command: &str, cwd: &Path) -> Result<()>;
}

/// Runs commands through `sh -c`, inheriting stdout and stderr.
#[derive(Debug, Default)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, cwd: &Path) -> Result<()> {
        debug!("Running '{}' in {}", command, cwd.display());

        let status = Command::new("sh")
            .arg("-c")
            .arg(command)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Error::CommandError {
                command: command.to_string(),
                message: e.to_string(),
            })?;

        if !status.success() {
            return Err(Error::CommandError {
                command: command.to_string(),
                message: format!("command failed with status: {status}"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_runner_succeeds_on_zero_status() {
        let dir = tempfile::tempdir().unwrap();
        ShellRunner::new().run("true", dir.path()).unwrap();
    }

    #[test]
    fn shell_runner_reports_failing_command() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShellRunner::new().run("exit 3", dir.path()).unwrap_err();
        match err {
            Error::CommandError { command, message } => {
                assert_eq!(command, "exit 3");
                assert!(message.contains("status"));
            }
            other => panic!("Expected CommandError, got {other:?}"),
        }
    }

    #[test]
    fn shell_runner_uses_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        ShellRunner::new().run("touch marker", dir.path()).unwrap();
        assert!(dir.path().join("marker").exists());
    }
}
