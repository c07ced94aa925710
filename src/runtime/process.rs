//! Child process execution.

use anyhow::{Context, Result};
use log::debug;
use std::process::{Command, Stdio};

use super::{CommandOutput, RealRuntime};

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn command_output_impl(
        &self,
        program: &str,
        args: &[String],
    ) -> Result<CommandOutput> {
        debug!("Running {} {:?}", program, args);
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("Failed to run '{}'", program))?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn command_status_impl(&self, program: &str, args: &[String]) -> Result<Option<i32>> {
        debug!("Spawning {} {:?}", program, args);
        let status = Command::new(program)
            .args(args)
            .status()
            .with_context(|| format!("Failed to run '{}'", program))?;
        Ok(status.code())
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};

    #[cfg(unix)]
    #[test]
    fn test_command_output_captures_stdout_and_code() {
        let runtime = RealRuntime;
        let output = runtime
            .command_output("sh", &["-c".to_string(), "echo 3.12; exit 3".to_string()])
            .unwrap();
        assert_eq!(output.stdout.trim(), "3.12");
        assert_eq!(output.code, Some(3));
        assert!(!output.success());
    }

    #[cfg(unix)]
    #[test]
    fn test_command_status_reports_exit_code() {
        let runtime = RealRuntime;
        let code = runtime
            .command_status("sh", &["-c".to_string(), "exit 0".to_string()])
            .unwrap();
        assert_eq!(code, Some(0));
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let runtime = RealRuntime;
        let err = runtime
            .command_output("ai-wheel-no-such-program", &[])
            .unwrap_err();
        assert!(err.to_string().contains("ai-wheel-no-such-program"));
    }
}
