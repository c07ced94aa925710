//! Python interpreter version and its wheel tag.

use anyhow::{Context, Result, anyhow, bail};
use log::debug;
use std::fmt;
use std::str::FromStr;

use crate::runtime::Runtime;

/// Prints `major.minor` of the running interpreter.
const VERSION_PROBE: &str = "import sys; print('%d.%d' % sys.version_info[:2])";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
}

impl PythonVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// CPython interpreter tag, e.g. `cp311`.
    pub fn tag(&self) -> String {
        format!("cp{}{}", self.major, self.minor)
    }

    /// Ask an interpreter for its version.
    #[tracing::instrument(skip(runtime))]
    pub fn probe<R: Runtime>(runtime: &R, interpreter: &str) -> Result<Self> {
        let args = vec!["-c".to_string(), VERSION_PROBE.to_string()];
        let output = runtime
            .command_output(interpreter, &args)
            .with_context(|| format!("Failed to query Python version from '{}'", interpreter))?;

        if !output.success() {
            bail!(
                "'{}' exited with status {:?}: {}",
                interpreter,
                output.code,
                output.stderr.trim()
            );
        }

        let version = output.stdout.trim().parse::<PythonVersion>().with_context(|| {
            format!("Unexpected version output from '{}'", interpreter)
        })?;
        debug!("{} reports Python {}", interpreter, version);
        Ok(version)
    }
}

/// The interpreter to probe when none is configured.
pub fn default_interpreter() -> &'static str {
    if cfg!(windows) { "python" } else { "python3" }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for PythonVersion {
    type Err = anyhow::Error;

    /// Accepts `3.11`, `3.11.4` and `cp311`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || anyhow!("Invalid Python version '{}'. Expected e.g. '3.11' or 'cp311'.", s);

        if let Some(digits) = s.strip_prefix("cp") {
            // Single-digit major, one- or two-digit minor: cp39, cp311
            if !(2..=3).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            let (major, minor) = digits.split_at(1);
            if minor.len() > 1 && minor.starts_with('0') {
                return Err(invalid());
            }
            return Ok(Self::new(
                major.parse().map_err(|_| invalid())?,
                minor.parse().map_err(|_| invalid())?,
            ));
        }

        let mut parts = s.split('.');
        let major = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
        let minor = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
        // A patch component, if present, is ignored but must still be numeric
        match parts.next() {
            None => {}
            Some(patch) if patch.parse::<u32>().is_ok() && parts.next().is_none() => {}
            Some(_) => return Err(invalid()),
        }
        Ok(Self::new(major, minor))
    }
}
