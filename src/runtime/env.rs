//! Environment, working directory and target platform.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn env_var_impl(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }

    pub(crate) fn target_os_impl(&self) -> String {
        env::consts::OS.to_string()
    }

    pub(crate) fn target_arch_impl(&self) -> String {
        env::consts::ARCH.to_string()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn current_dir_impl(&self) -> Result<PathBuf> {
        env::current_dir().context("Failed to get current directory")
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};

    #[test]
    fn test_real_runtime_env_and_dirs() {
        let runtime = RealRuntime;

        // PATH should exist on all systems
        assert!(runtime.env_var("PATH").is_ok());
        assert!(
            runtime
                .env_var("AI_WHEEL_SURELY_UNSET_VARIABLE_1234")
                .is_err()
        );

        assert!(runtime.current_dir().unwrap().is_absolute());
    }

    #[test]
    fn test_real_runtime_target_matches_consts() {
        let runtime = RealRuntime;
        assert_eq!(runtime.target_os(), std::env::consts::OS);
        assert_eq!(runtime.target_arch(), std::env::consts::ARCH);
    }
}
