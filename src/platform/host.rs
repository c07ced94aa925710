use crate::runtime::Runtime;

use super::{PlatformKey, UnsupportedPlatform};

/// The host's operating system and architecture, named the way Python's
/// `platform.system()` and `platform.machine()` report them.
#[derive(Debug, Clone, PartialEq)]
pub struct HostPlatform {
    pub system: String,
    pub machine: String,
}

impl HostPlatform {
    pub fn new(system: impl Into<String>, machine: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            machine: machine.into(),
        }
    }

    /// Detect the platform the binary was compiled for.
    pub fn detect<R: Runtime>(runtime: &R) -> Self {
        Self::from_target(&runtime.target_os(), &runtime.target_arch())
    }

    /// Translate Rust target names (`std::env::consts`) to Python naming.
    pub fn from_target(os: &str, arch: &str) -> Self {
        let system = match os {
            "linux" => "Linux",
            "windows" => "Windows",
            "macos" => "Darwin",
            other => other,
        };

        let machine = match (os, arch) {
            ("windows", "x86_64") => "AMD64",
            ("windows", "aarch64") => "ARM64",
            ("macos", "aarch64") => "arm64",
            (_, other) => other,
        };

        Self::new(system, machine)
    }

    /// Platform for an explicitly named system on this machine's architecture.
    ///
    /// The raw target arch is renamed the way `system` spells it, so a
    /// `Windows` override on an x86_64 host yields `AMD64`.
    pub fn for_system<R: Runtime>(runtime: &R, system: &str) -> Self {
        let os = match system.to_ascii_lowercase().as_str() {
            "linux" => "linux",
            "windows" => "windows",
            "darwin" | "macos" => "macos",
            _ => return Self::new(system, runtime.target_arch()),
        };
        let target = Self::from_target(os, &runtime.target_arch());
        Self::new(system, target.machine)
    }

    pub fn key(&self) -> Result<PlatformKey, UnsupportedPlatform> {
        PlatformKey::from_parts(&self.system, &self.machine)
    }
}
