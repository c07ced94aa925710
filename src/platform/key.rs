use std::fmt;

/// The (operating system, architecture) pairs wheels are published for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKey {
    LinuxX86_64,
    LinuxAarch64,
    WindowsAmd64,
    WindowsX86,
    MacOsX86_64,
    MacOsArm64,
}

/// Returned when the (system, machine) pair has no wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct UnsupportedPlatform {
    pub system: String,
    pub machine: String,
}

impl fmt::Display for UnsupportedPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsupported platform: {} {}", self.system, self.machine)
    }
}

impl std::error::Error for UnsupportedPlatform {}

impl PlatformKey {
    pub const ALL: [PlatformKey; 6] = [
        PlatformKey::LinuxX86_64,
        PlatformKey::LinuxAarch64,
        PlatformKey::WindowsAmd64,
        PlatformKey::WindowsX86,
        PlatformKey::MacOsX86_64,
        PlatformKey::MacOsArm64,
    ];

    /// Look up the key for a `platform.system()` / `platform.machine()` style pair.
    ///
    /// Both parts are compared case-insensitively and `macos` is accepted for
    /// `Darwin`. Anything outside the table is rejected, including an unknown
    /// architecture on a known operating system.
    pub fn from_parts(system: &str, machine: &str) -> Result<Self, UnsupportedPlatform> {
        let system_lc = system.to_ascii_lowercase();
        let machine_lc = machine.to_ascii_lowercase();

        let key = match (system_lc.as_str(), machine_lc.as_str()) {
            ("linux", "x86_64") => Some(PlatformKey::LinuxX86_64),
            ("linux", "aarch64") => Some(PlatformKey::LinuxAarch64),
            ("windows", "amd64") => Some(PlatformKey::WindowsAmd64),
            ("windows", "x86") => Some(PlatformKey::WindowsX86),
            ("darwin" | "macos", "x86_64") => Some(PlatformKey::MacOsX86_64),
            ("darwin" | "macos", "arm64") => Some(PlatformKey::MacOsArm64),
            _ => None,
        };

        key.ok_or_else(|| UnsupportedPlatform {
            system: system.to_string(),
            machine: machine.to_string(),
        })
    }

    /// Canonical `platform.system()` name.
    pub fn system(&self) -> &'static str {
        match self {
            PlatformKey::LinuxX86_64 | PlatformKey::LinuxAarch64 => "Linux",
            PlatformKey::WindowsAmd64 | PlatformKey::WindowsX86 => "Windows",
            PlatformKey::MacOsX86_64 | PlatformKey::MacOsArm64 => "Darwin",
        }
    }

    /// Canonical `platform.machine()` name.
    pub fn machine(&self) -> &'static str {
        match self {
            PlatformKey::LinuxX86_64 | PlatformKey::MacOsX86_64 => "x86_64",
            PlatformKey::LinuxAarch64 => "aarch64",
            PlatformKey::WindowsAmd64 => "AMD64",
            PlatformKey::WindowsX86 => "x86",
            PlatformKey::MacOsArm64 => "arm64",
        }
    }

    /// The wheel platform tag, the last dash-separated part of the filename.
    pub fn platform_tag(&self) -> &'static str {
        match self {
            PlatformKey::LinuxX86_64 => "manylinux_2_17_x86_64.manylinux2014_x86_64",
            PlatformKey::LinuxAarch64 => "manylinux_2_17_aarch64.manylinux2014_aarch64",
            PlatformKey::WindowsAmd64 => "win_amd64",
            PlatformKey::WindowsX86 => "win32",
            PlatformKey::MacOsX86_64 => "macosx_10_9_x86_64",
            PlatformKey::MacOsArm64 => "macosx_11_0_arm64",
        }
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.system(), self.machine())
    }
}
