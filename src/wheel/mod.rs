//! Wheel naming and release URLs for the `algebraic_immunity` package.
//!
//! A wheel URL is the release download directory for a version followed by a
//! filename built from the version, the interpreter tag (used as both the
//! implementation and the ABI tag) and the platform tag:
//!
//! ```text
//! https://github.com/LucaBonamino/algebraic_immunity/releases/download/1.2.0/
//!     algebraic_immunity-1.2.0-cp311-cp311-manylinux_2_17_x86_64.manylinux2014_x86_64.whl
//! ```

mod resolver;

pub use resolver::{HostOverrides, HostProbe, SystemProbe, WheelResolver};

#[cfg(test)]
pub use resolver::MockHostProbe;

use crate::platform::PlatformKey;
use crate::python::PythonVersion;

pub const PACKAGE_NAME: &str = "algebraic_immunity";
pub const DEFAULT_REPO: &str = "LucaBonamino/algebraic_immunity";
pub const DEFAULT_DOWNLOAD_URL: &str = "https://github.com";
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Version requested on the command line that resolves via the GitHub API.
pub const LATEST: &str = "latest";

/// A release to fetch a wheel from.
///
/// `tag` is the release tag in the download path, `version` the package
/// version in the filename. They only differ for tags like `v1.2.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseVersion {
    pub tag: String,
    pub version: String,
}

impl ReleaseVersion {
    /// Use the given string verbatim as both tag and version.
    pub fn exact(version: &str) -> Self {
        Self {
            tag: version.to_string(),
            version: version.to_string(),
        }
    }

    /// Derive the package version from a release tag.
    pub fn from_tag(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            version: tag.strip_prefix('v').unwrap_or(tag).to_string(),
        }
    }
}

/// The host and repository that publish the wheels.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseLocation {
    pub download_url: String,
    pub repo: String,
}

impl Default for ReleaseLocation {
    fn default() -> Self {
        Self {
            download_url: DEFAULT_DOWNLOAD_URL.to_string(),
            repo: DEFAULT_REPO.to_string(),
        }
    }
}

impl ReleaseLocation {
    pub fn new(download_url: &str, repo: &str) -> Self {
        Self {
            download_url: download_url.trim_end_matches('/').to_string(),
            repo: repo.trim_matches('/').to_string(),
        }
    }

    /// Directory URL for a release's assets, with a trailing slash.
    pub fn base_url(&self, tag: &str) -> String {
        format!(
            "{}/{}/releases/download/{}/",
            self.download_url, self.repo, tag
        )
    }
}

/// A resolved wheel for one platform and interpreter.
#[derive(Debug, Clone, PartialEq)]
pub struct Wheel {
    pub key: PlatformKey,
    pub python: PythonVersion,
    pub release: ReleaseVersion,
    pub filename: String,
    pub url: String,
}

pub fn wheel_filename(version: &str, python: &PythonVersion, key: PlatformKey) -> String {
    let tag = python.tag();
    format!(
        "{}-{}-{}-{}-{}.whl",
        PACKAGE_NAME,
        version,
        tag,
        tag,
        key.platform_tag()
    )
}
