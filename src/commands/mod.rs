//! Command implementations behind the CLI.
//!
//! Every command starts the same way: the requested version becomes a
//! [`ReleaseVersion`] (asking GitHub when it is `latest`) and the host is
//! probed to pick the wheel.

use anyhow::{Result, bail};
use log::info;

use crate::{
    github::{GetReleases, GitHubRepo},
    runtime::Runtime,
    wheel::{LATEST, ReleaseVersion, Wheel, WheelResolver},
};

mod check;
mod config;
mod download;
mod install;
mod url;

pub use check::check;
pub use config::{Config, ConfigOptions};
pub use download::{DownloadOptions, download};
pub use install::{InstallOptions, install, pip_install_args};
pub use url::url;

/// Turn a version argument into a release.
#[tracing::instrument(skip(github))]
pub async fn resolve_release<G: GetReleases>(
    github: &G,
    repo: &GitHubRepo,
    version: &str,
) -> Result<ReleaseVersion> {
    let version = version.trim();
    if version.is_empty() {
        bail!("Version must not be empty");
    }

    if version.eq_ignore_ascii_case(LATEST) {
        let release = github.get_latest_release(repo).await?;
        info!("Latest release of {} is {}", repo, release.tag_name);
        check_version(&release.tag_name)?;
        return Ok(ReleaseVersion::from_tag(&release.tag_name));
    }

    check_version(version)?;
    Ok(ReleaseVersion::exact(version))
}

/// Versions become a URL path segment and part of a file name.
fn check_version(version: &str) -> Result<()> {
    if version == "."
        || version == ".."
        || version
            .chars()
            .any(|c| c == '/' || c == '\\' || c.is_whitespace())
    {
        bail!("Invalid version '{}'", version);
    }
    Ok(())
}

/// Resolve the wheel for this host and the requested version.
pub async fn resolve_wheel<R: Runtime, G: GetReleases>(
    config: &Config<R, G>,
    version: &str,
) -> Result<Wheel> {
    let release = resolve_release(&config.github, &config.repo, version).await?;
    WheelResolver::new(config.probe(), config.location.clone()).resolve(&release)
}
