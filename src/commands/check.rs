use anyhow::{Result, bail};

use crate::{
    github::{GetReleases, ReleaseAsset},
    runtime::Runtime,
};

use super::{Config, resolve_wheel};

/// Verify that the release publishes the wheel this host needs.
#[tracing::instrument(skip(config))]
pub async fn check<R: Runtime, G: GetReleases>(
    config: &Config<R, G>,
    version: &str,
) -> Result<ReleaseAsset> {
    let wheel = resolve_wheel(config, version).await?;
    let release = config
        .github
        .get_release_by_tag(&config.repo, &wheel.release.tag)
        .await?;

    if let Some(asset) = release.find_asset(&wheel.filename) {
        println!("{} ({} bytes)", asset.browser_download_url, asset.size);
        return Ok(asset.clone());
    }

    let available = release.wheel_names();
    if available.is_empty() {
        bail!(
            "Release {} of {} publishes no wheels (wanted {})",
            release.tag_name,
            config.repo,
            wheel.filename
        );
    }
    bail!(
        "Release {} of {} has no {}\nAvailable wheels:\n  {}",
        release.tag_name,
        config.repo,
        wheel.filename,
        available.join("\n  ")
    )
}
