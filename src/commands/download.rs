use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;

use crate::{github::GetReleases, runtime::Runtime};

use super::{Config, resolve_wheel};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DownloadOptions {
    /// Target directory, defaults to the working directory
    pub dir: Option<PathBuf>,
    /// Replace a wheel that is already present
    pub force: bool,
}

/// Download the wheel for this host and print where it was saved.
///
/// The body is streamed to `<file>.part` and renamed once complete.
#[tracing::instrument(skip(config, options))]
pub async fn download<R: Runtime, G: GetReleases>(
    config: &Config<R, G>,
    version: &str,
    options: &DownloadOptions,
) -> Result<PathBuf> {
    let wheel = resolve_wheel(config, version).await?;

    let dir = match &options.dir {
        Some(dir) => dir.clone(),
        None => config.runtime.current_dir()?,
    };
    let target = dir.join(&wheel.filename);

    if config.runtime.exists(&target) && !options.force {
        info!("{:?} already exists, skipping download", target);
        println!("{}", target.display());
        return Ok(target);
    }

    config.runtime.create_dir_all(&dir)?;
    let part = dir.join(format!("{}.part", wheel.filename));

    info!("Downloading {}...", wheel.url);
    let result = config
        .http_client
        .download_file(&wheel.url, || config.runtime.create_file(&part))
        .await;

    let bytes = match result {
        Ok(bytes) => bytes,
        Err(e) => {
            if config.runtime.exists(&part) {
                if let Err(cleanup) = config.runtime.remove_file(&part) {
                    warn!("Failed to remove {:?}: {}", part, cleanup);
                }
            }
            return Err(e).with_context(|| format!("Failed to download {}", wheel.url));
        }
    };

    config.runtime.rename(&part, &target)?;
    info!("Saved {} bytes to {:?}", bytes, target);
    println!("{}", target.display());
    Ok(target)
}
