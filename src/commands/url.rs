use anyhow::Result;

use crate::{github::GetReleases, runtime::Runtime};

use super::{Config, resolve_wheel};

/// Print the wheel URL for this host.
#[tracing::instrument(skip(config))]
pub async fn url<R: Runtime, G: GetReleases>(config: &Config<R, G>, version: &str) -> Result<String> {
    let wheel = resolve_wheel(config, version).await?;
    println!("{}", wheel.url);
    Ok(wheel.url)
}
