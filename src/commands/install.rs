use anyhow::{Result, bail};
use log::info;

use crate::{github::GetReleases, runtime::Runtime};

use super::{Config, resolve_wheel};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstallOptions {
    /// Print the pip command instead of running it
    pub dry_run: bool,
    /// Extra arguments passed to `pip install`
    pub pip_args: Vec<String>,
}

/// Arguments for `<python> -m pip install ... <url>`.
pub fn pip_install_args(url: &str, extra: &[String]) -> Vec<String> {
    let mut args = vec!["-m".to_string(), "pip".to_string(), "install".to_string()];
    args.extend(extra.iter().cloned());
    args.push(url.to_string());
    args
}

/// Install the wheel for this host into the probed interpreter.
///
/// pip runs under the same interpreter whose version picked the wheel, so
/// the `cpXY` tag always matches the environment it lands in.
#[tracing::instrument(skip(config, options))]
pub async fn install<R: Runtime, G: GetReleases>(
    config: &Config<R, G>,
    version: &str,
    options: &InstallOptions,
) -> Result<()> {
    let wheel = resolve_wheel(config, version).await?;
    let probe = config.probe();
    let interpreter = probe.interpreter();
    let args = pip_install_args(&wheel.url, &options.pip_args);

    if options.dry_run {
        println!("{} {}", interpreter, args.join(" "));
        return Ok(());
    }

    info!("Installing {} with {}...", wheel.filename, interpreter);
    match config.runtime.command_status(interpreter, &args)? {
        Some(0) => {
            println!("Successfully installed from {}", wheel.url);
            Ok(())
        }
        Some(code) => bail!(
            "pip install exited with status {} while installing {}",
            code,
            wheel.url
        ),
        None => bail!("pip install was terminated before finishing {}", wheel.url),
    }
}
