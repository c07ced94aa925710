use anyhow::Result;
use log::debug;

use crate::platform::HostPlatform;
use crate::python::{PythonVersion, default_interpreter};
use crate::runtime::Runtime;

use super::{ReleaseLocation, ReleaseVersion, Wheel, wheel_filename};

/// Source of the ambient facts a wheel depends on.
#[cfg_attr(test, mockall::automock)]
pub trait HostProbe {
    fn platform(&self) -> Result<HostPlatform>;
    fn python_version(&self) -> Result<PythonVersion>;
}

/// Values that replace detection, typically from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostOverrides {
    pub os: Option<String>,
    pub arch: Option<String>,
    pub python_version: Option<PythonVersion>,
    pub interpreter: Option<String>,
}

/// Probe backed by the real system, honouring [`HostOverrides`].
pub struct SystemProbe<'a, R: Runtime> {
    runtime: &'a R,
    overrides: HostOverrides,
}

impl<'a, R: Runtime> SystemProbe<'a, R> {
    pub fn new(runtime: &'a R, overrides: HostOverrides) -> Self {
        Self { runtime, overrides }
    }

    /// The Python executable used for probing and installing.
    pub fn interpreter(&self) -> &str {
        self.overrides
            .interpreter
            .as_deref()
            .unwrap_or(default_interpreter())
    }
}

impl<R: Runtime> HostProbe for SystemProbe<'_, R> {
    #[tracing::instrument(skip(self))]
    fn platform(&self) -> Result<HostPlatform> {
        let platform = match (&self.overrides.os, &self.overrides.arch) {
            (Some(os), Some(arch)) => HostPlatform::new(os.clone(), arch.clone()),
            (Some(os), None) => HostPlatform::for_system(self.runtime, os),
            (None, Some(arch)) => {
                HostPlatform::new(HostPlatform::detect(self.runtime).system, arch.clone())
            }
            (None, None) => HostPlatform::detect(self.runtime),
        };
        debug!("Host platform: {} {}", platform.system, platform.machine);
        Ok(platform)
    }

    #[tracing::instrument(skip(self))]
    fn python_version(&self) -> Result<PythonVersion> {
        match self.overrides.python_version {
            Some(version) => Ok(version),
            None => PythonVersion::probe(self.runtime, self.interpreter()),
        }
    }
}

/// Turns a release version into the wheel URL for the probed host.
pub struct WheelResolver<P: HostProbe> {
    probe: P,
    location: ReleaseLocation,
}

impl<P: HostProbe> WheelResolver<P> {
    pub fn new(probe: P, location: ReleaseLocation) -> Self {
        Self { probe, location }
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub fn location(&self) -> &ReleaseLocation {
        &self.location
    }

    /// Resolve the wheel for `release`.
    ///
    /// The platform is checked before the interpreter is probed, so an
    /// unsupported host fails without spawning Python.
    #[tracing::instrument(skip(self))]
    pub fn resolve(&self, release: &ReleaseVersion) -> Result<Wheel> {
        let host = self.probe.platform()?;
        let key = host.key()?;
        let python = self.probe.python_version()?;

        let filename = wheel_filename(&release.version, &python, key);
        let url = format!("{}{}", self.location.base_url(&release.tag), filename);
        debug!("Resolved {} for {} / {}", url, key, python.tag());

        Ok(Wheel {
            key,
            python,
            release: release.clone(),
            filename,
            url,
        })
    }
}
