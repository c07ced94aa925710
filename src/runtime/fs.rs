//! File system operations used when saving downloaded wheels.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn exists_impl(&self, path: &Path) -> bool {
        path.exists()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn create_dir_all_impl(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn create_file_impl(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>> {
        let file = fs::File::create(path)
            .with_context(|| format!("Failed to create file {:?}", path))?;
        Ok(Box::new(file))
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn rename_impl(&self, from: &Path, to: &Path) -> Result<()> {
        fs::rename(from, to)
            .with_context(|| format!("Failed to rename {:?} to {:?}", from, to))?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn remove_file_impl(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).with_context(|| format!("Failed to remove file {:?}", path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_real_runtime_file_ops() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let nested = dir.path().join("wheels/cache");

        runtime.create_dir_all(&nested).unwrap();
        assert!(runtime.exists(&nested));

        let part = nested.join("pkg.whl.part");
        {
            let mut file = runtime.create_file(&part).unwrap();
            file.write_all(b"wheel bytes").unwrap();
        }
        assert!(runtime.exists(&part));

        let final_path = nested.join("pkg.whl");
        runtime.rename(&part, &final_path).unwrap();
        assert!(!runtime.exists(&part));
        assert_eq!(std::fs::read(&final_path).unwrap(), b"wheel bytes");

        runtime.remove_file(&final_path).unwrap();
        assert!(!runtime.exists(&final_path));
    }

    #[test]
    fn test_real_runtime_errors() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.whl");

        assert!(runtime.remove_file(&missing).is_err());
        assert!(runtime.rename(&missing, &dir.path().join("other")).is_err());
        assert!(runtime.create_file(&dir.path().join("no/such/dir/file")).is_err());
    }
}
