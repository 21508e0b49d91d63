use std::{fs, path::Path};

use log::debug;

use crate::{errors::GowrapError, semver};

/// Names of the directories under `versions_dir`, in directory order.
pub fn installed_versions(versions_dir: &Path) -> Result<Vec<String>, GowrapError> {
    let read_error = |e| GowrapError::VersionsDirRead(versions_dir.to_path_buf(), e);

    let mut versions = Vec::new();
    for entry in fs::read_dir(versions_dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        if !entry.file_type().map_err(read_error)?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        debug!("found version: {}", name);
        versions.push(name);
    }

    Ok(versions)
}

/// Installed versions in ascending order. Fails on the first directory whose
/// name is not a valid version.
pub fn sorted_installed_versions(versions_dir: &Path) -> Result<Vec<String>, GowrapError> {
    let mut versions = installed_versions(versions_dir)?;
    semver::sort_versions(&mut versions)?;

    Ok(versions)
}

pub fn latest_installed_version(versions_dir: &Path) -> Result<String, GowrapError> {
    let versions = installed_versions(versions_dir)?;

    semver::latest(&versions)?
        .cloned()
        .ok_or(GowrapError::NoVersionsInstalled)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn versions_dir_with(names: &[&str]) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in names {
            fs::create_dir(dir.path().join(name)).unwrap();
        }

        dir
    }

    #[test]
    fn test_sorted_installed_versions() {
        let dir = versions_dir_with(&["2", "1.20.1", "1.3", "1.20.4", "1.19.1"]);

        let versions = sorted_installed_versions(dir.path()).unwrap();

        assert_eq!(versions, vec!["1.3", "1.19.1", "1.20.1", "1.20.4", "2"]);
    }

    #[test]
    fn test_installed_versions_skips_files() {
        let dir = versions_dir_with(&["1.21"]);
        fs::write(dir.path().join("README"), "not a version").unwrap();

        let versions = sorted_installed_versions(dir.path()).unwrap();

        assert_eq!(versions, vec!["1.21"]);
    }

    #[test]
    fn test_sorted_installed_versions_invalid_dir() {
        let dir = versions_dir_with(&["1.21", "tip"]);

        let err = sorted_installed_versions(dir.path()).err().unwrap();

        assert_eq!(err.to_string(), "invalid semantic version: tip");
    }

    #[test]
    fn test_latest_installed_version() {
        let dir = versions_dir_with(&["1.9", "1.21.3", "1.10"]);

        assert_eq!(latest_installed_version(dir.path()).unwrap(), "1.21.3");
    }

    #[test]
    fn test_latest_installed_version_empty() {
        let dir = versions_dir_with(&[]);

        assert!(matches!(
            latest_installed_version(dir.path()),
            Err(GowrapError::NoVersionsInstalled)
        ));
    }

    #[test]
    fn test_installed_versions_missing_dir() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            installed_versions(&dir.path().join("missing")),
            Err(GowrapError::VersionsDirRead(_, _))
        ));
    }
}
