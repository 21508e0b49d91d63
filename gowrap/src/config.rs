use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::errors::GowrapError;

#[derive(Serialize, Deserialize, Default)]
pub struct GowrapConfig {
    pub home: Option<PathBuf>,
}

impl GowrapConfig {
    /// Reads the configuration, writing a default one when the file is missing.
    pub fn load(config_path: &Path) -> Result<GowrapConfig, GowrapError> {
        let config = if !fs::exists(config_path).map_err(GowrapError::ConfigRead)? {
            let config = GowrapConfig::default();
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| GowrapError::DirectoryInit(parent.to_path_buf(), e))?;
            }
            let config_toml =
                toml::ser::to_string(&config).map_err(GowrapError::ConfigSerialize)?;
            fs::write(config_path, config_toml).map_err(GowrapError::ConfigWrite)?;

            config
        } else {
            let config_read = fs::read_to_string(config_path).map_err(GowrapError::ConfigRead)?;
            let config: GowrapConfig =
                toml::de::from_str(&config_read).map_err(GowrapError::ConfigDeserialize)?;
            config
        };

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_creates_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut config_path = dir.path().to_path_buf();
        config_path.push("nested/gowrap.toml");

        let config = GowrapConfig::load(&config_path).unwrap();

        assert!(config.home.is_none());
        assert!(fs::exists(&config_path).unwrap());
    }

    #[test]
    fn test_load_reads_home() {
        let dir = tempfile::tempdir().unwrap();
        let mut config_path = dir.path().to_path_buf();
        config_path.push("gowrap.toml");
        fs::write(&config_path, "home = \"/opt/gowrap\"\n").unwrap();

        let config = GowrapConfig::load(&config_path).unwrap();

        assert_eq!(config.home, Some(PathBuf::from("/opt/gowrap")));
    }

    #[test]
    fn test_load_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let mut config_path = dir.path().to_path_buf();
        config_path.push("gowrap.toml");
        fs::write(&config_path, "home = [").unwrap();

        let result = GowrapConfig::load(&config_path);

        assert!(matches!(result, Err(GowrapError::ConfigDeserialize(_))));
    }
}
