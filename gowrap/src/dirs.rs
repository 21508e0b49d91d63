use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::debug;

use crate::{config::GowrapConfig, errors::GowrapError};

const VERSIONS_DIR: &str = "versions";

pub struct GowrapDirs {
    pub home: PathBuf,
}
impl GowrapDirs {
    /// `$GOWRAP_HOME/versions`, created if missing.
    pub fn versions_dir(&self) -> Result<PathBuf, GowrapError> {
        let mut versions_dir = self.home.clone();
        versions_dir.push(VERSIONS_DIR);

        debug!("Creating {}", versions_dir.display());
        fs::create_dir_all(&versions_dir)
            .map_err(|e| GowrapError::DirectoryInit(versions_dir.clone(), e))?;

        Ok(versions_dir)
    }
    pub fn installation_path(&self, version: &str) -> PathBuf {
        let mut installation_dir = self.home.clone();
        installation_dir.push(format!("{}/{}", VERSIONS_DIR, version));

        installation_dir
    }
}
impl GowrapDirs {
    pub fn new(config_path: &Option<String>) -> Result<Self, GowrapError> {
        let proj_dirs =
            ProjectDirs::from("com", "xabierlaiseca", "gowrap").ok_or(GowrapError::NoHomeError)?;

        let config_path = if let Some(conf) = config_path {
            PathBuf::from(conf)
        } else {
            let mut config_path = proj_dirs.config_dir().to_path_buf();
            config_path.push("gowrap.toml");

            config_path
        };
        let config = GowrapConfig::load(&config_path)?;
        let home = resolve_home(
            std::env::var("GOWRAP_HOME").ok(),
            &config,
            proj_dirs.data_dir(),
        );
        debug!("Using home {}", home.display());

        Ok(Self { home })
    }
}

// GOWRAP_HOME wins over the configuration file, which wins over the platform default.
fn resolve_home(env_home: Option<String>, config: &GowrapConfig, data_dir: &Path) -> PathBuf {
    match env_home {
        Some(env) => PathBuf::from(env),
        None => match &config.home {
            Some(home) => home.clone(),
            None => data_dir.to_path_buf(),
        },
    }
}
