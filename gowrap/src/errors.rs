use std::path::PathBuf;

use thiserror::Error;

use miette::Diagnostic;

#[derive(Error, Diagnostic, Debug)]
pub enum GowrapError {
    #[error("invalid semantic version: {0}")]
    InvalidVersion(String),
    #[error("Cannot find gowrap home")]
    NoHomeError,
    #[error("Cannot read configuration: {0}")]
    ConfigRead(std::io::Error),
    #[error("Cannot write configuration: {0}")]
    ConfigWrite(std::io::Error),
    #[error("Configuration is malformed: {0}")]
    ConfigDeserialize(toml::de::Error),
    #[error("Cannot serialize configuration: {0}")]
    ConfigSerialize(toml::ser::Error),
    #[error("Cannot create directory {0}: {1}")]
    DirectoryInit(PathBuf, std::io::Error),
    #[error("Cannot read versions directory {0}: {1}")]
    VersionsDirRead(PathBuf, std::io::Error),
    #[error("No versions are installed")]
    NoVersionsInstalled,
}
