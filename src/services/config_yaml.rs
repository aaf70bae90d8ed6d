use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::config::{CapacityConfig, ConfigOverlay};

#[derive(Error, Debug)]
pub enum ConfigYamlError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to write config yaml: {0}")]
    Write(#[from] io::Error),
}

/// Reads a [`CapacityConfig`] from a YAML file. Fields that are left out,
/// including single fields of a nested section, keep their default values;
/// unknown fields are rejected.
pub fn load_config_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<CapacityConfig, ConfigYamlError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigYamlError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize_config_from_yaml_str(&contents)
}

pub fn deserialize_config_from_yaml_str(input: &str) -> Result<CapacityConfig, ConfigYamlError> {
    let mut config = CapacityConfig::default();
    if input.trim().is_empty() {
        return Ok(config);
    }
    let overlay: ConfigOverlay = serde_yaml::from_str(input)?;
    overlay.apply(&mut config);
    Ok(config)
}

pub fn serialize_config_to_yaml<W: Write>(
    writer: &mut W,
    config: &CapacityConfig,
) -> Result<(), ConfigYamlError> {
    let yaml = serde_yaml::to_string(config)?;
    writer.write_all(yaml.as_bytes())?;
    Ok(())
}
