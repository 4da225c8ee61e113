//! Read and write the YAML documents the pipeline exchanges: schema,
//! drift report, configs, artifacts.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

use crate::error::DriftGuardError;
use crate::util;

pub fn read_yaml_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, DriftGuardError> {
    let path = path.as_ref();
    let contents = util::fs::read_from_path(path)?;
    let value = serde_yaml::from_str(&contents)?;
    Ok(value)
}

/// Serialize `value` as YAML at `path`, creating parent directories. With
/// `replace` any existing file is removed first.
pub fn write_yaml_file<T: Serialize>(
    path: impl AsRef<Path>,
    value: &T,
    replace: bool,
) -> Result<(), DriftGuardError> {
    let path = path.as_ref();
    if replace && path.exists() {
        std::fs::remove_file(path)?;
    }
    let contents = serde_yaml::to_string(value)?;
    util::fs::write_to_path(path, contents)
}
