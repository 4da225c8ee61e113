use std::fs;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::error::DriftGuardError;

pub fn read_from_path(path: impl AsRef<Path>) -> Result<String, DriftGuardError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(err) => {
            log::error!("Could not read file {:?}: {}", path, err);
            Err(DriftGuardError::from(err))
        }
    }
}

pub fn write_to_path(
    path: impl AsRef<Path>,
    value: impl AsRef<str>,
) -> Result<(), DriftGuardError> {
    let path = path.as_ref();
    create_parent_dirs(path)?;
    let mut file = File::create(path)?;
    file.write_all(value.as_ref().as_bytes())?;
    Ok(())
}

/// Create the parent directory of `path` if it does not exist yet.
pub fn create_parent_dirs(path: impl AsRef<Path>) -> Result<(), DriftGuardError> {
    if let Some(parent) = path.as_ref().parent() {
        // parent is empty for bare relative filenames
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

pub fn remove_dir_all(path: impl AsRef<Path>) -> Result<(), DriftGuardError> {
    fs::remove_dir_all(path.as_ref())?;
    Ok(())
}
