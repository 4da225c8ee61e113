//! Errors for the driftguard library
//!
//! Enumeration for all errors that can occur while validating datasets
//!

use derive_more::{Display, Error};
use std::io;
use std::path::Path;

pub mod string_error;

pub use crate::error::string_error::StringError;

use polars::prelude::PolarsError;

#[derive(Debug, Display, Error)]
pub enum DriftGuardError {
    // Schema / configuration
    SchemaConfig(StringError),

    // Structural validation (strict mode only)
    Validation(StringError),

    // Tabular input
    Parse(StringError),
    ColumnNotFound(StringError),

    // Statistical test preconditions
    StatisticalTest(StringError),

    // External library errors
    IO(io::Error),
    Polars(PolarsError),
    Yaml(serde_yaml::Error),

    // Fallback
    Basic(StringError),
}

impl DriftGuardError {
    pub fn basic_str(s: impl AsRef<str>) -> Self {
        DriftGuardError::Basic(StringError::from(s.as_ref()))
    }

    pub fn schema_config(s: impl AsRef<str>) -> Self {
        DriftGuardError::SchemaConfig(StringError::from(s.as_ref()))
    }

    pub fn schema_file_not_found(path: impl AsRef<Path>) -> Self {
        let err = format!("Schema file does not exist: {:?}", path.as_ref());
        DriftGuardError::SchemaConfig(StringError::from(err))
    }

    pub fn validation(s: impl AsRef<str>) -> Self {
        DriftGuardError::Validation(StringError::from(s.as_ref()))
    }

    pub fn parse_error(s: impl AsRef<str>) -> Self {
        DriftGuardError::Parse(StringError::from(s.as_ref()))
    }

    pub fn column_not_found(name: impl AsRef<str>) -> Self {
        let err = format!("Column not found: {:?}", name.as_ref());
        DriftGuardError::ColumnNotFound(StringError::from(err))
    }

    pub fn statistical_test(s: impl AsRef<str>) -> Self {
        DriftGuardError::StatisticalTest(StringError::from(s.as_ref()))
    }

    pub fn file_does_not_exist(path: impl AsRef<Path>) -> Self {
        let err = format!("File does not exist: {:?}", path.as_ref());
        DriftGuardError::IO(io::Error::new(io::ErrorKind::NotFound, err))
    }
}

// if you do not want to call .map_err, implement the std::convert::From trait
impl From<io::Error> for DriftGuardError {
    fn from(error: io::Error) -> Self {
        DriftGuardError::IO(error)
    }
}

impl From<PolarsError> for DriftGuardError {
    fn from(error: PolarsError) -> Self {
        DriftGuardError::Polars(error)
    }
}

impl From<serde_yaml::Error> for DriftGuardError {
    fn from(error: serde_yaml::Error) -> Self {
        DriftGuardError::Yaml(error)
    }
}

impl From<String> for DriftGuardError {
    fn from(error: String) -> Self {
        DriftGuardError::Basic(StringError::from(error))
    }
}
