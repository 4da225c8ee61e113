use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::DriftGuardError;
use crate::util;

/// Expected structure of the ingested tables: ordered column names plus the
/// subset that must hold numerical data. Loaded once per run and immutable
/// afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DataSchema {
    pub columns: Vec<String>,
    pub numerical_columns: Vec<String>,
}

impl DataSchema {
    /// Load and eagerly validate a schema document. A missing file,
    /// malformed YAML, missing keys, or duplicate names all fail here
    /// rather than later in the run.
    pub fn from_file(path: impl AsRef<Path>) -> Result<DataSchema, DriftGuardError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DriftGuardError::schema_file_not_found(path));
        }

        let contents = util::fs::read_from_path(path)?;
        let schema: DataSchema = serde_yaml::from_str(&contents).map_err(|err| {
            DriftGuardError::schema_config(format!("Could not parse schema {path:?}: {err}"))
        })?;
        schema.validate()?;
        log::debug!(
            "Loaded schema from {:?} with {} columns ({} numerical)",
            path,
            schema.columns.len(),
            schema.numerical_columns.len()
        );
        Ok(schema)
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    fn validate(&self) -> Result<(), DriftGuardError> {
        if self.columns.is_empty() {
            return Err(DriftGuardError::schema_config("Schema has no columns"));
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for name in self.columns.iter().chain(self.numerical_columns.iter()) {
            if name.is_empty() {
                return Err(DriftGuardError::schema_config("Schema has an empty column name"));
            }
        }

        for name in &self.columns {
            if !seen.insert(name.as_str()) {
                return Err(DriftGuardError::schema_config(format!(
                    "Duplicate column name in schema: {name:?}"
                )));
            }
        }

        seen.clear();
        for name in &self.numerical_columns {
            if !seen.insert(name.as_str()) {
                return Err(DriftGuardError::schema_config(format!(
                    "Duplicate numerical column name in schema: {name:?}"
                )));
            }
        }

        Ok(())
    }
}
