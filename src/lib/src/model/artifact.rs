use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::DriftGuardError;
use crate::util;

/// Output of the external ingestion stage: where the train/test split
/// landed on disk.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IngestionArtifact {
    pub train_file_path: PathBuf,
    pub test_file_path: PathBuf,
}

impl IngestionArtifact {
    pub fn new(train_file_path: impl AsRef<Path>, test_file_path: impl AsRef<Path>) -> IngestionArtifact {
        IngestionArtifact {
            train_file_path: train_file_path.as_ref().to_path_buf(),
            test_file_path: test_file_path.as_ref().to_path_buf(),
        }
    }
}

/// Output of a validation run, consumed by the downstream training stage.
/// Built once at the end of the run and immutable afterwards.
///
/// The invalid paths are part of the downstream contract but are never
/// populated by this stage: no row-level partitioning happens, the train
/// and test tables are persisted verbatim to the valid paths.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationArtifact {
    pub validation_status: bool,
    pub valid_train_file_path: PathBuf,
    pub valid_test_file_path: PathBuf,
    pub invalid_train_file_path: PathBuf,
    pub invalid_test_file_path: PathBuf,
    pub drift_report_file_path: PathBuf,
}

impl ValidationArtifact {
    /// Persist the artifact as YAML so an external driver can hand it to
    /// the next pipeline stage.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DriftGuardError> {
        util::yaml::write_yaml_file(path, self, true)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<ValidationArtifact, DriftGuardError> {
        util::yaml::read_yaml_file(path)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::error::DriftGuardError;
    use crate::model::ValidationArtifact;
    use crate::test;

    #[test]
    fn test_artifact_round_trip() -> Result<(), DriftGuardError> {
        test::run_empty_dir_test(|dir| {
            let artifact = ValidationArtifact {
                validation_status: true,
                valid_train_file_path: PathBuf::from("validated/train.csv"),
                valid_test_file_path: PathBuf::from("validated/test.csv"),
                invalid_train_file_path: PathBuf::from("invalid/train.csv"),
                invalid_test_file_path: PathBuf::from("invalid/test.csv"),
                drift_report_file_path: PathBuf::from("drift_report/report.yaml"),
            };

            let path = dir.join("artifact.yaml");
            artifact.save(&path)?;
            let loaded = ValidationArtifact::from_file(&path)?;
            assert_eq!(loaded, artifact);
            Ok(())
        })
    }
}
