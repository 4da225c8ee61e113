use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants;
use crate::error::DriftGuardError;
use crate::util;

fn default_ks_threshold() -> f64 {
    constants::DEFAULT_KS_THRESHOLD
}

/// Where a validation run reads its schema and writes its outputs, plus the
/// knobs for the run itself.
///
/// `strict_structure` decides what a failed structural check does: `false`
/// (the default) logs the diagnostic and continues to drift detection,
/// `true` fails the run before drift detection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ValidationConfig {
    pub schema_file_path: PathBuf,
    pub valid_train_file_path: PathBuf,
    pub valid_test_file_path: PathBuf,
    pub invalid_train_file_path: PathBuf,
    pub invalid_test_file_path: PathBuf,
    pub drift_report_file_path: PathBuf,
    #[serde(default = "default_ks_threshold")]
    pub ks_threshold: f64,
    #[serde(default)]
    pub strict_structure: bool,
}

impl ValidationConfig {
    /// Standard output layout under a pipeline artifact root:
    ///
    /// ```text
    /// <root>/data_validation/validated/{train,test}.csv
    /// <root>/data_validation/invalid/{train,test}.csv
    /// <root>/data_validation/drift_report/report.yaml
    /// ```
    pub fn new(artifact_root: impl AsRef<Path>, schema_file_path: impl AsRef<Path>) -> ValidationConfig {
        let dir = artifact_root.as_ref().join(constants::DATA_VALIDATION_DIR);
        let validated_dir = dir.join(constants::VALIDATED_DATA_DIR);
        let invalid_dir = dir.join(constants::INVALID_DATA_DIR);

        ValidationConfig {
            schema_file_path: schema_file_path.as_ref().to_path_buf(),
            valid_train_file_path: validated_dir.join(constants::TRAIN_FILENAME),
            valid_test_file_path: validated_dir.join(constants::TEST_FILENAME),
            invalid_train_file_path: invalid_dir.join(constants::TRAIN_FILENAME),
            invalid_test_file_path: invalid_dir.join(constants::TEST_FILENAME),
            drift_report_file_path: dir
                .join(constants::DRIFT_REPORT_DIR)
                .join(constants::DRIFT_REPORT_FILENAME),
            ks_threshold: constants::DEFAULT_KS_THRESHOLD,
            strict_structure: false,
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DriftGuardError> {
        log::debug!("Saving validation config to {:?}", path.as_ref());
        util::yaml::write_yaml_file(path, self, true)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<ValidationConfig, DriftGuardError> {
        util::yaml::read_yaml_file(path)
    }
}
