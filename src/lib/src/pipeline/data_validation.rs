use polars::prelude::DataFrame;

use crate::config::ValidationConfig;
use crate::df::tabular;
use crate::error::DriftGuardError;
use crate::model::{DataSchema, IngestionArtifact, ValidationArtifact};
use crate::validate::{drift, structural};

/// Validates an ingested train/test split against the schema and for
/// distribution drift, persisting the validated copies and the drift
/// report along the way.
///
/// One linear pass per run: read both tables, structural checks, drift
/// detection, persist outputs, build the artifact. No step is retried;
/// the first error aborts the run.
pub struct DataValidation {
    ingestion_artifact: IngestionArtifact,
    config: ValidationConfig,
    schema: DataSchema,
}

impl DataValidation {
    /// Loads the schema eagerly. An unreadable or malformed schema is
    /// fatal here, before any table is touched.
    pub fn new(
        ingestion_artifact: IngestionArtifact,
        config: ValidationConfig,
    ) -> Result<DataValidation, DriftGuardError> {
        let schema = DataSchema::from_file(&config.schema_file_path)?;
        Ok(DataValidation {
            ingestion_artifact,
            config,
            schema,
        })
    }

    pub fn schema(&self) -> &DataSchema {
        &self.schema
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn run(&self) -> Result<ValidationArtifact, DriftGuardError> {
        log::info!("Starting data validation");
        let train_df = tabular::read_df_csv(&self.ingestion_artifact.train_file_path)?;
        let test_df = tabular::read_df_csv(&self.ingestion_artifact.test_file_path)?;

        self.check_structure("train", &train_df)?;
        self.check_structure("test", &test_df)?;

        log::info!("Detecting dataset drift between train and test");
        let (status, report) = drift::detect_drift(&train_df, &test_df, self.config.ks_threshold)?;
        report.save(&self.config.drift_report_file_path)?;

        let mut train_df = train_df;
        let mut test_df = test_df;
        tabular::write_df_csv(&mut train_df, &self.config.valid_train_file_path)?;
        tabular::write_df_csv(&mut test_df, &self.config.valid_test_file_path)?;

        let artifact = ValidationArtifact {
            validation_status: status,
            valid_train_file_path: self.config.valid_train_file_path.clone(),
            valid_test_file_path: self.config.valid_test_file_path.clone(),
            invalid_train_file_path: self.config.invalid_train_file_path.clone(),
            invalid_test_file_path: self.config.invalid_test_file_path.clone(),
            drift_report_file_path: self.config.drift_report_file_path.clone(),
        };
        log::info!(
            "Data validation complete, status: {}",
            artifact.validation_status
        );
        Ok(artifact)
    }

    /// Structural checks for one split. In the default lenient mode a
    /// failure is logged and the run continues; with `strict_structure`
    /// set the run stops here, before drift detection.
    fn check_structure(&self, split: &str, df: &DataFrame) -> Result<(), DriftGuardError> {
        if !structural::validate_column_count(df, &self.schema) {
            let msg = format!("{split} dataframe does not contain all columns");
            if self.config.strict_structure {
                return Err(DriftGuardError::validation(msg));
            }
            log::warn!("{msg}");
        }

        log::info!("Validating numerical columns in {split} dataframe");
        if !structural::validate_numerical_columns(df, &self.schema) {
            let msg = format!("{split} dataframe is missing required numerical columns");
            if self.config.strict_structure {
                return Err(DriftGuardError::validation(msg));
            }
            log::warn!("{msg}");
        }

        Ok(())
    }
}
