// Filenames and dirs
pub const SCHEMA_FILENAME: &str = "schema.yaml";
pub const DATA_VALIDATION_DIR: &str = "data_validation";
pub const VALIDATED_DATA_DIR: &str = "validated";
pub const INVALID_DATA_DIR: &str = "invalid";
pub const DRIFT_REPORT_DIR: &str = "drift_report";
pub const DRIFT_REPORT_FILENAME: &str = "report.yaml";
pub const TRAIN_FILENAME: &str = "train.csv";
pub const TEST_FILENAME: &str = "test.csv";

// Drift detection
pub const DEFAULT_KS_THRESHOLD: f64 = 0.05;
