pub mod artifact;
pub mod data_schema;
pub mod drift_report;

pub use crate::model::artifact::{IngestionArtifact, ValidationArtifact};
pub use crate::model::data_schema::DataSchema;
pub use crate::model::drift_report::{ColumnDrift, DriftReport};
