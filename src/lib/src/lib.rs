//! 🛡️ libdriftguard
//!
//! Validate train/test tabular datasets against an externally defined
//! schema and for per-column distribution drift before they feed a
//! model-training stage.
//!
//! # Examples
//!
//! Validating an ingested train/test split:
//!
//! ```
//! use libdriftguard::config::ValidationConfig;
//! use libdriftguard::model::IngestionArtifact;
//! use libdriftguard::pipeline::DataValidation;
//!
//! let ingestion = IngestionArtifact::new("data/ingested/train.csv", "data/ingested/test.csv");
//! let config = ValidationConfig::new("artifacts/run_0", "schema.yaml");
//! let validation = DataValidation::new(ingestion, config)?;
//! let artifact = validation.run()?;
//! println!("validation status: {}", artifact.validation_status);
//! ```

pub mod config;
pub mod constants;
pub mod df;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod util;
pub mod validate;
