pub mod data_validation;

pub use crate::pipeline::data_validation::DataValidation;
