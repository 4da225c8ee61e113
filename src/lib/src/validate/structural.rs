use polars::prelude::DataFrame;

use crate::model::DataSchema;

/// True iff the frame has exactly as many columns as the schema expects.
///
/// Only cardinality is checked, never names or order; a frame with the
/// right number of wrongly named columns passes. Pair with
/// [`validate_numerical_columns`] for a name-level check on the numerical
/// subset.
pub fn validate_column_count(df: &DataFrame, schema: &DataSchema) -> bool {
    let num_columns = df.width();
    log::debug!(
        "validate_column_count frame has {} columns, schema expects {}",
        num_columns,
        schema.num_columns()
    );
    num_columns == schema.num_columns()
}

/// True iff every numerical column the schema designates is present in the
/// frame. Logs the missing names at warn level instead of failing.
pub fn validate_numerical_columns(df: &DataFrame, schema: &DataSchema) -> bool {
    let frame_columns = df.get_column_names();
    let missing: Vec<&str> = schema
        .numerical_columns
        .iter()
        .map(|name| name.as_str())
        .filter(|name| !frame_columns.contains(name))
        .collect();

    if !missing.is_empty() {
        log::warn!("Missing numerical columns: {:?}", missing);
        return false;
    }

    log::debug!(
        "All {} numerical columns are present",
        schema.numerical_columns.len()
    );
    true
}
