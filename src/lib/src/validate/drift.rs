use polars::prelude::*;

use crate::error::DriftGuardError;
use crate::model::{ColumnDrift, DriftReport};
use crate::validate::ks;

/// Compare every base column's distribution against the current frame's.
///
/// Columns are visited in the base frame's column order. Values are cast
/// non-strictly to f64, so text that does not parse as a number counts as
/// missing; a column with fewer than two retained observations on either
/// side is recorded with `p_value: None` and skipped. A column drifts when
/// the KS p-value is strictly below `threshold`; `p == threshold` does not
/// drift. The overall status is true iff no column drifted.
///
/// A base column missing from the current frame is an error, not a drift.
pub fn detect_drift(
    base: &DataFrame,
    current: &DataFrame,
    threshold: f64,
) -> Result<(bool, DriftReport), DriftGuardError> {
    let mut status = true;
    let mut report = DriftReport::new();

    for column in base.get_column_names() {
        let base_values = numeric_values(base, column)?;
        let current_values = numeric_values(current, column)?;

        if base_values.len() < ks::MIN_SAMPLES || current_values.len() < ks::MIN_SAMPLES {
            log::debug!(
                "Skipping drift test for column {:?}: {} base and {} current observations",
                column,
                base_values.len(),
                current_values.len()
            );
            report.insert(
                column,
                ColumnDrift {
                    p_value: None,
                    drift_status: false,
                },
            );
            continue;
        }

        let result = ks::ks_2samp(&base_values, &current_values)?;
        let drift_found = result.p_value < threshold;
        if drift_found {
            log::warn!(
                "Drift detected in column {:?}: p_value {} below threshold {}",
                column,
                result.p_value,
                threshold
            );
            status = false;
        }

        report.insert(
            column,
            ColumnDrift {
                p_value: Some(result.p_value),
                drift_status: drift_found,
            },
        );
    }

    Ok((status, report))
}

/// Non-missing numeric observations for one column. The cast is
/// non-strict: unparseable text becomes null and is dropped along with
/// the column's own nulls and NaNs.
fn numeric_values(df: &DataFrame, column: &str) -> Result<Vec<f64>, DriftGuardError> {
    let series = df
        .column(column)
        .map_err(|_| DriftGuardError::column_not_found(column))?;
    let casted = series.cast(&DataType::Float64)?;
    let values = casted.f64()?;
    Ok(values
        .into_iter()
        .flatten()
        .filter(|v| !v.is_nan())
        .collect())
}

#[cfg(test)]
mod tests {
    use polars::prelude::*;

    use crate::error::DriftGuardError;
    use crate::validate::drift;
    use crate::validate::ks;

    #[test]
    fn test_identical_frames_no_drift() -> Result<(), DriftGuardError> {
        let base = df!(
            "a" => &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        )
        .unwrap();

        let (status, report) = drift::detect_drift(&base, &base, 0.05)?;
        assert!(status);
        let a = report.get("a").unwrap();
        assert!(!a.drift_status);
        assert!(a.p_value.unwrap() > 0.95);
        Ok(())
    }

    #[test]
    fn test_disjoint_column_drifts() -> Result<(), DriftGuardError> {
        let base = df!(
            "stable" => &(0..20).map(|i| i as f64).collect::<Vec<f64>>(),
            "shifted" => &vec![0.0; 20],
        )
        .unwrap();
        let current = df!(
            "stable" => &(0..20).map(|i| i as f64).collect::<Vec<f64>>(),
            "shifted" => &vec![100.0; 20],
        )
        .unwrap();

        let (status, report) = drift::detect_drift(&base, &current, 0.05)?;
        assert!(!status);
        assert!(!report.get("stable").unwrap().drift_status);
        assert!(report.get("shifted").unwrap().drift_status);
        assert!(report.get("shifted").unwrap().p_value.unwrap() < 0.05);
        Ok(())
    }

    #[test]
    fn test_insufficient_samples_skipped() -> Result<(), DriftGuardError> {
        let base = df!(
            "a" => &[1.0, 2.0, 3.0],
        )
        .unwrap();
        let current = df!(
            "a" => &[Some(42.0), None, None],
        )
        .unwrap();

        let (status, report) = drift::detect_drift(&base, &current, 0.05)?;
        assert!(status);
        let a = report.get("a").unwrap();
        assert_eq!(a.p_value, None);
        assert!(!a.drift_status);
        Ok(())
    }

    #[test]
    fn test_text_column_treated_as_missing() -> Result<(), DriftGuardError> {
        let base = df!(
            "label" => &["cat", "dog", "cat", "dog"],
        )
        .unwrap();

        let (status, report) = drift::detect_drift(&base, &base, 0.05)?;
        assert!(status);
        assert_eq!(report.get("label").unwrap().p_value, None);
        Ok(())
    }

    #[test]
    fn test_missing_column_in_current_is_error() {
        let base = df!("a" => &[1.0, 2.0]).unwrap();
        let current = df!("b" => &[1.0, 2.0]).unwrap();

        let result = drift::detect_drift(&base, &current, 0.05);
        assert!(matches!(result, Err(DriftGuardError::ColumnNotFound(_))));
    }

    #[test]
    fn test_p_value_equal_to_threshold_is_not_drift() -> Result<(), DriftGuardError> {
        let base_values: Vec<f64> = (0..50).map(|i| (i % 7) as f64).collect();
        let current_values: Vec<f64> = (0..50).map(|i| (i % 5) as f64).collect();
        let p = ks::ks_2samp(&base_values, &current_values)?.p_value;
        assert!(p > 0.0 && p < 1.0);

        let base = df!("a" => &base_values).unwrap();
        let current = df!("a" => &current_values).unwrap();

        // threshold exactly at the column's p-value, drift needs strictly less
        let (status, report) = drift::detect_drift(&base, &current, p)?;
        assert!(status);
        assert!(!report.get("a").unwrap().drift_status);

        // any threshold above it flips the call
        let above = p * (1.0 + 1e-12);
        let (status, report) = drift::detect_drift(&base, &current, above)?;
        assert!(!status);
        assert!(report.get("a").unwrap().drift_status);
        Ok(())
    }

    #[test]
    fn test_report_keeps_base_column_order() -> Result<(), DriftGuardError> {
        let base = df!(
            "zebra" => &[1.0, 2.0],
            "apple" => &[1.0, 2.0],
            "mango" => &[1.0, 2.0],
        )
        .unwrap();

        let (_, report) = drift::detect_drift(&base, &base, 0.05)?;
        let columns: Vec<&str> = report.columns().collect();
        assert_eq!(columns, vec!["zebra", "apple", "mango"]);
        Ok(())
    }
}
