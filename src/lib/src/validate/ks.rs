//! Two-sample Kolmogorov-Smirnov test.
//!
//! Nonparametric comparison of two empirical distributions: the statistic
//! is the maximum gap between the two empirical CDFs, the p-value comes
//! from the asymptotic Kolmogorov distribution with the standard
//! small-sample correction.

use crate::error::DriftGuardError;

/// Below this many observations on either side the test is undefined.
pub const MIN_SAMPLES: usize = 2;

const MAX_SERIES_TERMS: usize = 100;
const SERIES_EPS_TERM: f64 = 1e-3;
const SERIES_EPS_SUM: f64 = 1e-8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KsResult {
    pub statistic: f64,
    pub p_value: f64,
}

/// Run the two-sample KS test. Both samples must have at least
/// [`MIN_SAMPLES`] observations; callers are expected to guard this and
/// treat smaller samples as "no evidence of drift".
pub fn ks_2samp(base: &[f64], current: &[f64]) -> Result<KsResult, DriftGuardError> {
    if base.len() < MIN_SAMPLES || current.len() < MIN_SAMPLES {
        return Err(DriftGuardError::statistical_test(format!(
            "ks_2samp requires at least {} observations per sample, got {} and {}",
            MIN_SAMPLES,
            base.len(),
            current.len()
        )));
    }

    let mut base = base.to_vec();
    let mut current = current.to_vec();
    base.sort_by(f64::total_cmp);
    current.sort_by(f64::total_cmp);

    let statistic = ks_statistic(&base, &current);

    let n1 = base.len() as f64;
    let n2 = current.len() as f64;
    let en = (n1 * n2 / (n1 + n2)).sqrt();
    let p_value = kolmogorov_prob((en + 0.12 + 0.11 / en) * statistic);

    Ok(KsResult { statistic, p_value })
}

/// Maximum |ECDF_base - ECDF_current| over the merged sorted samples.
fn ks_statistic(base: &[f64], current: &[f64]) -> f64 {
    let n1 = base.len() as f64;
    let n2 = current.len() as f64;
    let mut i = 0;
    let mut j = 0;
    let mut d: f64 = 0.0;

    while i < base.len() && j < current.len() {
        let x = base[i].min(current[j]);
        while i < base.len() && base[i] <= x {
            i += 1;
        }
        while j < current.len() && current[j] <= x {
            j += 1;
        }
        let gap = (i as f64 / n1 - j as f64 / n2).abs();
        if gap > d {
            d = gap;
        }
    }

    d
}

/// Kolmogorov survival function Q(lambda) = 2 * sum_j (-1)^(j-1) exp(-2 j^2 lambda^2).
/// A series that fails to converge means the distributions are
/// indistinguishable, so 1.0 is returned.
fn kolmogorov_prob(lambda: f64) -> f64 {
    let exponent = -2.0 * lambda * lambda;
    let mut sum = 0.0;
    let mut sign = 1.0;
    let mut prev_term: f64 = 0.0;

    for j in 1..=MAX_SERIES_TERMS {
        let term = sign * 2.0 * (exponent * (j * j) as f64).exp();
        sum += term;
        if term.abs() <= SERIES_EPS_TERM * prev_term || term.abs() <= SERIES_EPS_SUM * sum.abs() {
            return sum.clamp(0.0, 1.0);
        }
        sign = -sign;
        prev_term = term.abs();
    }

    1.0
}

#[cfg(test)]
mod tests {
    use crate::error::DriftGuardError;
    use crate::validate::ks;

    #[test]
    fn test_identical_samples_no_drift() -> Result<(), DriftGuardError> {
        let values = vec![1.0; 10];
        let result = ks::ks_2samp(&values, &values)?;
        assert_eq!(result.statistic, 0.0);
        assert!(result.p_value > 0.95);
        Ok(())
    }

    #[test]
    fn test_disjoint_samples_drift() -> Result<(), DriftGuardError> {
        let base = vec![0.0; 20];
        let current = vec![100.0; 20];
        let result = ks::ks_2samp(&base, &current)?;
        assert_eq!(result.statistic, 1.0);
        assert!(result.p_value < 0.05);
        Ok(())
    }

    #[test]
    fn test_same_distribution_high_p() -> Result<(), DriftGuardError> {
        let base: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let current: Vec<f64> = (0..100).map(|i| i as f64 + 0.5).collect();
        let result = ks::ks_2samp(&base, &current)?;
        assert!(result.p_value > 0.05, "p_value was {}", result.p_value);
        Ok(())
    }

    #[test]
    fn test_shifted_distribution_low_p() -> Result<(), DriftGuardError> {
        let base: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let current: Vec<f64> = (0..100).map(|i| i as f64 + 500.0).collect();
        let result = ks::ks_2samp(&base, &current)?;
        assert!(result.p_value < 0.05, "p_value was {}", result.p_value);
        Ok(())
    }

    #[test]
    fn test_insufficient_samples() {
        let result = ks::ks_2samp(&[1.0], &[1.0, 2.0]);
        assert!(matches!(result, Err(DriftGuardError::StatisticalTest(_))));
    }

    #[test]
    fn test_p_value_in_unit_interval() -> Result<(), DriftGuardError> {
        let base: Vec<f64> = (0..50).map(|i| (i % 7) as f64).collect();
        let current: Vec<f64> = (0..50).map(|i| (i % 5) as f64).collect();
        let result = ks::ks_2samp(&base, &current)?;
        assert!((0.0..=1.0).contains(&result.p_value));
        Ok(())
    }
}
