use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;

use crate::error::DriftGuardError;
use crate::util;

/// Drift verdict for a single column. `p_value` is `None` when the column
/// had fewer than two retained observations on either side and the
/// statistical test was skipped.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ColumnDrift {
    pub p_value: Option<f64>,
    pub drift_status: bool,
}

/// Per-column drift results keyed by column name, kept in the base frame's
/// column order. Serializes as a YAML mapping that round-trips in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriftReport {
    entries: Vec<(String, ColumnDrift)>,
}

impl DriftReport {
    pub fn new() -> DriftReport {
        DriftReport { entries: vec![] }
    }

    pub fn insert(&mut self, column: impl AsRef<str>, drift: ColumnDrift) {
        self.entries.push((column.as_ref().to_string(), drift));
    }

    pub fn get(&self, column: &str) -> Option<&ColumnDrift> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, drift)| drift)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnDrift)> {
        self.entries.iter().map(|(name, drift)| (name.as_str(), drift))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_drift(&self) -> bool {
        self.entries.iter().any(|(_, drift)| drift.drift_status)
    }

    /// Persist the report as YAML, creating parent directories and
    /// overwriting any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DriftGuardError> {
        let path = path.as_ref();
        log::debug!("Writing drift report to {:?}", path);
        util::yaml::write_yaml_file(path, self, true)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<DriftReport, DriftGuardError> {
        util::yaml::read_yaml_file(path)
    }
}

impl Serialize for DriftReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, drift) in &self.entries {
            map.serialize_entry(name, drift)?;
        }
        map.end()
    }
}

struct DriftReportVisitor;

impl<'de> Visitor<'de> for DriftReportVisitor {
    type Value = DriftReport;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a mapping from column name to drift result")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<DriftReport, A::Error> {
        let mut report = DriftReport::new();
        while let Some((name, drift)) = access.next_entry::<String, ColumnDrift>()? {
            report.insert(name, drift);
        }
        Ok(report)
    }
}

impl<'de> Deserialize<'de> for DriftReport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<DriftReport, D::Error> {
        deserializer.deserialize_map(DriftReportVisitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::DriftGuardError;
    use crate::model::{ColumnDrift, DriftReport};

    fn sample_report() -> DriftReport {
        let mut report = DriftReport::new();
        report.insert(
            "z_first",
            ColumnDrift {
                p_value: Some(0.87),
                drift_status: false,
            },
        );
        report.insert(
            "a_second",
            ColumnDrift {
                p_value: None,
                drift_status: false,
            },
        );
        report.insert(
            "m_third",
            ColumnDrift {
                p_value: Some(0.001),
                drift_status: true,
            },
        );
        report
    }

    #[test]
    fn test_round_trip_preserves_order() -> Result<(), DriftGuardError> {
        let report = sample_report();
        let yaml = serde_yaml::to_string(&report)?;
        let parsed: DriftReport = serde_yaml::from_str(&yaml)?;

        assert_eq!(parsed, report);
        let columns: Vec<&str> = parsed.columns().collect();
        assert_eq!(columns, vec!["z_first", "a_second", "m_third"]);
        Ok(())
    }

    #[test]
    fn test_skipped_column_serializes_null() -> Result<(), DriftGuardError> {
        let report = sample_report();
        let yaml = serde_yaml::to_string(&report)?;
        assert!(yaml.contains("p_value: null"));
        Ok(())
    }

    #[test]
    fn test_has_drift() {
        let report = sample_report();
        assert!(report.has_drift());
        assert!(!report.get("z_first").unwrap().drift_status);
        assert!(report.get("m_third").unwrap().drift_status);
    }
}
