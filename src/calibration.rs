use std::collections::HashMap;
use std::fs;
use std::path::Path;
use serde::Deserialize;
use crate::error::CostError;
/// Offline-calibrated normalization bounds for one cost function.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct CalibrationStats {
    pub min: f64,
    pub max: f64,
}
impl CalibrationStats {
    fn validate(&self, name: &str) -> Result<(), CostError> {
        if self.max <= self.min {
            return Err(CostError::DegenerateCalibration {
                name: name.to_owned(),
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}
/// Cost-function name -> calibration bounds, loaded once at start-up and
/// immutable afterwards. Safe to share read-only across estimators.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct CalibrationTable {
    entries: HashMap<String, CalibrationStats>,
}
impl CalibrationTable {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CostError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
    pub fn from_json(text: &str) -> Result<Self, CostError> {
        let table: CalibrationTable = serde_json::from_str(text)?;
        Ok(table)
    }
    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, CalibrationStats)>,
    ) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }
    /// Bounds for `name`, validated for use in min-max normalization.
    pub fn stats_for(&self, name: &str) -> Result<CalibrationStats, CostError> {
        let stats = self
            .entries
            .get(name)
            .ok_or_else(|| CostError::MissingCalibration {
                name: name.to_owned(),
            })?;
        stats.validate(name)?;
        Ok(*stats)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn parses_a_json_document() {
        let table = CalibrationTable::from_json(
            r#"{
                "freq_band_1_30": {"min": 0.0, "max": 10.0},
                "freq_bins_5": {"min": 0.5, "max": 4.5}
            }"#,
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        let stats = table.stats_for("freq_band_1_30").unwrap();
        assert_eq!(stats, CalibrationStats { min: 0.0, max: 10.0 });
    }
    #[test]
    fn missing_key_is_an_error() {
        let table = CalibrationTable::default();
        let err = table.stats_for("freq_band_1_30").unwrap_err();
        assert!(matches!(err, CostError::MissingCalibration { .. }));
    }
    #[test]
    fn equal_bounds_are_degenerate() {
        let table = CalibrationTable::from_entries([(
            "freq_band_1_30".to_owned(),
            CalibrationStats { min: 2.0, max: 2.0 },
        )]);
        let err = table.stats_for("freq_band_1_30").unwrap_err();
        assert!(matches!(err, CostError::DegenerateCalibration { .. }));
    }
    #[test]
    fn inverted_bounds_are_degenerate() {
        let table = CalibrationTable::from_entries([(
            "freq_band_1_30".to_owned(),
            CalibrationStats { min: 5.0, max: 1.0 },
        )]);
        assert!(table.stats_for("freq_band_1_30").is_err());
    }
}
