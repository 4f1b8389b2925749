use crate::calibration::{CalibrationStats, CalibrationTable};
use crate::error::CostError;
use crate::spectral;
/// Band-power strategy, resolved once from the configured cost-function
/// name. The name selects the mode by substring ("bins" or "band"), so an
/// invalid configuration fails at construction instead of on the sample
/// path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CostFunctionSpec {
    /// Average absolute band power over `num_bins` equal-width segments of
    /// `[0, nyquist]`, each shifted up by 1 Hz to skip near-DC content.
    Bins { num_bins: usize },
    /// Absolute band power over a single frequency range.
    Band { low_hz: f64, high_hz: f64 },
}
impl CostFunctionSpec {
    pub fn from_name(
        name: &str,
        freq_range: Option<[f64; 2]>,
        num_bins: Option<usize>,
    ) -> Result<Self, CostError> {
        if name.contains("bins") {
            let num_bins = num_bins.ok_or_else(|| CostError::MissingParameter {
                name: name.to_owned(),
                param: "num_bins",
            })?;
            Ok(CostFunctionSpec::Bins { num_bins })
        } else if name.contains("band") {
            let [low_hz, high_hz] = freq_range.ok_or_else(|| CostError::MissingParameter {
                name: name.to_owned(),
                param: "freq_range",
            })?;
            Ok(CostFunctionSpec::Band { low_hz, high_hz })
        } else {
            Err(CostError::UnsupportedCostFunction {
                name: name.to_owned(),
            })
        }
    }
}
/// A resolved cost function: band-power strategy plus the calibration
/// bounds that map raw band power to `[0, 1]`.
#[derive(Clone, Debug)]
pub struct CostFunction {
    spec: CostFunctionSpec,
    stats: CalibrationStats,
}
impl CostFunction {
    /// Resolves `name` against the calibration table. All configuration
    /// errors (unknown mode, missing parameter, missing or degenerate
    /// calibration entry) surface here, before any sample is processed.
    pub fn new(
        name: &str,
        freq_range: Option<[f64; 2]>,
        num_bins: Option<usize>,
        calibration: &CalibrationTable,
    ) -> Result<Self, CostError> {
        let spec = CostFunctionSpec::from_name(name, freq_range, num_bins)?;
        let stats = calibration.stats_for(name)?;
        Ok(Self { spec, stats })
    }
    pub fn spec(&self) -> CostFunctionSpec {
        self.spec
    }
    /// Raw band power of `window`, before normalization. Bins mode always
    /// integrates absolute power; the calibration bounds were derived
    /// against absolute values.
    pub fn raw_power(&self, window: &[f64], sample_rate_hz: f64) -> Result<f64, CostError> {
        match self.spec {
            CostFunctionSpec::Bins { num_bins } => {
                // Matches the calibration data: the half-rate is floored
                // before splitting, and every segment sits 1 Hz above its
                // partition boundary.
                let width = (sample_rate_hz / 2.0).floor() / num_bins as f64;
                let mut total = 0.0;
                for i in 0..num_bins {
                    let low = i as f64 * width + 1.0;
                    let high = (i + 1) as f64 * width + 1.0;
                    total += spectral::band_power(window, sample_rate_hz, low, high, None, false)?;
                }
                Ok(total / num_bins as f64)
            }
            CostFunctionSpec::Band { low_hz, high_hz } => {
                spectral::band_power(window, sample_rate_hz, low_hz, high_hz, None, false)
            }
        }
    }
    /// Normalized traversability cost of `window`, in `[0, 1]`.
    pub fn compute(&self, window: &[f64], sample_rate_hz: f64) -> Result<f64, CostError> {
        let raw = self.raw_power(window, sample_rate_hz)?;
        Ok(normalize(raw, self.stats))
    }
}
/// Linear min-max normalization, clamped to `[0, 1]`.
pub fn normalize(raw: f64, stats: CalibrationStats) -> f64 {
    ((raw - stats.min) / (stats.max - stats.min)).clamp(0.0, 1.0)
}
#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    fn table(name: &str, min: f64, max: f64) -> CalibrationTable {
        CalibrationTable::from_entries([(name.to_owned(), CalibrationStats { min, max })])
    }
    #[test]
    fn name_substring_selects_the_mode() {
        let spec = CostFunctionSpec::from_name("freq_bins_5", None, Some(5)).unwrap();
        assert_eq!(spec, CostFunctionSpec::Bins { num_bins: 5 });
        let spec = CostFunctionSpec::from_name("freq_band_1_30", Some([1.0, 30.0]), None).unwrap();
        assert_eq!(
            spec,
            CostFunctionSpec::Band {
                low_hz: 1.0,
                high_hz: 30.0
            }
        );
    }
    #[test]
    fn unknown_name_is_rejected() {
        let err = CostFunctionSpec::from_name("rms_energy", Some([1.0, 30.0]), Some(5)).unwrap_err();
        assert!(matches!(err, CostError::UnsupportedCostFunction { .. }));
    }
    #[test]
    fn band_mode_without_freq_range_fails_before_any_computation() {
        let err = CostFunctionSpec::from_name("freq_band_1_30", None, None).unwrap_err();
        assert!(matches!(
            err,
            CostError::MissingParameter {
                param: "freq_range",
                ..
            }
        ));
    }
    #[test]
    fn bins_mode_without_num_bins_fails() {
        let err = CostFunctionSpec::from_name("freq_bins_5", Some([1.0, 30.0]), None).unwrap_err();
        assert!(matches!(
            err,
            CostError::MissingParameter {
                param: "num_bins",
                ..
            }
        ));
    }
    #[test]
    fn construction_checks_the_calibration_table() {
        let calibration = table("something_else", 0.0, 1.0);
        let err =
            CostFunction::new("freq_band_1_30", Some([1.0, 30.0]), None, &calibration).unwrap_err();
        assert!(matches!(err, CostError::MissingCalibration { .. }));
    }
    #[test]
    fn normalization_maps_bounds_to_unit_interval() {
        let stats = CalibrationStats { min: 0.0, max: 10.0 };
        assert_eq!(normalize(5.0, stats), 0.5);
        assert_eq!(normalize(15.0, stats), 1.0);
        assert_eq!(normalize(-3.0, stats), 0.0);
    }
    #[test]
    fn clipping_is_idempotent_and_in_range() {
        let stats = CalibrationStats { min: 1.0, max: 3.0 };
        for raw in [-10.0, 0.0, 1.0, 1.7, 2.9, 3.0, 50.0] {
            let once = normalize(raw, stats);
            let twice = once.clamp(0.0, 1.0);
            assert_eq!(once, twice);
            assert!((0.0..=1.0).contains(&once));
        }
    }
    #[test]
    fn normalization_is_monotonic_in_raw_power() {
        let stats = CalibrationStats { min: 0.0, max: 4.0 };
        let mut previous = f64::NEG_INFINITY;
        for raw in [-1.0, 0.0, 0.5, 1.0, 2.0, 3.9, 4.0, 9.0] {
            let cost = normalize(raw, stats);
            assert!(cost >= previous);
            previous = cost;
        }
    }
    #[test]
    fn five_bins_at_100_hz_are_10_hz_wide_with_unit_offset() {
        let spec = CostFunctionSpec::from_name("freq_bins_5", None, Some(5)).unwrap();
        let CostFunctionSpec::Bins { num_bins } = spec else {
            panic!("expected bins mode");
        };
        let width = (100.0f64 / 2.0).floor() / num_bins as f64;
        assert_eq!(width, 10.0);
        let edges: Vec<(f64, f64)> = (0..num_bins)
            .map(|i| (i as f64 * width + 1.0, (i + 1) as f64 * width + 1.0))
            .collect();
        assert_eq!(edges[0], (1.0, 11.0));
        assert_eq!(edges[4], (41.0, 51.0));
    }
    #[test]
    fn quiet_window_costs_nothing_rough_window_costs_more() {
        let calibration = table("freq_band_1_30", 0.0, 0.05);
        let cost_fn =
            CostFunction::new("freq_band_1_30", Some([1.0, 30.0]), None, &calibration).unwrap();
        let quiet = vec![9.81; 200];
        assert!(cost_fn.compute(&quiet, 100.0).unwrap() < 1e-9);
        let rough: Vec<f64> = (0..200)
            .map(|i| 9.81 + 0.8 * (2.0 * PI * 12.0 * i as f64 / 100.0).sin())
            .collect();
        let rough_cost = cost_fn.compute(&rough, 100.0).unwrap();
        assert!(rough_cost > 0.5);
    }
    #[test]
    fn bins_mode_computes_an_average_over_segments() {
        let calibration = table("freq_bins_5", 0.0, 1.0);
        let cost_fn = CostFunction::new("freq_bins_5", None, Some(5), &calibration).unwrap();
        let rough: Vec<f64> = (0..400)
            .map(|i| 9.81 + 0.5 * (2.0 * PI * 15.0 * i as f64 / 100.0).sin())
            .collect();
        let raw = cost_fn.raw_power(&rough, 100.0).unwrap();
        // The 15 Hz tone lands in the second of five 10 Hz segments, so the
        // average is roughly one fifth of that segment's power.
        let segment =
            spectral::band_power(&rough, 100.0, 11.0, 21.0, None, false).unwrap();
        assert!((raw - segment / 5.0).abs() / raw < 0.05);
    }
}
