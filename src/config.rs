use std::fs;
use std::path::Path;
use serde::Deserialize;
use crate::error::CostError;
/// Start-up parameters for one stream estimator.
///
/// `pad_value` selects the buffer mode: when present, the window starts
/// pre-filled with that value (typically gravity); when absent, the buffer
/// warms up from empty.
#[derive(Clone, Debug, Deserialize)]
pub struct EstimatorConfig {
    /// Sensor sampling rate in Hz.
    pub sample_rate_hz: f64,
    /// Rolling window length in seconds.
    pub window_seconds: f64,
    /// Pad value for a padded buffer; `None` for an empty start.
    #[serde(default)]
    pub pad_value: Option<f64>,
    /// Configured cost-function name; must be a key in the calibration
    /// table and contain either "bins" or "band".
    pub cost_function: String,
    /// `[low, high]` in Hz, required by "band" mode.
    #[serde(default)]
    pub freq_range: Option<[f64; 2]>,
    /// Segment count, required by "bins" mode.
    #[serde(default)]
    pub num_bins: Option<usize>,
}
impl EstimatorConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CostError> {
        let text = fs::read_to_string(path)?;
        let config: EstimatorConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
    pub fn validate(&self) -> Result<(), CostError> {
        if self.sample_rate_hz <= 0.0 {
            return Err(CostError::InvalidSampleRate);
        }
        if self.buffer_capacity() == 0 {
            return Err(CostError::InvalidWindow);
        }
        Ok(())
    }
    /// Window length in samples. Rounded to the nearest sample so that
    /// products like `0.1 * 100.0` land on the intended count.
    pub fn buffer_capacity(&self) -> usize {
        (self.sample_rate_hz * self.window_seconds).round() as usize
    }
}
