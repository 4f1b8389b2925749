use thiserror::Error;
#[derive(Debug, Error)]
pub enum CostError {
    #[error("sample rate must be greater than zero")]
    InvalidSampleRate,
    #[error("window length must cover at least one sample")]
    InvalidWindow,
    #[error("cannot estimate a spectrum over an empty window")]
    EmptyWindow,
    #[error("calibration table has no entry for cost function `{name}`")]
    MissingCalibration { name: String },
    #[error("calibration bounds for `{name}` are degenerate: min {min}, max {max}")]
    DegenerateCalibration { name: String, min: f64, max: f64 },
    #[error("cost function name `{name}` matches neither \"bins\" nor \"band\"")]
    UnsupportedCostFunction { name: String },
    #[error("cost function `{name}` requires the `{param}` parameter")]
    MissingParameter { name: String, param: &'static str },
    #[error(
        "band {low}..{high} Hz selects no PSD bins (resolution {resolution} Hz, nyquist {nyquist} Hz)"
    )]
    EmptyBand {
        low: f64,
        high: f64,
        resolution: f64,
        nyquist: f64,
    },
    #[error("failed to read calibration document: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse calibration document: {0}")]
    Parse(#[from] serde_json::Error),
}
impl CostError {
    /// True for errors a caller may see on a single `update` without the
    /// estimator itself being misconfigured. The buffer has already
    /// advanced when one of these is returned; later updates are unaffected.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CostError::EmptyBand { .. } | CostError::EmptyWindow)
    }
}
