//! Streaming spectral traversability-cost estimation.
//!
//! Feeds vertical-acceleration samples through a rolling window, estimates
//! the window's power spectral density with Welch's method, integrates the
//! configured frequency band with Simpson's rule, and maps the band power
//! to a calibrated cost in `[0, 1]` for downstream planners.
pub mod buffer;
pub mod calibration;
pub mod config;
pub mod cost;
pub mod error;
pub mod estimator;
pub mod source;
pub mod spectral;
pub use buffer::RollingBuffer;
pub use calibration::{CalibrationStats, CalibrationTable};
pub use config::EstimatorConfig;
pub use cost::{CostFunction, CostFunctionSpec};
pub use error::CostError;
pub use estimator::{CostEstimate, StreamEstimator};
pub use source::{ManualSource, SampleSource, TimedSample};
pub use spectral::{band_power, simpson, welch_psd, Psd};
