use log::{debug, trace};
use crate::buffer::RollingBuffer;
use crate::calibration::CalibrationTable;
use crate::config::EstimatorConfig;
use crate::cost::CostFunction;
use crate::error::CostError;
/// One normalized cost sample, carrying the caller's stamp through
/// unchanged. `ready` is false while a padded buffer still contains pad
/// values (or an unpadded one is not yet full); callers that do not want
/// pad-influenced estimates can skip publishing until it flips.
#[derive(Clone, Copy, Debug)]
pub struct CostEstimate<T> {
    pub cost: f64,
    pub stamp: T,
    pub ready: bool,
}
/// Per-sample driver: rolling buffer plus one resolved cost function.
///
/// Each `update` inserts the sample, recomputes the cost over the full
/// current window, and returns it synchronously. The estimator owns its
/// buffer exclusively; the calibration table is consumed at construction
/// and shared state plays no part afterwards.
#[derive(Debug)]
pub struct StreamEstimator {
    buffer: RollingBuffer,
    cost_function: CostFunction,
    sample_rate_hz: f64,
}
impl StreamEstimator {
    /// Builds an estimator from start-up parameters. Every configuration
    /// error (bad rate or window, unknown cost-function name, missing
    /// mode parameter, missing or degenerate calibration entry) is fatal
    /// here, before any sample is accepted.
    pub fn new(config: &EstimatorConfig, calibration: &CalibrationTable) -> Result<Self, CostError> {
        config.validate()?;
        let cost_function = CostFunction::new(
            &config.cost_function,
            config.freq_range,
            config.num_bins,
            calibration,
        )?;
        let capacity = config.buffer_capacity();
        let buffer = match config.pad_value {
            Some(pad) => RollingBuffer::padded(capacity, pad),
            None => RollingBuffer::new(capacity),
        };
        debug!(
            "estimator ready: {} @ {} Hz, window {} samples, padded: {}",
            config.cost_function,
            config.sample_rate_hz,
            capacity,
            config.pad_value.is_some()
        );
        Ok(Self {
            buffer,
            cost_function,
            sample_rate_hz: config.sample_rate_hz,
        })
    }
    /// Inserts one sample and returns the cost over the updated window,
    /// wrapped with the caller's opaque `stamp`.
    ///
    /// A recoverable error ([`CostError::EmptyBand`]) leaves the buffer
    /// advanced; skipping that cycle and feeding the next sample is safe.
    pub fn update<T>(&mut self, sample: f64, stamp: T) -> Result<CostEstimate<T>, CostError> {
        self.buffer.insert(sample);
        let window = self.buffer.snapshot();
        let cost = self.cost_function.compute(&window, self.sample_rate_hz)?;
        trace!("sample {sample} -> cost {cost}");
        Ok(CostEstimate {
            cost,
            stamp,
            ready: self.buffer.is_warmed_up(),
        })
    }
    /// True once the window holds only real samples.
    pub fn is_ready(&self) -> bool {
        self.buffer.is_warmed_up()
    }
    pub fn sample_rate_hz(&self) -> f64 {
        self.sample_rate_hz
    }
    pub fn window_len(&self) -> usize {
        self.buffer.len()
    }
}
