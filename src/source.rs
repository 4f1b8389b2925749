use std::collections::VecDeque;
use crate::error::CostError;
/// One vertical-acceleration reading with the stamp the messaging layer
/// attached to it. The stamp is opaque to the estimator and comes back on
/// the matching [`CostEstimate`](crate::CostEstimate).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimedSample {
    pub value: f64,
    pub stamp_micros: u64,
}
/// Something that can yield acceleration samples on demand. The real
/// subscriber lives in the messaging layer; this seam keeps the estimator
/// testable without it.
pub trait SampleSource {
    fn next_sample(&mut self) -> Result<Option<TimedSample>, CostError>;
}
/// In-memory source for tests and deterministic playback.
pub struct ManualSource {
    queue: VecDeque<TimedSample>,
}
impl ManualSource {
    pub fn new(samples: impl IntoIterator<Item = TimedSample>) -> Self {
        Self {
            queue: samples.into_iter().collect(),
        }
    }
    /// Convenience for plain values at a fixed rate, stamped in microseconds.
    pub fn from_values(values: impl IntoIterator<Item = f64>, sample_rate_hz: f64) -> Self {
        let dt_micros = (1e6 / sample_rate_hz) as u64;
        Self::new(
            values
                .into_iter()
                .enumerate()
                .map(|(i, value)| TimedSample {
                    value,
                    stamp_micros: i as u64 * dt_micros,
                }),
        )
    }
}
impl SampleSource for ManualSource {
    fn next_sample(&mut self) -> Result<Option<TimedSample>, CostError> {
        Ok(self.queue.pop_front())
    }
}
