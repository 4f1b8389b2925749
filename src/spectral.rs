use ndarray::{s, Array1, ArrayView1};
use rustfft::{num_complex::Complex64, FftPlanner};
use crate::error::CostError;
/// Default Welch segment length, in samples.
pub const DEFAULT_SEGMENT_LEN: usize = 256;
/// One-sided power spectral density estimate.
#[derive(Clone, Debug)]
pub struct Psd {
    /// Frequency bins in Hz, ascending and evenly spaced from 0.
    pub frequencies: Array1<f64>,
    /// Power density per bin, in (input units)^2 / Hz.
    pub power: Array1<f64>,
    /// Spacing between adjacent frequency bins, in Hz.
    pub resolution: f64,
}
impl Psd {
    pub fn nyquist(&self) -> f64 {
        self.frequencies[self.frequencies.len() - 1]
    }
}
/// Estimates the PSD of `samples` with Welch's method: overlapping
/// Hann-windowed segments, mean-detrended, periodograms averaged.
///
/// `segment_len` defaults to [`DEFAULT_SEGMENT_LEN`] and is clamped to the
/// window length, so short windows degrade to a single shorter segment
/// rather than failing.
pub fn welch_psd(
    samples: &[f64],
    sample_rate_hz: f64,
    segment_len: Option<usize>,
) -> Result<Psd, CostError> {
    if sample_rate_hz <= 0.0 {
        return Err(CostError::InvalidSampleRate);
    }
    if samples.is_empty() {
        return Err(CostError::EmptyWindow);
    }
    let nperseg = segment_len
        .unwrap_or(DEFAULT_SEGMENT_LEN)
        .clamp(1, samples.len());
    let window = hann_periodic(nperseg);
    let window_power: f64 = window.iter().map(|w| w * w).sum();
    let scale = 1.0 / (sample_rate_hz * window_power);
    let overlap = nperseg / 2;
    let step = (nperseg - overlap).max(1);
    let num_bins = nperseg / 2 + 1;
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(nperseg);
    let mut accumulated = vec![0.0f64; num_bins];
    let mut segments = 0usize;
    let mut start = 0usize;
    while start + nperseg <= samples.len() {
        let segment = &samples[start..start + nperseg];
        let mean = segment.iter().sum::<f64>() / nperseg as f64;
        let mut buffer: Vec<Complex64> = segment
            .iter()
            .zip(&window)
            .map(|(&v, &w)| Complex64::new((v - mean) * w, 0.0))
            .collect();
        fft.process(&mut buffer);
        for (bin, value) in accumulated.iter_mut().zip(buffer.iter().take(num_bins)) {
            *bin += value.norm_sqr() * scale;
        }
        segments += 1;
        start += step;
    }
    let mut power = Array1::from(accumulated);
    power /= segments as f64;
    // One-sided spectrum: fold negative frequencies into the positive bins.
    // DC never doubles; the Nyquist bin exists (and stays single) only for
    // even segment lengths.
    let has_nyquist_bin = nperseg % 2 == 0;
    for k in 1..num_bins {
        if !(has_nyquist_bin && k == num_bins - 1) {
            power[k] *= 2.0;
        }
    }
    let resolution = sample_rate_hz / nperseg as f64;
    let frequencies = Array1::from_iter((0..num_bins).map(|k| k as f64 * resolution));
    Ok(Psd {
        frequencies,
        power,
        resolution,
    })
}
/// Integrates power over `low_hz ..= high_hz` with Simpson's rule.
///
/// `window_seconds` overrides the Welch segment length as
/// `round(window_seconds * sample_rate_hz)` samples. With `relative` set,
/// the result is divided by the integral of the whole PSD, yielding the
/// fraction of total signal energy in the band.
pub fn band_power(
    samples: &[f64],
    sample_rate_hz: f64,
    low_hz: f64,
    high_hz: f64,
    window_seconds: Option<f64>,
    relative: bool,
) -> Result<f64, CostError> {
    let segment_len = window_seconds.map(|secs| (secs * sample_rate_hz).round() as usize);
    let psd = welch_psd(samples, sample_rate_hz, segment_len)?;
    let in_band: Vec<usize> = psd
        .frequencies
        .iter()
        .enumerate()
        .filter(|(_, &f)| f >= low_hz && f <= high_hz)
        .map(|(k, _)| k)
        .collect();
    let (Some(&first), Some(&last)) = (in_band.first(), in_band.last()) else {
        return Err(CostError::EmptyBand {
            low: low_hz,
            high: high_hz,
            resolution: psd.resolution,
            nyquist: psd.nyquist(),
        });
    };
    let mut bp = simpson(psd.power.slice(s![first..=last]), psd.resolution);
    if relative {
        bp /= simpson(psd.power.view(), psd.resolution);
    }
    Ok(bp)
}
/// Composite Simpson's rule over uniformly spaced values.
///
/// An even interval count integrates with Simpson throughout; an odd one
/// uses Simpson over the leading run and a trapezoid on the last interval.
/// Fewer than two points integrate to zero.
pub fn simpson(values: ArrayView1<f64>, dx: f64) -> f64 {
    let n = values.len();
    match n {
        0 | 1 => 0.0,
        2 => 0.5 * dx * (values[0] + values[1]),
        _ => {
            // Largest odd point count (even interval count) from the start.
            let m = if (n - 1) % 2 == 0 { n } else { n - 1 };
            let mut acc = values[0] + values[m - 1];
            for k in 1..m - 1 {
                acc += if k % 2 == 1 { 4.0 } else { 2.0 } * values[k];
            }
            let mut total = acc * dx / 3.0;
            if m != n {
                total += 0.5 * dx * (values[n - 2] + values[n - 1]);
            }
            total
        }
    }
}
fn hann_periodic(len: usize) -> Vec<f64> {
    if len <= 1 {
        return vec![1.0; len];
    }
    (0..len)
        .map(|i| 0.5 * (1.0 - (2.0 * std::f64::consts::PI * i as f64 / len as f64).cos()))
        .collect()
}
