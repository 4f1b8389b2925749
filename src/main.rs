use anyhow::{Context, Result};
use log::{info, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};
use terracost::{
    CalibrationTable, EstimatorConfig, ManualSource, SampleSource, StreamEstimator,
};
/// Demo driver: streams a synthesized smooth-then-rough acceleration trace
/// through the estimator and logs the resulting costs. The real deployment
/// replaces `ManualSource` with the messaging-layer subscriber.
fn main() -> Result<()> {
    env_logger::init();
    let mut args = std::env::args().skip(1);
    let calibration_path = args
        .next()
        .context("usage: terracost <calibration.json> [config.json]")?;
    let calibration = CalibrationTable::from_path(&calibration_path)
        .with_context(|| format!("loading calibration table from {calibration_path}"))?;
    let config = match args.next() {
        Some(path) => EstimatorConfig::from_path(&path)
            .with_context(|| format!("loading estimator config from {path}"))?,
        None => EstimatorConfig {
            sample_rate_hz: 100.0,
            window_seconds: 1.0,
            pad_value: Some(9.81),
            cost_function: "freq_band_1_30".to_owned(),
            freq_range: Some([1.0, 30.0]),
            num_bins: None,
        },
    };
    let mut estimator = StreamEstimator::new(&config, &calibration)?;
    info!(
        "streaming simulated terrain through `{}` at {} Hz",
        config.cost_function, config.sample_rate_hz
    );
    let mut source = ManualSource::from_values(
        simulated_terrain(config.sample_rate_hz, 4.0),
        config.sample_rate_hz,
    );
    let mut published = 0usize;
    while let Some(sample) = source.next_sample()? {
        match estimator.update(sample.value, sample.stamp_micros) {
            Ok(estimate) => {
                published += 1;
                if published % 25 == 0 {
                    info!(
                        "t={:.2}s cost={:.3} ready={}",
                        estimate.stamp as f64 / 1e6,
                        estimate.cost,
                        estimate.ready
                    );
                }
            }
            Err(err) if err.is_recoverable() => {
                warn!("skipping cycle at t={}us: {err}", sample.stamp_micros);
            }
            Err(err) => return Err(err.into()),
        }
    }
    info!("published {published} cost estimates");
    Ok(())
}
/// Two seconds of near-stationary gravity followed by a vibration burst,
/// with a little sensor noise throughout.
fn simulated_terrain(sample_rate_hz: f64, seconds: f64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(42);
    let total = (sample_rate_hz * seconds) as usize;
    (0..total)
        .map(|i| {
            let t = i as f64 / sample_rate_hz;
            let noise: f64 = rng.gen_range(-0.02..0.02);
            let vibration = if t >= seconds / 2.0 {
                0.6 * (2.0 * std::f64::consts::PI * 14.0 * t).sin()
                    + 0.3 * (2.0 * std::f64::consts::PI * 23.0 * t).sin()
            } else {
                0.0
            };
            9.81 + noise + vibration
        })
        .collect()
}
