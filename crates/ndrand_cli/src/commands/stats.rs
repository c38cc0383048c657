//! Stats command implementation
//!
//! Draws samples from the generator and reports their empirical moments.

use std::io::Write;

use ndrand_core::rng::randn_bm;
use tracing::info;

use crate::{CliError, Result};

/// Empirical summary of a batch of samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStats {
    /// Number of samples drawn
    pub count: usize,
    /// Sample mean
    pub mean: f64,
    /// Population variance of the sample
    pub variance: f64,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
}

impl SampleStats {
    /// Summarises `samples`; `None` if empty.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n;
        let (min, max) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });

        Some(Self {
            count: samples.len(),
            mean,
            variance,
            min,
            max,
        })
    }
}

/// Run the stats command
pub fn run<W: Write>(out: &mut W, samples: usize, precision: usize) -> Result<SampleStats> {
    info!(samples, "Drawing samples");
    let values: Vec<f64> = (0..samples).map(|_| randn_bm()).collect();
    let stats = SampleStats::from_samples(&values)
        .ok_or_else(|| CliError::InvalidArgument("samples must be at least 1".to_string()))?;

    writeln!(out, "samples:  {}", stats.count)?;
    writeln!(out, "mean:     {:.*}", precision, stats.mean)?;
    writeln!(out, "variance: {:.*}", precision, stats.variance)?;
    writeln!(out, "min:      {:.*}", precision, stats.min)?;
    writeln!(out, "max:      {:.*}", precision, stats.max)?;

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_samples() {
        let stats = SampleStats::from_samples(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(stats.count, 4);
        assert_relative_eq!(stats.mean, 2.5);
        assert_relative_eq!(stats.variance, 1.25);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);

        assert!(SampleStats::from_samples(&[]).is_none());
    }

    #[test]
    fn test_run_reports_moments() {
        let mut out = Vec::new();
        let stats = run(&mut out, 20_000, 3).unwrap();

        assert_eq!(stats.count, 20_000);
        assert!(stats.mean.abs() < 0.05);
        assert!((stats.variance - 1.0).abs() < 0.1);
        assert!(stats.min < stats.max);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("samples:  20000\n"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_zero_samples_rejected() {
        let mut out = Vec::new();
        assert!(matches!(
            run(&mut out, 0, 3),
            Err(CliError::InvalidArgument(msg)) if msg == "samples must be at least 1"
        ));
        assert!(out.is_empty());
    }
}
