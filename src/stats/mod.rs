//! Online statistics over probe readings.
//!
//! Mean, min and max are updated per reading. The standard deviation is
//! recomputed over every stored reading against the current mean after each
//! update, so each step costs O(n). This matches the firmware's rounding
//! behaviour exactly; a one-pass formula would drift in the last digits.

use heapless::Vec;
use libm::sqrtf;

use crate::error::StatisticsError;

/// Maximum number of readings a run can take.
pub const MAX_SAMPLES: usize = 50;

/// Statistics after the latest reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSnapshot {
    /// Readings so far.
    pub count: u8,
    /// Arithmetic mean.
    pub mean: f32,
    /// Population standard deviation.
    pub sigma: f32,
    /// Lowest reading.
    pub min: f32,
    /// Highest reading.
    pub max: f32,
}

impl StatsSnapshot {
    /// Spread between highest and lowest reading.
    #[inline]
    pub fn range(&self) -> f32 {
        self.max - self.min
    }
}

/// Running mean, min, max and sigma.
#[derive(Debug, Clone)]
pub struct RunningStatistics {
    samples: Vec<f32, MAX_SAMPLES>,
    sum: f32,
    mean: f32,
    sigma: f32,
    min: f32,
    max: f32,
}

impl Default for RunningStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningStatistics {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            sum: 0.0,
            mean: 0.0,
            sigma: 0.0,
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
        }
    }

    /// Add a reading and return the updated snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StatisticsError::CapacityExceeded` once [`MAX_SAMPLES`] readings
    /// are stored; the accumulator is left unchanged.
    pub fn update(&mut self, sample: f32) -> Result<StatsSnapshot, StatisticsError> {
        self.samples
            .push(sample)
            .map_err(|_| StatisticsError::CapacityExceeded {
                capacity: MAX_SAMPLES,
            })?;

        let n = self.samples.len() as f32;
        self.sum += sample;
        self.mean = self.sum / n;

        if sample < self.min {
            self.min = sample;
        }
        if sample > self.max {
            self.max = sample;
        }

        let mean = self.mean;
        let squares: f32 = self
            .samples
            .iter()
            .map(|s| (s - mean) * (s - mean))
            .sum();
        self.sigma = sqrtf(squares / n);

        Ok(self.snapshot())
    }

    /// Number of readings accumulated.
    #[inline]
    pub fn count(&self) -> usize {
        self.samples.len()
    }

    /// Whether no reading has been added yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Readings in the order they were taken.
    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Current statistics.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            count: self.samples.len() as u8,
            mean: self.mean,
            sigma: self.sigma,
            min: self.min,
            max: self.max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_single_sample() {
        let mut stats = RunningStatistics::new();
        let snap = stats.update(0.25).unwrap();
        assert_eq!(snap.count, 1);
        assert_eq!(snap.mean, 0.25);
        assert_eq!(snap.sigma, 0.0);
        assert_eq!(snap.min, 0.25);
        assert_eq!(snap.max, 0.25);
        assert_eq!(snap.range(), 0.0);
    }

    #[test]
    fn test_four_readings() {
        let readings = [1.000_f32, 1.002, 0.998, 1.001];
        let mut stats = RunningStatistics::new();
        let mut snap = stats.snapshot();
        for r in readings {
            snap = stats.update(r).unwrap();
        }

        let mean = 1.00025_f32;
        let expected_sigma = ((readings.iter().map(|r| (r - mean) * (r - mean)).sum::<f32>()) / 4.0).sqrt();

        assert!(close(snap.mean, mean));
        assert_eq!(snap.min, 0.998);
        assert_eq!(snap.max, 1.002);
        assert!(close(snap.range(), 0.004));
        assert!(close(snap.sigma, expected_sigma));
    }

    #[test]
    fn test_sigma_uses_current_mean() {
        let mut stats = RunningStatistics::new();
        stats.update(0.0).unwrap();
        let snap = stats.update(2.0).unwrap();
        // mean 1.0, deviations of 1.0 each
        assert!(close(snap.sigma, 1.0));
    }

    #[test]
    fn test_capacity() {
        let mut stats = RunningStatistics::new();
        for i in 0..MAX_SAMPLES {
            stats.update(i as f32).unwrap();
        }
        let before = stats.snapshot();
        assert_eq!(
            stats.update(1.0),
            Err(StatisticsError::CapacityExceeded {
                capacity: MAX_SAMPLES
            })
        );
        assert_eq!(stats.snapshot(), before);
        assert_eq!(stats.count(), MAX_SAMPLES);
    }
}
