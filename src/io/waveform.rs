//! Mono waveform container

use crate::error::SpectrogramError;

/// Mono audio samples with their sample rate
///
/// Samples are expected in [-1.0, 1.0]. A `Waveform` is never empty and
/// always has a positive sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl Waveform {
    /// Create a waveform
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for empty samples or a zero sample rate.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Result<Self, SpectrogramError> {
        if samples.is_empty() {
            return Err(SpectrogramError::InvalidInput(
                "Empty audio samples".to_string(),
            ));
        }
        if sample_rate == 0 {
            return Err(SpectrogramError::InvalidInput(
                "Invalid sample rate".to_string(),
            ));
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Sample data
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds
    pub fn duration_seconds(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }

    /// Take the sample data
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}
