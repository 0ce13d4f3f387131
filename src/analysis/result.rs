//! Spectrogram result types

use serde::{Deserialize, Serialize};

use crate::spectral::matrix::{MagnitudeSpectrogram, SpectrogramStats};

/// Conditions worth surfacing alongside a successful computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpectrogramFlag {
    /// Input is shorter than one frame; the single frame is mostly padding
    ShortInput,
    /// Magnitude is zero everywhere; the dB matrix is flat
    Silent,
    /// Some samples lie outside [-1.0, 1.0]
    OutOfRangeSamples,
}

/// Facts about the computation that produced a result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpectrogramMetadata {
    /// Input sample rate in Hz
    pub sample_rate: u32,

    /// Input duration in seconds
    pub duration_seconds: f32,

    /// FFT size used
    pub n_fft: usize,

    /// Hop length used
    pub hop_length: usize,

    /// Number of frequency bins (`n_fft / 2 + 1`)
    pub n_bins: usize,

    /// Number of frames
    pub n_frames: usize,

    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: f32,

    /// Crate version that produced the result
    pub algorithm_version: String,

    /// Noteworthy input conditions
    pub flags: Vec<SpectrogramFlag>,
}

/// Output of [`compute_spectrogram`](crate::compute_spectrogram)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpectrogramResult {
    /// Magnitude spectrogram, shape `(n_bins, n_frames)`
    pub magnitude: MagnitudeSpectrogram,

    /// dB spectrogram, same shape
    pub db: MagnitudeSpectrogram,

    /// Min / max / mean of `magnitude`
    pub magnitude_stats: SpectrogramStats,

    /// Min / max / mean of `db`
    pub db_stats: SpectrogramStats,

    /// Computation metadata
    pub metadata: SpectrogramMetadata,
}

impl SpectrogramResult {
    /// Shape of both matrices as `(frequency_bins, num_frames)`
    pub fn shape(&self) -> (usize, usize) {
        self.magnitude.shape()
    }

    /// True if `flag` was raised
    pub fn has_flag(&self, flag: SpectrogramFlag) -> bool {
        self.metadata.flags.contains(&flag)
    }
}
