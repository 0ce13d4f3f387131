//! # Spectral DSP
//!
//! Magnitude spectrograms and decibel scaling for audio analysis.
//!
//! ## Features
//!
//! - **STFT**: Centered, reflect-padded framing with Hann (or other) windows, backed by rustfft
//! - **Parallel framing**: Optional fan-out of frames over the rayon thread pool
//! - **Magnitude / power**: One-sided spectra of real signals
//! - **Decibel scaling**: `amplitude_to_db` / `power_to_db` with peak reference and `top_db` clamping
//! - **Decoding**: Symphonia-based file loading to mono f32
//!
//! ## Quick Start
//!
//! ```no_run
//! use spectral_dsp::{compute_spectrogram, SpectrogramConfig};
//!
//! // Load audio samples (mono, f32, normalized)
//! let samples: Vec<f32> = vec![0.0; 22050]; // Your audio data
//! let sample_rate = 22050;
//!
//! let result = compute_spectrogram(&samples, sample_rate, &SpectrogramConfig::default())?;
//!
//! println!("shape: {:?}", result.shape());
//! println!("dB range: {:.2} .. {:.2}", result.db_stats.min, result.db_stats.max);
//! # Ok::<(), spectral_dsp::SpectrogramError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Waveform → Padding/Framing → Window → FFT → Magnitude → dB
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod preprocessing;
pub mod spectral;

// Re-export main types
pub use analysis::result::{SpectrogramFlag, SpectrogramMetadata, SpectrogramResult};
pub use config::{DbConfig, DbReference, SpectrogramConfig, StftConfig};
pub use error::SpectrogramError;
pub use io::decoder::decode_audio;
pub use io::waveform::Waveform;
pub use spectral::magnitude::{magnitude, power};
pub use spectral::matrix::{ComplexSpectrogram, MagnitudeSpectrogram, Spectrogram, SpectrogramStats};
pub use spectral::padding::PadMode;
pub use spectral::scaling::{amplitude_to_db, normalize_db, power_to_db};
pub use spectral::stft::{compute_stft, compute_stft_with_config, Stft};
pub use spectral::window::WindowFunction;

/// Main pipeline function
///
/// Computes the STFT, its magnitude and the dB-scaled magnitude, and collects
/// statistics for both.
///
/// # Arguments
///
/// * `samples` - Mono audio samples, normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz (typically 22050 or 44100)
/// * `config` - STFT and dB parameters
///
/// # Returns
///
/// `SpectrogramResult` with both matrices, their statistics and metadata
///
/// # Errors
///
/// Returns `SpectrogramError` if any stage rejects its input or parameters.
/// No partial result is returned.
///
/// # Example
///
/// ```no_run
/// use spectral_dsp::{compute_spectrogram, SpectrogramConfig};
///
/// let samples = vec![0.0f32; 22050]; // 1 second of silence
/// let result = compute_spectrogram(&samples, 22050, &SpectrogramConfig::default())?;
/// assert_eq!(result.shape(), (1025, 44));
/// # Ok::<(), spectral_dsp::SpectrogramError>(())
/// ```
pub fn compute_spectrogram(
    samples: &[f32],
    sample_rate: u32,
    config: &SpectrogramConfig,
) -> Result<SpectrogramResult, SpectrogramError> {
    use std::time::Instant;
    let start_time = Instant::now();

    log::debug!(
        "Starting spectrogram computation: {} samples at {} Hz",
        samples.len(),
        sample_rate
    );

    let complex = compute_stft_with_config(samples, sample_rate, &config.stft)?;
    let magnitude = magnitude(&complex);
    drop(complex);
    let db = config.db.apply(&magnitude)?;

    let magnitude_stats = magnitude.stats().ok_or_else(|| {
        SpectrogramError::ProcessingError("Magnitude spectrogram is empty".to_string())
    })?;
    let db_stats = db
        .stats()
        .ok_or_else(|| SpectrogramError::ProcessingError("dB spectrogram is empty".to_string()))?;

    let mut flags = Vec::new();
    if samples.len() < config.stft.n_fft {
        flags.push(SpectrogramFlag::ShortInput);
    }
    if magnitude_stats.max == 0.0 {
        flags.push(SpectrogramFlag::Silent);
    }
    if samples.iter().any(|s| s.abs() > 1.0) {
        flags.push(SpectrogramFlag::OutOfRangeSamples);
    }

    let (n_bins, n_frames) = magnitude.shape();
    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;

    log::debug!(
        "Spectrogram complete: shape=({}, {}), magnitude=[{:.6}, {:.6}], dB=[{:.2}, {:.2}], {:.2} ms",
        n_bins,
        n_frames,
        magnitude_stats.min,
        magnitude_stats.max,
        db_stats.min,
        db_stats.max,
        processing_time_ms
    );

    Ok(SpectrogramResult {
        magnitude,
        db,
        magnitude_stats,
        db_stats,
        metadata: SpectrogramMetadata {
            sample_rate,
            duration_seconds: samples.len() as f32 / sample_rate as f32,
            n_fft: config.stft.n_fft,
            hop_length: config.stft.hop_length(),
            n_bins,
            n_frames,
            processing_time_ms,
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
            flags,
        },
    })
}

/// Decode a file and run [`compute_spectrogram`] on it
pub fn compute_spectrogram_from_file<P: AsRef<std::path::Path>>(
    path: P,
    config: &SpectrogramConfig,
) -> Result<SpectrogramResult, SpectrogramError> {
    let waveform = decode_audio(path)?;
    compute_spectrogram(waveform.samples(), waveform.sample_rate(), config)
}
