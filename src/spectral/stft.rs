//! Short-Time Fourier Transform
//!
//! Slices a mono waveform into overlapping frames, applies a window to each
//! frame and keeps the non-negative half of its FFT.
//!
//! # Algorithm
//!
//! 1. If `center`, pad `n_fft / 2` samples on both sides (reflect by default)
//!    so that frame 0 is centred on sample 0. Otherwise zero-pad the tail to
//!    one full frame, or with `pad_end` to the next hop boundary
//! 2. `n_frames = 1 + (padded_len - n_fft) / hop_length`
//! 3. For frame `t`: take `n_fft` samples starting at `t * hop_length`,
//!    multiply by the window, FFT, keep bins `0..=n_fft/2`
//! 4. Write the bins into column `t` of the output
//!
//! Frames are independent, so with `parallel` set they are computed on the
//! rayon pool. Each worker owns its FFT buffers and writes only its own
//! columns, so the result is bit-identical to the serial path.
//!
//! # Example
//!
//! ```
//! use spectral_dsp::spectral::stft::compute_stft;
//!
//! let samples = vec![0.0f32; 22050];
//! let spec = compute_stft(&samples, 22050, 2048, 512)?;
//! assert_eq!(spec.shape(), (1025, 44));
//! # Ok::<(), spectral_dsp::SpectrogramError>(())
//! ```

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};

use crate::config::StftConfig;
use crate::error::SpectrogramError;
use crate::spectral::matrix::ComplexSpectrogram;
use crate::spectral::padding::{pad, PadMode};
use crate::spectral::window::{get_window, pad_center};

/// Largest FFT size accepted; anything above is reported as overflow
pub const MAX_N_FFT: usize = 1 << 24;

/// Planned STFT: window and FFT plan for one configuration
///
/// Planning is the expensive part; keep an `Stft` around to process many
/// buffers with the same parameters.
pub struct Stft {
    config: StftConfig,
    window: Vec<f32>,
    scale: f32,
    fft: Arc<dyn Fft<f32>>,
}

impl std::fmt::Debug for Stft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stft")
            .field("config", &self.config)
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

impl Stft {
    /// Validate `config` and plan the FFT
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` for odd or zero `n_fft`, zero `hop_length`, a
    ///   `win_length` of zero or above `n_fft`, or a bad custom window
    /// - `NumericOverflow` if `n_fft` exceeds [`MAX_N_FFT`]
    pub fn new(config: &StftConfig) -> Result<Self, SpectrogramError> {
        validate_config(config)?;

        let window = get_window(&config.window, config.win_length(), true)?;
        let window = pad_center(&window, config.n_fft);

        let scale = if config.normalized {
            let energy: f32 = window.iter().map(|w| w * w).sum();
            if energy <= 0.0 {
                return Err(SpectrogramError::InvalidParameter(
                    "Cannot normalize by an all-zero window".to_string(),
                ));
            }
            1.0 / energy.sqrt()
        } else {
            1.0
        };

        let mut planner = FftPlanner::<f32>::new();
        let fft = planner.plan_fft_forward(config.n_fft);

        log::debug!(
            "Planned STFT: n_fft={}, hop_length={}, win_length={}, window={}, center={}, pad_mode={:?}",
            config.n_fft,
            config.hop_length(),
            config.win_length(),
            config.window.name(),
            config.center,
            config.pad_mode
        );

        Ok(Self {
            config: config.clone(),
            window,
            scale,
            fft,
        })
    }

    /// Configuration this plan was built from
    pub fn config(&self) -> &StftConfig {
        &self.config
    }

    /// Effective window, always `n_fft` long
    pub fn window(&self) -> &[f32] {
        &self.window
    }

    /// Number of output frequency bins (`n_fft / 2 + 1`)
    pub fn n_bins(&self) -> usize {
        self.config.n_bins()
    }

    /// Number of frames a buffer of `n_samples` produces
    pub fn frame_count(&self, n_samples: usize) -> Result<usize, SpectrogramError> {
        frame_count(n_samples, &self.config)
    }

    /// Compute the complex STFT of `samples`
    ///
    /// # Returns
    ///
    /// Complex matrix of shape `(n_fft / 2 + 1, n_frames)`
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `samples` is empty or contains NaN / infinity
    /// - `NumericOverflow` if sizes overflow or the transform yields
    ///   non-finite values
    pub fn process(&self, samples: &[f32]) -> Result<ComplexSpectrogram, SpectrogramError> {
        let start_time = Instant::now();
        validate_samples(samples)?;

        let n_fft = self.config.n_fft;
        let hop = self.config.hop_length();
        let n_bins = self.n_bins();

        let padded = self.pad_signal(samples)?;
        let n_frames = 1 + (padded.len() - n_fft) / hop;

        let total = n_bins.checked_mul(n_frames).ok_or_else(|| {
            SpectrogramError::NumericOverflow(format!(
                "Spectrogram size overflows: {} bins x {} frames",
                n_bins, n_frames
            ))
        })?;

        log::debug!(
            "Computing STFT: {} samples ({} padded), {} frames x {} bins, parallel={}",
            samples.len(),
            padded.len(),
            n_frames,
            n_bins,
            self.config.parallel
        );

        let zero = Complex::new(0.0f32, 0.0);
        let mut output = vec![zero; total];
        let scratch_len = self.fft.get_inplace_scratch_len();

        if self.config.parallel {
            output.par_chunks_mut(n_bins).enumerate().for_each_init(
                || (vec![zero; n_fft], vec![zero; scratch_len]),
                |(buffer, scratch), (frame, column)| {
                    let start = frame * hop;
                    self.transform_frame(&padded[start..start + n_fft], column, buffer, scratch);
                },
            );
        } else {
            let mut buffer = vec![zero; n_fft];
            let mut scratch = vec![zero; scratch_len];
            for (frame, column) in output.chunks_mut(n_bins).enumerate() {
                let start = frame * hop;
                self.transform_frame(&padded[start..start + n_fft], column, &mut buffer, &mut scratch);
            }
        }

        if let Some(pos) = output.iter().position(|c| !c.re.is_finite() || !c.im.is_finite()) {
            return Err(SpectrogramError::NumericOverflow(format!(
                "Non-finite STFT coefficient at bin {}, frame {} (n_fft={})",
                pos % n_bins,
                pos / n_bins,
                n_fft
            )));
        }

        log::debug!(
            "STFT complete: shape=({}, {}) in {:.2} ms",
            n_bins,
            n_frames,
            start_time.elapsed().as_secs_f32() * 1000.0
        );

        ComplexSpectrogram::from_frame_major(n_bins, n_frames, output)
    }

    fn pad_signal<'a>(&self, samples: &'a [f32]) -> Result<Cow<'a, [f32]>, SpectrogramError> {
        if self.config.center {
            let half = self.config.n_fft / 2;
            return Ok(Cow::Owned(pad(samples, half, half, self.config.pad_mode)?));
        }
        match tail_padding(samples.len(), &self.config) {
            0 => Ok(Cow::Borrowed(samples)),
            tail => Ok(Cow::Owned(pad(samples, 0, tail, PadMode::Constant)?)),
        }
    }

    /// Window one frame, FFT it in `buffer`, copy the one-sided spectrum to `column`
    fn transform_frame(
        &self,
        frame: &[f32],
        column: &mut [Complex<f32>],
        buffer: &mut [Complex<f32>],
        scratch: &mut [Complex<f32>],
    ) {
        for ((b, &x), &w) in buffer.iter_mut().zip(frame).zip(&self.window) {
            *b = Complex::new(x * w, 0.0);
        }

        self.fft.process_with_scratch(buffer, scratch);

        for (out, &c) in column.iter_mut().zip(buffer.iter()) {
            *out = c * self.scale;
        }
    }
}

/// Compute the complex STFT with default settings for the given frame geometry
///
/// Uses a periodic Hann window of length `n_fft` and centred reflect padding.
///
/// # Arguments
///
/// * `samples` - Mono audio samples, normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz (must be > 0)
/// * `n_fft` - FFT size, positive and even
/// * `hop_length` - Samples between frames, > 0
///
/// # Returns
///
/// Complex matrix of shape `(n_fft / 2 + 1, 1 + samples.len() / hop_length)`
pub fn compute_stft(
    samples: &[f32],
    sample_rate: u32,
    n_fft: usize,
    hop_length: usize,
) -> Result<ComplexSpectrogram, SpectrogramError> {
    let config = StftConfig {
        n_fft,
        hop_length: Some(hop_length),
        ..StftConfig::default()
    };
    compute_stft_with_config(samples, sample_rate, &config)
}

/// Compute the complex STFT with an explicit configuration
pub fn compute_stft_with_config(
    samples: &[f32],
    sample_rate: u32,
    config: &StftConfig,
) -> Result<ComplexSpectrogram, SpectrogramError> {
    let stft = Stft::new(config)?;
    if sample_rate == 0 {
        return Err(SpectrogramError::InvalidInput(
            "Sample rate must be > 0".to_string(),
        ));
    }
    stft.process(samples)
}

/// Number of frames produced for `n_samples` input samples
///
/// Centred: `1 + n_samples / hop_length`. Not centred: `1 + (n_samples - n_fft) / hop_length`,
/// or 1 when the signal is shorter than a frame. With `pad_end` a trailing
/// partial hop adds one more frame.
pub fn frame_count(n_samples: usize, config: &StftConfig) -> Result<usize, SpectrogramError> {
    validate_config(config)?;
    if n_samples == 0 {
        return Err(SpectrogramError::InvalidInput(
            "Empty audio samples".to_string(),
        ));
    }

    let n_fft = config.n_fft;
    let padded_len = if config.center {
        n_samples.checked_add(2 * (n_fft / 2)).ok_or_else(|| {
            SpectrogramError::NumericOverflow(format!(
                "Padded length overflows for {} samples",
                n_samples
            ))
        })?
    } else {
        n_samples
            .checked_add(tail_padding(n_samples, config))
            .ok_or_else(|| {
                SpectrogramError::NumericOverflow(format!(
                    "Padded length overflows for {} samples",
                    n_samples
                ))
            })?
    };

    Ok(1 + (padded_len - n_fft) / config.hop_length())
}

/// Zeros appended to a non-centred signal
///
/// Short signals are filled up to one frame. With `pad_end`, longer signals
/// are filled up to the next hop boundary so no trailing samples are dropped.
fn tail_padding(n_samples: usize, config: &StftConfig) -> usize {
    let n_fft = config.n_fft;
    if n_samples < n_fft {
        return n_fft - n_samples;
    }
    if !config.pad_end {
        return 0;
    }
    let hop = config.hop_length();
    match (n_samples - n_fft) % hop {
        0 => 0,
        rem => hop - rem,
    }
}

/// Centre frequency in Hz of each STFT bin (`k * sample_rate / n_fft`)
pub fn fft_frequencies(sample_rate: u32, n_fft: usize) -> Vec<f32> {
    if n_fft == 0 {
        return Vec::new();
    }
    (0..=n_fft / 2)
        .map(|k| (k as f64 * sample_rate as f64 / n_fft as f64) as f32)
        .collect()
}

/// Time in seconds of each of the first `n_frames` frames (`t * hop_length / sample_rate`)
///
/// For centred STFTs this is the time of the frame's centre.
pub fn frames_to_time(n_frames: usize, sample_rate: u32, hop_length: usize) -> Vec<f32> {
    if sample_rate == 0 {
        return Vec::new();
    }
    (0..n_frames)
        .map(|t| (t as f64 * hop_length as f64 / sample_rate as f64) as f32)
        .collect()
}

fn validate_config(config: &StftConfig) -> Result<(), SpectrogramError> {
    if config.n_fft == 0 || config.n_fft % 2 != 0 {
        return Err(SpectrogramError::InvalidParameter(format!(
            "n_fft must be a positive even integer, got {}",
            config.n_fft
        )));
    }
    if config.n_fft > MAX_N_FFT {
        return Err(SpectrogramError::NumericOverflow(format!(
            "n_fft={} exceeds the maximum supported size {}",
            config.n_fft, MAX_N_FFT
        )));
    }
    let hop_length = config.hop_length();
    let win_length = config.win_length();
    if hop_length == 0 {
        return Err(SpectrogramError::InvalidParameter(
            "hop_length must be > 0, got 0".to_string(),
        ));
    }
    if win_length == 0 || win_length > config.n_fft {
        return Err(SpectrogramError::InvalidParameter(format!(
            "win_length must be in 1..={}, got {}",
            config.n_fft, win_length
        )));
    }
    if hop_length > config.n_fft {
        log::warn!(
            "hop_length={} exceeds n_fft={}; samples between frames are skipped",
            hop_length,
            config.n_fft
        );
    }
    Ok(())
}

fn validate_samples(samples: &[f32]) -> Result<(), SpectrogramError> {
    if samples.is_empty() {
        return Err(SpectrogramError::InvalidInput(
            "Empty audio samples".to_string(),
        ));
    }
    if let Some(pos) = samples.iter().position(|s| !s.is_finite()) {
        return Err(SpectrogramError::InvalidInput(format!(
            "Sample {} is not finite ({})",
            pos, samples[pos]
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectral::window::WindowFunction;

    fn sine(freq: f64, amplitude: f64, sample_rate: u32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| {
                let t = i as f64 / sample_rate as f64;
                (amplitude * (2.0 * std::f64::consts::PI * freq * t).sin()) as f32
            })
            .collect()
    }

    #[test]
    fn test_shape_reference_case() {
        let samples = vec![0.1f32; 22050];
        let spec = compute_stft(&samples, 22050, 2048, 512).unwrap();
        assert_eq!(spec.shape(), (1025, 44));
    }

    #[test]
    fn test_shape_formula() {
        for &(n, n_fft, hop) in &[
            (1000usize, 256usize, 64usize),
            (4000, 1024, 256),
            (10, 8, 2),
            (4096, 512, 512),
            (777, 64, 33),
        ] {
            let samples = sine(440.0, 0.5, 8000, n);
            let spec = compute_stft(&samples, 8000, n_fft, hop).unwrap();
            assert_eq!(
                spec.shape(),
                (n_fft / 2 + 1, 1 + n / hop),
                "n={}, n_fft={}, hop={}",
                n,
                n_fft,
                hop
            );
        }
    }

    #[test]
    fn test_short_signal_still_yields_a_frame() {
        let samples = vec![0.25f32; 100];
        let spec = compute_stft(&samples, 22050, 2048, 512).unwrap();
        assert_eq!(spec.shape(), (1025, 1));

        let spec = compute_stft(&[0.5], 22050, 16, 4).unwrap();
        assert_eq!(spec.shape(), (9, 1));
    }

    #[test]
    fn test_non_centered_frame_count() {
        let config = StftConfig {
            center: false,
            ..StftConfig::with_n_fft(1024)
        };
        assert_eq!(frame_count(4000, &config).unwrap(), 1 + (4000 - 1024) / 256);
        assert_eq!(frame_count(500, &config).unwrap(), 1);

        let spec = compute_stft_with_config(&vec![0.1f32; 500], 16000, &config).unwrap();
        assert_eq!(spec.shape(), (513, 1));
    }

    #[test]
    fn test_struct_update_with_explicit_hop() {
        let config = StftConfig {
            n_fft: 1024,
            hop_length: Some(256),
            ..StftConfig::default()
        };
        let spec = compute_stft_with_config(&[0.1f32; 4096], 22050, &config).unwrap();
        assert_eq!(spec.shape(), (513, 1 + 4096 / 256));

        // Only n_fft overridden: window and hop follow it
        let config = StftConfig {
            n_fft: 512,
            ..StftConfig::default()
        };
        let stft = Stft::new(&config).unwrap();
        assert_eq!(stft.window().len(), 512);
        assert_eq!(stft.process(&[0.1f32; 4096]).unwrap().n_frames(), 1 + 4096 / 128);
    }

    #[test]
    fn test_pad_end_keeps_trailing_samples() {
        let n_fft = 64;
        let hop = 16;
        let truncate = StftConfig {
            hop_length: Some(hop),
            center: false,
            ..StftConfig::with_n_fft(n_fft)
        };
        let pad_end = StftConfig {
            pad_end: true,
            ..truncate.clone()
        };

        let samples = vec![0.3f32; n_fft + hop / 2];
        assert_eq!(compute_stft_with_config(&samples, 8000, &truncate).unwrap().n_frames(), 1);
        let spec = compute_stft_with_config(&samples, 8000, &pad_end).unwrap();
        assert_eq!(spec.n_frames(), 2);
        assert_eq!(frame_count(samples.len(), &pad_end).unwrap(), 2);

        // Already on a hop boundary: nothing is added
        let aligned = vec![0.3f32; n_fft + 2 * hop];
        assert_eq!(frame_count(aligned.len(), &pad_end).unwrap(), 3);
        assert_eq!(compute_stft_with_config(&aligned, 8000, &pad_end).unwrap().n_frames(), 3);

        // The tail frame sees the last samples followed by zeros
        let mut tail = vec![0.0f32; n_fft + hop / 2];
        let len = tail.len();
        tail[len - 1] = 1.0;
        let spec = compute_stft_with_config(&tail, 8000, &pad_end).unwrap();
        assert!(spec.frame(1).unwrap()[0].norm() > 0.0);
    }

    #[test]
    fn test_centering_uses_reflect_padding() {
        let samples: Vec<f32> = (0..64).map(|i| ((i * 7) % 11) as f32 / 11.0 - 0.5).collect();
        let n_fft = 16;

        let centered = compute_stft(&samples, 8000, n_fft, 4).unwrap();

        // Same transform on a manually reflect-padded signal without centering
        let padded = pad(&samples, n_fft / 2, n_fft / 2, PadMode::Reflect).unwrap();
        let config = StftConfig {
            n_fft,
            hop_length: Some(4),
            center: false,
            ..StftConfig::default()
        };
        let manual = compute_stft_with_config(&padded, 8000, &config).unwrap();

        assert_eq!(centered.shape(), manual.shape());
        for (a, b) in centered.as_slice().iter().zip(manual.as_slice()) {
            assert!((*a - *b).norm() < 1e-5);
        }
    }

    #[test]
    fn test_constant_padding_differs_from_reflect() {
        let samples = sine(1000.0, 0.8, 8000, 256);
        let reflect = compute_stft(&samples, 8000, 64, 16).unwrap();
        let config = StftConfig {
            pad_mode: PadMode::Constant,
            ..StftConfig::with_n_fft(64)
        };
        let zero = compute_stft_with_config(&samples, 8000, &config).unwrap();
        assert_eq!(reflect.shape(), zero.shape());
        // The first frame sees the padding; later frames are identical
        assert_ne!(reflect.frame(0), zero.frame(0));
        assert_eq!(reflect.frame(8), zero.frame(8));
    }

    #[test]
    fn test_dc_signal_rectangular() {
        let config = StftConfig {
            n_fft: 8,
            hop_length: Some(8),
            window: WindowFunction::Rectangular,
            center: false,
            ..StftConfig::default()
        };
        let spec = compute_stft_with_config(&[1.0f32; 16], 8000, &config).unwrap();
        assert_eq!(spec.shape(), (5, 2));
        for frame in spec.frames() {
            assert!((frame[0].re - 8.0).abs() < 1e-5);
            for c in &frame[1..] {
                assert!(c.norm() < 1e-5);
            }
        }
    }

    #[test]
    fn test_normalized_scaling() {
        let config = StftConfig {
            n_fft: 8,
            hop_length: Some(8),
            window: WindowFunction::Rectangular,
            center: false,
            normalized: true,
            ..StftConfig::default()
        };
        let spec = compute_stft_with_config(&[1.0f32; 8], 8000, &config).unwrap();
        let expected = 8.0 / 8.0f32.sqrt();
        assert!((spec.get(0, 0).unwrap().re - expected).abs() < 1e-5);
    }

    #[test]
    fn test_single_tone_peak_hann() {
        let sample_rate = 22050;
        let n_fft = 2048;
        let k = 93;
        let freq = k as f64 * sample_rate as f64 / n_fft as f64;
        let amplitude = 0.5;
        let samples = sine(freq, amplitude, sample_rate, 22050);

        let spec = compute_stft(&samples, sample_rate, n_fft, 512).unwrap();
        let frame = spec.frame(20).unwrap();
        let (peak_bin, peak) = frame
            .iter()
            .map(|c| c.norm())
            .enumerate()
            .fold((0, 0.0f32), |best, (i, m)| if m > best.1 { (i, m) } else { best });

        assert_eq!(peak_bin, (freq * n_fft as f64 / sample_rate as f64).round() as usize);
        // Hann window sums to n_fft / 2, so the peak is A * n_fft / 4
        let expected = (amplitude * n_fft as f64 / 4.0) as f32;
        assert!(
            (peak - expected).abs() / expected < 0.01,
            "peak={}, expected={}",
            peak,
            expected
        );
    }

    #[test]
    fn test_single_tone_peak_rectangular() {
        let sample_rate = 8000;
        let n_fft = 512;
        let k = 40;
        let freq = k as f64 * sample_rate as f64 / n_fft as f64;
        let samples = sine(freq, 1.0, sample_rate, 8000);
        let config = StftConfig {
            window: WindowFunction::Rectangular,
            ..StftConfig::with_n_fft(n_fft)
        };
        let spec = compute_stft_with_config(&samples, sample_rate, &config).unwrap();
        let peak = spec.get(k, 10).unwrap().norm();
        let expected = n_fft as f32 / 2.0;
        assert!((peak - expected).abs() / expected < 0.01, "peak={}", peak);
    }

    #[test]
    fn test_deterministic() {
        let samples = sine(330.0, 0.7, 16000, 16000);
        let a = compute_stft(&samples, 16000, 1024, 256).unwrap();
        let b = compute_stft(&samples, 16000, 1024, 256).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let samples = sine(523.25, 0.6, 22050, 44100);
        let serial = StftConfig::with_n_fft(1024);
        let parallel = StftConfig {
            parallel: true,
            ..serial.clone()
        };
        let a = compute_stft_with_config(&samples, 22050, &serial).unwrap();
        let b = compute_stft_with_config(&samples, 22050, &parallel).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_short_window_is_centered() {
        let config = StftConfig {
            win_length: Some(8),
            ..StftConfig::with_n_fft(16)
        };
        let stft = Stft::new(&config).unwrap();
        let w = stft.window();
        assert_eq!(w.len(), 16);
        assert!(w[..4].iter().all(|&v| v == 0.0));
        assert!(w[12..].iter().all(|&v| v == 0.0));
        assert!((w[8] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_parameters() {
        let samples = vec![0.0f32; 4096];
        for (n_fft, hop) in [(0usize, 512usize), (2047, 512), (2048, 0), (7, 1)] {
            let result = compute_stft(&samples, 22050, n_fft, hop);
            assert!(
                matches!(result, Err(SpectrogramError::InvalidParameter(_))),
                "n_fft={}, hop={}: {:?}",
                n_fft,
                hop,
                result
            );
        }

        let config = StftConfig {
            win_length: Some(4096),
            ..StftConfig::default()
        };
        let result = compute_stft_with_config(&samples, 22050, &config);
        assert!(matches!(result, Err(SpectrogramError::InvalidParameter(_))));

        // Parameter errors win over input errors
        let result = compute_stft(&[], 22050, 7, 1);
        assert!(matches!(result, Err(SpectrogramError::InvalidParameter(_))));
    }

    #[test]
    fn test_invalid_input() {
        let result = compute_stft(&[], 22050, 2048, 512);
        assert!(matches!(result, Err(SpectrogramError::InvalidInput(_))));

        let result = compute_stft(&[0.0, f32::NAN, 0.0], 22050, 16, 4);
        assert!(matches!(result, Err(SpectrogramError::InvalidInput(_))));

        let result = compute_stft(&[0.0; 64], 0, 16, 4);
        assert!(matches!(result, Err(SpectrogramError::InvalidInput(_))));
    }

    #[test]
    fn test_oversized_fft() {
        let config = StftConfig::with_n_fft(MAX_N_FFT * 2);
        let result = Stft::new(&config);
        assert!(matches!(result, Err(SpectrogramError::NumericOverflow(_))));
    }

    #[test]
    fn test_hop_longer_than_frame() {
        let samples = vec![0.1f32; 1000];
        let spec = compute_stft(&samples, 8000, 64, 128).unwrap();
        assert_eq!(spec.shape(), (33, 1 + 1000 / 128));
    }

    #[test]
    fn test_fft_frequencies() {
        let freqs = fft_frequencies(22050, 2048);
        assert_eq!(freqs.len(), 1025);
        assert_eq!(freqs[0], 0.0);
        assert!((freqs[1024] - 11025.0).abs() < 1e-3);
        assert!((freqs[1] - 22050.0 / 2048.0).abs() < 1e-4);
    }

    #[test]
    fn test_frames_to_time() {
        let times = frames_to_time(4, 22050, 512);
        assert_eq!(times.len(), 4);
        assert!((times[2] - 1024.0 / 22050.0).abs() < 1e-6);
        assert!(frames_to_time(4, 0, 512).is_empty());
    }
}
