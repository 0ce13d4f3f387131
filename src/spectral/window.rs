//! Window functions for short-time analysis
//!
//! All windows are built from the generalized cosine family:
//!
//! `w[n] = sum_k (-1)^k * a_k * cos(2 * pi * k * n / M)`
//!
//! where `M = size` for periodic ("fftbins") windows and `M = size - 1` for
//! symmetric windows. Periodic windows are the right choice for spectral
//! analysis and are what the STFT uses by default.
//!
//! # Example
//!
//! ```
//! use spectral_dsp::spectral::window::{get_window, WindowFunction};
//!
//! let w = get_window(&WindowFunction::Hann, 4, true)?;
//! assert_eq!(w.len(), 4);
//! assert!((w[2] - 1.0).abs() < 1e-6);
//! # Ok::<(), spectral_dsp::SpectrogramError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SpectrogramError;

/// Window function applied to each frame before the FFT
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum WindowFunction {
    /// Hann window (raised cosine, a0 = 0.5)
    #[default]
    Hann,
    /// Hamming window (a0 = 0.54)
    Hamming,
    /// Blackman window (a = [0.42, 0.5, 0.08])
    Blackman,
    /// Boxcar window (all ones)
    Rectangular,
    /// Caller-supplied weights; length must equal `win_length`
    Custom(Vec<f32>),
}

impl WindowFunction {
    /// Short lowercase name, used in logs and metadata
    pub fn name(&self) -> &'static str {
        match self {
            WindowFunction::Hann => "hann",
            WindowFunction::Hamming => "hamming",
            WindowFunction::Blackman => "blackman",
            WindowFunction::Rectangular => "rectangular",
            WindowFunction::Custom(_) => "custom",
        }
    }
}

/// Build a window of `size` weights
///
/// # Arguments
///
/// * `window` - Window function to generate
/// * `size` - Number of weights
/// * `fftbins` - `true` for a periodic window (spectral analysis), `false` for symmetric
///
/// # Errors
///
/// Returns `InvalidParameter` if `size == 0`, or if a custom window has the wrong
/// length or contains non-finite weights.
pub fn get_window(
    window: &WindowFunction,
    size: usize,
    fftbins: bool,
) -> Result<Vec<f32>, SpectrogramError> {
    if size == 0 {
        return Err(SpectrogramError::InvalidParameter(
            "Window size must be > 0".to_string(),
        ));
    }

    let sym = !fftbins;
    let w = match window {
        WindowFunction::Hann => hann(size, sym),
        WindowFunction::Hamming => hamming(size, sym),
        WindowFunction::Blackman => blackman(size, sym),
        WindowFunction::Rectangular => vec![1.0; size],
        WindowFunction::Custom(weights) => {
            if weights.len() != size {
                return Err(SpectrogramError::InvalidParameter(format!(
                    "Custom window length {} does not match win_length {}",
                    weights.len(),
                    size
                )));
            }
            if let Some(pos) = weights.iter().position(|w| !w.is_finite()) {
                return Err(SpectrogramError::InvalidParameter(format!(
                    "Custom window weight at index {} is not finite",
                    pos
                )));
            }
            weights.clone()
        }
    };

    Ok(w)
}

/// Hann window
pub fn hann(size: usize, sym: bool) -> Vec<f32> {
    general_hamming(size, 0.5, sym)
}

/// Hamming window
pub fn hamming(size: usize, sym: bool) -> Vec<f32> {
    general_hamming(size, 0.54, sym)
}

/// Blackman window
pub fn blackman(size: usize, sym: bool) -> Vec<f32> {
    general_cosine(size, &[0.42, 0.5, 0.08], sym)
}

/// Centre `window` inside a zero buffer of length `n_fft`
///
/// Used when `win_length < n_fft`: the window occupies the middle of the frame
/// and the remaining taps are zero. Returns the window unchanged when the
/// lengths already match.
pub fn pad_center(window: &[f32], n_fft: usize) -> Vec<f32> {
    if window.len() >= n_fft {
        return window.to_vec();
    }
    let mut out = vec![0.0f32; n_fft];
    let start = (n_fft - window.len()) / 2;
    out[start..start + window.len()].copy_from_slice(window);
    out
}

fn general_hamming(size: usize, alpha: f64, sym: bool) -> Vec<f32> {
    general_cosine(size, &[alpha, 1.0 - alpha], sym)
}

fn general_cosine(size: usize, a: &[f64], sym: bool) -> Vec<f32> {
    if size == 0 {
        return Vec::new();
    }
    if size == 1 {
        return vec![1.0];
    }

    let denom = if sym { size - 1 } else { size } as f64;
    (0..size)
        .map(|n| {
            let phase = 2.0 * std::f64::consts::PI * n as f64 / denom;
            a.iter()
                .enumerate()
                .map(|(k, &ak)| {
                    let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
                    sign * ak * (phase * k as f64).cos()
                })
                .sum::<f64>() as f32
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &[f32], b: &[f32], delta: f32) {
        assert_eq!(a.len(), b.len());
        for (&x, &y) in a.iter().zip(b) {
            assert!((x - y).abs() <= delta, "{:?} !~ {:?}", x, y);
        }
    }

    #[test]
    fn test_general_cosine() {
        assert_close(
            &general_cosine(5, &[0.5, 0.3, 0.2], true),
            &[0.4, 0.3, 1.0, 0.3, 0.4],
            1e-6,
        );
        assert_close(
            &general_cosine(4, &[0.5, 0.3, 0.2], false),
            &[0.4, 0.3, 1.0, 0.3],
            1e-6,
        );
    }

    #[test]
    fn test_general_hamming() {
        assert_close(
            &general_hamming(5, 0.7, true),
            &[0.4, 0.7, 1.0, 0.7, 0.4],
            1e-6,
        );
        assert_close(
            &general_hamming(5, 0.75, false),
            &[0.5, 0.672_745_75, 0.952_254_25, 0.952_254_25, 0.672_745_75],
            1e-6,
        );
        assert_close(
            &general_hamming(6, 0.75, true),
            &[0.5, 0.672_745_75, 0.952_254_25, 0.952_254_25, 0.672_745_75, 0.5],
            1e-6,
        );
    }

    #[test]
    fn test_hann_periodic_matches_scipy() {
        // scipy.signal.get_window("hann", 8)
        assert_close(
            &hann(8, false),
            &[
                0.0, 0.146_446_6, 0.5, 0.853_553_4, 1.0, 0.853_553_4, 0.5, 0.146_446_6,
            ],
            1e-6,
        );
    }

    #[test]
    fn test_hann_periodic_sum() {
        // A periodic Hann window sums to exactly size / 2
        let w = hann(2048, false);
        let sum: f32 = w.iter().sum();
        assert!((sum - 1024.0).abs() < 1e-2, "sum = {}", sum);
    }

    #[test]
    fn test_hamming_endpoints() {
        let w = hamming(9, true);
        assert!((w[0] - 0.08).abs() < 1e-6);
        assert!((w[8] - 0.08).abs() < 1e-6);
        assert!((w[4] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_blackman_symmetric() {
        let w = blackman(7, true);
        assert!(w[0].abs() < 1e-6);
        assert!((w[3] - 1.0).abs() < 1e-6);
        for i in 0..7 {
            assert!((w[i] - w[6 - i]).abs() < 1e-6);
        }
    }

    #[test]
    fn test_single_tap_window() {
        assert_eq!(hann(1, false), vec![1.0]);
    }

    #[test]
    fn test_custom_window_length_mismatch() {
        let custom = WindowFunction::Custom(vec![1.0; 3]);
        let result = get_window(&custom, 4, true);
        assert!(matches!(result, Err(SpectrogramError::InvalidParameter(_))));

        let custom = WindowFunction::Custom(vec![1.0, f32::NAN, 1.0, 1.0]);
        let result = get_window(&custom, 4, true);
        assert!(matches!(result, Err(SpectrogramError::InvalidParameter(_))));
    }

    #[test]
    fn test_zero_size_window() {
        let result = get_window(&WindowFunction::Hann, 0, true);
        assert!(result.is_err());
    }

    #[test]
    fn test_pad_center() {
        let padded = pad_center(&[1.0, 1.0], 6);
        assert_eq!(padded, vec![0.0, 0.0, 1.0, 1.0, 0.0, 0.0]);

        let padded = pad_center(&[1.0, 2.0, 3.0], 6);
        assert_eq!(padded, vec![0.0, 1.0, 2.0, 3.0, 0.0, 0.0]);

        let same = pad_center(&[1.0, 2.0], 2);
        assert_eq!(same, vec![1.0, 2.0]);
    }
}
