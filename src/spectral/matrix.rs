//! Time-frequency matrix container
//!
//! A [`Spectrogram`] is indexed by `(frequency bin, frame)` and has shape
//! `(n_bins, n_frames)`. Storage is frame-major: every frame (column) is one
//! contiguous slice of `n_bins` values, so per-frame work can write its column
//! without touching any other.

use rustfft::num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::error::SpectrogramError;

/// 2-D spectrogram matrix, shape `(n_bins, n_frames)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spectrogram<T> {
    n_bins: usize,
    n_frames: usize,
    data: Vec<T>,
}

/// Complex STFT output
pub type ComplexSpectrogram = Spectrogram<Complex<f32>>;

/// Real-valued spectrogram (magnitude, power or dB)
pub type MagnitudeSpectrogram = Spectrogram<f32>;

/// Summary statistics of a real spectrogram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrogramStats {
    /// Smallest entry
    pub min: f32,
    /// Largest entry
    pub max: f32,
    /// Arithmetic mean of all entries
    pub mean: f32,
}

impl<T> Spectrogram<T> {
    /// Wrap frame-major data
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `data.len() != n_bins * n_frames`, and
    /// `NumericOverflow` if that product does not fit in `usize`.
    pub fn from_frame_major(
        n_bins: usize,
        n_frames: usize,
        data: Vec<T>,
    ) -> Result<Self, SpectrogramError> {
        let expected = n_bins.checked_mul(n_frames).ok_or_else(|| {
            SpectrogramError::NumericOverflow(format!(
                "Matrix size overflows: {} x {}",
                n_bins, n_frames
            ))
        })?;
        if data.len() != expected {
            return Err(SpectrogramError::InvalidInput(format!(
                "Data length {} does not match shape ({}, {})",
                data.len(),
                n_bins,
                n_frames
            )));
        }
        Ok(Self {
            n_bins,
            n_frames,
            data,
        })
    }

    /// Matrix shape as `(frequency_bins, num_frames)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_bins, self.n_frames)
    }

    /// Number of frequency bins (rows)
    pub fn n_bins(&self) -> usize {
        self.n_bins
    }

    /// Number of frames (columns)
    pub fn n_frames(&self) -> usize {
        self.n_frames
    }

    /// True if the matrix holds no entries
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Entry at `(bin, frame)`, or `None` when out of range
    pub fn get(&self, bin: usize, frame: usize) -> Option<&T> {
        if bin >= self.n_bins || frame >= self.n_frames {
            return None;
        }
        self.data.get(frame * self.n_bins + bin)
    }

    /// All bins of frame `index`
    pub fn frame(&self, index: usize) -> Option<&[T]> {
        if index >= self.n_frames {
            return None;
        }
        let start = index * self.n_bins;
        Some(&self.data[start..start + self.n_bins])
    }

    /// Iterate over frames (columns) in time order
    pub fn frames(&self) -> impl Iterator<Item = &[T]> {
        // chunks_exact panics on 0
        self.data.chunks_exact(self.n_bins.max(1))
    }

    /// Raw frame-major storage
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix and return its frame-major storage
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Apply `f` to every entry, keeping the shape
    pub fn map<U, F>(&self, f: F) -> Spectrogram<U>
    where
        F: Fn(&T) -> U,
    {
        Spectrogram {
            n_bins: self.n_bins,
            n_frames: self.n_frames,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Clone> Spectrogram<T> {
    /// Row `bin` across all frames
    pub fn bin(&self, bin: usize) -> Option<Vec<T>> {
        if bin >= self.n_bins {
            return None;
        }
        Some(self.frames().map(|f| f[bin].clone()).collect())
    }

    /// Copy out as `n_frames × n_bins` nested vectors
    pub fn to_frames(&self) -> Vec<Vec<T>> {
        self.frames().map(|f| f.to_vec()).collect()
    }
}

impl Spectrogram<f32> {
    /// Smallest and largest entry, or `None` for an empty matrix
    pub fn min_max(&self) -> Option<(f32, f32)> {
        if self.data.is_empty() {
            return None;
        }
        let (min, max) = self
            .data
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        Some((min, max))
    }

    /// Min, max and mean, or `None` for an empty matrix
    pub fn stats(&self) -> Option<SpectrogramStats> {
        let (min, max) = self.min_max()?;
        let sum: f64 = self.data.iter().map(|&v| v as f64).sum();
        Some(SpectrogramStats {
            min,
            max,
            mean: (sum / self.data.len() as f64) as f32,
        })
    }
}
