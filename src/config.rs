//! Configuration parameters for spectrogram computation
//!
//! Every default that changes the numbers coming out of the pipeline (window,
//! padding, reference level, dynamic range) lives here.

use serde::{Deserialize, Serialize};

use crate::spectral::padding::PadMode;
use crate::spectral::window::WindowFunction;

/// Default FFT size
pub const DEFAULT_N_FFT: usize = 2048;

/// Default amplitude floor for dB conversion
pub const DEFAULT_AMIN: f32 = 1e-10;

/// Default dynamic range in dB
pub const DEFAULT_TOP_DB: f32 = 80.0;

/// STFT parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StftConfig {
    /// FFT size / frame length in samples; positive and even (default: 2048)
    pub n_fft: usize,

    /// Samples between successive frame starts; `None` means `win_length / 4`
    /// (default: None, i.e. 512)
    pub hop_length: Option<usize>,

    /// Length of the window before zero-padding to `n_fft`; `None` means
    /// `n_fft` (default: None)
    pub win_length: Option<usize>,

    /// Window function (default: periodic Hann)
    pub window: WindowFunction,

    /// Pad by `n_fft / 2` on both sides so frame `t` is centred on sample
    /// `t * hop_length` (default: true)
    pub center: bool,

    /// Padding mode used when `center` is set (default: Reflect)
    pub pad_mode: PadMode,

    /// When `center` is off, zero-pad the tail up to the next hop boundary so
    /// the last samples land in a frame instead of being dropped (default: false)
    pub pad_end: bool,

    /// Divide each frame's spectrum by `sqrt(sum(w^2))` (default: false)
    pub normalized: bool,

    /// Spread frames over the rayon thread pool (default: false)
    /// Output is identical either way
    pub parallel: bool,
}

impl StftConfig {
    /// Config for a given FFT size, with `hop_length = n_fft / 4` and
    /// `win_length = n_fft`
    pub fn with_n_fft(n_fft: usize) -> Self {
        Self {
            n_fft,
            ..Self::default()
        }
    }

    /// Window length in effect: the explicit value, else `n_fft`
    pub fn win_length(&self) -> usize {
        self.win_length.unwrap_or(self.n_fft)
    }

    /// Hop length in effect: the explicit value, else a quarter of the window
    /// (at least 1)
    pub fn hop_length(&self) -> usize {
        self.hop_length.unwrap_or_else(|| (self.win_length() / 4).max(1))
    }

    /// Number of non-negative frequency bins produced per frame
    pub fn n_bins(&self) -> usize {
        self.n_fft / 2 + 1
    }
}

impl Default for StftConfig {
    fn default() -> Self {
        Self {
            n_fft: DEFAULT_N_FFT,
            hop_length: None,
            win_length: None,
            window: WindowFunction::Hann,
            center: true,
            pad_mode: PadMode::Reflect,
            pad_end: false,
            normalized: false,
            parallel: false,
        }
    }
}

/// Reference level for dB conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum DbReference {
    /// Peak value of the matrix being converted (0 dB = loudest bin)
    #[default]
    Max,
    /// Fixed amplitude (its absolute value is used)
    Fixed(f32),
}

/// Decibel conversion parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DbConfig {
    /// Reference level (default: Max)
    pub reference: DbReference,

    /// Minimum amplitude before taking the log; must be > 0 (default: 1e-10)
    pub amin: f32,

    /// Dynamic range below the peak in dB; `None` disables clamping (default: 80.0)
    pub top_db: Option<f32>,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            reference: DbReference::Max,
            amin: DEFAULT_AMIN,
            top_db: Some(DEFAULT_TOP_DB),
        }
    }
}

/// Full pipeline configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpectrogramConfig {
    /// STFT parameters
    pub stft: StftConfig,

    /// dB conversion parameters
    pub db: DbConfig,
}
