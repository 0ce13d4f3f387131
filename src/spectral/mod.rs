//! Spectral analysis modules
//!
//! The forward magnitude-spectrogram pipeline:
//! - Padding and framing (centered, reflect by default)
//! - Window functions (Hann, Hamming, Blackman, rectangular, custom)
//! - STFT (rustfft, optionally parallel over frames)
//! - Magnitude / power
//! - Decibel scaling with dynamic-range clamping

pub mod magnitude;
pub mod matrix;
pub mod padding;
pub mod scaling;
pub mod stft;
pub mod window;
