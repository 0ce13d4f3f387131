//! Error types for the spectrogram engine

use std::fmt;

/// Errors that can occur while computing a spectrogram
#[derive(Debug, Clone, PartialEq)]
pub enum SpectrogramError {
    /// Empty or malformed waveform / matrix
    InvalidInput(String),

    /// Out-of-range parameter (n_fft, hop_length, amin, top_db, ...)
    InvalidParameter(String),

    /// Size arithmetic or transform output overflowed
    NumericOverflow(String),

    /// Audio decoding error
    DecodingError(String),

    /// Processing error during analysis
    ProcessingError(String),
}

impl fmt::Display for SpectrogramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpectrogramError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            SpectrogramError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            SpectrogramError::NumericOverflow(msg) => write!(f, "Numeric overflow: {}", msg),
            SpectrogramError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
            SpectrogramError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

impl std::error::Error for SpectrogramError {}

impl From<symphonia::core::errors::Error> for SpectrogramError {
    fn from(e: symphonia::core::errors::Error) -> Self {
        SpectrogramError::DecodingError(e.to_string())
    }
}

impl From<std::io::Error> for SpectrogramError {
    fn from(e: std::io::Error) -> Self {
        SpectrogramError::DecodingError(e.to_string())
    }
}
