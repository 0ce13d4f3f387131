//! Decibel scaling of real spectrograms
//!
//! `amplitude_to_db` maps a magnitude spectrogram to
//!
//! `db = 20 * log10(max(amin, S)) - 20 * log10(max(amin, ref))`
//!
//! then, if `top_db` is set, raises every entry to at least `max(db) - top_db`.
//! `power_to_db` is the same with a factor of 10 for power spectrograms.
//!
//! # Example
//!
//! ```
//! use spectral_dsp::spectral::matrix::MagnitudeSpectrogram;
//! use spectral_dsp::spectral::scaling::amplitude_to_db;
//! use spectral_dsp::DbReference;
//!
//! let s = MagnitudeSpectrogram::from_frame_major(2, 1, vec![1.0, 0.1])?;
//! let db = amplitude_to_db(&s, DbReference::Max, 1e-10, Some(80.0))?;
//! assert!((db.as_slice()[1] + 20.0).abs() < 1e-4);
//! # Ok::<(), spectral_dsp::SpectrogramError>(())
//! ```

use crate::config::{DbConfig, DbReference};
use crate::error::SpectrogramError;
use crate::spectral::matrix::MagnitudeSpectrogram;

/// Default lower bound for `normalize_db`
pub const DEFAULT_MIN_LEVEL_DB: f32 = -100.0;

/// Convert an amplitude (magnitude) spectrogram to dB
///
/// # Arguments
///
/// * `spec` - Non-negative magnitude spectrogram
/// * `reference` - `Max` for "relative to peak", or a fixed amplitude
/// * `amin` - Amplitude floor applied before the log (must be > 0)
/// * `top_db` - Dynamic range below the peak; `None` disables clamping
///
/// # Errors
///
/// - `InvalidParameter` if `amin <= 0`, `top_db <= 0`, or either (or a fixed
///   reference) is not finite
/// - `InvalidInput` if `spec` is empty or contains NaN / infinity
pub fn amplitude_to_db(
    spec: &MagnitudeSpectrogram,
    reference: DbReference,
    amin: f32,
    top_db: Option<f32>,
) -> Result<MagnitudeSpectrogram, SpectrogramError> {
    to_db(spec, 20.0, reference, amin, top_db)
}

/// Convert a power spectrogram to dB (`10 * log10`)
///
/// Same parameters and errors as [`amplitude_to_db`].
pub fn power_to_db(
    spec: &MagnitudeSpectrogram,
    reference: DbReference,
    amin: f32,
    top_db: Option<f32>,
) -> Result<MagnitudeSpectrogram, SpectrogramError> {
    to_db(spec, 10.0, reference, amin, top_db)
}

/// Map a dB spectrogram into [0, 1]
///
/// `(v - ref_level_db - min_level_db) / -min_level_db`, clamped to [0, 1].
/// With the defaults (`-100`, `0`) a value of 0 dB maps to 1 and -100 dB or
/// below maps to 0.
///
/// # Errors
///
/// Returns `InvalidParameter` unless `min_level_db` is finite and negative.
pub fn normalize_db(
    spec: &MagnitudeSpectrogram,
    min_level_db: f32,
    ref_level_db: f32,
) -> Result<MagnitudeSpectrogram, SpectrogramError> {
    if !min_level_db.is_finite() || min_level_db >= 0.0 {
        return Err(SpectrogramError::InvalidParameter(format!(
            "min_level_db must be finite and < 0, got {}",
            min_level_db
        )));
    }
    if !ref_level_db.is_finite() {
        return Err(SpectrogramError::InvalidParameter(format!(
            "ref_level_db must be finite, got {}",
            ref_level_db
        )));
    }

    Ok(spec.map(|&v| ((v - ref_level_db - min_level_db) / -min_level_db).clamp(0.0, 1.0)))
}

impl DbConfig {
    /// Convert a magnitude spectrogram with these settings
    pub fn apply(&self, spec: &MagnitudeSpectrogram) -> Result<MagnitudeSpectrogram, SpectrogramError> {
        amplitude_to_db(spec, self.reference, self.amin, self.top_db)
    }

    /// Convert a power spectrogram with these settings
    pub fn apply_power(
        &self,
        spec: &MagnitudeSpectrogram,
    ) -> Result<MagnitudeSpectrogram, SpectrogramError> {
        power_to_db(spec, self.reference, self.amin, self.top_db)
    }
}

fn to_db(
    spec: &MagnitudeSpectrogram,
    multiplier: f32,
    reference: DbReference,
    amin: f32,
    top_db: Option<f32>,
) -> Result<MagnitudeSpectrogram, SpectrogramError> {
    if !amin.is_finite() || amin <= 0.0 {
        return Err(SpectrogramError::InvalidParameter(format!(
            "amin must be finite and > 0, got {}",
            amin
        )));
    }
    if let Some(top) = top_db {
        if !top.is_finite() || top <= 0.0 {
            return Err(SpectrogramError::InvalidParameter(format!(
                "top_db must be finite and > 0, got {}",
                top
            )));
        }
    }
    if let DbReference::Fixed(r) = reference {
        if !r.is_finite() {
            return Err(SpectrogramError::InvalidParameter(format!(
                "ref must be finite, got {}",
                r
            )));
        }
    }
    if spec.is_empty() {
        return Err(SpectrogramError::InvalidInput(
            "Cannot convert an empty spectrogram to dB".to_string(),
        ));
    }
    if let Some(pos) = spec.as_slice().iter().position(|v| !v.is_finite()) {
        return Err(SpectrogramError::InvalidInput(format!(
            "Spectrogram entry {} is not finite ({})",
            pos,
            spec.as_slice()[pos]
        )));
    }

    let ref_value = match reference {
        DbReference::Max => spec.as_slice().iter().fold(0.0f32, |m, &v| m.max(v.abs())),
        DbReference::Fixed(r) => r.abs(),
    };
    let offset = multiplier * amin.max(ref_value).log10();

    let mut db = spec.map(|&v| multiplier * amin.max(v.abs()).log10() - offset);

    if let Some(top) = top_db {
        if let Some((_, peak)) = db.min_max() {
            let floor = peak - top;
            db = db.map(|&v| v.max(floor));
        }
    }

    log::debug!(
        "dB conversion (x{}): ref={:?} ({:.6}), amin={:e}, top_db={:?}, range={:?}",
        multiplier,
        reference,
        ref_value,
        amin,
        top_db,
        db.min_max()
    );

    Ok(db)
}
