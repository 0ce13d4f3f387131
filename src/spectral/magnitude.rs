//! Complex-to-real spectrogram conversion

use crate::error::SpectrogramError;
use crate::spectral::matrix::{ComplexSpectrogram, MagnitudeSpectrogram};

/// Magnitude spectrogram: `|z|` for every entry
///
/// Uses `hypot`-style evaluation, so entries are never negative and are zero
/// only when both the real and imaginary parts are zero.
pub fn magnitude(spec: &ComplexSpectrogram) -> MagnitudeSpectrogram {
    log::debug!("Computing magnitude: shape={:?}", spec.shape());
    spec.map(|c| c.norm())
}

/// Power spectrogram: `|z|^2` for every entry
///
/// # Errors
///
/// Returns `NumericOverflow` if squaring a finite coefficient exceeds the
/// `f32` range.
pub fn power(spec: &ComplexSpectrogram) -> Result<MagnitudeSpectrogram, SpectrogramError> {
    log::debug!("Computing power: shape={:?}", spec.shape());
    let power = spec.map(|c| c.norm_sqr());

    let (n_bins, _) = power.shape();
    if let Some(pos) = power.as_slice().iter().position(|v| !v.is_finite()) {
        return Err(SpectrogramError::NumericOverflow(format!(
            "Power overflows f32 at bin {}, frame {}",
            pos % n_bins,
            pos / n_bins
        )));
    }

    Ok(power)
}
