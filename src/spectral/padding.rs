//! Signal padding for centered framing
//!
//! Centered STFT frames need `n_fft / 2` extra samples on each side of the
//! signal so that frame 0 is centred on sample 0. The padding mode decides
//! what those samples contain.

use serde::{Deserialize, Serialize};

use crate::error::SpectrogramError;

/// How to fill samples outside the signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PadMode {
    /// Zeros
    Constant,
    /// Mirror around the edge sample without repeating it (`[3 2 | 1 2 3 | 2 1]`)
    #[default]
    Reflect,
    /// Repeat the edge sample
    Edge,
}

/// Pad `signal` with `left` samples before and `right` samples after
///
/// Reflection is periodic with period `2 * (len - 1)`, so pads longer than the
/// signal keep bouncing between its ends. A single-sample signal reflects onto
/// itself.
///
/// # Errors
///
/// Returns `InvalidInput` for an empty signal and `NumericOverflow` if the
/// padded length does not fit in `usize` or cannot be allocated.
pub fn pad(
    signal: &[f32],
    left: usize,
    right: usize,
    mode: PadMode,
) -> Result<Vec<f32>, SpectrogramError> {
    if signal.is_empty() {
        return Err(SpectrogramError::InvalidInput(
            "Cannot pad an empty signal".to_string(),
        ));
    }

    let total = signal
        .len()
        .checked_add(left)
        .and_then(|n| n.checked_add(right))
        .ok_or_else(|| {
            SpectrogramError::NumericOverflow(format!(
                "Padded length overflows: len={}, left={}, right={}",
                signal.len(),
                left,
                right
            ))
        })?;

    let mut out = Vec::new();
    out.try_reserve_exact(total).map_err(|e| {
        SpectrogramError::NumericOverflow(format!(
            "Cannot allocate {} padded samples: {}",
            total, e
        ))
    })?;
    let n = signal.len() as isize;

    for i in 0..total {
        let j = i as isize - left as isize;
        if (0..n).contains(&j) {
            out.push(signal[j as usize]);
            continue;
        }
        let v = match mode {
            PadMode::Constant => 0.0,
            PadMode::Edge => signal[j.clamp(0, n - 1) as usize],
            PadMode::Reflect => signal[reflect_index(j, n)],
        };
        out.push(v);
    }

    Ok(out)
}

fn reflect_index(j: isize, n: isize) -> usize {
    if n == 1 {
        return 0;
    }
    let period = 2 * (n - 1);
    let m = j.rem_euclid(period);
    if m >= n {
        (period - m) as usize
    } else {
        m as usize
    }
}
