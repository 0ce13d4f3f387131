//! Channel mixing utilities (multi-channel to mono conversion)

use crate::error::SpectrogramError;

/// Channel mixing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelMixMode {
    /// Simple average: (L + R) / 2
    #[default]
    Average,
    /// Left channel only
    Left,
    /// Right channel only
    Right,
    /// Keep whichever channel has the larger RMS
    Dominant,
}

/// Convert stereo to mono
///
/// # Arguments
///
/// * `left` - Left channel samples
/// * `right` - Right channel samples
/// * `mode` - Mixing mode
///
/// # Returns
///
/// Mono samples
///
/// # Errors
///
/// Returns `InvalidInput` if the channels differ in length.
pub fn stereo_to_mono(
    left: &[f32],
    right: &[f32],
    mode: ChannelMixMode,
) -> Result<Vec<f32>, SpectrogramError> {
    if left.len() != right.len() {
        return Err(SpectrogramError::InvalidInput(format!(
            "Channel length mismatch: left={}, right={}",
            left.len(),
            right.len()
        )));
    }

    log::debug!("Converting {} stereo frames to mono using {:?}", left.len(), mode);

    let mono = match mode {
        ChannelMixMode::Average => left
            .iter()
            .zip(right)
            .map(|(&l, &r)| (l + r) * 0.5)
            .collect(),
        ChannelMixMode::Left => left.to_vec(),
        ChannelMixMode::Right => right.to_vec(),
        ChannelMixMode::Dominant => {
            if rms(right) > rms(left) {
                right.to_vec()
            } else {
                left.to_vec()
            }
        }
    };
    Ok(mono)
}

/// Average interleaved multi-channel samples down to mono
///
/// # Errors
///
/// Returns `InvalidInput` if `channels == 0` or the sample count is not a
/// multiple of `channels`.
pub fn downmix_interleaved(samples: &[f32], channels: usize) -> Result<Vec<f32>, SpectrogramError> {
    if channels == 0 {
        return Err(SpectrogramError::InvalidInput(
            "Channel count must be > 0".to_string(),
        ));
    }
    if samples.len() % channels != 0 {
        return Err(SpectrogramError::InvalidInput(format!(
            "{} interleaved samples is not a multiple of {} channels",
            samples.len(),
            channels
        )));
    }
    if channels == 1 {
        return Ok(samples.to_vec());
    }

    let scale = 1.0 / channels as f32;
    Ok(samples
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() * scale)
        .collect())
}

fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = samples.iter().map(|&s| (s as f64) * (s as f64)).sum();
    (sum_sq / samples.len() as f64).sqrt() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stereo_average() {
        let mono = stereo_to_mono(&[1.0, 0.5], &[0.0, -0.5], ChannelMixMode::Average).unwrap();
        assert_eq!(mono, vec![0.5, 0.0]);
    }

    #[test]
    fn test_stereo_single_channel() {
        let l = [0.1, 0.2];
        let r = [0.3, 0.4];
        assert_eq!(stereo_to_mono(&l, &r, ChannelMixMode::Left).unwrap(), l.to_vec());
        assert_eq!(stereo_to_mono(&l, &r, ChannelMixMode::Right).unwrap(), r.to_vec());
    }

    #[test]
    fn test_stereo_dominant() {
        let quiet = [0.01, -0.01, 0.01];
        let loud = [0.5, -0.5, 0.5];
        assert_eq!(
            stereo_to_mono(&quiet, &loud, ChannelMixMode::Dominant).unwrap(),
            loud.to_vec()
        );
        assert_eq!(
            stereo_to_mono(&loud, &quiet, ChannelMixMode::Dominant).unwrap(),
            loud.to_vec()
        );
    }

    #[test]
    fn test_stereo_length_mismatch() {
        let result = stereo_to_mono(&[0.0], &[0.0, 0.0], ChannelMixMode::Average);
        assert!(matches!(result, Err(SpectrogramError::InvalidInput(_))));
    }

    #[test]
    fn test_downmix_interleaved() {
        let mono = downmix_interleaved(&[1.0, 0.0, 0.5, 0.5, -1.0, 1.0], 2).unwrap();
        assert_eq!(mono, vec![0.5, 0.5, 0.0]);

        let mono = downmix_interleaved(&[0.3, 0.6, 0.9], 3).unwrap();
        assert!((mono[0] - 0.6).abs() < 1e-6);

        let passthrough = downmix_interleaved(&[0.1, 0.2], 1).unwrap();
        assert_eq!(passthrough, vec![0.1, 0.2]);
    }

    #[test]
    fn test_downmix_invalid() {
        assert!(downmix_interleaved(&[0.0; 4], 0).is_err());
        assert!(downmix_interleaved(&[0.0; 5], 2).is_err());
    }
}
