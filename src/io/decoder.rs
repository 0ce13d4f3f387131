//! Audio decoding using Symphonia
//!
//! Decodes the first playable track of a file to f32 samples and mixes it
//! down to mono. Audio is returned at its native sample rate.

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::SpectrogramError;
use crate::io::waveform::Waveform;
use crate::preprocessing::channel_mixer::downmix_interleaved;

/// Decode an audio file to a mono waveform
///
/// # Arguments
///
/// * `path` - Path to audio file (any container/codec Symphonia supports)
///
/// # Errors
///
/// Returns `DecodingError` if the file cannot be opened or probed, has no
/// decodable track, or yields no samples. Corrupted packets are skipped.
pub fn decode_audio<P: AsRef<Path>>(path: P) -> Result<Waveform, SpectrogramError> {
    let path = path.as_ref();
    log::debug!("Decoding audio file: {}", path.display());

    let src = File::open(path)?;
    let mss = MediaSourceStream::new(Box::new(src), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe().format(
        &hint,
        mss,
        &FormatOptions::default(),
        &MetadataOptions::default(),
    )?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| SpectrogramError::DecodingError("No supported audio tracks found".to_string()))?;

    let track_id = track.id;
    let sample_rate = track.codec_params.sample_rate.ok_or_else(|| {
        SpectrogramError::DecodingError("Track does not declare a sample rate".to_string())
    })?;
    let mut channels = track.codec_params.channels.map(|c| c.count()).unwrap_or(1);
    let mut decoder =
        symphonia::default::get_codecs().make(&track.codec_params, &DecoderOptions::default())?;

    let mut interleaved: Vec<f32> = Vec::new();
    let mut skipped = 0usize;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => return Err(e.into()),
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                let spec = *decoded.spec();
                channels = spec.channels.count();
                let mut buf = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
                buf.copy_interleaved_ref(decoded);
                interleaved.extend_from_slice(buf.samples());
            }
            Err(SymphoniaError::DecodeError(msg)) => {
                skipped += 1;
                log::warn!("Skipping corrupted packet in {}: {}", path.display(), msg);
            }
            Err(e) => return Err(e.into()),
        }
    }

    if interleaved.is_empty() {
        return Err(SpectrogramError::DecodingError(format!(
            "No audio samples decoded from {}",
            path.display()
        )));
    }

    let mono = downmix_interleaved(&interleaved, channels)?;

    log::debug!(
        "Decoded {}: {} frames, {} channel(s), {} Hz, {} packet(s) skipped",
        path.display(),
        mono.len(),
        channels,
        sample_rate,
        skipped
    );

    Waveform::new(mono, sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let result = decode_audio("/nonexistent/path/to/audio.wav");
        assert!(matches!(result, Err(SpectrogramError::DecodingError(_))));
    }

    #[test]
    fn test_not_audio() {
        let path = std::env::temp_dir().join(format!(
            "spectral_dsp_not_audio_{}.wav",
            std::process::id()
        ));
        std::fs::write(&path, b"definitely not a wav file").unwrap();
        let result = decode_audio(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(SpectrogramError::DecodingError(_))));
    }
}
