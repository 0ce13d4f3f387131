//! Example: Render the dB spectrogram of audio files as grayscale PNGs
//!
//! Usage:
//!   cargo run --release --example wav_to_png -- <file1> <file2> ...
//!
//! Writes `<file>.png` next to each input. Time runs left to right, low
//! frequencies are at the bottom and louder bins are darker.

use image::{GrayImage, Luma};
use spectral_dsp::{compute_spectrogram_from_file, normalize_db, SpectrogramConfig, StftConfig};
use std::env;
use std::path::Path;

/// Dynamic range mapped onto the gray scale
const MIN_LEVEL_DB: f32 = -80.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("Usage: wav_to_png <audio file> [<audio file> ...]");
        std::process::exit(2);
    }

    let config = SpectrogramConfig {
        stft: StftConfig {
            hop_length: Some(441),
            ..StftConfig::default()
        },
        ..SpectrogramConfig::default()
    };

    for path in &paths {
        let path = Path::new(path);
        println!("Processing file {}", path.display());

        let result = match compute_spectrogram_from_file(path, &config) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("ERROR: {}: {}", path.display(), e);
                continue;
            }
        };

        let levels = normalize_db(&result.db, MIN_LEVEL_DB, 0.0)?;
        let (n_bins, n_frames) = levels.shape();
        let mut img = GrayImage::new(n_frames as u32, n_bins as u32);

        for (x, frame) in levels.frames().enumerate() {
            for (bin, &v) in frame.iter().enumerate() {
                let y = (n_bins - 1 - bin) as u32;
                let gray = ((1.0 - v) * 255.0).round() as u8;
                img.put_pixel(x as u32, y, Luma([gray]));
            }
        }

        let out = path.with_extension("png");
        img.save(&out)?;
        println!(
            "Wrote {} ({}x{}, {:.2} s of audio at {} Hz)",
            out.display(),
            n_frames,
            n_bins,
            result.metadata.duration_seconds,
            result.metadata.sample_rate
        );
    }

    Ok(())
}
