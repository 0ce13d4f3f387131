//! Example: Compute the spectrogram of a single audio file
//!
//! Usage:
//!   cargo run --release --example print_spectrogram -- <file>
//!
//! Prints the sample rate, magnitude range, matrix shape and dB range.

use spectral_dsp::{amplitude_to_db, compute_stft, decode_audio, magnitude, DbConfig};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let path = match env::args().nth(1) {
        Some(p) => p,
        None => {
            eprintln!("Usage: print_spectrogram <audio file>");
            std::process::exit(2);
        }
    };

    let waveform = match decode_audio(&path) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("ERROR: {}: {}", path, e);
            std::process::exit(1);
        }
    };
    println!("{}", waveform.sample_rate());

    let spec = compute_stft(waveform.samples(), waveform.sample_rate(), 2048, 512)?;
    let mag = magnitude(&spec);
    let (min, max) = mag.min_max().ok_or("empty spectrogram")?;
    println!("{} {}", min, max);
    println!("{:?}", mag.shape());

    let db_config = DbConfig::default();
    let db = amplitude_to_db(&mag, db_config.reference, db_config.amin, db_config.top_db)?;
    let (min, max) = db.min_max().ok_or("empty spectrogram")?;
    println!("{} {}", min, max);

    Ok(())
}
