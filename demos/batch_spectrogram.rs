//! Example: Compute spectrograms for many audio files in parallel
//!
//! Usage:
//!   cargo run --release --example batch_spectrogram -- [--jobs N] [--json] [--n-fft N] <file1> <file2> ...
//!
//! Notes:
//! - Parallelism is across files (batch-level). Each file's STFT runs single-threaded.
//! - Default workers: (available CPU threads - 1), keeping one core free for the system.

use rayon::prelude::*;
use serde::Serialize;
use spectral_dsp::{compute_spectrogram_from_file, SpectrogramConfig, StftConfig};
use std::env;
use std::time::Instant;

fn default_jobs() -> usize {
    let n = std::thread::available_parallelism().map(|v| v.get()).unwrap_or(1);
    std::cmp::max(1, n.saturating_sub(1))
}

#[derive(Serialize)]
struct ItemOut {
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sample_rate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shape: Option<(usize, usize)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    magnitude_range: Option<(f32, f32)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_range: Option<(f32, f32)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    processing_time_ms: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut json = false;
    let mut jobs: Option<usize> = None;
    let mut n_fft = 2048usize;
    let mut paths: Vec<String> = Vec::new();

    while let Some(a) = args.first().cloned() {
        args.remove(0);
        match a.as_str() {
            "--json" => json = true,
            "--jobs" => {
                let v = args
                    .first()
                    .ok_or("--jobs requires a value")?
                    .parse::<usize>()?;
                args.remove(0);
                jobs = Some(std::cmp::max(1, v));
            }
            "--n-fft" => {
                n_fft = args
                    .first()
                    .ok_or("--n-fft requires a value")?
                    .parse::<usize>()?;
                args.remove(0);
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: batch_spectrogram [--jobs N] [--json] [--n-fft N] <file1> <file2> ...\n\
                     \n\
                     --jobs N    Parallel workers (default: CPU-1)\n\
                     --json      Emit one JSON object per line (JSONL)\n\
                     --n-fft N   FFT size (default: 2048, hop = N/4)\n"
                );
                return Ok(());
            }
            _ => paths.push(a),
        }
    }

    if paths.is_empty() {
        eprintln!("ERROR: Provide at least one audio file path. Use --help for usage.");
        std::process::exit(2);
    }

    let jobs = jobs.unwrap_or_else(default_jobs);
    eprintln!("Batch: {} files, jobs={}, n_fft={}", paths.len(), jobs, n_fft);

    let config = SpectrogramConfig {
        stft: StftConfig::with_n_fft(n_fft),
        ..SpectrogramConfig::default()
    };

    let t0 = Instant::now();
    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;

    let outs: Vec<ItemOut> = pool.install(|| {
        paths
            .par_iter()
            .map(|path| match compute_spectrogram_from_file(path, &config) {
                Ok(res) => ItemOut {
                    file: path.clone(),
                    sample_rate: Some(res.metadata.sample_rate),
                    shape: Some(res.shape()),
                    magnitude_range: Some((res.magnitude_stats.min, res.magnitude_stats.max)),
                    db_range: Some((res.db_stats.min, res.db_stats.max)),
                    processing_time_ms: Some(res.metadata.processing_time_ms),
                    error: None,
                },
                Err(e) => ItemOut {
                    file: path.clone(),
                    sample_rate: None,
                    shape: None,
                    magnitude_range: None,
                    db_range: None,
                    processing_time_ms: None,
                    error: Some(e.to_string()),
                },
            })
            .collect()
    });

    for (idx, o) in outs.iter().enumerate() {
        if json {
            println!("{}", serde_json::to_string(o)?);
        } else if let Some(err) = &o.error {
            println!("[{}/{}] {}: ERROR: {}", idx + 1, outs.len(), o.file, err);
        } else {
            let (bins, frames) = o.shape.unwrap_or((0, 0));
            let (mag_min, mag_max) = o.magnitude_range.unwrap_or((0.0, 0.0));
            let (db_min, db_max) = o.db_range.unwrap_or((0.0, 0.0));
            println!(
                "[{}/{}] {}: sr={} shape=({}, {}) mag=[{:.4}, {:.4}] dB=[{:.2}, {:.2}] time={:.2}ms",
                idx + 1,
                outs.len(),
                o.file,
                o.sample_rate.unwrap_or(0),
                bins,
                frames,
                mag_min,
                mag_max,
                db_min,
                db_max,
                o.processing_time_ms.unwrap_or(0.0)
            );
        }
    }

    let ok = outs.iter().filter(|o| o.error.is_none()).count();
    eprintln!(
        "Done: ok={}/{} wall={:.0}ms",
        ok,
        outs.len(),
        t0.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}
