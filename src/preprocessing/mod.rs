//! Audio preprocessing modules
//!
//! Utilities for preparing decoded audio for spectral analysis:
//! - Channel mixing (multi-channel to mono)

pub mod channel_mixer;
