//! Audio I/O modules
//!
//! Audio decoding with Symphonia and the mono waveform container.

pub mod decoder;
pub mod waveform;
