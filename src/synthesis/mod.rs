//! Additive wavetable synthesis and post-processing.
//!
//! [`Wavetable::render`] produces one raw cycle of a sine-harmonic waveform;
//! [`center`] and [`normalize`] prepare the buffer for quantization. The
//! stages are deliberately separate so each can be exercised in memory
//! without touching the filesystem.

mod harmonics;
mod processing;

pub use harmonics::{HarmonicFamily, MULTIPLIED_COUNTS, SUMMED_COUNTS, Wavetable};
pub use processing::{center, normalize};
