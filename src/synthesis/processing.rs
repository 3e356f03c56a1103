//! Buffer post-processing: mean-centering and peak normalization.

use crate::error::Error;

/// Subtracts the buffer's arithmetic mean from every sample.
///
/// Waveforms built from products of sines drift away from zero as harmonics
/// are multiplied in; summed waveforms already average to ~0 over a full
/// period, so for them this is a no-op. It is idempotent and safe to apply
/// uniformly.
pub fn center(samples: &mut [f32]) {
    if samples.is_empty() {
        return;
    }
    let mean = samples.iter().sum::<f32>() / samples.len() as f32;
    for sample in samples.iter_mut() {
        *sample -= mean;
    }
}

/// Scales the buffer so its absolute peak lands exactly on `headroom`.
///
/// `headroom` is kept below full scale (0.9 in the shipped banks) so that
/// quantization never clips.
///
/// # Errors
///
/// Returns [`Error::DegenerateBuffer`] when the buffer's peak is zero
/// (all-zero or empty input); scaling such a buffer would divide by zero and
/// poison the table with NaN.
pub fn normalize(samples: &mut [f32], headroom: f32) -> Result<(), Error> {
    let peak = samples.iter().fold(0.0f32, |peak, x| peak.max(x.abs()));
    if peak == 0.0 {
        return Err(Error::DegenerateBuffer);
    }

    let ratio = headroom / peak;
    for sample in samples.iter_mut() {
        *sample *= ratio;
    }
    Ok(())
}
