//! Batch generation of the wavetable banks.
//!
//! Every (family, harmonic count) pair is an independent pure computation
//! from fixed inputs to one WAV artifact, so tables can be baked in any
//! order - or in parallel by callers that want to - as long as the output
//! file names stay distinct. This module runs them in a simple sequence.

use std::fs;
use std::path::PathBuf;

use crate::emit::pcm;
use crate::error::Error;
use crate::synthesis::{HarmonicFamily, Wavetable, center, normalize};

/// Configuration for one bank run.
///
/// All tunables are passed in explicitly; the module keeps no global state.
#[derive(Debug, Clone)]
pub struct BankConfig {
    /// Samples per wavetable cycle.
    pub table_size: usize,
    /// Peak amplitude after normalization, kept below 1.0 so quantization
    /// never clips.
    pub headroom: f32,
    /// Directory the WAV files are written into; created if missing.
    pub output_dir: PathBuf,
}

/// Renders and post-processes a single wavetable, ready for quantization.
///
/// Centering runs for both families; the summed family is already mean-free
/// over a full period, so it passes through unchanged.
///
/// # Errors
///
/// Returns [`Error::DegenerateBuffer`] if the rendered waveform has no peak
/// to normalize against.
pub fn bake(
    family: HarmonicFamily,
    harmonics: u32,
    table_size: usize,
    headroom: f32,
) -> Result<Wavetable, Error> {
    let mut table = Wavetable::render(family, harmonics, table_size);
    center(&mut table.samples);
    normalize(&mut table.samples, headroom)?;
    Ok(table)
}

/// Bakes and writes every table of both families.
///
/// Returns the paths written, in generation order. Generation stops at the
/// first failure; tables already written stay on disk, the failing one
/// leaves no artifact.
pub fn generate(config: &BankConfig) -> Result<Vec<PathBuf>, Error> {
    fs::create_dir_all(&config.output_dir).map_err(|source| Error::Io {
        path: config.output_dir.clone(),
        source,
    })?;

    let mut written = Vec::new();
    for family in [HarmonicFamily::Multiplied, HarmonicFamily::Summed] {
        for &harmonics in family.harmonic_counts() {
            let table = bake(family, harmonics, config.table_size, config.headroom)?;
            let path = config.output_dir.join(table.file_name());
            pcm::write_wav(&table.samples, &path)?;
            written.push(path);
        }
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bake_normalizes_to_headroom() {
        for family in [HarmonicFamily::Multiplied, HarmonicFamily::Summed] {
            for &harmonics in family.harmonic_counts() {
                let table = bake(family, harmonics, 600, 0.9).unwrap();
                let peak = table.samples.iter().fold(0.0f32, |p, x| p.max(x.abs()));
                assert!((peak - 0.9).abs() < 1e-5);
                assert!(table.samples.iter().all(|x| x.abs() <= 0.9 + 1e-5));
            }
        }
    }

    #[test]
    fn test_bake_centers_multiplied_tables() {
        let table = bake(HarmonicFamily::Multiplied, 1, 600, 0.9).unwrap();
        let mean: f32 = table.samples.iter().sum::<f32>() / table.samples.len() as f32;
        assert!(mean.abs() < 1e-4);

        // Higher counts drift further before centering; they still come out flat.
        let table = bake(HarmonicFamily::Multiplied, 6, 600, 0.9).unwrap();
        let mean: f32 = table.samples.iter().sum::<f32>() / table.samples.len() as f32;
        assert!(mean.abs() < 1e-4);
    }

    #[test]
    fn test_bake_produces_distinct_file_names() {
        let mut names = std::collections::HashSet::new();
        for family in [HarmonicFamily::Multiplied, HarmonicFamily::Summed] {
            for &harmonics in family.harmonic_counts() {
                let table = bake(family, harmonics, 64, 0.9).unwrap();
                assert!(names.insert(table.file_name()));
            }
        }
        assert_eq!(names.len(), 22);
    }
}
