//! Sine-harmonic waveform families.
//!
//! Both families build one cycle of a periodic waveform from the first `k`
//! sine harmonics over a fixed sample count `N`; harmonic `j` at index `i`
//! contributes `sin(2*PI * i/N * j)`. The multiplied family takes the
//! product of the harmonics and gets buzzier with every factor; the summed
//! family takes their average and stays close to a classic additive stack.

use std::f32::consts::PI;

/// Harmonic counts rendered for the multiplied family.
pub const MULTIPLIED_COUNTS: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// Harmonic counts rendered for the summed family.
///
/// The set is fixed configuration data, chosen by ear, not derived from any
/// formula.
pub const SUMMED_COUNTS: [u32; 12] = [1, 2, 3, 5, 6, 7, 9, 11, 13, 17, 23, 31];

/// How harmonics are combined into a waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarmonicFamily {
    /// The product of the first `k` harmonics.
    ///
    /// Products of sines pick up a DC offset as `k` grows, so these tables
    /// must be re-centered before normalization.
    Multiplied,
    /// The average of the first `k` harmonics.
    Summed,
}

impl HarmonicFamily {
    /// The fixed harmonic counts rendered for this family.
    pub fn harmonic_counts(&self) -> &'static [u32] {
        match self {
            HarmonicFamily::Multiplied => &MULTIPLIED_COUNTS,
            HarmonicFamily::Summed => &SUMMED_COUNTS,
        }
    }

    /// File-name stem of emitted tables in this family.
    pub fn file_stem(&self) -> &'static str {
        match self {
            HarmonicFamily::Multiplied => "sin_mul",
            HarmonicFamily::Summed => "sin_seq",
        }
    }

    fn sample(&self, phase: f32, harmonics: u32) -> f32 {
        match self {
            HarmonicFamily::Multiplied => (1..=harmonics)
                .map(|j| (2.0 * PI * phase * j as f32).sin())
                .product(),
            HarmonicFamily::Summed => {
                (1..=harmonics)
                    .map(|j| (2.0 * PI * phase * j as f32).sin())
                    .sum::<f32>()
                    / harmonics as f32
            }
        }
    }
}

/// One cycle of a rendered harmonic waveform.
///
/// [`Wavetable::render`] produces the raw, unprocessed waveform; centering,
/// normalization, and quantization are applied by the bank pipeline before
/// the table is written out.
///
/// # Examples
///
/// ```
/// use wavebake::{HarmonicFamily, Wavetable};
///
/// let table = Wavetable::render(HarmonicFamily::Summed, 1, 600);
/// assert_eq!(table.len(), 600);
/// assert_eq!(table.file_name(), "sin_seq_1.wav");
/// ```
#[derive(Debug, Clone)]
pub struct Wavetable {
    /// Family the waveform was rendered from.
    pub family: HarmonicFamily,
    /// Number of harmonics combined.
    pub harmonics: u32,
    /// One full cycle of samples.
    pub samples: Vec<f32>,
}

impl Wavetable {
    /// Renders one raw cycle of `size` samples.
    ///
    /// # Panics
    ///
    /// Panics if `harmonics` is zero or `size` is zero.
    pub fn render(family: HarmonicFamily, harmonics: u32, size: usize) -> Self {
        assert!(harmonics >= 1, "waveform needs at least one harmonic");
        assert!(size > 0, "table size must be greater than zero");

        let samples = (0..size)
            .map(|i| family.sample(i as f32 / size as f32, harmonics))
            .collect();

        Self {
            family,
            harmonics,
            samples,
        }
    }

    /// Deterministic artifact name, e.g. `sin_mul_3.wav`.
    pub fn file_name(&self) -> String {
        format!("{}_{}.wav", self.family.file_stem(), self.harmonics)
    }

    /// Number of samples in one cycle.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the table holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
