//! Amplitude-weighting table generation.
//!
//! The runtime weights oscillator amplitudes by perceived loudness: quiet
//! regions of the hearing range get a boost so that sweeping a voice across
//! frequencies sounds even. The weighting factors are read from a
//! log-sampled lookup table baked here from a measured equal-loudness curve.

use crate::curve::{ControlPoint, ResponseCurve};
use crate::error::Error;
use crate::mapping::LogIndexMap;

/// Frequencies (Hz) of the measured equal-loudness control points.
const EQUAL_LOUDNESS_HZ: [f64; 34] = [
    10.0, 13.0, 16.0, 20.0, 25.0, 32.0, 40.0, 50.0, 63.0, 80.0, 100.0, 125.0, 160.0, 200.0, 250.0,
    315.0, 400.0, 500.0, 630.0, 800.0, 1000.0, 1250.0, 1600.0, 2000.0, 2500.0, 3150.0, 4000.0,
    5000.0, 6300.0, 8000.0, 10000.0, 12500.0, 16000.0, 20000.0,
];

/// Levels (dB) needed at each control frequency for equal perceived loudness.
const EQUAL_LOUDNESS_DB: [f64; 34] = [
    38.2, 33.2, 28.5, 24.2, 20.4, 17.1, 14.2, 11.6, 9.3, 7.4, 5.6, 4.2, 3.0, 2.0, 1.3, 0.8, 0.5,
    0.3, 0.1, 0.0, 0.0, 0.0, 0.0, -0.1, -0.2, -0.4, -0.7, -1.2, -1.9, -2.9, -4.3, -6.1, -8.4,
    -11.1,
];

/// Builds the reference equal-loudness curve the shipped table is baked from.
///
/// The runtime is calibrated against exactly this data; regenerating the
/// table from a different curve re-voices the instrument.
pub fn equal_loudness() -> Result<ResponseCurve, Error> {
    let points = EQUAL_LOUDNESS_HZ
        .iter()
        .zip(EQUAL_LOUDNESS_DB)
        .map(|(&frequency, level_db)| ControlPoint::new(frequency, level_db))
        .collect();
    ResponseCurve::new(points)
}

/// A finished amplitude-weighting lookup table.
///
/// Immutable once built. The runtime recovers a cell from a frequency with
/// `index = multiple * log10(frequency - start)`, so the two scalars stored
/// here must be emitted alongside the samples bit for bit.
///
/// # Examples
///
/// ```
/// use wavebake::{LogIndexMap, WeightingTable, weighting};
///
/// let curve = weighting::equal_loudness().unwrap();
/// let map = LogIndexMap::new(9.0, 236.0, 1016).unwrap();
/// let table = WeightingTable::build(&curve, &map);
///
/// assert_eq!(table.len(), 1016);
/// assert_eq!(table.samples()[0], 1.0); // full weight at 10 Hz
/// ```
#[derive(Debug, Clone)]
pub struct WeightingTable {
    start: f64,
    multiple: f64,
    samples: Vec<f32>,
}

impl WeightingTable {
    /// Samples `curve` at every position of `map`, cell 0 first.
    pub fn build(curve: &ResponseCurve, map: &LogIndexMap) -> Self {
        let samples = map
            .positions()
            .map(|position| curve.amplitude_at(position) as f32)
            .collect();

        Self {
            start: map.start(),
            multiple: map.multiple(),
            samples,
        }
    }

    /// Offset half of the inverse-lookup formula.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Scale half of the inverse-lookup formula.
    pub fn multiple(&self) -> f64 {
        self.multiple
    }

    /// The weighting factors, cell 0 first.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the table holds no cells.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_table() -> WeightingTable {
        let curve = equal_loudness().unwrap();
        let map = LogIndexMap::new(9.0, 236.0, 1016).unwrap();
        WeightingTable::build(&curve, &map)
    }

    #[test]
    fn test_reference_curve_shape() {
        let curve = equal_loudness().unwrap();
        assert_eq!(curve.len(), 34);
        assert_eq!(curve.min_frequency(), 10.0);
        assert_eq!(curve.max_frequency(), 20_000.0);
        // The loudest control point normalizes to 1.0.
        assert_eq!(curve.amplitude_at(10.0), 1.0);
    }

    #[test]
    fn test_first_cell_is_curve_at_10_hz() {
        let table = reference_table();
        assert_eq!(table.samples()[0], 1.0);
    }

    #[test]
    fn test_build_matches_curve_at_every_position() {
        let curve = equal_loudness().unwrap();
        let map = LogIndexMap::new(9.0, 236.0, 64).unwrap();
        let table = WeightingTable::build(&curve, &map);
        for (i, sample) in table.samples().iter().enumerate() {
            assert_eq!(*sample, curve.amplitude_at(map.position(i)) as f32);
        }
    }

    #[test]
    fn test_tail_decreases_where_curve_does() {
        // Past 1.6 kHz the curve's dB levels fall monotonically, so the
        // table must too.
        let table = reference_table();
        let map = LogIndexMap::new(9.0, 236.0, 1016).unwrap();
        let knee = (0..map.len())
            .find(|&i| map.position(i) > 1600.0)
            .unwrap();
        for pair in table.samples()[knee..].windows(2) {
            assert!(pair[1] <= pair[0]);
        }
    }

    #[test]
    fn test_scalars_follow_the_mapping() {
        let table = reference_table();
        assert_eq!(table.start(), 9.0);
        assert_eq!(table.multiple(), 236.0);
        assert_eq!(table.len(), 1016);
    }
}
