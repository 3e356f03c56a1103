//! Exponential mapping from table indices to sampling positions.
//!
//! Lookup tables for frequency-shaped data are sampled on a log scale so that
//! consecutive cells cover exponentially growing frequency spans, giving the
//! table uniform perceptual resolution. The runtime inverts the mapping with
//! `index = multiple * log10(frequency - start)`, which only works when both
//! sides agree on `start` and `multiple` bit for bit.

use crate::error::Error;

/// Maps a table index to its sampling position: `10^(i / multiple) + start`.
///
/// The mapping is validated at construction: `multiple` must be a positive
/// finite number, and the first position must land exactly on `start + 1`.
/// That anchors cell 0 to a known reference frequency, which the runtime's
/// inverse-lookup formula depends on.
///
/// # Examples
///
/// ```
/// use wavebake::LogIndexMap;
///
/// let map = LogIndexMap::new(9.0, 236.0, 1016).unwrap();
/// assert_eq!(map.position(0), 10.0);
/// assert!(map.position(1015) > 20_000.0);
/// ```
#[derive(Debug, Clone)]
pub struct LogIndexMap {
    start: f64,
    multiple: f64,
    len: usize,
}

impl LogIndexMap {
    /// Creates a validated index mapping for a table of `len` cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMultiple`] unless `multiple` is finite and
    /// positive, and [`Error::OriginMismatch`] when `position(0)` does not
    /// equal `start + 1` exactly.
    pub fn new(start: f64, multiple: f64, len: usize) -> Result<Self, Error> {
        if !multiple.is_finite() || multiple <= 0.0 {
            return Err(Error::InvalidMultiple { multiple });
        }

        let map = Self {
            start,
            multiple,
            len,
        };
        let origin = map.position(0);
        if origin != start + 1.0 {
            return Err(Error::OriginMismatch { start, origin });
        }

        Ok(map)
    }

    /// The sampling position of table cell `index`.
    pub fn position(&self, index: usize) -> f64 {
        10f64.powf(index as f64 / self.multiple) + self.start
    }

    /// Iterates over all positions, cell 0 first.
    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(|i| self.position(i))
    }

    /// Table length this mapping was built for.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the mapping covers no cells.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset added to every position.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Exponent divisor controlling how fast positions grow.
    pub fn multiple(&self) -> f64 {
        self.multiple
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_position_is_start_plus_one() {
        let map = LogIndexMap::new(9.0, 236.0, 1016).unwrap();
        assert_eq!(map.position(0), 10.0);
    }

    #[test]
    fn test_positions_strictly_increase() {
        let map = LogIndexMap::new(9.0, 236.0, 1016).unwrap();
        let positions: Vec<f64> = map.positions().collect();
        assert_eq!(positions.len(), 1016);
        for pair in positions.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_covers_audible_range() {
        // The reference configuration spans 10 Hz up past 20 kHz.
        let map = LogIndexMap::new(9.0, 236.0, 1016).unwrap();
        assert!(map.position(1015) > 20_000.0);
        assert!(map.position(1014) < map.position(1015));
    }

    #[test]
    fn test_rejects_zero_multiple() {
        assert!(matches!(
            LogIndexMap::new(9.0, 0.0, 16),
            Err(Error::InvalidMultiple { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_and_non_finite_multiple() {
        assert!(matches!(
            LogIndexMap::new(9.0, -4.0, 16),
            Err(Error::InvalidMultiple { .. })
        ));
        assert!(matches!(
            LogIndexMap::new(9.0, f64::NAN, 16),
            Err(Error::InvalidMultiple { .. })
        ));
        assert!(matches!(
            LogIndexMap::new(9.0, f64::INFINITY, 16),
            Err(Error::InvalidMultiple { .. })
        ));
    }

    #[test]
    fn test_rejects_unanchored_start() {
        // A NaN start can never satisfy the origin requirement.
        assert!(matches!(
            LogIndexMap::new(f64::NAN, 236.0, 16),
            Err(Error::OriginMismatch { .. })
        ));
    }

    #[test]
    fn test_accessors_round_trip_configuration() {
        let map = LogIndexMap::new(9.0, 236.0, 1016).unwrap();
        assert_eq!(map.start(), 9.0);
        assert_eq!(map.multiple(), 236.0);
        assert_eq!(map.len(), 1016);
        assert!(!map.is_empty());
    }
}
