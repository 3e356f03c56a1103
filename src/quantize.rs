//! Fixed-point quantization of normalized samples.

/// Maps a normalized float sample to a signed 16-bit PCM value.
///
/// Samples are expected in `[-0.9, 0.9]` after normalization, so the result
/// stays within +/-29490 and never reaches the clipping edges of the i16
/// range.
///
/// # Examples
///
/// ```
/// use wavebake::quantize;
///
/// assert_eq!(quantize(0.9), 29490);
/// assert_eq!(quantize(-0.9), -29490);
/// assert_eq!(quantize(0.0), 0);
/// ```
pub fn quantize(sample: f32) -> i16 {
    (sample * 32767.0).round() as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headroom_extremes() {
        assert_eq!(quantize(0.9), 29490);
        assert_eq!(quantize(-0.9), -29490);
    }

    #[test]
    fn test_zero_maps_to_zero() {
        assert_eq!(quantize(0.0), 0);
    }

    #[test]
    fn test_rounds_to_nearest() {
        // 0.5 * 32767 = 16383.5, rounded away from zero.
        assert_eq!(quantize(0.5), 16384);
        assert_eq!(quantize(-0.5), -16384);
    }

    #[test]
    fn test_full_scale_does_not_overflow() {
        assert_eq!(quantize(1.0), 32767);
        assert_eq!(quantize(-1.0), -32767);
    }
}
