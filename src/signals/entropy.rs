//! Entropy signal - upper-bound entropy estimate in bits.

/// Estimated entropy of a candidate drawn uniformly from the implied
/// alphabet: `length * log2(charset_size)`.
///
/// This assumes every position is independent and uniform over the
/// full alphabet, so it is an upper bound, not a measurement of the
/// actual string. An alphabet of 1 is substituted when no class is
/// present so the empty candidate reports 0 bits.
pub fn entropy_bits(length: usize, charset_size: usize) -> f64 {
    length as f64 * (charset_size.max(1) as f64).log2()
}
