//! Counting set bits and aligned bit patterns within a single word.
//!
//! The functions use broadword (SWAR) arithmetic: partial counts for 2-bit, 4-bit, and 8-bit fields are computed in parallel within the word, and the byte counts are summed with a single multiplication.

//-----------------------------------------------------------------------------

// Bit masks for summing adjacent fields of 1, 2, and 4 bits.
pub(crate) const EVEN_BITS: u64 = 0x5555_5555_5555_5555;
pub(crate) const EVEN_PAIRS: u64 = 0x3333_3333_3333_3333;
pub(crate) const EVEN_NIBBLES: u64 = 0x0F0F_0F0F_0F0F_0F0F;

// The lowest bit of every byte.
pub(crate) const BYTE_LOW_BITS: u64 = 0x0101_0101_0101_0101;

// The highest bit of every byte.
pub(crate) const BYTE_HIGH_BITS: u64 = 0x8080_8080_8080_8080;

//-----------------------------------------------------------------------------

/// Returns the number of set bits in each byte of the word, stored in the corresponding byte.
#[inline]
pub(crate) fn byte_counts(word: u64) -> u64 {
    let x = word - ((word >> 1) & EVEN_BITS);
    let x = (x & EVEN_PAIRS) + ((x >> 2) & EVEN_PAIRS);
    (x + (x >> 4)) & EVEN_NIBBLES
}

// Sums the 2-bit fields of a word where every field is at most 1.
#[inline]
fn sum_pair_fields(word: u64) -> usize {
    let x = (word & EVEN_PAIRS) + ((word >> 2) & EVEN_PAIRS);
    let x = (x + (x >> 4)) & EVEN_NIBBLES;
    (x.wrapping_mul(BYTE_LOW_BITS) >> 56) as usize
}

//-----------------------------------------------------------------------------

/// Returns the number of set bits in the word.
///
/// # Examples
///
/// ```
/// use simple_bits::count;
///
/// assert_eq!(count::popcount(0), 0);
/// assert_eq!(count::popcount(0b1011_0001), 4);
/// assert_eq!(count::popcount(!0u64), 64);
/// ```
#[inline]
pub fn popcount(word: u64) -> usize {
    (byte_counts(word).wrapping_mul(BYTE_LOW_BITS) >> 56) as usize
}

/// Returns the number of aligned 2-bit symbols equal to `11`.
///
/// The word is treated as 32 independent symbols consisting of bits `(0, 1)`, `(2, 3)`, ..., `(62, 63)`.
/// Runs of set bits crossing symbol boundaries are not counted as a whole; see [`crate::pairs`] for overlapping pairs.
///
/// # Examples
///
/// ```
/// use simple_bits::count;
///
/// assert_eq!(count::count_11_pairs(0b0011), 1);
/// assert_eq!(count::count_11_pairs(0b0110), 0);
/// assert_eq!(count::count_11_pairs(0b1111), 2);
/// ```
#[inline]
pub fn count_11_pairs(word: u64) -> usize {
    sum_pair_fields(word & (word >> 1) & EVEN_BITS)
}

/// Sums 2-bit fields that are known to be `0` or `1`.
///
/// Used by the pair counters that build such masks themselves.
#[inline]
pub(crate) fn count_even_bits(word: u64) -> usize {
    debug_assert_eq!(word & !EVEN_BITS, 0, "Bits set at odd offsets");
    sum_pair_fields(word)
}

//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::WORD_BITS;
    use crate::internal;

    #[test]
    fn popcount_boundaries() {
        assert_eq!(popcount(0), 0, "popcount(0) failed");
        assert_eq!(popcount(!0u64), 64, "popcount(!0) failed");
        for i in 0..WORD_BITS {
            assert_eq!(popcount(1u64 << i), 1, "popcount(1 << {}) failed", i);
            assert_eq!(popcount(!(1u64 << i)), 63, "popcount(!(1 << {})) failed", i);
        }
    }

    #[test]
    fn popcount_matches_scan() {
        for word in internal::test_words(1000) {
            assert_eq!(popcount(word), internal::count_ones_by_scan(word), "popcount({:X}) failed", word);
        }
    }

    #[test]
    fn byte_counts_per_byte() {
        for word in internal::test_words(100) {
            let counts = byte_counts(word);
            for byte in 0..8 {
                let expected = internal::count_ones_by_scan((word >> (8 * byte)) & 0xFF) as u64;
                assert_eq!((counts >> (8 * byte)) & 0xFF, expected, "Invalid count for byte {} of {:X}", byte, word);
            }
        }
    }

    #[test]
    fn aligned_11_symbols() {
        assert_eq!(count_11_pairs(0), 0, "count_11_pairs(0) failed");
        assert_eq!(count_11_pairs(!0u64), 32, "count_11_pairs(!0) failed");
        assert_eq!(count_11_pairs(0x5555_5555_5555_5555), 0, "count_11_pairs(0x5555...) failed");
        assert_eq!(count_11_pairs(0x6666_6666_6666_6666), 0, "count_11_pairs(0x6666...) failed");
        assert_eq!(count_11_pairs(0xC000_0000_0000_0003), 2, "count_11_pairs(0xC000...0003) failed");
        assert_eq!(count_11_pairs(0b0111), 1, "count_11_pairs(0b0111) failed");
    }

    #[test]
    fn aligned_11_matches_scan() {
        for word in internal::test_words(1000) {
            let expected = (0..32u64).filter(|symbol| (word >> (2 * *symbol)) & 0b11 == 0b11).count();
            assert_eq!(count_11_pairs(word), expected, "count_11_pairs({:X}) failed", word);
        }
    }
}

//-----------------------------------------------------------------------------
