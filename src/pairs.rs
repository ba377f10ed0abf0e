//! Overlapping patterns of adjacent bits in a stream of words.
//!
//! A bit array is treated as one continuous bit sequence by threading a carry between consecutive words.
//! The carry is the value needed to classify the pair formed by bit 63 of the previous word and bit 0 of the current word.
//! It is always `0` or `1`, and it should be `0` for the first word of the stream.
//!
//! The `extract_*` functions return masks marking the second bit of each matching pair, and the `count_*` functions count the matches.
//!
//! # Examples
//!
//! ```
//! use simple_bits::pairs;
//!
//! // Bits 60..=67 are set.
//! let words: Vec<u64> = vec![0xF000_0000_0000_0000, 0x0F];
//! let mut carry = 0;
//! let (mut rising, mut falling) = (0, 0);
//! for word in words.iter() {
//!     let (count, _) = pairs::count_01_pairs(*word, carry);
//!     rising += count;
//!     let (count, next) = pairs::count_10_pairs(*word, carry);
//!     falling += count;
//!     carry = next;
//! }
//! assert_eq!(rising, 1);
//! assert_eq!(falling, 1);
//! ```

use crate::count::{self, EVEN_BITS};

#[cfg(test)]
mod tests;

//-----------------------------------------------------------------------------

// Bits that differ from their lower neighbor.
#[inline]
fn changes(word: u64, carry: u64) -> u64 {
    debug_assert!(carry <= 1, "Invalid carry: {}", carry);
    word ^ ((word << 1) | carry)
}

/// Returns a mask of the rising edges in the word.
///
/// Bit `i` of the result is set if bit `i` of `word` is set and bit `i - 1` is unset.
/// For bit 0, the lower neighbor is `carry`.
///
/// # Examples
///
/// ```
/// use simple_bits::pairs;
///
/// assert_eq!(pairs::extract_01_pairs(0b0110_0111, 0), 0b0010_0001);
/// assert_eq!(pairs::extract_01_pairs(0b0110_0111, 1), 0b0010_0000);
/// ```
#[inline]
pub fn extract_01_pairs(word: u64, carry: u64) -> u64 {
    changes(word, carry) & word
}

/// Returns a mask of the falling edges in the word.
///
/// Bit `i` of the result is set if bit `i` of `word` is unset and bit `i - 1` is set.
/// For bit 0, the lower neighbor is `carry`.
///
/// # Examples
///
/// ```
/// use simple_bits::pairs;
///
/// assert_eq!(pairs::extract_10_pairs(0b0110_0111, 0), 0b1000_1000);
/// assert_eq!(pairs::extract_10_pairs(0b0110_0110, 1), 0b1000_1001);
/// ```
#[inline]
pub fn extract_10_pairs(word: u64, carry: u64) -> u64 {
    changes(word, carry) & !word
}

/// Counts the rising edges in the word.
///
/// Returns the number of edges and the carry for the next word.
///
/// # Examples
///
/// ```
/// use simple_bits::pairs;
///
/// assert_eq!(pairs::count_01_pairs(0b0110_0111, 0), (2, 0));
/// assert_eq!(pairs::count_01_pairs(0x8000_0000_0000_0001, 1), (1, 1));
/// ```
#[inline]
pub fn count_01_pairs(word: u64, carry: u64) -> (usize, u64) {
    (count::popcount(extract_01_pairs(word, carry)), word >> 63)
}

/// Counts the falling edges in the word.
///
/// Returns the number of edges and the carry for the next word.
///
/// # Examples
///
/// ```
/// use simple_bits::pairs;
///
/// assert_eq!(pairs::count_10_pairs(0b0110_0111, 0), (2, 0));
/// assert_eq!(pairs::count_10_pairs(0x8000_0000_0000_0000, 1), (1, 1));
/// ```
#[inline]
pub fn count_10_pairs(word: u64, carry: u64) -> (usize, u64) {
    (count::popcount(extract_10_pairs(word, carry)), word >> 63)
}

//-----------------------------------------------------------------------------

/// Counts the overlapping `11` pairs in the word.
///
/// A pair is counted at every bit `i` that is set together with its lower neighbor.
/// The lower neighbor of bit 0 is `carry`, so a run of set bits crossing the word boundary contributes exactly one pair at the boundary.
/// Returns the number of pairs and the carry for the next word.
///
/// # Examples
///
/// ```
/// use simple_bits::pairs;
///
/// assert_eq!(pairs::count_11_pairs_with_carry(0b0111, 0), (2, 0));
/// assert_eq!(pairs::count_11_pairs_with_carry(0b0111, 1), (3, 0));
/// assert_eq!(pairs::count_11_pairs_with_carry(!0u64, 1), (64, 1));
/// ```
#[inline]
pub fn count_11_pairs_with_carry(word: u64, carry: u64) -> (usize, u64) {
    debug_assert!(carry <= 1, "Invalid carry: {}", carry);
    (count::popcount(word & ((word << 1) | carry)), word >> 63)
}

/// Counts the non-overlapping `11` pairs in the word.
///
/// The bit sequence is scanned from left to right, and each pair of consecutive set bits is matched greedily, so a run of `n` set bits contains `n / 2` pairs.
/// Here `carry` is `1` if the previous word ended with a set bit that is still waiting for a partner.
/// The outgoing carry is derived from the pairing and is not simply bit 63 of the word.
/// Returns the number of pairs and the carry for the next word.
///
/// # Examples
///
/// ```
/// use simple_bits::pairs;
///
/// assert_eq!(pairs::count_distinct_11_pairs(0b0111, 0), (1, 0));
/// assert_eq!(pairs::count_distinct_11_pairs(0b0111, 1), (2, 0));
///
/// // The last set bit of the first word pairs with the first set bit of the second word.
/// let (first, carry) = pairs::count_distinct_11_pairs(0xE000_0000_0000_0000, 0);
/// assert_eq!((first, carry), (1, 1));
/// assert_eq!(pairs::count_distinct_11_pairs(0b11, carry), (1, 0));
/// ```
pub fn count_distinct_11_pairs(word: u64, carry: u64) -> (usize, u64) {
    debug_assert!(carry <= 1, "Invalid carry: {}", carry);

    // Aligned symbols `11`, marked at the lower bit and covering both bits.
    let full_low = word & (word >> 1) & EVEN_BITS;
    let full = full_low | (full_low << 1);

    // Set bits in symbols `01` and `10`.
    let single = full ^ word;

    // An unpaired bit at the high end of a symbol (or the carry) ripples through the following full symbols.
    // If the ripple reaches a symbol with only the low bit set, the two bits form a pair.
    let start = ((single << 1) & EVEN_BITS) | carry;
    let (ripple, overflow) = full.overflowing_add(start);
    let joined = ripple & single & EVEN_BITS;

    let next = ((single >> 63) != 0 || overflow) as u64;
    (count::count_even_bits(full_low | joined), next)
}

//-----------------------------------------------------------------------------
