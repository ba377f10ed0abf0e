//! Positional queries within a single word: lowest and highest set bits, and select.
//!
//! All queries use lookup tables from [`crate::tables`] instead of hardware instructions, so the results do not depend on the target features.

use crate::bits::WORD_BITS;
use crate::count::{self, BYTE_HIGH_BITS, BYTE_LOW_BITS};
use crate::tables::{DE_BRUIJN_64, DE_BRUIJN_TO_INDEX, HIGHEST_BIT_IN_BYTE, SELECT_IN_BYTE, SELECT_OVERFLOW};

//-----------------------------------------------------------------------------

/// Returns the number of trailing zeros in the word, or 64 if the word is `0`.
///
/// This is also the offset of the lowest set bit.
///
/// # Examples
///
/// ```
/// use simple_bits::select;
///
/// assert_eq!(select::trailing_zeros(0b1000), 3);
/// assert_eq!(select::trailing_zeros(0x8000_0000_0000_0000), 63);
/// assert_eq!(select::trailing_zeros(0), 64);
/// ```
#[inline]
pub fn trailing_zeros(word: u64) -> usize {
    if word & 1 != 0 {
        return 0;
    }
    if word == 0 {
        return WORD_BITS;
    }
    let lowest = word & word.wrapping_neg();
    DE_BRUIJN_TO_INDEX[(lowest.wrapping_mul(DE_BRUIJN_64) >> 58) as usize] as usize
}

/// Returns the offset of the highest set bit in the word.
///
/// # Examples
///
/// ```
/// use simple_bits::select;
///
/// assert_eq!(select::leading_one(1), 0);
/// assert_eq!(select::leading_one(0x1FFF), 12);
/// assert_eq!(select::leading_one(!0u64), 63);
/// ```
///
/// # Panics
///
/// Panics if `word == 0`.
#[inline]
pub fn leading_one(word: u64) -> usize {
    assert!(word != 0, "leading_one: the word has no set bits");
    let mut x = word;
    let mut shift = 0;
    if x & 0xFFFF_FFFF_0000_0000 != 0 {
        x >>= 32;
        shift += 32;
    }
    if x & 0xFFFF_0000 != 0 {
        x >>= 16;
        shift += 16;
    }
    if x & 0xFF00 != 0 {
        x >>= 8;
        shift += 8;
    }
    shift + HIGHEST_BIT_IN_BYTE[x as usize] as usize
}

/// Returns the offset of the set bit of rank `k` in the word.
///
/// Ranks are 1-based: `k == 1` selects the lowest set bit.
///
/// # Examples
///
/// ```
/// use simple_bits::select;
///
/// assert_eq!(select::select_nth_one(0b1101, 1), 0);
/// assert_eq!(select::select_nth_one(0b1101, 2), 2);
/// assert_eq!(select::select_nth_one(0b1101, 3), 3);
/// assert_eq!(select::select_nth_one(0x8000_0010_0000_0001, 3), 63);
/// ```
///
/// # Panics
///
/// Panics if `k == 0` or `k > count::popcount(word)`.
pub fn select_nth_one(word: u64, k: usize) -> usize {
    assert!(k > 0, "select_nth_one: ranks start from 1");

    // Byte `i` contains the number of set bits in bytes `0..=i`.
    let counts = count::byte_counts(word).wrapping_mul(BYTE_LOW_BITS);

    // The high bit of byte `i` is set if `counts[i] >= k`.
    let found = (counts + SELECT_OVERFLOW[k]) & BYTE_HIGH_BITS;
    assert!(found != 0, "select_nth_one: rank {} is larger than the number of set bits in {:X}", k, word);

    let shift = (trailing_zeros(found) >> 3) << 3;
    let before = ((counts << 8) >> shift) & 0xFF;
    let byte = (word >> shift) & 0xFF;
    let index = ((byte << 3) as usize | (k - before as usize - 1)) & 0x7FF;
    shift + SELECT_IN_BYTE[index] as usize
}

//-----------------------------------------------------------------------------


//-----------------------------------------------------------------------------
