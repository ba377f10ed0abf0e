//! Word-level helpers shared by the other modules.
//!
//! Bit arrays are stored in integer arrays of type `u64` using the least significant bits first.
//! A bit offset `i` refers to bit `i % 64` of word `i / 64`.

use crate::tables::{HIGH_SET, LOW_SET};

//-----------------------------------------------------------------------------

/// Number of bits in `u64`.
pub const WORD_BITS: usize = 64;

// Bit shift for transforming a bit offset into an array index.
const INDEX_SHIFT: usize = 6;

// Bit mask for transforming a bit offset into an offset in `u64`.
const OFFSET_MASK: usize = 0b111111;

//-----------------------------------------------------------------------------

/// Returns an integer with the lowest `n` bits set.
///
/// # Examples
///
/// ```
/// use simple_bits::bits;
///
/// assert_eq!(bits::low_set(13), 0x1FFF);
/// ```
///
/// # Panics
///
/// Panics if `n > 64`.
#[inline]
pub fn low_set(n: usize) -> u64 {
    LOW_SET[n]
}

/// Unsafe version of [`low_set`].
///
/// Behavior is undefined if `n > 64`.
#[inline]
pub unsafe fn low_set_unchecked(n: usize) -> u64 {
    *LOW_SET.get_unchecked(n)
}

/// Returns an integer with the highest `n` bits set.
///
/// # Examples
///
/// ```
/// use simple_bits::bits;
///
/// assert_eq!(bits::high_set(13), 0xFFF8_0000_0000_0000);
/// ```
///
/// # Panics
///
/// Panics if `n > 64`.
#[inline]
pub fn high_set(n: usize) -> u64 {
    HIGH_SET[n]
}

/// Unsafe version of [`high_set`].
///
/// Behavior is undefined if `n > 64`.
#[inline]
pub unsafe fn high_set_unchecked(n: usize) -> u64 {
    *HIGH_SET.get_unchecked(n)
}

/// Returns the length of the binary representation of integer `n`.
///
/// # Examples
///
/// ```
/// use simple_bits::bits;
///
/// assert_eq!(bits::bit_len(0), 1);
/// assert_eq!(bits::bit_len(0x1FFF), 13);
/// ```
#[inline]
pub fn bit_len(n: u64) -> usize {
    match n {
        0 => 1,
        _ => crate::select::leading_one(n) + 1,
    }
}

/// Reverses the order of the bits in a word.
///
/// # Examples
///
/// ```
/// use simple_bits::bits;
///
/// assert_eq!(bits::reverse(1), 0x8000_0000_0000_0000);
/// assert_eq!(bits::reverse(0x00FF), 0xFF00_0000_0000_0000);
/// ```
#[inline]
pub fn reverse(word: u64) -> u64 {
    let mut x = word;
    x = ((x >> 1) & 0x5555_5555_5555_5555) | ((x & 0x5555_5555_5555_5555) << 1);
    x = ((x >> 2) & 0x3333_3333_3333_3333) | ((x & 0x3333_3333_3333_3333) << 2);
    x = ((x >> 4) & 0x0F0F_0F0F_0F0F_0F0F) | ((x & 0x0F0F_0F0F_0F0F_0F0F) << 4);
    x.swap_bytes()
}

//-----------------------------------------------------------------------------

/// Returns the number of bits that can be stored in `n` integers of type `u64`.
///
/// Behavior is undefined if `n * 64 > usize::MAX`.
///
/// # Examples
///
/// ```
/// use simple_bits::bits;
///
/// assert_eq!(bits::words_to_bits(3), 192);
/// ```
#[inline]
pub fn words_to_bits(n: usize) -> usize {
    n * WORD_BITS
}

/// Returns the number of integers of type `u64` required to store `n` bits.
///
/// Behavior is undefined if `n + 63 > usize::MAX`.
///
/// # Examples
///
/// ```
/// use simple_bits::bits;
///
/// assert_eq!(bits::bits_to_words(64), 1);
/// assert_eq!(bits::bits_to_words(65), 2);
/// ```
#[inline]
pub fn bits_to_words(n: usize) -> usize {
    (n + WORD_BITS - 1) / WORD_BITS
}

/// Splits a bit offset into an index in an array of `u64` and an offset within the integer.
///
/// # Examples
///
/// ```
/// use simple_bits::bits;
///
/// assert_eq!(bits::split_offset(123), (1, 59));
/// ```
#[inline]
pub fn split_offset(bit_offset: usize) -> (usize, usize) {
    (bit_offset >> INDEX_SHIFT, bit_offset & OFFSET_MASK)
}

/// Combines an index in an array of `u64` and an offset within the integer into a bit offset.
///
/// Behavior is undefined if the result would be `> usize::MAX`.
///
/// # Arguments
///
/// * `index`: Array index.
/// * `offset`: Offset within the integer.
///
/// # Examples
///
/// ```
/// use simple_bits::bits;
///
/// assert_eq!(bits::bit_offset(1, 59), 123);
/// ```
#[inline]
pub fn bit_offset(index: usize, offset: usize) -> usize {
    (index << INDEX_SHIFT) + offset
}

//-----------------------------------------------------------------------------


//-----------------------------------------------------------------------------
