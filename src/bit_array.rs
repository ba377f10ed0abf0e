//! Reading and writing bits, fixed-width fields, and unary codes in bit arrays.
//!
//! A bit array is a caller-owned slice of `u64` values.
//! Positions are given either as a word index and an offset within that word, or as a single bit offset from the start of the slice (see [`bits::split_offset`]).
//! A field may span two words, so a writer that stores fields up to the end of the data should keep one extra word at the end of the slice.
//!
//! Every function panics if a position resolves outside the slice.
//!
//! # Examples
//!
//! ```
//! use simple_bits::bit_array;
//!
//! let mut array: Vec<u64> = vec![0; 3];
//! bit_array::write_bits(&mut array, 0, 0x123, 8, 12);
//! assert_eq!(array[0], 0x123 << 8);
//! assert_eq!(bit_array::read_bits(&array, 0, 8, 12), 0x123);
//!
//! // Fields can cross word boundaries.
//! bit_array::write_bits(&mut array, 1, 0xFFFF, 56, 16);
//! assert_eq!(bit_array::read_bits(&array, 1, 56, 16), 0xFFFF);
//! assert_eq!(array[2], 0xFF);
//!
//! // Unary codes.
//! assert_eq!(bit_array::read_unary(&array, 0, 0), 8);
//! ```

use crate::bits::{self, WORD_BITS};
use crate::select;
use crate::tables::ALL_SET;

#[cfg(test)]
mod tests;

//-----------------------------------------------------------------------------

/// Returns the bit at offset `bit_offset` from the start of word `word_index`.
///
/// The offset may be larger than 63, in which case the bit is in one of the following words.
///
/// # Examples
///
/// ```
/// use simple_bits::bit_array;
///
/// let array: Vec<u64> = vec![0x1, 0x2];
/// assert!(bit_array::bit_at(&array, 0, 0));
/// assert!(bit_array::bit_at(&array, 0, 65));
/// assert!(bit_array::bit_at(&array, 1, 1));
/// assert!(!bit_array::bit_at(&array, 1, 0));
/// ```
///
/// # Panics
///
/// Panics if `word_index` or the word containing the bit is not a valid index in the array.
#[inline]
pub fn bit_at(array: &[u64], word_index: usize, bit_offset: usize) -> bool {
    assert!(word_index < array.len(), "bit_at: word index {} is out of bounds for {} words", word_index, array.len());
    let (index, offset) = bits::split_offset(bit_offset);
    let index = word_index + index;
    assert!(index < array.len(), "bit_at: bit offset {} from word {} is out of bounds for {} words", bit_offset, word_index, array.len());
    (array[index] >> offset) & 1 == 1
}

//-----------------------------------------------------------------------------

/// Reads a `len`-bit field starting at bit `offset` of word `word_index`.
///
/// If `offset + len > 64`, the field continues in word `word_index + 1`.
///
/// # Arguments
///
/// * `array`: The bit array.
/// * `word_index`: Index of the word containing the first bit.
/// * `offset`: Offset of the first bit in the word.
/// * `len`: Width of the field in bits.
///
/// # Examples
///
/// ```
/// use simple_bits::bit_array;
///
/// let array: Vec<u64> = vec![0x37, 0x5];
/// assert_eq!(bit_array::read_bits(&array, 0, 0, 4), 7);
/// assert_eq!(bit_array::read_bits(&array, 0, 4, 4), 3);
/// assert_eq!(bit_array::read_bits(&array, 0, 62, 4), 0x4);
/// ```
///
/// # Panics
///
/// Panics if `offset > 63`, `len > 64`, or the field extends past the end of the array.
pub fn read_bits(array: &[u64], word_index: usize, offset: usize, len: usize) -> u64 {
    assert!(offset < WORD_BITS, "read_bits: invalid offset {} within a word", offset);
    assert!(len <= WORD_BITS, "read_bits: invalid field width {}", len);

    let first = array[word_index] >> offset;
    if offset + len <= WORD_BITS {
        first & unsafe { bits::low_set_unchecked(len) }
    } else {
        let high = array[word_index + 1] & unsafe { bits::low_set_unchecked(offset + len - WORD_BITS) };
        first | (high << (WORD_BITS - offset))
    }
}

/// Writes a `len`-bit field starting at bit `offset` of word `word_index`.
///
/// Only the lowest `len` bits of `value` are written, and the bits outside the field are not changed.
/// If `offset + len > 64`, the field continues in word `word_index + 1`.
///
/// # Arguments
///
/// * `array`: The bit array.
/// * `word_index`: Index of the word containing the first bit.
/// * `value`: The value to be written.
/// * `offset`: Offset of the first bit in the word.
/// * `len`: Width of the field in bits.
///
/// # Examples
///
/// ```
/// use simple_bits::bit_array;
///
/// let mut array: Vec<u64> = vec![0; 2];
/// bit_array::write_bits(&mut array, 0, 7, 0, 4);
/// bit_array::write_bits(&mut array, 0, 3, 4, 4);
/// bit_array::write_bits(&mut array, 0, 0xFF, 62, 3);
/// assert_eq!(array[0], 0xC000_0000_0000_0037);
/// assert_eq!(array[1], 0x1);
/// ```
///
/// # Panics
///
/// Panics if `offset > 63`, `len > 64`, or the field extends past the end of the array.
/// The array is not modified if the call panics.
pub fn write_bits(array: &mut [u64], word_index: usize, value: u64, offset: usize, len: usize) {
    assert!(offset < WORD_BITS, "write_bits: invalid offset {} within a word", offset);
    assert!(len <= WORD_BITS, "write_bits: invalid field width {}", len);

    let value = value & bits::low_set(len);
    if offset + len <= WORD_BITS {
        let keep = unsafe { bits::high_set_unchecked(WORD_BITS - len - offset) | bits::low_set_unchecked(offset) };
        array[word_index] = (array[word_index] & keep) | (value << offset);
    } else {
        assert!(word_index + 1 < array.len(), "write_bits: a field at word {} offset {} width {} does not fit in {} words", word_index, offset, len, array.len());
        array[word_index] = (array[word_index] & unsafe { bits::low_set_unchecked(offset) }) | (value << offset);
        let keep = unsafe { bits::high_set_unchecked(2 * WORD_BITS - len - offset) };
        array[word_index + 1] = (array[word_index + 1] & keep) | (value >> (WORD_BITS - offset));
    }
}

/// Reads a `width`-bit integer starting at bit offset `bit_offset` of the array.
///
/// # Examples
///
/// ```
/// use simple_bits::bit_array;
///
/// let array: Vec<u64> = vec![0x330, 0x101];
/// assert_eq!(bit_array::read_int(&array, 4, 8), 0x33);
/// assert_eq!(bit_array::read_int(&array, 63, 2), 2);
/// ```
///
/// # Panics
///
/// Panics if `width > 64` or the integer extends past the end of the array.
#[inline]
pub fn read_int(array: &[u64], bit_offset: usize, width: usize) -> u64 {
    let (index, offset) = bits::split_offset(bit_offset);
    read_bits(array, index, offset, width)
}

/// Writes a `width`-bit integer starting at bit offset `bit_offset` of the array.
///
/// # Examples
///
/// ```
/// use simple_bits::bit_array;
///
/// let mut array: Vec<u64> = vec![0; 2];
/// bit_array::write_int(&mut array, 4, 0x33, 8);
/// bit_array::write_int(&mut array, 63, 2, 2);
/// assert_eq!(array[0], 0x330);
/// assert_eq!(array[1], 0x1);
/// ```
///
/// # Panics
///
/// Panics if `width > 64` or the integer extends past the end of the array.
#[inline]
pub fn write_int(array: &mut [u64], bit_offset: usize, value: u64, width: usize) {
    let (index, offset) = bits::split_offset(bit_offset);
    write_bits(array, index, value, offset, width);
}

//-----------------------------------------------------------------------------

/// Decodes a unary code starting at bit `offset` of word `word_index`.
///
/// Returns the number of unset bits before the next set bit.
/// The scan stops at the end of the array, and the function returns `0` if there are no set bits left.
///
/// # Examples
///
/// ```
/// use simple_bits::bit_array;
///
/// assert_eq!(bit_array::read_unary(&[0b1000, 0, 0], 0, 0), 3);
/// assert_eq!(bit_array::read_unary(&[0, 0, 0b1000], 0, 0), 131);
/// assert_eq!(bit_array::read_unary(&[0b1001, 0], 0, 1), 2);
/// ```
///
/// # Panics
///
/// Panics if `word_index` is not a valid index in the array or if `offset > 63`.
pub fn read_unary(array: &[u64], word_index: usize, offset: usize) -> usize {
    assert!(offset < WORD_BITS, "read_unary: invalid offset {} within a word", offset);

    let word = array[word_index] >> offset;
    if word != 0 {
        return select::trailing_zeros(word);
    }
    let mut zeros = WORD_BITS - offset;
    for word in array[word_index + 1..].iter() {
        if *word != 0 {
            return zeros + select::trailing_zeros(*word);
        }
        zeros += WORD_BITS;
    }
    0
}

/// Returns the bit offset of the first set bit at or after `bit_offset`, or `None` if there is no such bit.
///
/// # Examples
///
/// ```
/// use simple_bits::bit_array;
///
/// let array: Vec<u64> = vec![0x11, 0, 0x8000_0000_0000_0000];
/// assert_eq!(bit_array::next_one(&array, 0), Some(0));
/// assert_eq!(bit_array::next_one(&array, 1), Some(4));
/// assert_eq!(bit_array::next_one(&array, 5), Some(191));
/// assert_eq!(bit_array::next_one(&array, 192), None);
/// ```
pub fn next_one(array: &[u64], bit_offset: usize) -> Option<usize> {
    let (index, offset) = bits::split_offset(bit_offset);
    if index >= array.len() {
        return None;
    }

    let word = array[index] & (ALL_SET << offset);
    if word != 0 {
        return Some(bits::bit_offset(index, select::trailing_zeros(word)));
    }
    let next = index + 1;
    array[next..].iter().position(|word| *word != 0).map(|i| {
        bits::bit_offset(next + i, select::trailing_zeros(array[next + i]))
    })
}

/// Returns the bit offset of the last set bit at or before `bit_offset`, or `None` if there is no such bit.
///
/// Offsets past the end of the array are treated as the last bit of the array.
///
/// # Examples
///
/// ```
/// use simple_bits::bit_array;
///
/// let array: Vec<u64> = vec![0x11, 0, 0x8000_0000_0000_0000];
/// assert_eq!(bit_array::prev_one(&array, 200), Some(191));
/// assert_eq!(bit_array::prev_one(&array, 190), Some(4));
/// assert_eq!(bit_array::prev_one(&array, 3), Some(0));
/// assert_eq!(bit_array::prev_one(&[0, 0x2], 64), None);
/// ```
pub fn prev_one(array: &[u64], bit_offset: usize) -> Option<usize> {
    if array.is_empty() {
        return None;
    }
    let (index, offset) = bits::split_offset(bit_offset);
    let (index, offset) = if index >= array.len() { (array.len() - 1, WORD_BITS - 1) } else { (index, offset) };

    let word = array[index] & bits::low_set(offset + 1);
    if word != 0 {
        return Some(bits::bit_offset(index, select::leading_one(word)));
    }
    array[..index].iter().rposition(|word| *word != 0).map(|i| {
        bits::bit_offset(i, select::leading_one(array[i]))
    })
}

//-----------------------------------------------------------------------------
