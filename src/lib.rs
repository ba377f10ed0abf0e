//! # Simple broadword primitives
//!
//! Bit-level building blocks for rank/select bitvectors, wavelet trees, and other succinct data structures.
//! The crate works on 64-bit words and on caller-owned slices of them, using the least significant bits first.
//!
//! * [`count`]: population counts and aligned `11` symbols within a word.
//! * [`pairs`]: overlapping `01`, `10`, and `11` pairs in a stream of words, with the carry threaded by the caller.
//! * [`select`]: trailing zeros, the highest set bit, and select within a word.
//! * [`bit_array`]: bits, fixed-width fields, and unary codes in bit arrays.
//! * [`bits`]: masks and conversions between bit offsets and word indexes.
//! * [`tables`]: the lookup tables used by the other modules.
//!
//! # Notes
//!
//! * All functions are pure computations without allocation or internal state.
//! The lookup tables are immutable and can be shared freely between threads.
//! * Invalid arguments, such as positions outside the array or `select_nth_one(word, 0)`, cause a panic instead of an undefined result.
//! * Things may not work if `usize` is not 64-bit.

pub mod bit_array;
pub mod bits;
pub mod count;
pub mod pairs;
pub mod select;
pub mod tables;

#[cfg(any(test, feature = "bench"))]
#[doc(hidden)]
pub mod internal;
