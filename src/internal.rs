// Utility functions for tests and benchmarks.
//
// The reference implementations scan words bit by bit and are only meant for checking the real ones.

use crate::bits::{self, WORD_BITS};

use rand::Rng;
use rand::distributions::{Bernoulli, Distribution};

//-----------------------------------------------------------------------------

// Words that tend to break broadword code.
pub fn boundary_words() -> Vec<u64> {
    let mut result: Vec<u64> = vec![
        0,
        !0u64,
        0x5555_5555_5555_5555,
        0xAAAA_AAAA_AAAA_AAAA,
        0x8000_0000_0000_0001,
        0x7FFF_FFFF_FFFF_FFFE,
        0x0F0F_0F0F_0F0F_0F0F,
        0xF0F0_F0F0_F0F0_F0F0,
        0xFF00_0000_0000_00FF,
        0x8080_8080_8080_8080,
        0x0101_0101_0101_0101,
        0xC000_0000_0000_0003,
        0x6000_0000_0000_0006,
    ];
    for i in 0..WORD_BITS {
        result.push(1u64 << i);
        result.push(!(1u64 << i));
        result.push(bits::low_set(i));
        result.push(bits::high_set(i));
    }
    result
}

// Returns `len` random words. Each bit is set with probability `density`.
pub fn random_words(len: usize, density: f64) -> Vec<u64> {
    assert!(density >= 0.0 && density <= 1.0, "Invalid set bit density: {}", density);
    let mut result: Vec<u64> = Vec::with_capacity(len);
    let mut rng = rand::thread_rng();
    if density == 0.5 {
        for _ in 0..len {
            result.push(rng.gen());
        }
    } else {
        let dist = Bernoulli::new(density).unwrap();
        let mut iter = dist.sample_iter(&mut rng);
        for _ in 0..len {
            let mut word = 0u64;
            for offset in 0..WORD_BITS {
                if iter.next().unwrap() {
                    word |= 1u64 << offset;
                }
            }
            result.push(word);
        }
    }
    result
}

// Returns a mix of boundary words and random words of varying density.
pub fn test_words(random: usize) -> Vec<u64> {
    let mut result = boundary_words();
    for density in [0.05, 0.5, 0.95].iter() {
        result.extend(random_words(random, *density));
    }
    result
}

//-----------------------------------------------------------------------------

// Unpacks the words into a sequence of bits.
pub fn bits_of(words: &[u64]) -> Vec<bool> {
    let mut result: Vec<bool> = Vec::with_capacity(words.len() * WORD_BITS);
    for word in words.iter() {
        for offset in 0..WORD_BITS {
            result.push((word >> offset) & 1 == 1);
        }
    }
    result
}

pub fn count_ones_by_scan(word: u64) -> usize {
    bits_of(&[word]).iter().filter(|bit| **bit).count()
}

// Offset of the set bit of rank `k` (1-based).
pub fn select_by_scan(word: u64, k: usize) -> Option<usize> {
    let mut ones = 0;
    for offset in 0..WORD_BITS {
        if (word >> offset) & 1 == 1 {
            ones += 1;
            if ones == k {
                return Some(offset);
            }
        }
    }
    None
}

pub fn lowest_one_by_scan(word: u64) -> Option<usize> {
    (0..WORD_BITS).find(|offset| (word >> offset) & 1 == 1)
}

pub fn highest_one_by_scan(word: u64) -> Option<usize> {
    (0..WORD_BITS).rev().find(|offset| (word >> offset) & 1 == 1)
}

pub fn reverse_by_scan(word: u64) -> u64 {
    let mut result = 0u64;
    for offset in 0..WORD_BITS {
        result |= ((word >> offset) & 1) << (WORD_BITS - 1 - offset);
    }
    result
}

// Counts overlapping pairs `(prev, next)` of adjacent bits, with an implicit `0` before the first bit.
pub fn count_pairs_by_scan(bits: &[bool], prev: bool, next: bool) -> usize {
    let mut count = 0;
    let mut last = false;
    for bit in bits.iter() {
        if last == prev && *bit == next {
            count += 1;
        }
        last = *bit;
    }
    count
}

// Counts non-overlapping `11` pairs by scanning from left to right and pairing greedily.
pub fn count_distinct_11_by_scan(bits: &[bool]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i + 1 < bits.len() {
        if bits[i] && bits[i + 1] {
            count += 1;
            i += 2;
        } else {
            i += 1;
        }
    }
    count
}

//-----------------------------------------------------------------------------
