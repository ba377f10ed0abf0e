use super::*;

use crate::bits::WORD_BITS;
use crate::internal;

use rand::Rng;

//-----------------------------------------------------------------------------

// Word sequences where interesting things happen at the boundaries.
fn boundary_streams() -> Vec<Vec<u64>> {
    let high = 0x8000_0000_0000_0000u64;
    vec![
        vec![0, 0],
        vec![!0u64, !0u64],
        vec![!0u64, 0, !0u64],
        vec![high, 1],
        vec![high, 0],
        vec![0, 1],
        vec![1, high],
        vec![0x7FFF_FFFF_FFFF_FFFF, 1],
        vec![0xC000_0000_0000_0000, 0x3],
        vec![0xE000_0000_0000_0000, 0x3],
        vec![0xE000_0000_0000_0000, 0x7],
        vec![0x5555_5555_5555_5555, 0xAAAA_AAAA_AAAA_AAAA],
        vec![0xAAAA_AAAA_AAAA_AAAA, 0x5555_5555_5555_5555],
        vec![high, !0u64, 1],
        vec![high, !0u64, !0u64, 0x2],
    ]
}

fn random_streams(n: usize) -> Vec<Vec<u64>> {
    let mut rng = rand::thread_rng();
    let mut result = Vec::with_capacity(n);
    for _ in 0..n {
        let len = 1 + rng.gen::<usize>() % 5;
        let density = match rng.gen::<usize>() % 3 {
            0 => 0.2,
            1 => 0.5,
            _ => 0.9,
        };
        result.push(internal::random_words(len, density));
    }
    result
}

fn all_streams() -> Vec<Vec<u64>> {
    let mut result = boundary_streams();
    for word in internal::boundary_words() {
        result.push(vec![word]);
        result.push(vec![word, word]);
    }
    result.extend(random_streams(500));
    result
}

// Runs a counting function over the stream, threading the carry.
fn count_stream(words: &[u64], counter: fn(u64, u64) -> (usize, u64)) -> usize {
    let mut carry = 0;
    let mut total = 0;
    for word in words.iter() {
        let (found, next) = counter(*word, carry);
        assert!(next <= 1, "Invalid carry {} after word {:X}", next, word);
        total += found;
        carry = next;
    }
    total
}

//-----------------------------------------------------------------------------

#[test]
fn extract_masks() {
    for word in internal::test_words(100) {
        for carry in 0..2u64 {
            let rising = extract_01_pairs(word, carry);
            let falling = extract_10_pairs(word, carry);
            for offset in 0..WORD_BITS {
                let bit = (word >> offset) & 1;
                let prev = if offset == 0 { carry } else { (word >> (offset - 1)) & 1 };
                assert_eq!((rising >> offset) & 1, (bit == 1 && prev == 0) as u64,
                    "Invalid rising edge mask at offset {} for {:X} with carry {}", offset, word, carry);
                assert_eq!((falling >> offset) & 1, (bit == 0 && prev == 1) as u64,
                    "Invalid falling edge mask at offset {} for {:X} with carry {}", offset, word, carry);
            }
        }
    }
}

#[test]
fn carries() {
    for word in internal::test_words(100) {
        for carry in 0..2u64 {
            assert_eq!(count_01_pairs(word, carry).1, word >> 63, "Invalid 01 carry for {:X}", word);
            assert_eq!(count_10_pairs(word, carry).1, word >> 63, "Invalid 10 carry for {:X}", word);
            assert_eq!(count_11_pairs_with_carry(word, carry).1, word >> 63, "Invalid 11 carry for {:X}", word);
        }
    }
}

#[test]
fn single_word_boundaries() {
    assert_eq!(count_01_pairs(0, 0), (0, 0), "count_01_pairs(0, 0) failed");
    assert_eq!(count_01_pairs(0, 1), (0, 0), "count_01_pairs(0, 1) failed");
    assert_eq!(count_01_pairs(!0u64, 0), (1, 1), "count_01_pairs(!0, 0) failed");
    assert_eq!(count_01_pairs(!0u64, 1), (0, 1), "count_01_pairs(!0, 1) failed");
    assert_eq!(count_01_pairs(0x5555_5555_5555_5555, 0), (32, 0), "count_01_pairs(0x5555..., 0) failed");

    assert_eq!(count_10_pairs(0, 1), (1, 0), "count_10_pairs(0, 1) failed");
    assert_eq!(count_10_pairs(!0u64, 1), (0, 1), "count_10_pairs(!0, 1) failed");
    assert_eq!(count_10_pairs(0xAAAA_AAAA_AAAA_AAAA, 0), (31, 1), "count_10_pairs(0xAAAA..., 0) failed");
    assert_eq!(count_10_pairs(0xAAAA_AAAA_AAAA_AAAA, 1), (32, 1), "count_10_pairs(0xAAAA..., 1) failed");

    assert_eq!(count_11_pairs_with_carry(0, 1), (0, 0), "count_11_pairs_with_carry(0, 1) failed");
    assert_eq!(count_11_pairs_with_carry(!0u64, 0), (63, 1), "count_11_pairs_with_carry(!0, 0) failed");
    assert_eq!(count_11_pairs_with_carry(1, 1), (1, 0), "count_11_pairs_with_carry(1, 1) failed");
    assert_eq!(count_11_pairs_with_carry(0x8000_0000_0000_0000, 1), (0, 1), "count_11_pairs_with_carry(1 << 63, 1) failed");
    assert_eq!(count_11_pairs_with_carry(0x5555_5555_5555_5555, 1), (1, 0), "count_11_pairs_with_carry(0x5555..., 1) failed");
}

#[test]
fn distinct_11_single_word() {
    assert_eq!(count_distinct_11_pairs(0, 0), (0, 0), "count_distinct_11_pairs(0, 0) failed");
    assert_eq!(count_distinct_11_pairs(0, 1), (0, 0), "count_distinct_11_pairs(0, 1) failed");
    assert_eq!(count_distinct_11_pairs(!0u64, 0), (32, 0), "count_distinct_11_pairs(!0, 0) failed");
    assert_eq!(count_distinct_11_pairs(!0u64, 1), (32, 1), "count_distinct_11_pairs(!0, 1) failed");
    assert_eq!(count_distinct_11_pairs(1, 1), (1, 0), "count_distinct_11_pairs(1, 1) failed");
    assert_eq!(count_distinct_11_pairs(0x8000_0000_0000_0000, 0), (0, 1), "count_distinct_11_pairs(1 << 63, 0) failed");
    assert_eq!(count_distinct_11_pairs(0x0000_0000_0000_0006, 0), (1, 0), "count_distinct_11_pairs(0b110, 0) failed");
    assert_eq!(count_distinct_11_pairs(0x5555_5555_5555_5555, 1), (1, 0), "count_distinct_11_pairs(0x5555..., 1) failed");
    assert_eq!(count_distinct_11_pairs(0xAAAA_AAAA_AAAA_AAAA, 0), (0, 1), "count_distinct_11_pairs(0xAAAA..., 0) failed");
}

//-----------------------------------------------------------------------------

#[test]
fn rising_edges_in_streams() {
    for words in all_streams() {
        let bits = internal::bits_of(&words);
        assert_eq!(count_stream(&words, count_01_pairs), internal::count_pairs_by_scan(&bits, false, true),
            "Invalid number of 01 pairs in {:X?}", words);
    }
}

#[test]
fn falling_edges_in_streams() {
    for words in all_streams() {
        let bits = internal::bits_of(&words);
        assert_eq!(count_stream(&words, count_10_pairs), internal::count_pairs_by_scan(&bits, true, false),
            "Invalid number of 10 pairs in {:X?}", words);
    }
}

#[test]
fn overlapping_11_in_streams() {
    for words in all_streams() {
        let bits = internal::bits_of(&words);
        assert_eq!(count_stream(&words, count_11_pairs_with_carry), internal::count_pairs_by_scan(&bits, true, true),
            "Invalid number of overlapping 11 pairs in {:X?}", words);
    }
}

#[test]
fn distinct_11_in_streams() {
    for words in all_streams() {
        let bits = internal::bits_of(&words);
        assert_eq!(count_stream(&words, count_distinct_11_pairs), internal::count_distinct_11_by_scan(&bits),
            "Invalid number of distinct 11 pairs in {:X?}", words);
    }
}

#[test]
fn distinct_11_with_carry() {
    // A carry is the same as an extra set bit before the word.
    for word in internal::test_words(200) {
        let mut bits = vec![true];
        bits.extend(internal::bits_of(&[word]));
        let (count, _) = count_distinct_11_pairs(word, 1);
        assert_eq!(count, internal::count_distinct_11_by_scan(&bits), "Invalid count for {:X} with carry", word);
    }
}

#[test]
fn edges_alternate() {
    // Rising and falling edges alternate, so their counts differ by at most one.
    for words in all_streams() {
        let rising = count_stream(&words, count_01_pairs);
        let falling = count_stream(&words, count_10_pairs);
        assert!(rising == falling || rising == falling + 1, "Edges do not alternate in {:X?}", words);
    }
}

//-----------------------------------------------------------------------------
