use super::*;

use crate::internal;

use rand::Rng;

//-----------------------------------------------------------------------------

fn offsets_of_ones(array: &[u64]) -> Vec<usize> {
    internal::bits_of(array).iter().enumerate().filter(|(_, bit)| **bit).map(|(offset, _)| offset).collect()
}

//-----------------------------------------------------------------------------

#[test]
fn bit_at_offsets() {
    let array = internal::random_words(4, 0.5);
    let truth = internal::bits_of(&array);
    for word_index in 0..array.len() {
        for bit_offset in 0..bits::words_to_bits(array.len() - word_index) {
            assert_eq!(bit_at(&array, word_index, bit_offset), truth[bits::bit_offset(word_index, bit_offset)],
                "Invalid bit at word {} offset {}", word_index, bit_offset);
        }
    }
}

#[test]
#[should_panic]
fn bit_at_past_the_end() {
    let array: Vec<u64> = vec![0; 2];
    let _ = bit_at(&array, 1, 64);
}

#[test]
#[should_panic]
fn bit_at_invalid_word() {
    let array: Vec<u64> = vec![0; 2];
    let _ = bit_at(&array, 2, 0);
}

//-----------------------------------------------------------------------------

#[test]
fn write_example() {
    let mut array: Vec<u64> = vec![0; 2];
    write_bits(&mut array, 0, 0x123, 8, 12);
    assert_eq!(array[0], 0x123 << 8, "Invalid first word");
    assert_eq!(array[1], 0, "Modified the second word");
}

#[test]
fn read_write() {
    let mut correct: Vec<(u64, u64, u64, u64)> = Vec::new();
    let mut rng = rand::thread_rng();
    for _ in 0..64 {
        let mut tuple: (u64, u64, u64, u64) = rng.gen();
        tuple.0 &= bits::low_set(31); tuple.1 &= bits::low_set(64); tuple.2 &= bits::low_set(35); tuple.3 &= bits::low_set(63);
        correct.push(tuple);
    }

    let mut array: Vec<u64> = vec![0; 256];
    let mut bit_offset = 0;
    for i in 0..64 {
        write_int(&mut array, bit_offset, correct[i].0, 31); bit_offset += 31;
        write_int(&mut array, bit_offset, correct[i].1, 64); bit_offset += 64;
        write_int(&mut array, bit_offset, correct[i].2, 35); bit_offset += 35;
        write_int(&mut array, bit_offset, correct[i].3, 63); bit_offset += 63;
    }

    bit_offset = 0;
    for i in 0..64 {
        assert_eq!(read_int(&array, bit_offset, 31), correct[i].0, "Invalid value at [{}].0", i); bit_offset += 31;
        assert_eq!(read_int(&array, bit_offset, 64), correct[i].1, "Invalid value at [{}].1", i); bit_offset += 64;
        assert_eq!(read_int(&array, bit_offset, 35), correct[i].2, "Invalid value at [{}].2", i); bit_offset += 35;
        assert_eq!(read_int(&array, bit_offset, 63), correct[i].3, "Invalid value at [{}].3", i); bit_offset += 63;
    }
}

#[test]
fn no_extra_bits() {
    let mut array: Vec<u64> = vec![0; 2];
    write_int(&mut array, 16, 2, 16);
    write_int(&mut array, 48, 2, 16);
    write_int(&mut array, 32, !0u64, 16); // This should not overwrite the integer at offset 48.
    write_int(&mut array, 0, !0u64, 16); // This should not overwrite the other integers.
    assert_eq!(read_int(&array, 0, 16), 0xFFFF, "Incorrect 16-bit integer at offset 0");
    assert_eq!(read_int(&array, 16, 16), 2, "Incorrect 16-bit integer at offset 16");
    assert_eq!(read_int(&array, 32, 16), 0xFFFF, "Incorrect 16-bit integer at offset 32");
    assert_eq!(read_int(&array, 48, 16), 2, "Incorrect 16-bit integer at offset 48");
    assert_eq!(array[1], 0, "Modified the second word");
}

#[test]
fn round_trip_keeps_other_bits() {
    let mut rng = rand::thread_rng();
    for offset in 0..WORD_BITS {
        for len in 0..=WORD_BITS {
            let original = internal::random_words(3, 0.5);
            let mut array = original.clone();
            let value: u64 = rng.gen();
            let masked = value & bits::low_set(len);
            write_bits(&mut array, 1, value, offset, len);
            assert_eq!(read_bits(&array, 1, offset, len), masked, "Invalid value at offset {} width {}", offset, len);

            let start = bits::bit_offset(1, offset);
            let before = internal::bits_of(&original);
            let after = internal::bits_of(&array);
            for i in 0..before.len() {
                if i < start || i >= start + len {
                    assert_eq!(after[i], before[i], "Bit {} changed by a write at offset {} width {}", i, offset, len);
                }
            }
        }
    }
}

#[test]
fn fill_with_ones_and_zeros() {
    for offset in 0..WORD_BITS {
        for len in 0..=WORD_BITS {
            let mut array: Vec<u64> = vec![0; 2];
            write_bits(&mut array, 0, !0u64, offset, len);
            let ones: usize = array.iter().map(|word| crate::count::popcount(*word)).sum();
            assert_eq!(ones, len, "Invalid number of set bits after writing ones at offset {} width {}", offset, len);

            let mut array: Vec<u64> = vec![!0u64; 2];
            write_bits(&mut array, 0, 0, offset, len);
            let ones: usize = array.iter().map(|word| crate::count::popcount(*word)).sum();
            assert_eq!(ones, 128 - len, "Invalid number of set bits after writing zeros at offset {} width {}", offset, len);
        }
    }
}

#[test]
fn last_word_without_spill() {
    let mut array: Vec<u64> = vec![0; 1];
    write_bits(&mut array, 0, 0xABCD, 48, 16);
    assert_eq!(read_bits(&array, 0, 48, 16), 0xABCD, "Could not use the high bits of the last word");
}

#[test]
#[should_panic]
fn write_spill_past_the_end() {
    let mut array: Vec<u64> = vec![0; 1];
    write_bits(&mut array, 0, 0xABCD, 56, 16);
}

#[test]
fn failed_write_does_not_modify() {
    let mut array: Vec<u64> = vec![0x1234; 1];
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        write_bits(&mut array, 0, 0xABCD, 56, 16);
    }));
    assert!(result.is_err(), "A write past the end of the array succeeded");
    assert_eq!(array[0], 0x1234, "A failed write modified the array");
}

#[test]
#[should_panic]
fn read_invalid_offset() {
    let array: Vec<u64> = vec![0; 2];
    let _ = read_bits(&array, 0, 64, 1);
}

#[test]
#[should_panic]
fn write_invalid_width() {
    let mut array: Vec<u64> = vec![0; 2];
    write_bits(&mut array, 0, 0, 0, 65);
}

//-----------------------------------------------------------------------------

#[test]
fn unary_examples() {
    assert_eq!(read_unary(&[0b1000, 0, 0], 0, 0), 3, "Invalid code in the first word");
    assert_eq!(read_unary(&[0, 0, 0b1000], 0, 0), 131, "Invalid code in the last word");
    assert_eq!(read_unary(&[0, 0b1], 0, 63), 1, "Invalid code from the last bit of a word");
    assert_eq!(read_unary(&[!0u64], 0, 63), 0, "Invalid empty code");
    assert_eq!(read_unary(&[0, 0, 0], 0, 0), 0, "Found a code in an empty array");
    assert_eq!(read_unary(&[0x1, 0, 0], 0, 1), 0, "Found a code past the last set bit");
}

#[test]
fn unary_codes() {
    let mut rng = rand::thread_rng();
    let mut codes: Vec<usize> = Vec::new();
    let mut array: Vec<u64> = vec![0; 64];
    let mut bit_offset = 0;
    while bit_offset < bits::words_to_bits(array.len() - 1) {
        let code = match rng.gen::<usize>() % 4 {
            0 => rng.gen::<usize>() % 200,
            _ => rng.gen::<usize>() % 8,
        };
        if bit_offset + code >= bits::words_to_bits(array.len()) {
            break;
        }
        write_int(&mut array, bit_offset + code, 1, 1);
        codes.push(code);
        bit_offset += code + 1;
    }

    bit_offset = 0;
    for (i, code) in codes.iter().enumerate() {
        let (index, offset) = bits::split_offset(bit_offset);
        assert_eq!(read_unary(&array, index, offset), *code, "Invalid unary code {}", i);
        bit_offset += code + 1;
    }
}

//-----------------------------------------------------------------------------

#[test]
fn next_and_prev() {
    let mut arrays = vec![
        vec![],
        vec![0u64; 3],
        vec![!0u64; 3],
        vec![0x8000_0000_0000_0000, 0, 1],
    ];
    for density in [0.01, 0.1, 0.5].iter() {
        arrays.push(internal::random_words(4, *density));
    }

    for array in arrays.iter() {
        let ones = offsets_of_ones(array);
        let len = bits::words_to_bits(array.len());
        for bit_offset in 0..len + 70 {
            let next = ones.iter().cloned().find(|offset| *offset >= bit_offset);
            assert_eq!(next_one(array, bit_offset), next, "Invalid next_one({}) in {:X?}", bit_offset, array);
            let prev = ones.iter().cloned().rev().find(|offset| *offset <= bit_offset);
            assert_eq!(prev_one(array, bit_offset), prev, "Invalid prev_one({}) in {:X?}", bit_offset, array);
        }
    }
}

//-----------------------------------------------------------------------------
