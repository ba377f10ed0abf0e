use simple_bits::{bits, count};

use std::time::Duration;

use rand::Rng;

//-----------------------------------------------------------------------------

// Returns `n` random (word index, rank) pairs for select queries. Words without set bits are skipped.
pub fn generate_select_queries(n: usize, array: &[u64]) -> Vec<(usize, usize)> {
    let mut result: Vec<(usize, usize)> = Vec::with_capacity(n);
    if array.iter().all(|word| *word == 0) {
        return result;
    }

    let mut rng = rand::thread_rng();
    while result.len() < n {
        let index = rng.gen::<usize>() % array.len();
        let ones = count::popcount(array[index]);
        if ones > 0 {
            result.push((index, 1 + rng.gen::<usize>() % ones));
        }
    }

    result
}

// Returns `n` random (bit offset, width) pairs for field queries. The fields fit in the array.
pub fn generate_field_queries(n: usize, array: &[u64]) -> Vec<(usize, usize)> {
    let mut result: Vec<(usize, usize)> = Vec::with_capacity(n);
    let len = bits::words_to_bits(array.len());

    let mut rng = rand::thread_rng();
    for _ in 0..n {
        let width = 1 + rng.gen::<usize>() % bits::WORD_BITS;
        let offset = rng.gen::<usize>() % (len - width + 1);
        result.push((offset, width));
    }

    result
}

// Returns `n` random bit offsets in the array.
pub fn generate_offsets(n: usize, array: &[u64]) -> Vec<usize> {
    let mut result: Vec<usize> = Vec::with_capacity(n);
    let len = bits::words_to_bits(array.len());

    let mut rng = rand::thread_rng();
    for _ in 0..n {
        result.push(rng.gen::<usize>() % len);
    }

    result
}

//-----------------------------------------------------------------------------

pub fn readable_size(bytes: usize) -> (f64, &'static str) {
    let units: Vec<(f64, &'static str)> = vec![
        (1.0, "B"),
        (1024.0, "KiB"),
        (1024.0 * 1024.0, "MiB"),
        (1024.0 * 1024.0 * 1024.0, "GiB"),
        (1024.0 * 1024.0 * 1024.0 * 1024.0, "TiB"),
    ];

    let value = bytes as f64;
    let mut unit = 0;
    for i in 1..units.len() {
        if value >= units[i].0 {
            unit = i;
        } else {
            break;
        }
    }

    (value / units[unit].0, units[unit].1)
}

#[cfg(target_os = "linux")]
pub fn peak_memory_usage() -> Result<usize, &'static str> {
    unsafe {
        let mut rusage: libc::rusage = std::mem::zeroed();
        let retval = libc::getrusage(libc::RUSAGE_SELF, &mut rusage as *mut _);
        match retval {
            0 => Ok(rusage.ru_maxrss as usize * 1024),
            _ => Err("libc::getrusage call failed"),
        }
    }
}

#[cfg(target_os = "macos")]
pub fn peak_memory_usage() -> Result<usize, &'static str> {
    unsafe {
        let mut rusage: libc::rusage = std::mem::zeroed();
        let retval = libc::getrusage(libc::RUSAGE_SELF, &mut rusage as *mut _);
        match retval {
            0 => Ok(rusage.ru_maxrss as usize),
            _ => Err("libc::getrusage call failed"),
        }
    }
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
pub fn peak_memory_usage() -> Result<usize, &'static str> {
    Err("No peak_memory_usage implementation for this OS")
}

//-----------------------------------------------------------------------------

pub fn array_size(array: &[u64]) -> String {
    let bytes = array.len() * std::mem::size_of::<u64>();
    let (size, unit) = readable_size(bytes);
    format!("{:.3} {} ({} words)", size, unit, array.len())
}

pub fn report_results(operations: usize, total: usize, duration: Duration) {
    let ns = (duration.as_nanos() as f64) / (operations as f64);
    println!("Time:     {:.3} seconds ({:.2} ns/operation)", duration.as_secs_f64(), ns);
    println!("Checksum: {}", total);
    println!("");
}

pub fn report_memory_usage() {
    match peak_memory_usage() {
        Ok(bytes) => {
            let (size, unit) = readable_size(bytes);
            println!("Peak memory usage: {:.3} {}", size, unit);
        },
        Err(f) => {
            println!("{}", f);
        },
    }
    println!("");
}

//-----------------------------------------------------------------------------
