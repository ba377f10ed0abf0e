use simple_bits::{bit_array, bits, count, pairs, select};
use simple_bits::internal;

use std::time::Instant;
use std::{env, process};

use getopts::Options;

mod utils;

//-----------------------------------------------------------------------------

fn main() {
    let config = Config::new();

    println!("Generating 2^{} random words with density {}", config.array_len, config.density);
    let array = internal::random_words(1usize << config.array_len, config.density);
    let ones: usize = array.iter().map(|word| count::popcount(*word)).sum();
    println!("Ones:     {} (density {:.6})", ones, (ones as f64) / ((array.len() * 64) as f64));
    println!("Size:     {}", utils::array_size(&array));
    println!("");

    popcount(&array);
    stream_pairs(&array, "01", pairs::count_01_pairs);
    stream_pairs(&array, "10", pairs::count_10_pairs);
    stream_pairs(&array, "overlapping 11", pairs::count_11_pairs_with_carry);
    stream_pairs(&array, "distinct 11", pairs::count_distinct_11_pairs);
    lowest_and_highest(&array);

    println!("Generating {} random queries of each type", config.queries);
    let select_queries = utils::generate_select_queries(config.queries, &array);
    let field_queries = utils::generate_field_queries(config.queries, &array);
    let offsets = utils::generate_offsets(config.queries, &array);
    println!("");

    select_in_word(&array, &select_queries);
    read_fields(&array, &field_queries);
    read_unary_codes(&array, &offsets);
    next_set_bits(&array, &offsets);

    utils::report_memory_usage();
}

//-----------------------------------------------------------------------------

pub struct Config {
    pub array_len: usize,
    pub density: f64,
    pub queries: usize,
}

impl Config {
    const ARRAY_LEN: usize = 20;
    const DENSITY: f64 = 0.5;
    const QUERIES: usize = 10_000_000;

    pub fn new() -> Config {
        let args: Vec<String> = env::args().collect();
        let program = args[0].clone();

        let mut opts = Options::new();
        opts.optopt("n", "words", "use arrays of 2^INT words (default 20)", "INT");
        opts.optopt("d", "density", "density of set bits (default 0.5)", "FLOAT");
        opts.optopt("q", "queries", "number of queries (default 10000000)", "INT");
        opts.optflag("h", "help", "print this help");
        let matches = match opts.parse(&args[1..]) {
            Ok(m) => m,
            Err(f) => {
                eprintln!("{}", f.to_string());
                process::exit(1);
            }
        };

        let mut config = Config {
            array_len: Self::ARRAY_LEN,
            density: Self::DENSITY,
            queries: Self::QUERIES,
        };
        if matches.opt_present("h") {
            let header = format!("Usage: {} [options]", program);
            print!("{}", opts.usage(&header));
            process::exit(0);
        }
        if let Some(s) = matches.opt_str("n") {
            match s.parse::<usize>() {
                Ok(n) => {
                    if n > 32 {
                        eprintln!("Invalid array length: 2^{}", n);
                        process::exit(1);
                    }
                    config.array_len = n;
                },
                Err(f) => {
                    eprintln!("--words: {}", f.to_string());
                    process::exit(1);
                },
            }
        }
        if let Some(s) = matches.opt_str("d") {
            match s.parse::<f64>() {
                Ok(n) => {
                    if n < 0.0 || n > 1.0 {
                        eprintln!("Invalid set bit density: {}", n);
                        process::exit(1);
                    }
                    config.density = n;
                }
                Err(f) => {
                    eprintln!("--density: {}", f.to_string());
                    process::exit(1);
                },
            }
        }
        if let Some(s) = matches.opt_str("q") {
            match s.parse::<usize>() {
                Ok(n) => {
                    if n == 0 {
                        eprintln!("Invalid query count: {}", n);
                        process::exit(1);
                    }
                    config.queries = n;
                },
                Err(f) => {
                    eprintln!("--queries: {}", f.to_string());
                    process::exit(1);
                },
            }
        }

        config
    }
}

//-----------------------------------------------------------------------------

fn popcount(array: &[u64]) {
    println!("popcount over {} words", array.len());
    let now = Instant::now();
    let mut total = 0;
    for word in array.iter() {
        total += count::popcount(*word);
    }
    utils::report_results(array.len(), total, now.elapsed());
}

fn stream_pairs(array: &[u64], pattern: &str, counter: fn(u64, u64) -> (usize, u64)) {
    println!("Counting {} pairs over {} words", pattern, array.len());
    let now = Instant::now();
    let mut total = 0;
    let mut carry = 0;
    for word in array.iter() {
        let (found, next) = counter(*word, carry);
        total += found;
        carry = next;
    }
    utils::report_results(array.len(), total, now.elapsed());
}

fn lowest_and_highest(array: &[u64]) {
    println!("trailing_zeros and leading_one over {} words", array.len());
    let now = Instant::now();
    let mut total = 0;
    for word in array.iter() {
        total += select::trailing_zeros(*word);
        if *word != 0 {
            total += select::leading_one(*word);
        }
    }
    utils::report_results(array.len(), total, now.elapsed());
}

fn select_in_word(array: &[u64], queries: &[(usize, usize)]) {
    println!("{} select_nth_one queries", queries.len());
    let now = Instant::now();
    let mut total = 0;
    for (index, k) in queries.iter() {
        total += select::select_nth_one(array[*index], *k);
    }
    utils::report_results(queries.len(), total, now.elapsed());
}

fn read_fields(array: &[u64], queries: &[(usize, usize)]) {
    println!("{} read_int queries", queries.len());
    let now = Instant::now();
    let mut total = 0;
    for (offset, width) in queries.iter() {
        total ^= bit_array::read_int(array, *offset, *width) as usize;
    }
    utils::report_results(queries.len(), total, now.elapsed());
}

fn read_unary_codes(array: &[u64], offsets: &[usize]) {
    println!("{} read_unary queries", offsets.len());
    let now = Instant::now();
    let mut total = 0;
    for bit_offset in offsets.iter() {
        let (index, offset) = bits::split_offset(*bit_offset);
        total += bit_array::read_unary(array, index, offset);
    }
    utils::report_results(offsets.len(), total, now.elapsed());
}

fn next_set_bits(array: &[u64], offsets: &[usize]) {
    println!("{} next_one queries", offsets.len());
    let now = Instant::now();
    let mut total = 0;
    for bit_offset in offsets.iter() {
        if let Some(offset) = bit_array::next_one(array, *bit_offset) {
            total += offset - bit_offset;
        }
    }
    utils::report_results(offsets.len(), total, now.elapsed());
}

//-----------------------------------------------------------------------------
