use criterion::{criterion_group, criterion_main};

mod concurrent;
mod simple;

use board::register_benchmarks as register_board_benchmarks;
use concurrent::register_benchmarks as register_concurrent_benchmarks;
use simple::basic::benchmark_data;

// Define the benchmark groups
criterion_group!(
    benches,
    benchmark_data,
    register_board_benchmarks,
    register_concurrent_benchmarks,
);

criterion_main!(benches);
