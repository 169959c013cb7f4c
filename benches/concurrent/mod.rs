
// Import common benchmarks into the main bench group
pub fn register_benchmarks(c: &mut criterion::Criterion) {
    register::register_benchmarks(c);
    contention::register_contention_benchmarks(c);
}
