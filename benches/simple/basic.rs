use criterion::Criterion;
use orderboard_rs::{OrderRequest, Side, standard_board};
use rust_decimal_macros::dec;

pub fn benchmark_data(c: &mut Criterion) {
    let mut group = c.benchmark_group("Basic OrderBoard Operations");

    // Benchmark for creating a new board
    group.bench_function("create_board", |b| {
        b.iter(|| {
            let _board = standard_board("silver");
        })
    });

    // Benchmark for creating a board and registering a single order
    group.bench_function("register_single_order", |b| {
        b.iter(|| {
            let board = standard_board("silver");
            let _ = board.register_order(&OrderRequest::new(
                "user1",
                dec!(3.5),
                dec!(306),
                Side::Sell,
            ));
        })
    });

    group.finish();
}
