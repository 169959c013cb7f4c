use criterion::Criterion;
use orderboard_rs::{OrderId, OrderRequest, Side, standard_board};
use rust_decimal_macros::dec;
use std::hint::black_box;

/// Register all benchmarks for cancelling orders on a board
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBoard - Cancel Orders");

    // Benchmark a register-then-cancel cycle over one price level
    group.bench_function("register_then_cancel", |b| {
        b.iter(|| {
            let board = standard_board("silver");
            let mut ids = Vec::with_capacity(100);
            for _ in 0..100 {
                let id = board
                    .register_order(&OrderRequest::new("user1", dec!(1), dec!(306), Side::Sell))
                    .unwrap();
                ids.push(id);
            }
            for id in ids {
                let _ = black_box(board.cancel_order(id));
            }
        })
    });

    // Benchmark the not-found path
    group.bench_function("cancel_unknown_id", |b| {
        let board = standard_board("silver");
        let unknown = OrderId::new();
        b.iter(|| {
            let _ = black_box(board.cancel_order(unknown));
        })
    });

    group.finish();
}
