use criterion::{BenchmarkId, Criterion};
use orderboard_rs::{OrderRequest, Side, standard_board};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::hint::black_box;

/// Register all benchmarks for placing orders on a board
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBoard - Register Orders");

    // Benchmark registering orders spread over many price levels
    group.bench_function("register_spread_prices", |b| {
        b.iter(|| {
            let board = standard_board("silver");
            for i in 0..100 {
                let price = dec!(300) + Decimal::from(i);
                let _ = black_box(board.register_order(&OrderRequest::new(
                    "user1",
                    dec!(1.5),
                    price,
                    Side::Sell,
                )));
            }
        })
    });

    // Benchmark registering orders that all land on one price level
    group.bench_function("register_hot_price", |b| {
        b.iter(|| {
            let board = standard_board("silver");
            for _ in 0..100 {
                let _ = black_box(board.register_order(&OrderRequest::new(
                    "user1",
                    dec!(1.5),
                    dec!(306),
                    Side::Sell,
                )));
            }
        })
    });

    // Benchmark the validation-failure path, which stores nothing
    group.bench_function("reject_incomplete_request", |b| {
        let board = standard_board("silver");
        let request = OrderRequest {
            user_id: Some("user1".to_string()),
            quantity: None,
            price_per_unit: Some(dec!(306)),
            side: Some(Side::Sell),
        };
        b.iter(|| {
            let _ = black_box(board.register_order(&request));
        })
    });

    // Parametrized benchmark with different order counts
    for order_count in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("order_count_scaling", order_count),
            order_count,
            |b, &order_count| {
                b.iter(|| {
                    let board = standard_board("silver");
                    for _i in 0..order_count {
                        let _ = black_box(board.register_order(&OrderRequest::new(
                            "user1",
                            dec!(1),
                            dec!(306),
                            Side::Buy,
                        )));
                    }
                })
            },
        );
    }

    group.finish();
}
