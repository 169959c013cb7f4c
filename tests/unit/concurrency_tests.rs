//! Concurrency tests driving one board from many threads: identifier
//! uniqueness, exact totals under contention and summary consistency

use orderboard_rs::{OrderBoard, OrderRequest, Side, standard_board};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashSet;
use std::sync::{Arc, Barrier, Mutex};
use std::thread;

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_writers<F>(board: &Arc<OrderBoard>, num_threads: usize, work: F)
    where
        F: Fn(Arc<OrderBoard>, usize) + Send + Sync + Clone + 'static,
    {
        let barrier = Arc::new(Barrier::new(num_threads));
        let mut handles = vec![];

        for thread_index in 0..num_threads {
            let thread_board = Arc::clone(board);
            let thread_barrier = Arc::clone(&barrier);
            let thread_work = work.clone();

            handles.push(thread::spawn(move || {
                thread_barrier.wait();
                thread_work(thread_board, thread_index);
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn test_parallel_registrations_get_unique_ids() {
        let board = Arc::new(standard_board("silver"));
        let num_threads = 8;
        let orders_per_thread = 50;

        let all_ids = Arc::new(Mutex::new(Vec::new()));
        let collected = Arc::clone(&all_ids);

        spawn_writers(&board, num_threads, move |board, _| {
            let mut local_ids = Vec::with_capacity(orders_per_thread);
            for _ in 0..orders_per_thread {
                let id = board
                    .register_order(&OrderRequest::new(
                        "user1",
                        dec!(1),
                        dec!(306),
                        Side::Sell,
                    ))
                    .unwrap();
                local_ids.push(id);
            }
            collected.lock().unwrap().extend(local_ids);
        });

        let ids = all_ids.lock().unwrap();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(
            unique.len(),
            num_threads * orders_per_thread,
            "Every registration should get its own id"
        );
        assert_eq!(board.order_count(), num_threads * orders_per_thread);
    }

    #[test]
    fn test_hot_price_level_loses_no_update() {
        let board = Arc::new(standard_board("silver"));
        let num_threads = 8;
        let orders_per_thread = 100;

        spawn_writers(&board, num_threads, move |board, _| {
            for _ in 0..orders_per_thread {
                board
                    .register_order(&OrderRequest::new(
                        "user1",
                        dec!(0.5),
                        dec!(306),
                        Side::Sell,
                    ))
                    .unwrap();
            }
        });

        let expected = dec!(0.5) * Decimal::from(num_threads * orders_per_thread);
        let summary = board.order_summary(Side::Sell);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary.quantity_at(dec!(306)), Some(expected));
    }

    #[test]
    fn test_register_then_cancel_churn_balances_to_zero() {
        let board = Arc::new(standard_board("silver"));
        let num_threads = 4;
        let orders_per_thread = 100;

        spawn_writers(&board, num_threads, move |board, _| {
            for _ in 0..orders_per_thread {
                let id = board
                    .register_order(&OrderRequest::new(
                        "user1",
                        dec!(1),
                        dec!(306),
                        Side::Sell,
                    ))
                    .unwrap();
                board.cancel_order(id).unwrap();
            }
        });

        assert!(board.is_empty(), "Every registered order was cancelled");
        let summary = board.order_summary(Side::Sell);
        assert_eq!(summary.len(), 1, "The churned level keeps its entry");
        assert_eq!(summary.quantity_at(dec!(306)), Some(Decimal::ZERO));
    }

    #[test]
    fn test_sides_stay_exact_under_mixed_load() {
        let board = Arc::new(standard_board("silver"));
        let num_threads = 8;
        let orders_per_thread = 50;

        spawn_writers(&board, num_threads, move |board, thread_index| {
            let side = if thread_index % 2 == 0 {
                Side::Sell
            } else {
                Side::Buy
            };
            for order_index in 0..orders_per_thread {
                let price = dec!(300) + Decimal::from(order_index % 5);
                board
                    .register_order(&OrderRequest::new("user1", dec!(2), price, side))
                    .unwrap();
            }
        });

        let per_side = Decimal::from(num_threads / 2 * orders_per_thread) * dec!(2);
        assert_eq!(board.order_summary(Side::Sell).total_quantity(), per_side);
        assert_eq!(board.order_summary(Side::Buy).total_quantity(), per_side);
        assert_eq!(board.level_count(Side::Sell), 5);
        assert_eq!(board.level_count(Side::Buy), 5);
    }

    #[test]
    fn test_summaries_stay_sorted_during_churn() {
        let board = Arc::new(standard_board("silver"));
        let writer_board = Arc::clone(&board);

        let writer = thread::spawn(move || {
            for index in 0..500 {
                let price = dec!(300) + Decimal::from(index % 20);
                writer_board
                    .register_order(&OrderRequest::new("user1", dec!(1), price, Side::Sell))
                    .unwrap();
            }
        });

        // Take summaries while the writer is busy; ordering must hold in
        // every point-in-time view
        for _ in 0..100 {
            let summary = board.order_summary(Side::Sell);
            let prices: Vec<_> = summary.levels.iter().map(|level| level.price).collect();
            let mut sorted = prices.clone();
            sorted.sort();
            assert_eq!(prices, sorted, "Sell summaries must stay ascending");
        }

        writer.join().unwrap();

        let final_summary = board.order_summary(Side::Sell);
        assert_eq!(final_summary.total_quantity(), dec!(500));
        assert_eq!(final_summary.len(), 20);
    }
}
