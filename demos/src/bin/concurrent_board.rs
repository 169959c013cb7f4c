use orderboard_rs::{OrderBoard, OrderId, OrderRequest, Side, setup_logger, standard_board};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};
use tracing::info;

// Number of threads to use for the test
const THREAD_COUNT: usize = 8;
// Duration of the test in seconds
const TEST_DURATION_SECS: u64 = 5;
// Resting orders each registrar thread keeps live before replacing the oldest
const MAX_RESTING_ORDERS: usize = 500;

fn main() {
    // Set up logging
    setup_logger();
    info!("Multi-threaded Order Board Performance Test");
    info!("-------------------------------------------");
    info!("Threads: {}", THREAD_COUNT);
    info!("Duration: {} seconds", TEST_DURATION_SECS);

    // Run the multi-threaded test
    run_performance_test();
}

fn run_performance_test() {
    // Create a shared board
    let board = Arc::new(standard_board("SILVER"));

    // Pre-populate with orders to have a realistic starting state
    populate_board(&board, 1000);

    // Create thread performance counters
    let mut operation_counters = vec![0u64; THREAD_COUNT];

    // Synchronization barrier to ensure all threads start at the same time
    let barrier = Arc::new(Barrier::new(THREAD_COUNT + 1)); // +1 for main thread

    // Flag to signal threads to stop
    let running = Arc::new(std::sync::atomic::AtomicBool::new(true));

    // Spawn worker threads
    let mut handles = Vec::with_capacity(THREAD_COUNT);

    for thread_id in 0..THREAD_COUNT {
        let thread_board = Arc::clone(&board);
        let thread_barrier = Arc::clone(&barrier);
        let thread_running = Arc::clone(&running);

        let handle = thread::spawn(move || {
            // Wait for all threads to be ready
            thread_barrier.wait();

            let mut local_counter: u64 = 0;
            // Identifiers of the resting orders this thread registered
            let mut own_ids: Vec<OrderId> = Vec::new();

            // Run operations until the main thread signals to stop
            while thread_running.load(std::sync::atomic::Ordering::Relaxed) {
                // Perform operations based on thread ID to simulate different workloads
                match thread_id % 4 {
                    0 | 1 => {
                        // These threads register resting orders, replacing
                        // their oldest once enough are live
                        let buy_side = thread_id % 4 == 0;
                        let side = if buy_side { Side::Buy } else { Side::Sell };
                        let price_base = if buy_side { dec!(295) } else { dec!(305) };
                        let price = price_base + Decimal::from(local_counter % 10);

                        let request = OrderRequest::new("registrar", dec!(1.0), price, side);
                        if let Ok(id) = thread_board.register_order(&request) {
                            own_ids.push(id);
                        }

                        if own_ids.len() >= MAX_RESTING_ORDERS {
                            let oldest = own_ids.swap_remove(0);
                            let _ = thread_board.cancel_order(oldest);
                        }
                    }
                    2 => {
                        // This thread churns: register an order, cancel it
                        // straight away, and occasionally try an identifier
                        // that was never assigned
                        let price = dec!(300) + Decimal::from(local_counter % 3);
                        let request = OrderRequest::new("churner", dec!(0.5), price, Side::Buy);

                        if let Ok(id) = thread_board.register_order(&request) {
                            let _ = thread_board.cancel_order(id);
                        }

                        if local_counter % 10 == 0 {
                            let _ = thread_board.cancel_order(OrderId::new());
                        }
                    }
                    3 => {
                        // This thread queries the board
                        match local_counter % 4 {
                            0 => {
                                let _ = thread_board.order_summary(Side::Buy);
                            }
                            1 => {
                                let _ = thread_board.order_summary(Side::Sell);
                            }
                            2 => {
                                let _ = thread_board.order_count();
                            }
                            _ => {
                                let _ = thread_board.order_summary(Side::Sell).best().copied();
                            }
                        }
                    }
                    _ => unreachable!(),
                }

                local_counter += 1;
            }

            // Return the number of operations performed
            local_counter
        });

        handles.push(handle);
    }

    // Start the test
    info!("Starting performance test...");
    let start_time = Instant::now();

    // Release all threads to start working
    barrier.wait();

    // Run the test for the specified duration
    thread::sleep(Duration::from_secs(TEST_DURATION_SECS));

    // Signal threads to stop
    running.store(false, std::sync::atomic::Ordering::Relaxed);

    // Wait for all threads to finish and collect their operation counts
    for (i, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(count) => {
                operation_counters[i] = count;
            }
            Err(_) => {
                info!("Thread {} panicked", i);
            }
        }
    }

    let elapsed = start_time.elapsed();
    info!("Performance test completed in {:?}", elapsed);

    // Calculate total operations and operations per second
    let total_operations: u64 = operation_counters.iter().sum();
    let operations_per_sec = total_operations as f64 / elapsed.as_secs_f64();

    // Print performance results
    info!("\nPerformance Results:");
    info!("-------------------");
    info!("Total operations: {}", total_operations);
    info!("Operations per second: {:.2}", operations_per_sec);

    // Print per-thread statistics
    info!("\nPer-thread Operations:");
    for (i, &count) in operation_counters.iter().enumerate() {
        let thread_type = match i % 4 {
            0 => "Buy Registrar",
            1 => "Sell Registrar",
            2 => "Cancellation Churner",
            3 => "Summary Reader",
            _ => unreachable!(),
        };

        info!("Thread {} ({}): {} operations", i, thread_type, count);
    }

    // Print board state after the test
    print_board_state(&board);
}

fn populate_board(board: &OrderBoard, order_count: usize) {
    info!("Populating board with {} initial orders...", order_count);

    // Buy orders spread across a band of prices
    for i in 0..(order_count / 2) {
        let price = dec!(295) + Decimal::from(i % 10); // 295-304
        let quantity = dec!(1.0) + Decimal::from(i % 5); // 1.0-5.0
        let request = OrderRequest::new("seed-buy", quantity, price, Side::Buy);
        let _ = board.register_order(&request);
    }

    // Sell orders above them
    for i in 0..(order_count / 2) {
        let price = dec!(305) + Decimal::from(i % 10); // 305-314
        let quantity = dec!(1.0) + Decimal::from(i % 5); // 1.0-5.0
        let request = OrderRequest::new("seed-sell", quantity, price, Side::Sell);
        let _ = board.register_order(&request);
    }

    info!("Board populated successfully.");
}

fn print_board_state(board: &OrderBoard) {
    info!("\nBoard State After Test:");
    info!("-----------------------");

    // Board summary
    info!("Commodity: {}", board.commodity());

    let buys = board.order_summary(Side::Buy);
    let sells = board.order_summary(Side::Sell);

    // Best prices
    match (buys.best(), sells.best()) {
        (Some(bid), Some(ask)) => {
            info!("Best buy: {} for {}", bid.price, bid.total_quantity);
            info!("Best sell: {} for {}", ask.price, ask.total_quantity);
            info!("Spread: {}", ask.price - bid.price);
        }
        (Some(bid), None) => {
            info!("Best buy: {} for {}", bid.price, bid.total_quantity);
            info!("No sell orders present");
        }
        (None, Some(ask)) => {
            info!("No buy orders present");
            info!("Best sell: {} for {}", ask.price, ask.total_quantity);
        }
        (None, None) => {
            info!("No orders on the board");
        }
    }

    // Order counts
    info!("Total live orders: {}", board.order_count());

    // Level counts include levels cancelled down to zero
    info!("Number of buy price levels: {}", board.level_count(Side::Buy));
    info!(
        "Number of sell price levels: {}",
        board.level_count(Side::Sell)
    );

    // Top levels per side
    info!("\nTop Buy Levels:");
    for level in buys.levels.iter().take(3) {
        info!("Price: {}, Quantity: {}", level.price, level.total_quantity);
    }

    info!("\nTop Sell Levels:");
    for level in sells.levels.iter().take(3) {
        info!("Price: {}, Quantity: {}", level.price, level.total_quantity);
    }
}
