// demos/src/bin/board_basics.rs

use orderboard_rs::{
    BoardError, DetailsAdapter, FieldPresenceValidator, OrderBoard, OrderId, OrderRequest, Side,
    UuidIdSource, setup_logger, standard_board,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{info};
use uuid::Uuid;

fn main() {
    // Set up logging
    setup_logger();
    info!("Basic Order Board Example");

    // Create a live order board for a commodity
    let board = create_board("SILVER");

    // Register orders on both sides
    demo_registering_orders(&board);

    // Display current board state
    display_board_state(&board);

    // Demonstrate order lookup and summaries
    demo_order_lookup(&board);

    // Demonstrate request validation
    demo_incomplete_requests(&board);

    // Demonstrate order cancellation
    demo_cancel_orders(&board);

    // Demonstrate deterministic identifier replay
    demo_deterministic_ids();

    // Display final board state
    info!("\nFinal Order Board State:");
    display_board_state(&board);
}

fn create_board(commodity: &str) -> OrderBoard {
    info!("Creating order board for commodity: {}", commodity);
    standard_board(commodity)
}

fn demo_registering_orders(board: &crate::OrderBoard) {
    info!("\nRegistering orders on the board...");

    // Sell orders from four users; two of them land on the same price level
    let sells = [
        ("user1", dec!(3.5), dec!(306)),
        ("user2", dec!(1.2), dec!(310)),
        ("user3", dec!(1.5), dec!(307)),
        ("user4", dec!(2.0), dec!(306)),
    ];

    for (user_id, quantity, price) in sells {
        let request = OrderRequest::new(user_id, quantity, price, Side::Sell);
        let result = board.register_order(&request);

        match result {
            Ok(id) => info!(
                "Registered SELL order: id={}, user={}, qty={}, price={}",
                id, user_id, quantity, price
            ),
            Err(e) => info!("Failed to register SELL order: {}", e),
        }
    }

    // Buy orders at stepped prices below the sells
    for i in 0..5 {
        let price = dec!(300) + Decimal::from(i); // 300, 301, 302, 303, 304
        let quantity = dec!(1.0) + Decimal::from(i) * dec!(0.5); // 1.0, 1.5, 2.0, 2.5, 3.0
        let request = OrderRequest::new("user5", quantity, price, Side::Buy);

        let result = board.register_order(&request);

        match result {
            Ok(id) => info!(
                "Registered BUY order: id={}, user=user5, qty={}, price={}",
                id, quantity, price
            ),
            Err(e) => info!("Failed to register BUY order: {}", e),
        }
    }
}

fn demo_order_lookup(board: &crate::OrderBoard) {
    info!("\nDemonstrating order lookup...");

    // Register an order and fetch it back by its identifier
    let request = OrderRequest::new("user6", dec!(4.25), dec!(311), Side::Sell);
    let id = match board.register_order(&request) {
        Ok(id) => id,
        Err(e) => {
            info!("Failed to register order: {}", e);
            return;
        }
    };

    match board.order_details(id) {
        Ok(details) => info!("Found order: {}", details),
        Err(e) => info!("Lookup failed: {}", e),
    }

    // Looking up an identifier the board never assigned fails
    match board.order_details(OrderId::new()) {
        Ok(details) => info!("Found unknown order (unexpected): {}", details),
        Err(e) => info!("Unknown identifier rejected as expected: {}", e),
    }

    // Summaries answer price level questions directly
    let sells = board.order_summary(Side::Sell);
    info!(
        "Sell summary: {} levels, {} total quantity",
        sells.len(),
        sells.total_quantity()
    );

    if let Some(quantity) = sells.quantity_at(dec!(306)) {
        info!("Quantity on offer at 306: {}", quantity);
    }

    // Summaries serialize for transport
    match serde_json::to_string(&sells) {
        Ok(json) => info!("Sell summary as JSON: {}", json),
        Err(e) => info!("Failed to serialize summary: {}", e),
    }
}

fn demo_incomplete_requests(board: &crate::OrderBoard) {
    info!("\nDemonstrating request validation...");

    // A request missing its price is rejected before anything is stored
    let request = OrderRequest {
        user_id: Some("user7".to_string()),
        quantity: Some(dec!(1.0)),
        price_per_unit: None,
        side: Some(Side::Buy),
    };

    let orders_before = board.order_count();
    let result = board.register_order(&request);

    match result {
        Ok(_) => info!("Registered incomplete request (unexpected)"),
        Err(e) => info!("Rejected incomplete request as expected: {}", e),
    }

    info!(
        "Live orders before={}, after={}",
        orders_before,
        board.order_count()
    );

    // An empty request names the first missing field
    let result = board.register_order(&OrderRequest::default());

    match result {
        Ok(_) => info!("Registered empty request (unexpected)"),
        Err(e) => info!("Rejected empty request as expected: {}", e),
    }
}

fn demo_cancel_orders(board: &crate::OrderBoard) {
    info!("\nDemonstrating order cancellation...");

    // Register an order to cancel later
    let request = OrderRequest::new("user8", dec!(2.5), dec!(305), Side::Buy);
    let order_id = match board.register_order(&request) {
        Ok(id) => {
            info!("Registered order to cancel: id={}", id);
            id
        }
        Err(e) => {
            info!("Failed to register order: {}", e);
            return;
        }
    };

    // Cancel the order
    let result = board.cancel_order(order_id);

    match result {
        Ok(details) => info!("Successfully cancelled order: {}", details),
        Err(e) => info!("Failed to cancel order: {}", e),
    }

    // A second cancellation of the same identifier fails
    let result = board.cancel_order(order_id);

    match result {
        Ok(_) => info!("Cancelled the same order twice (unexpected)"),
        Err(e) => info!("Repeat cancellation rejected as expected: {}", e),
    }

    // The emptied price level stays visible with a zero total
    let buys = board.order_summary(Side::Buy);
    if let Some(quantity) = buys.quantity_at(dec!(305)) {
        info!("Quantity at 305 after cancellation: {}", quantity);
    }
}

fn demo_deterministic_ids() {
    info!("\nDemonstrating deterministic identifier replay...");

    // Two boards sharing an identifier namespace assign the same ids in the
    // same order
    let namespace = Uuid::new_v4();
    let first = register_on_replay_board(namespace);
    let second = register_on_replay_board(namespace);

    match (first, second) {
        (Ok(first), Ok(second)) => {
            info!("First board assigned:  {}", first);
            info!("Second board assigned: {}", second);
            info!("Identifiers match: {}", first == second);
        }
        _ => info!("Failed to register on a replay board"),
    }
}

fn register_on_replay_board(namespace: Uuid) -> Result<OrderId, BoardError> {
    let board = OrderBoard::new(
        "SILVER",
        Box::new(FieldPresenceValidator),
        Box::new(UuidIdSource::with_namespace(namespace)),
        Box::new(DetailsAdapter),
    );

    let request = OrderRequest::new("user1", dec!(1.0), dec!(300), Side::Buy);
    board.register_order(&request)
}

fn display_board_state(board: &crate::OrderBoard) {
    info!("\nOrder board state for {}:", board.commodity());

    let buys = board.order_summary(Side::Buy);
    let sells = board.order_summary(Side::Sell);

    // Display best prices
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

    // Order and level counts
    info!("Total live orders: {}", board.order_count());
    info!("Buy levels known: {}", board.level_count(Side::Buy));
    info!("Sell levels known: {}", board.level_count(Side::Sell));

    info!("Buy side, highest price first:");
    for (i, level) in buys.levels.iter().enumerate() {
        info!(
            "  Level {}: price={}, quantity={}",
            i, level.price, level.total_quantity
        );
    }

    info!("Sell side, lowest price first:");
    for (i, level) in sells.levels.iter().enumerate() {
        info!(
            "  Level {}: price={}, quantity={}",
            i, level.price, level.total_quantity
        );
    }
}
