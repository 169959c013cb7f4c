//! # Live Order Board
//!
//! A thread-safe, in-memory live order board written in Rust. This crate keeps every live
//! order for a commodity, maintains per-side price level totals incrementally as orders are
//! registered and cancelled, and renders sorted summaries of either side on demand.
//!
//! ## Key Features
//!
//! - **Concurrent by Construction**: The board is shared across threads with no external
//!   locking. Orders and price level totals live in concurrent maps; every per-key operation
//!   is linearizable.
//!
//! - **Exact Decimal Arithmetic**: Prices and quantities are exact decimals, so `3.5 + 2.0`
//!   is exactly `5.5` and `3.5` and `3.50` belong to one price level. No floating point
//!   drift ever reaches a summary.
//!
//! - **Incremental Aggregation**: Price level totals are updated atomically on each
//!   registration and cancellation instead of being recomputed, so summaries only sort and
//!   copy.
//!
//! - **Side-Canonical Summaries**: Sell levels are presented lowest price first, buy levels
//!   highest price first. The direction is fixed per side at construction.
//!
//! - **Pluggable Collaborators**: Request validation, identifier generation and record
//!   construction are injected traits. The bootstrap wiring covers the standard case;
//!   embedders substitute their own where needed.
//!
//! ## Design Goals
//!
//! 1. **Correctness**: Totals always reflect the live orders; concurrent registrations and
//!    cancellations at one price never lose an update.
//! 2. **Simplicity at the Call Site**: Four operations cover the whole surface: register,
//!    look up, cancel, summarise.
//! 3. **Honest Concurrency**: Register and cancel touch the order store and one aggregate
//!    as two steps. The narrow window in which a concurrent summary can observe one but not
//!    the other is documented on the board rather than papered over.
//!
//! ## Use Cases
//!
//! - **Live Boards**: Publishing the outstanding demand and supply per price for a traded
//!   commodity
//! - **Order Entry Layers**: A registry behind an order entry API that needs cheap,
//!   always-current level totals
//! - **Simulation**: Driving registration and cancellation flows from many threads in tests
//!   and load generators
//!
//! ## Status
//! The board keeps no history: a cancelled order is indistinguishable from one that never
//! existed, and nothing survives process exit.

pub mod model;
pub mod registry;

mod utils;

pub use model::{OrderDetails, OrderId, OrderRequest, ParseSideError, Side, ValidatedRequest};
pub use registry::{
    BoardError, DetailsAdapter, FieldPresenceValidator, IdentifierSource, OrderBoard,
    OrdersSummary, PriceLevel, RequestAdapter, RequestValidator, UuidIdSource, standard_board,
};
pub use utils::{UuidGenerator, current_time_millis, setup_logger};
