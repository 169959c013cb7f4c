//! Support utilities shared across the crate: logging setup, sequential
//! identifier generation and wall-clock time.

mod logger;
mod sequence;
mod time;


pub use logger::setup_logger;
pub use sequence::UuidGenerator;
pub use time::current_time_millis;
