use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Thread-safe generator of sequential v5 UUIDs.
///
/// Each generator owns a namespace and an atomic counter; every call to
/// [`next`](UuidGenerator::next) hashes the next counter value into the
/// namespace. Two generators built from the same namespace therefore produce
/// the same id sequence, which keeps tests reproducible, while distinct
/// namespaces never collide.
#[derive(Debug)]
pub struct UuidGenerator {
    namespace: Uuid,
    counter: AtomicU64,
}

impl UuidGenerator {
    /// Creates a generator scoped to the given namespace
    pub fn new(namespace: Uuid) -> Self {
        Self {
            namespace,
            counter: AtomicU64::new(0),
        }
    }

    /// Returns the next identifier in the sequence
    pub fn next(&self) -> Uuid {
        let sequence = self.counter.fetch_add(1, Ordering::Relaxed);
        Uuid::new_v5(&self.namespace, &sequence.to_be_bytes())
    }
}
