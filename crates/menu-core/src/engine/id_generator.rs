//! Identity generators for new categories and items

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use menu_shared::config::IdStrategy;

/// Source of fresh entity ids.
///
/// Implementations must not hand out the same value twice during one
/// editing session. The engine still re-draws on a clash with an id that
/// already exists in the document (hydrated ids are not ours).
pub trait IdGenerator: Send + Sync + Debug {
    fn next_id(&self, prefix: &str) -> String;
}

/// `<prefix>_<uuid v4>`
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self, prefix: &str) -> String {
        format!("{}_{}", prefix, Uuid::new_v4().simple())
    }
}

/// `<prefix>_<n>` from a process-wide monotonic counter
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self, prefix: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}_{}", prefix, n)
    }
}

pub fn id_generator_for(strategy: IdStrategy) -> Arc<dyn IdGenerator> {
    match strategy {
        IdStrategy::Uuid => Arc::new(UuidIdGenerator),
        IdStrategy::Sequential => Arc::new(SequentialIdGenerator::new()),
    }
}
