use std::sync::atomic::{AtomicUsize, Ordering};

// acumuladores globais para gerar números de threads e pools.
// o AtomicUsize garante segurança em acesso concorrente.
static THREAD_ACCUMULATOR: AtomicUsize = AtomicUsize::new(0);
static POOL_ACCUMULATOR: AtomicUsize = AtomicUsize::new(1);

pub type UniqueId = usize;

/// Number used for the `Thread-<n>` name of a raw thread. Starts at 0.
pub fn next_thread_number() -> UniqueId {
    THREAD_ACCUMULATOR.fetch_add(1, Ordering::Relaxed)
}

/// Number used for the `pool-<n>-thread-<m>` names of a default factory. Starts at 1.
pub fn next_pool_number() -> UniqueId {
    POOL_ACCUMULATOR.fetch_add(1, Ordering::Relaxed)
}

/// Per-instance counter, handing out 1, 2, 3, ...
///
/// Each factory owns one; two counters never share a sequence.
#[derive(Debug)]
pub struct Counter(AtomicUsize);

impl Counter {
    pub fn new() -> Self {
        Counter(AtomicUsize::new(1))
    }

    /// Returns the current value and increments it, atomically.
    pub fn get_and_increment(&self) -> UniqueId {
        self.0.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}
