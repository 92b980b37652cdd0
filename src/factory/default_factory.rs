use crate::{
    id_gen::{self, Counter, UniqueId},
    thread::{Runnable, UnstartedThread},
};

use super::ThreadFactory;

/// The platform default thread factory.
///
/// Names threads `pool-<pool>-thread-<n>`, where `pool` is taken from a process-wide counter when
/// the factory is created and `n` counts the threads of this factory from 1. Threads are
/// non-daemon and keep the normal priority.
#[derive(Debug)]
pub struct DefaultThreadFactory {
    pool_number: UniqueId,
    thread_number: Counter,
}

impl DefaultThreadFactory {
    pub fn new() -> Self {
        DefaultThreadFactory {
            pool_number: id_gen::next_pool_number(),
            thread_number: Counter::new(),
        }
    }

    pub fn name_prefix(&self) -> String {
        format!("pool-{}-thread-", self.pool_number)
    }
}

impl Default for DefaultThreadFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ThreadFactory for DefaultThreadFactory {
    fn new_thread(&self, runnable: Runnable) -> Option<UnstartedThread> {
        let name = format!(
            "{}{}",
            self.name_prefix(),
            self.thread_number.get_and_increment()
        );
        Some(UnstartedThread::with_name(runnable, name))
    }
}

/// Returns a fresh [`DefaultThreadFactory`].
pub fn default_thread_factory() -> DefaultThreadFactory {
    DefaultThreadFactory::new()
}
