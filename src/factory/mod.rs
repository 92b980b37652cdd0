use crate::thread::{Runnable, UnstartedThread};

pub mod builder;
pub mod decorating_factory;
pub mod default_factory;

pub use builder::{ThreadFactoryBuilder, DEFAULT_NAME_PREFIX};
pub use decorating_factory::DecoratingThreadFactory;
pub use default_factory::{default_thread_factory, DefaultThreadFactory};

/// Creates threads for units of work.
///
/// Implementations must be callable from many threads at once. Returning `None` means the
/// factory declined to create a thread.
pub trait ThreadFactory: Send + Sync {
    fn new_thread(&self, runnable: Runnable) -> Option<UnstartedThread>;
}

impl<F> ThreadFactory for F
where
    F: Fn(Runnable) -> Option<UnstartedThread> + Send + Sync,
{
    fn new_thread(&self, runnable: Runnable) -> Option<UnstartedThread> {
        self(runnable)
    }
}
