use std::{fmt, sync::Arc};

use crate::{
    id_gen::Counter,
    thread::{Runnable, UncaughtPanicHandler, UnstartedThread},
};

use super::ThreadFactory;

/// Thread factory built by [`ThreadFactoryBuilder`](super::ThreadFactoryBuilder).
///
/// Delegates to the wrapped factory, then renames the thread and sets its daemon status, uncaught
/// panic handler and priority. Safe to share between threads; the only mutable state is the
/// thread counter.
pub struct DecoratingThreadFactory {
    wrapped_thread_factory: Arc<dyn ThreadFactory>,
    name_prefix: Option<String>,
    name: Option<String>,
    daemon_threads: bool,
    uncaught_panic_handler: Option<Arc<dyn UncaughtPanicHandler>>,
    priority: Option<i32>,
    thread_counter: Counter,
}

impl DecoratingThreadFactory {
    pub(crate) fn new(
        wrapped_thread_factory: Arc<dyn ThreadFactory>,
        name_prefix: Option<String>,
        name: Option<String>,
        daemon_threads: bool,
        uncaught_panic_handler: Option<Arc<dyn UncaughtPanicHandler>>,
        priority: Option<i32>,
    ) -> Self {
        tracing::debug!(
            ?name_prefix,
            ?name,
            daemon_threads,
            ?priority,
            "thread factory built"
        );

        DecoratingThreadFactory {
            wrapped_thread_factory,
            name_prefix,
            name,
            daemon_threads,
            uncaught_panic_handler,
            priority,
            thread_counter: Counter::new(),
        }
    }

    pub fn name_prefix(&self) -> Option<&str> {
        self.name_prefix.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_daemon(&self) -> bool {
        self.daemon_threads
    }

    pub fn priority(&self) -> Option<i32> {
        self.priority
    }

    /// New name for a thread currently called `original`, or `None` to leave it as is.
    ///
    /// Takes a number from the thread counter whenever a name is configured.
    pub fn thread_name(&self, original: &str) -> Option<String> {
        match (&self.name_prefix, &self.name) {
            (Some(prefix), Some(name)) => Some(format!(
                "{}-{}-{}",
                prefix,
                name,
                self.thread_counter.get_and_increment()
            )),
            (Some(prefix), None) => Some(format!("{}-{}", prefix, original)),
            (None, Some(name)) => Some(format!(
                "{}-{}",
                name,
                self.thread_counter.get_and_increment()
            )),
            (None, None) => None,
        }
    }
}

impl ThreadFactory for DecoratingThreadFactory {
    fn new_thread(&self, runnable: Runnable) -> Option<UnstartedThread> {
        let mut thread = self.wrapped_thread_factory.new_thread(runnable)?;

        if let Some(name) = self.thread_name(thread.name()) {
            thread.set_name(name);
        }

        thread.set_daemon(self.daemon_threads);

        if let Some(handler) = &self.uncaught_panic_handler {
            thread.set_uncaught_panic_handler(Some(handler.clone()));
        }

        if let Some(priority) = self.priority {
            // validado no builder
            thread.set_checked_priority(priority);
        }

        tracing::trace!(name = thread.name(), "thread decorated");

        Some(thread)
    }
}

impl fmt::Debug for DecoratingThreadFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoratingThreadFactory")
            .field("name_prefix", &self.name_prefix)
            .field("name", &self.name)
            .field("daemon_threads", &self.daemon_threads)
            .field(
                "uncaught_panic_handler",
                &self.uncaught_panic_handler.is_some(),
            )
            .field("priority", &self.priority)
            .field("thread_counter", &self.thread_counter)
            .finish_non_exhaustive()
    }
}
