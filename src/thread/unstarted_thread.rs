use std::{
    fmt, io,
    panic::{self, AssertUnwindSafe},
    sync::Arc,
    thread,
};

use crate::{error, id_gen, thread_priority};

use super::{Runnable, ThreadHandle, UncaughtPanicHandler, NORM_PRIORITY};

/// A thread that has been created but not started yet.
///
/// Everything about it can still be changed: name, daemon status, uncaught panic handler, priority
/// and stack size. Nothing runs until [`UnstartedThread::start`].
pub struct UnstartedThread {
    runnable: Runnable,
    name: String,
    daemon: bool,
    uncaught_panic_handler: Option<Arc<dyn UncaughtPanicHandler>>,
    // None until someone sets it; only an explicit priority reaches the OS
    priority: Option<i32>,
    stack_size: Option<usize>,
}

impl UnstartedThread {
    /// Creates a raw thread named `Thread-<n>`, non-daemon, at [`NORM_PRIORITY`].
    pub fn new(runnable: Runnable) -> Self {
        Self::with_name(runnable, format!("Thread-{}", id_gen::next_thread_number()))
    }

    pub fn with_name(runnable: Runnable, name: impl Into<String>) -> Self {
        UnstartedThread {
            runnable,
            name: name.into(),
            daemon: false,
            uncaught_panic_handler: None,
            priority: None,
            stack_size: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn is_daemon(&self) -> bool {
        self.daemon
    }

    pub fn set_daemon(&mut self, daemon: bool) {
        self.daemon = daemon;
    }

    pub fn uncaught_panic_handler(&self) -> Option<&Arc<dyn UncaughtPanicHandler>> {
        self.uncaught_panic_handler.as_ref()
    }

    pub fn set_uncaught_panic_handler(&mut self, handler: Option<Arc<dyn UncaughtPanicHandler>>) {
        self.uncaught_panic_handler = handler;
    }

    /// [`NORM_PRIORITY`] until a priority is set.
    pub fn priority(&self) -> i32 {
        self.priority.unwrap_or(NORM_PRIORITY)
    }

    /// Whether [`UnstartedThread::set_priority`] was called. Only then does `start` touch the OS
    /// thread's priority; otherwise it keeps whatever it inherits.
    pub fn is_priority_set(&self) -> bool {
        self.priority.is_some()
    }

    /// Fails with [`error::Error::InvalidPriority`] outside `[MIN_PRIORITY, MAX_PRIORITY]`,
    /// leaving the current priority in place.
    pub fn set_priority(&mut self, priority: i32) -> error::Result<()> {
        self.priority = Some(error::check_priority(priority)?);
        Ok(())
    }

    /// For priorities already checked against the range.
    pub(crate) fn set_checked_priority(&mut self, priority: i32) {
        self.priority = Some(priority);
    }

    pub fn stack_size(&self) -> Option<usize> {
        self.stack_size
    }

    pub fn set_stack_size(&mut self, stack_size: Option<usize>) {
        self.stack_size = stack_size;
    }

    /// Spawns the OS thread and runs the unit of work on it.
    pub fn start(self) -> io::Result<ThreadHandle> {
        let UnstartedThread {
            runnable,
            name,
            daemon,
            uncaught_panic_handler,
            priority,
            stack_size,
        } = self;

        // std entra em pânico com nomes contendo '\0'; melhor devolver erro
        if name.contains('\0') {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "thread name may not contain interior null bytes",
            ));
        }

        let mut builder = thread::Builder::new().name(name.clone());
        if let Some(size) = stack_size {
            builder = builder.stack_size(size);
        }

        let thread_name = name.clone();
        let inner = builder.spawn(move || {
            if let Some(priority) = priority {
                thread_priority::apply_to_current_thread(priority);
            }

            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(runnable)) {
                match uncaught_panic_handler {
                    Some(handler) => handler.uncaught_panic(&thread_name, payload.as_ref()),
                    None => panic::resume_unwind(payload),
                }
            }
        })?;

        tracing::debug!(name = %name, daemon, ?priority, "thread started");

        Ok(ThreadHandle::new(name, daemon, inner))
    }
}

impl fmt::Debug for UnstartedThread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnstartedThread")
            .field("name", &self.name)
            .field("daemon", &self.daemon)
            .field(
                "uncaught_panic_handler",
                &self.uncaught_panic_handler.is_some(),
            )
            .field("priority", &self.priority)
            .field("stack_size", &self.stack_size)
            .finish_non_exhaustive()
    }
}
