use std::thread::{self, JoinHandle, Thread};

use super::panic_message;

/// A started thread.
///
/// Dropping the handle of a daemon thread detaches it. Dropping the handle of a non-daemon thread
/// blocks until that thread finishes.
#[derive(Debug)]
pub struct ThreadHandle {
    name: String,
    daemon: bool,
    inner: Option<JoinHandle<()>>,
}

impl ThreadHandle {
    pub(crate) fn new(name: String, daemon: bool, inner: JoinHandle<()>) -> Self {
        ThreadHandle {
            name,
            daemon,
            inner: Some(inner),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_daemon(&self) -> bool {
        self.daemon
    }

    pub fn thread(&self) -> Option<&Thread> {
        self.inner.as_ref().map(|handle| handle.thread())
    }

    pub fn is_finished(&self) -> bool {
        self.inner
            .as_ref()
            .map_or(true, |handle| handle.is_finished())
    }

    /// Waits for the thread to finish.
    ///
    /// Returns `Err` with the panic payload when the unit of work panicked and no uncaught panic
    /// handler took it.
    pub fn join(mut self) -> thread::Result<()> {
        match self.inner.take() {
            Some(handle) => handle.join(),
            None => Ok(()),
        }
    }
}

impl Drop for ThreadHandle {
    fn drop(&mut self) {
        if self.daemon {
            return;
        }

        if let Some(handle) = self.inner.take() {
            // joining ourselves would deadlock
            if handle.thread().id() == thread::current().id() {
                return;
            }
            if let Err(payload) = handle.join() {
                tracing::warn!(
                    thread = %self.name,
                    "unjoined thread panicked: {}",
                    panic_message(payload.as_ref()).unwrap_or("<non-string payload>")
                );
            }
        }
    }
}
