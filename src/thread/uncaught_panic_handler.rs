use std::any::Any;

/// Receives the payload of a panic that escaped a thread's unit of work.
///
/// Once the handler returns, the thread terminates normally and `join` reports success.
pub trait UncaughtPanicHandler: Send + Sync {
    fn uncaught_panic(&self, thread_name: &str, payload: &(dyn Any + Send));
}

impl<F> UncaughtPanicHandler for F
where
    F: Fn(&str, &(dyn Any + Send)) + Send + Sync,
{
    fn uncaught_panic(&self, thread_name: &str, payload: &(dyn Any + Send)) {
        self(thread_name, payload)
    }
}

/// Logs uncaught panics at `error` level and swallows them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingPanicHandler;

impl UncaughtPanicHandler for LoggingPanicHandler {
    fn uncaught_panic(&self, thread_name: &str, payload: &(dyn Any + Send)) {
        tracing::error!(
            thread = thread_name,
            "uncaught panic: {}",
            panic_message(payload).unwrap_or("<non-string payload>")
        );
    }
}

/// Message carried by a panic payload, for the `&str` and `String` payloads `panic!` produces.
pub fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        Some(*message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        Some(message.as_str())
    } else {
        None
    }
}
