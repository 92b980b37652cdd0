pub mod thread_handle;
pub mod uncaught_panic_handler;
pub mod unstarted_thread;

pub use thread_handle::ThreadHandle;
pub use uncaught_panic_handler::{panic_message, LoggingPanicHandler, UncaughtPanicHandler};
pub use unstarted_thread::UnstartedThread;

/// Lowest priority a thread can be given.
pub const MIN_PRIORITY: i32 = 1;

/// Priority a raw thread reports until one is set.
pub const NORM_PRIORITY: i32 = 5;

/// Highest priority a thread can be given.
pub const MAX_PRIORITY: i32 = 10;

/// A unit of work, run once by the thread it is handed to.
pub type Runnable = Box<dyn FnOnce() + Send + 'static>;
