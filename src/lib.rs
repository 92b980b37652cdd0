//! Thread factories that name, tag and prioritize the threads they create.
//!
//! A [`ThreadFactoryBuilder`] collects the settings and builds a [`DecoratingThreadFactory`], which
//! wraps another [`ThreadFactory`] and adjusts every [`UnstartedThread`] it hands out.

pub mod config;
pub mod error;
pub mod factory;
pub mod id_gen;
pub mod thread;
pub mod thread_priority;
#[cfg(feature = "tokio")]
pub mod tokio_runtime;

pub use config::ThreadFactoryConfig;
pub use error::{Error, PriorityBound, Result};
pub use factory::{
    default_thread_factory, DecoratingThreadFactory, DefaultThreadFactory, ThreadFactory,
    ThreadFactoryBuilder, DEFAULT_NAME_PREFIX,
};
pub use thread::{
    LoggingPanicHandler, Runnable, ThreadHandle, UncaughtPanicHandler, UnstartedThread,
    MAX_PRIORITY, MIN_PRIORITY, NORM_PRIORITY,
};
