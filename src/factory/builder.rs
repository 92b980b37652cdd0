use std::{fmt, sync::Arc};

use crate::{
    config::ThreadFactoryConfig,
    error::{self, Result},
    thread::UncaughtPanicHandler,
};

use super::{default_thread_factory, DecoratingThreadFactory, ThreadFactory};

/// Name prefix used until [`ThreadFactoryBuilder::with_name_prefix`] says otherwise.
pub const DEFAULT_NAME_PREFIX: &str = "ESH";

/// Builds [`DecoratingThreadFactory`] instances.
///
/// The built factory asks a wrapped [`ThreadFactory`] for each thread (the
/// [default factory](super::default_thread_factory) unless one is set) and then overwrites the
/// thread's properties as configured here.
///
/// ```
/// use thread_decor::ThreadFactoryBuilder;
///
/// let factory = ThreadFactoryBuilder::create()
///     .with_name_prefix(Some("Worker"))
///     .with_name(Some("IO"))
///     .with_daemon_threads(true)
///     .with_priority(Some(7))?
///     .build();
/// # Ok::<(), thread_decor::Error>(())
/// ```
///
/// Setters take `&mut self`; the builder is meant to be set up on one thread.
#[derive(Clone)]
pub struct ThreadFactoryBuilder {
    wrapped_thread_factory: Option<Arc<dyn ThreadFactory>>,
    name: Option<String>,
    name_prefix: Option<String>,
    daemon_threads: bool,
    uncaught_panic_handler: Option<Arc<dyn UncaughtPanicHandler>>,
    priority: Option<i32>,
}

impl ThreadFactoryBuilder {
    pub fn create() -> Self {
        ThreadFactoryBuilder {
            wrapped_thread_factory: None,
            name: None,
            name_prefix: Some(DEFAULT_NAME_PREFIX.to_string()),
            daemon_threads: false,
            uncaught_panic_handler: None,
            priority: None,
        }
    }

    /// Starts a builder from a deserialized configuration, validating its priority.
    pub fn from_config(config: &ThreadFactoryConfig) -> Result<Self> {
        let mut builder = Self::create();
        builder
            .with_name(config.name.as_deref())
            .with_name_prefix(config.name_prefix.as_deref())
            .with_daemon_threads(config.daemon)
            .with_priority(config.priority)?;
        Ok(builder)
    }

    /// Serializable part of the current settings. The wrapped factory and the panic handler are
    /// not part of it.
    pub fn config(&self) -> ThreadFactoryConfig {
        ThreadFactoryConfig {
            name: self.name.clone(),
            name_prefix: self.name_prefix.clone(),
            daemon: self.daemon_threads,
            priority: self.priority,
        }
    }

    /// Sets the factory that creates the raw threads. `None` falls back to the default factory
    /// when building.
    pub fn with_wrapped_thread_factory(
        &mut self,
        wrapped_thread_factory: Option<Arc<dyn ThreadFactory>>,
    ) -> &mut Self {
        self.wrapped_thread_factory = wrapped_thread_factory;
        self
    }

    /// Threads are named `namePrefix-name-i`, `i` counting up from 1 per built factory.
    ///
    /// Without a name they are named `namePrefix-originalName`, keeping the name the wrapped
    /// factory gave them.
    pub fn with_name(&mut self, name: Option<&str>) -> &mut Self {
        self.name = name.map(str::to_string);
        self
    }

    /// Defaults to [`DEFAULT_NAME_PREFIX`]. With `None`, threads are named `name-i`, or keep their
    /// original name if no name is set either.
    pub fn with_name_prefix(&mut self, name_prefix: Option<&str>) -> &mut Self {
        self.name_prefix = name_prefix.map(str::to_string);
        self
    }

    pub fn with_daemon_threads(&mut self, daemon_threads: bool) -> &mut Self {
        self.daemon_threads = daemon_threads;
        self
    }

    /// With `None`, the handler installed by the wrapped factory is kept.
    pub fn with_uncaught_panic_handler(
        &mut self,
        uncaught_panic_handler: Option<Arc<dyn UncaughtPanicHandler>>,
    ) -> &mut Self {
        self.uncaught_panic_handler = uncaught_panic_handler;
        self
    }

    /// Must lie within `[MIN_PRIORITY, MAX_PRIORITY]`; otherwise fails right away and the builder
    /// keeps its previous priority. With `None`, the priority set by the wrapped factory is kept.
    pub fn with_priority(&mut self, priority: Option<i32>) -> Result<&mut Self> {
        if let Some(priority) = priority {
            error::check_priority(priority)?;
        }

        self.priority = priority;
        Ok(self)
    }

    /// Builds the factory from a snapshot of the current settings. Later changes to the builder do
    /// not reach factories already built.
    pub fn build(&self) -> DecoratingThreadFactory {
        let wrapped_thread_factory = match &self.wrapped_thread_factory {
            Some(factory) => factory.clone(),
            None => Arc::new(default_thread_factory()),
        };

        DecoratingThreadFactory::new(
            wrapped_thread_factory,
            self.name_prefix.clone(),
            self.name.clone(),
            self.daemon_threads,
            self.uncaught_panic_handler.clone(),
            self.priority,
        )
    }
}

impl Default for ThreadFactoryBuilder {
    fn default() -> Self {
        Self::create()
    }
}

impl fmt::Debug for ThreadFactoryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreadFactoryBuilder")
            .field(
                "wrapped_thread_factory",
                &self.wrapped_thread_factory.is_some(),
            )
            .field("name", &self.name)
            .field("name_prefix", &self.name_prefix)
            .field("daemon_threads", &self.daemon_threads)
            .field(
                "uncaught_panic_handler",
                &self.uncaught_panic_handler.is_some(),
            )
            .field("priority", &self.priority)
            .finish()
    }
}
