//! Lets a tokio runtime name and prioritize its threads like a [`DecoratingThreadFactory`].
//!
//! Tokio spawns its own threads, so only the naming policy and the priority carry over. The
//! daemon flag and the uncaught panic handler do not apply to runtime threads.

use std::sync::Arc;

use tokio::runtime::Builder;

use crate::{factory::DecoratingThreadFactory, thread_priority};

/// Name tokio gives its threads when nobody asks otherwise.
pub const TOKIO_THREAD_NAME: &str = "tokio-runtime-worker";

impl DecoratingThreadFactory {
    /// Installs this factory's naming and priority on a runtime builder.
    ///
    /// Worker and blocking threads share the factory's thread counter.
    pub fn configure_runtime<'a>(self: &Arc<Self>, builder: &'a mut Builder) -> &'a mut Builder {
        let naming = Arc::clone(self);
        builder.thread_name_fn(move || {
            naming
                .thread_name(TOKIO_THREAD_NAME)
                .unwrap_or_else(|| TOKIO_THREAD_NAME.to_string())
        });

        if let Some(priority) = self.priority() {
            builder.on_thread_start(move || thread_priority::apply_to_current_thread(priority));
        }

        builder
    }
}
