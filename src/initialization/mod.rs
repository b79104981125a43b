//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources: the
//! logger, the DNS resolver, and the concurrency semaphore. All
//! initialization functions return proper error types; an error from any of
//! them is fatal to the run.

mod logger;
mod resolver;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Initializes a semaphore for controlling concurrency.
///
/// The returned semaphore bounds the number of in-flight domain probes; it
/// is the only shared mutable coordination point between workers.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count))
}
