//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Fatal configuration and startup errors.
///
/// Everything here aborts the run before any query is issued. Per-record
/// resolution states (NXDOMAIN, no answer, refused, timeout) are data, not
/// errors; they live in [`crate::RecordOutcome`].
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// A nameserver was given in a form that does not parse as an address.
    #[error("Invalid nameserver address: '{0}' (expected ip or ip:port)")]
    InvalidNameserver(String),

    /// The DNS timeout must be a positive number of seconds.
    #[error("Invalid DNS timeout: {0} seconds")]
    InvalidTimeout(u64),

    /// The worker bound must allow at least one in-flight probe.
    #[error("Invalid concurrency limit: {0}")]
    InvalidConcurrency(usize),
}
