//! Error handling.
//!
//! Only configuration and input errors abort the process; everything that
//! can go wrong for a single domain or record is captured in the report
//! data model and surfaced in the output instead of being propagated.

mod types;

// Re-export public API
pub use types::InitializationError;
