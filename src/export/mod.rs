//! Output collaborators.
//!
//! Both collaborators consume the same ordered report sequence and the same
//! active-column set computed in [`columns`]; neither touches the network or
//! mutates a report.

mod columns;
mod table;
mod xlsx;

// Re-export public API
pub use columns::{active_columns, Column};
pub use table::render_table;
pub use xlsx::write_workbook;
