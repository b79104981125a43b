//! Configuration constants.
//!
//! Defaults for concurrency, timeouts, upstream nameservers, and output
//! locations.

/// Default upstream nameservers (Google and Cloudflare public resolvers).
///
/// Overridable per run via `--nameserver`; the resolver library handles
/// retrying across the listed servers.
pub const DEFAULT_NAMESERVERS: [&str; 2] = ["8.8.8.8:53", "1.1.1.1:53"];

/// Maximum concurrent domain probes (semaphore limit).
/// Kept modest so a large input file does not hammer the upstream resolvers
/// or exhaust the local socket budget.
pub const DEFAULT_CONCURRENCY: usize = 16;

/// DNS query timeout in seconds.
/// Most queries complete in well under a second; 3s fails fast on
/// unresponsive servers while leaving headroom for slow authoritatives.
pub const DNS_TIMEOUT_SECS: u64 = 3;

/// Fixed output path for the spreadsheet collaborator.
/// Overwritten on every run.
pub const WORKBOOK_PATH: &str = "dns_lookup_results.xlsx";

/// Progress logging interval in seconds while a batch is running.
pub const LOGGING_INTERVAL_SECS: u64 = 5;
