//! domain_recon library: concurrent DNS takeover reconnaissance
//!
//! Given a list of candidate subdomains, this library resolves six record
//! types per domain against a fixed set of upstream resolvers, normalizes
//! every failure state into a small outcome taxonomy, and classifies each
//! domain's exposure to dangling-DNS subdomain takeover.
//!
//! # Example
//!
//! ```no_run
//! use domain_recon::{run_lookup, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("subdomains.txt"),
//!     max_concurrency: 16,
//!     ..Default::default()
//! };
//!
//! let outcome = run_lookup(config).await?;
//! for report in &outcome.reports {
//!     if report.takeover_suspected {
//!         println!("{} looks claimable", report.domain);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod dns;
mod error_handling;
pub mod export;
pub mod initialization;
mod models;
mod takeover;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use dns::{probe_domain, RecordLookup, WireResolver};
pub use error_handling::InitializationError;
pub use export::{active_columns, render_table, write_workbook, Column};
pub use models::{DomainReport, Existence, RecordKind, RecordOutcome};
pub use run::{run_lookup, run_lookup_with, LookupRun};
pub use takeover::TakeoverRules;

// Internal run module (contains the batch orchestration logic)
mod run {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use anyhow::{Context, Result};
    use futures::stream::FuturesUnordered;
    use futures::StreamExt;
    use log::{info, warn};
    use tokio::io::{AsyncBufReadExt, BufReader};
    use tokio_util::sync::CancellationToken;

    use crate::config::{Config, LOGGING_INTERVAL_SECS};
    use crate::dns::{probe_domain, RecordLookup, WireResolver};
    use crate::initialization::{init_resolver, init_semaphore};
    use crate::models::DomainReport;
    use crate::takeover::TakeoverRules;

    /// Results of a lookup run.
    ///
    /// `reports` follows the input order exactly; domains whose probes were
    /// abandoned by a cancellation are omitted rather than fabricated.
    #[derive(Debug, Clone)]
    pub struct LookupRun {
        /// Ordered per-domain reports.
        pub reports: Vec<DomainReport>,
        /// Number of domains read from the input file.
        pub total_domains: usize,
        /// Elapsed wall-clock time in seconds.
        pub elapsed_seconds: f64,
    }

    impl LookupRun {
        /// Number of reports flagged for possible takeover.
        pub fn suspected(&self) -> usize {
            self.reports
                .iter()
                .filter(|report| report.takeover_suspected)
                .count()
        }
    }

    /// Runs a lookup batch with the provided configuration.
    ///
    /// This is the main entry point for the library. It validates the
    /// configuration, builds the wire resolver, probes every domain from the
    /// input file under the configured concurrency bound, and returns the
    /// ordered reports.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid (bad nameserver,
    /// zero timeout or concurrency) or the input file cannot be read. No
    /// per-domain resolution state is ever an error.
    pub async fn run_lookup(config: Config) -> Result<LookupRun> {
        config.validate()?;
        let resolver = init_resolver(&config)?;
        let lookup: Arc<dyn RecordLookup> = Arc::new(WireResolver::new(resolver));
        run_lookup_with(config, lookup, TakeoverRules::builtin()).await
    }

    /// Runs a lookup batch against an arbitrary [`RecordLookup`]
    /// implementation and fingerprint rule set.
    ///
    /// This is the seam the integration tests drive with scripted
    /// resolvers; [`run_lookup`] delegates here after wiring the real one.
    pub async fn run_lookup_with(
        config: Config,
        lookup: Arc<dyn RecordLookup>,
        rules: TakeoverRules,
    ) -> Result<LookupRun> {
        let domains = read_domains(&config).await?;
        info!("Total domains in file: {}", domains.len());

        let semaphore = init_semaphore(config.max_concurrency);
        let cancel = CancellationToken::new();
        if let Some(secs) = config.run_timeout_seconds {
            let deadline = cancel.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_secs(secs)).await;
                deadline.cancel();
            });
        }

        let start_time = std::time::Instant::now();
        let completed = Arc::new(AtomicUsize::new(0));
        let rules = Arc::new(rules);

        let logging_cancel = CancellationToken::new();
        let logging_task = {
            let cancel = logging_cancel.child_token();
            let completed = Arc::clone(&completed);
            tokio::spawn(async move {
                let mut interval =
                    tokio::time::interval(Duration::from_secs(LOGGING_INTERVAL_SECS));
                interval.tick().await; // first tick fires immediately
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            log_progress(start_time, &completed);
                        }
                        _ = cancel.cancelled() => {
                            break;
                        }
                    }
                }
            })
        };

        let mut tasks = FuturesUnordered::new();
        for (index, domain) in domains.iter().cloned().enumerate() {
            let permit = tokio::select! {
                permit = Arc::clone(&semaphore).acquire_owned() => match permit {
                    Ok(permit) => permit,
                    Err(_) => {
                        warn!("Semaphore closed, skipping domain: {domain}");
                        continue;
                    }
                },
                _ = cancel.cancelled() => {
                    warn!("Run cancelled; no further probes will be issued");
                    break;
                }
            };

            let lookup = Arc::clone(&lookup);
            let rules = Arc::clone(&rules);
            let completed = Arc::clone(&completed);
            tasks.push(tokio::spawn(async move {
                let _permit = permit;
                let mut report = probe_domain(&domain, lookup.as_ref()).await;
                rules.annotate(&mut report);
                completed.fetch_add(1, Ordering::SeqCst);
                (index, report)
            }));
        }

        // Index-addressed slots keep the output in input order no matter
        // which probes finish first.
        let mut slots: Vec<Option<DomainReport>> = vec![None; domains.len()];
        loop {
            tokio::select! {
                biased;
                joined = tasks.next() => match joined {
                    Some(Ok((index, report))) => slots[index] = Some(report),
                    Some(Err(join_error)) => {
                        warn!("Probe task panicked: {join_error:?}");
                    }
                    None => break,
                },
                _ = cancel.cancelled() => {
                    warn!("Run cancelled; abandoning {} in-flight probe(s)", tasks.len());
                    break;
                }
            }
        }

        logging_cancel.cancel();
        let _ = logging_task.await;
        log_progress(start_time, &completed);

        let reports: Vec<DomainReport> = slots.into_iter().flatten().collect();
        let elapsed_seconds = start_time.elapsed().as_secs_f64();

        Ok(LookupRun {
            total_domains: domains.len(),
            reports,
            elapsed_seconds,
        })
    }

    /// Reads the candidate list: one domain per line, whitespace trimmed,
    /// blank lines and `#` comments skipped.
    async fn read_domains(config: &Config) -> Result<Vec<String>> {
        let file = tokio::fs::File::open(&config.file)
            .await
            .with_context(|| format!("Failed to open input file {}", config.file.display()))?;
        let mut lines = BufReader::new(file).lines();

        let mut domains = Vec::new();
        while let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read line from input file")?
        {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            domains.push(trimmed.to_string());
        }
        Ok(domains)
    }

    fn log_progress(start_time: std::time::Instant, completed: &AtomicUsize) {
        let elapsed_secs = start_time.elapsed().as_secs_f64();
        let done = completed.load(Ordering::SeqCst);
        let rate = if elapsed_secs > 0.0 {
            done as f64 / elapsed_secs
        } else {
            0.0
        };
        info!("Probed {done} domains in {elapsed_secs:.2} seconds (~{rate:.2} domains/sec)");
    }
}
