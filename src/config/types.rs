//! Configuration types and CLI options.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_CONCURRENCY, DEFAULT_NAMESERVERS, DNS_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Run configuration, parsed from the command line or constructed
/// programmatically.
///
/// # Examples
///
/// ```no_run
/// use domain_recon::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("subdomains.txt"),
///     max_concurrency: 8,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_recon",
    about = "Resolve DNS records for candidate subdomains and flag CNAMEs exposed to dangling-DNS takeover",
    version
)]
pub struct Config {
    /// File containing candidate subdomains, one per line
    pub file: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Maximum concurrent domain probes
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Upstream nameserver address (repeatable; defaults to Google and
    /// Cloudflare public resolvers)
    #[arg(long = "nameserver", value_name = "ADDR")]
    pub nameservers: Vec<String>,

    /// Abort the whole run after this many seconds, keeping completed results
    #[arg(long, value_name = "SECS")]
    pub run_timeout_seconds: Option<u64>,
}

impl Config {
    /// Resolves the configured nameserver list, falling back to the built-in
    /// defaults when none were given.
    pub fn nameserver_addrs(&self) -> Result<Vec<SocketAddr>, InitializationError> {
        let specs: Vec<&str> = if self.nameservers.is_empty() {
            DEFAULT_NAMESERVERS.to_vec()
        } else {
            self.nameservers.iter().map(String::as_str).collect()
        };
        specs.iter().map(|spec| parse_nameserver(spec)).collect()
    }

    /// Rejects configurations that cannot produce a valid run. Called once
    /// at startup; any error here aborts the process.
    pub fn validate(&self) -> Result<(), InitializationError> {
        if self.timeout_seconds == 0 {
            return Err(InitializationError::InvalidTimeout(self.timeout_seconds));
        }
        if self.max_concurrency == 0 {
            return Err(InitializationError::InvalidConcurrency(self.max_concurrency));
        }
        self.nameserver_addrs().map(|_| ())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("subdomains.txt"),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            max_concurrency: DEFAULT_CONCURRENCY,
            timeout_seconds: DNS_TIMEOUT_SECS,
            nameservers: Vec::new(),
            run_timeout_seconds: None,
        }
    }
}

/// Accepts either `ip` (port 53 implied) or `ip:port`.
fn parse_nameserver(spec: &str) -> Result<SocketAddr, InitializationError> {
    if let Ok(addr) = spec.parse::<SocketAddr>() {
        return Ok(addr);
    }
    spec.parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, 53))
        .map_err(|_| InitializationError::InvalidNameserver(spec.to_string()))
}
