//! DNS resolver initialization.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{NameServerConfig, Protocol, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Builds the shared DNS resolver from the configured nameserver list.
///
/// Every upstream is queried over UDP with negative responses trusted, so an
/// NXDOMAIN from one of the configured public resolvers is final. Retrying
/// across the listed servers is the resolver library's job; nothing above
/// this layer re-implements that policy.
///
/// # Errors
///
/// Returns `InitializationError::InvalidNameserver` when a configured
/// address does not parse. Timeout and concurrency validation happens in
/// [`Config::validate`] before this is called.
pub fn init_resolver(config: &Config) -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    let mut resolver_config = ResolverConfig::new();
    for addr in config.nameserver_addrs()? {
        resolver_config.add_name_server(NameServerConfig {
            socket_addr: addr,
            protocol: Protocol::Udp,
            tls_dns_name: None,
            trust_negative_responses: true,
            bind_addr: None,
        });
    }

    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(config.timeout_seconds);
    opts.attempts = 2; // fail fast rather than grinding through retries
                       // ndots 0 prevents search-domain appending on bare names
    opts.ndots = 0;

    Ok(Arc::new(TokioAsyncResolver::tokio(resolver_config, opts)))
}
