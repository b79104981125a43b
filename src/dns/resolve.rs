//! Single-record resolution against the configured upstream nameservers.
//!
//! This is the lowest layer of the engine: one (domain, kind) query in, one
//! normalized [`RecordOutcome`] out. Negative responses are data; only
//! failures with no defined mapping escape as errors, and the prober turns
//! those into `Fault` cells.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::lookup::Lookup;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::models::{RecordKind, RecordOutcome};

/// The seam between the probing engine and the wire.
///
/// Production uses [`WireResolver`]; tests script outcomes with in-memory
/// implementations.
#[async_trait]
pub trait RecordLookup: Send + Sync {
    /// Resolves one record kind for one domain.
    ///
    /// Every outcome with a defined classification comes back as
    /// `Ok(RecordOutcome)`; an `Err` means the resolver failed in a way the
    /// taxonomy does not cover (a transport fault), never "no records".
    async fn lookup(&self, domain: &str, kind: RecordKind) -> Result<RecordOutcome>;
}

/// [`RecordLookup`] implementation backed by `hickory-resolver`.
pub struct WireResolver {
    inner: Arc<TokioAsyncResolver>,
}

impl WireResolver {
    /// Wraps a shared resolver instance.
    pub fn new(inner: Arc<TokioAsyncResolver>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl RecordLookup for WireResolver {
    async fn lookup(&self, domain: &str, kind: RecordKind) -> Result<RecordOutcome> {
        match self.inner.lookup(domain, record_type(kind)).await {
            Ok(answer) => {
                let values = extract_values(kind, &answer);
                if values.is_empty() {
                    // Answer section had no records of the requested kind
                    Ok(RecordOutcome::NoAnswer)
                } else {
                    Ok(RecordOutcome::Resolved(values))
                }
            }
            Err(e) => match outcome_from_error(&e) {
                Some(outcome) => Ok(outcome),
                None => Err(e.into()),
            },
        }
    }
}

/// Maps a resolver error onto the outcome taxonomy, or `None` when the
/// failure has no defined mapping and must surface as a fault.
fn outcome_from_error(error: &ResolveError) -> Option<RecordOutcome> {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => match response_code {
            ResponseCode::NXDomain => Some(RecordOutcome::NoSuchDomain),
            ResponseCode::Refused | ResponseCode::ServFail => Some(RecordOutcome::Refused),
            // NoError with an empty answer section: the name exists but the
            // requested kind is absent
            _ => Some(RecordOutcome::NoAnswer),
        },
        ResolveErrorKind::Timeout => Some(RecordOutcome::Timeout),
        ResolveErrorKind::NoConnections => Some(RecordOutcome::Refused),
        _ => None,
    }
}

fn record_type(kind: RecordKind) -> RecordType {
    match kind {
        RecordKind::Cname => RecordType::CNAME,
        RecordKind::A => RecordType::A,
        RecordKind::Ns => RecordType::NS,
        RecordKind::Mx => RecordType::MX,
        RecordKind::Txt => RecordType::TXT,
        RecordKind::Aaaa => RecordType::AAAA,
    }
}

/// Renders the answer records of the requested kind, in resolver order.
///
/// Records of other types that ride along in the answer section (CNAME
/// chains ahead of an A answer, for instance) are skipped.
fn extract_values(kind: RecordKind, answer: &Lookup) -> Vec<String> {
    answer
        .iter()
        .filter_map(|rdata| rdata_value(kind, rdata))
        .collect()
}

fn rdata_value(kind: RecordKind, rdata: &RData) -> Option<String> {
    match (kind, rdata) {
        (RecordKind::Cname, RData::CNAME(name)) => Some(trim_root(&name.to_utf8())),
        (RecordKind::A, RData::A(addr)) => Some(addr.to_string()),
        (RecordKind::Aaaa, RData::AAAA(addr)) => Some(addr.to_string()),
        (RecordKind::Ns, RData::NS(name)) => Some(trim_root(&name.to_utf8())),
        (RecordKind::Mx, RData::MX(mx)) => Some(format!(
            "{} {}",
            mx.preference(),
            trim_root(&mx.exchange().to_utf8())
        )),
        (RecordKind::Txt, RData::TXT(txt)) => Some(
            // TXT records can contain multiple character-strings - join them
            txt.iter()
                .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                .collect::<Vec<String>>()
                .join(""),
        ),
        _ => None,
    }
}

fn trim_root(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}
