//! Per-domain probing: all six record kinds, concurrently.

use log::{debug, warn};

use crate::dns::resolve::RecordLookup;
use crate::models::{DomainReport, RecordKind, RecordOutcome};

/// Probes one domain: issues the six record-kind queries concurrently and
/// assembles the report.
///
/// The queries are independent, so the wall-clock cost of a probe is about
/// one query timeout rather than six. This never fails: transport faults
/// are captured as `Fault` outcomes on the affected fields.
pub async fn probe_domain(domain: &str, lookup: &dyn RecordLookup) -> DomainReport {
    let (cname, a, ns, mx, txt, aaaa) = tokio::join!(
        query_record(domain, RecordKind::Cname, lookup),
        query_record(domain, RecordKind::A, lookup),
        query_record(domain, RecordKind::Ns, lookup),
        query_record(domain, RecordKind::Mx, lookup),
        query_record(domain, RecordKind::Txt, lookup),
        query_record(domain, RecordKind::Aaaa, lookup),
    );

    debug!("Assembled record set for {domain}");
    DomainReport::from_outcomes(domain, cname, a, ns, mx, txt, aaaa)
}

async fn query_record(domain: &str, kind: RecordKind, lookup: &dyn RecordLookup) -> RecordOutcome {
    match lookup.lookup(domain, kind).await {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!("{kind} lookup failed for {domain}: {e:#}");
            RecordOutcome::Fault(e.to_string())
        }
    }
}
