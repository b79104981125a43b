//! Core data model: record kinds, lookup outcomes, and per-domain reports.

use strum_macros::EnumIter as EnumIterMacro;

/// DNS record types queried for every candidate subdomain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum RecordKind {
    /// Alias record (the takeover signal lives here)
    Cname,
    /// IPv4 address record
    A,
    /// Nameserver record
    Ns,
    /// Mail exchanger record
    Mx,
    /// Text record
    Txt,
    /// IPv6 address record
    Aaaa,
}

impl RecordKind {
    /// Returns the DNS mnemonic for this record kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Cname => "CNAME",
            RecordKind::A => "A",
            RecordKind::Ns => "NS",
            RecordKind::Mx => "MX",
            RecordKind::Txt => "TXT",
            RecordKind::Aaaa => "AAAA",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized outcome of a single record lookup.
///
/// `Resolved` keeps the values in the order the resolver returned them.
/// `Fault` covers unexpected client-library failures and is deliberately
/// distinct from `NoAnswer` so "lookup broke" never reads as "record absent".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// One or more record values were returned.
    Resolved(Vec<String>),
    /// The name exists but carries no records of the requested kind.
    NoAnswer,
    /// The queried name does not exist (NXDOMAIN).
    NoSuchDomain,
    /// Every configured nameserver failed or refused the query.
    Refused,
    /// No response arrived within the configured timeout.
    Timeout,
    /// Unexpected resolver failure; the message describes the fault.
    Fault(String),
}

impl RecordOutcome {
    /// True iff this outcome is an NXDOMAIN answer.
    pub fn is_nxdomain(&self) -> bool {
        matches!(self, RecordOutcome::NoSuchDomain)
    }

    /// Resolved values, if any.
    pub fn values(&self) -> Option<&[String]> {
        match self {
            RecordOutcome::Resolved(values) => Some(values),
            _ => None,
        }
    }
}

/// Whether a probed name exists, judged across its record outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Existence {
    /// The non-CNAME record kinds did not all come back NXDOMAIN.
    Exists,
    /// Some, but not all, of the non-CNAME record kinds were NXDOMAIN.
    PartialNxDomain,
    /// CNAME and every other record kind were NXDOMAIN.
    AllNxDomain,
}

impl std::fmt::Display for Existence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Existence::Exists => "-",
            Existence::PartialNxDomain => "PARTIAL NXDOMAIN",
            Existence::AllNxDomain => "NXDOMAIN",
        };
        f.write_str(label)
    }
}

/// Assembled record set and derived classification for one input domain.
///
/// Holding one `RecordOutcome` field per kind guarantees every report has
/// exactly one outcome per record type. A report is populated by a single
/// probe, annotated once by the takeover classifier, and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainReport {
    /// The probed domain name, as read from the input file.
    pub domain: String,
    /// CNAME lookup outcome.
    pub cname: RecordOutcome,
    /// A lookup outcome.
    pub a: RecordOutcome,
    /// NS lookup outcome.
    pub ns: RecordOutcome,
    /// MX lookup outcome.
    pub mx: RecordOutcome,
    /// TXT lookup outcome.
    pub txt: RecordOutcome,
    /// AAAA lookup outcome.
    pub aaaa: RecordOutcome,
    /// First A-record value, when one resolved.
    pub ip: Option<String>,
    /// Existence classification derived from the outcomes.
    pub existence: Existence,
    /// Set by the takeover classifier when the CNAME matches a fingerprint.
    pub takeover_suspected: bool,
}

impl DomainReport {
    /// Builds a report from the six lookup outcomes, deriving `ip` and
    /// `existence`. `takeover_suspected` starts false; the classifier
    /// annotates it.
    pub fn from_outcomes(
        domain: impl Into<String>,
        cname: RecordOutcome,
        a: RecordOutcome,
        ns: RecordOutcome,
        mx: RecordOutcome,
        txt: RecordOutcome,
        aaaa: RecordOutcome,
    ) -> Self {
        let ip = a
            .values()
            .and_then(|values| values.first())
            .map(|value| value.to_string());
        let existence = derive_existence(&cname, [&a, &ns, &mx, &txt, &aaaa]);
        DomainReport {
            domain: domain.into(),
            cname,
            a,
            ns,
            mx,
            txt,
            aaaa,
            ip,
            existence,
            takeover_suspected: false,
        }
    }

    /// Returns the outcome recorded for `kind`.
    pub fn record(&self, kind: RecordKind) -> &RecordOutcome {
        match kind {
            RecordKind::Cname => &self.cname,
            RecordKind::A => &self.a,
            RecordKind::Ns => &self.ns,
            RecordKind::Mx => &self.mx,
            RecordKind::Txt => &self.txt,
            RecordKind::Aaaa => &self.aaaa,
        }
    }
}

// Existence is judged over the five non-CNAME kinds; only the all-NXDOMAIN
// classification additionally requires the CNAME to be NXDOMAIN. The partial
// check deliberately ignores CNAME.
fn derive_existence(cname: &RecordOutcome, others: [&RecordOutcome; 5]) -> Existence {
    let nx_count = others.iter().filter(|o| o.is_nxdomain()).count();
    if nx_count == others.len() && cname.is_nxdomain() {
        Existence::AllNxDomain
    } else if nx_count > 0 && nx_count < others.len() {
        Existence::PartialNxDomain
    } else {
        Existence::Exists
    }
}
