//! Report-to-row shaping shared by the console and spreadsheet collaborators.

use strum::IntoEnumIterator;

use crate::models::{DomainReport, Existence, RecordKind, RecordOutcome};

/// One output column. Both collaborators render the same column set so the
/// console table and the spreadsheet always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// The probed domain name.
    Domain,
    /// One of the six record kinds.
    Record(RecordKind),
    /// First resolved A value.
    Ip,
    /// Existence classification.
    Existence,
}

impl Column {
    /// Column header label.
    pub fn header(&self) -> &'static str {
        match self {
            Column::Domain => "Domain",
            Column::Record(kind) => kind.as_str(),
            Column::Ip => "IP",
            Column::Existence => "NXDOMAIN",
        }
    }
}

/// Computes the columns that carry at least one non-empty value across the
/// report set. A column where every row would render `"-"` is omitted
/// entirely; with no reports at all only the domain column remains, so the
/// outputs still carry a header.
pub fn active_columns(reports: &[DomainReport]) -> Vec<Column> {
    let mut columns = vec![Column::Domain];
    for kind in RecordKind::iter() {
        if reports
            .iter()
            .any(|report| outcome_cell(report.record(kind)) != "-")
        {
            columns.push(Column::Record(kind));
        }
    }
    if reports.iter().any(|report| report.ip.is_some()) {
        columns.push(Column::Ip);
    }
    if reports
        .iter()
        .any(|report| report.existence != Existence::Exists)
    {
        columns.push(Column::Existence);
    }
    columns
}

/// Renders one cell of one report.
pub fn cell_text(report: &DomainReport, column: Column) -> String {
    match column {
        Column::Domain => report.domain.clone(),
        Column::Record(kind) => outcome_cell(report.record(kind)),
        Column::Ip => report.ip.clone().unwrap_or_else(|| "-".to_string()),
        Column::Existence => report.existence.to_string(),
    }
}

/// Cell vocabulary: absent records ("no answer", NXDOMAIN) collapse to a
/// dash, while refused/timed-out/faulted lookups stay visibly distinct from
/// legitimately absent data.
fn outcome_cell(outcome: &RecordOutcome) -> String {
    match outcome {
        RecordOutcome::Resolved(values) => values.join(", "),
        RecordOutcome::NoAnswer | RecordOutcome::NoSuchDomain => "-".to_string(),
        RecordOutcome::Refused => "REFUSED".to_string(),
        RecordOutcome::Timeout => "TIMEOUT".to_string(),
        RecordOutcome::Fault(_) => "ERROR".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(value: &str) -> RecordOutcome {
        RecordOutcome::Resolved(vec![value.to_string()])
    }

    fn report_with_a(domain: &str, a: RecordOutcome) -> DomainReport {
        DomainReport::from_outcomes(
            domain,
            RecordOutcome::NoAnswer,
            a,
            RecordOutcome::NoAnswer,
            RecordOutcome::NoAnswer,
            RecordOutcome::NoAnswer,
            RecordOutcome::NoAnswer,
        )
    }

    #[test]
    fn test_outcome_cell_vocabulary() {
        assert_eq!(outcome_cell(&resolved("1.2.3.4")), "1.2.3.4");
        assert_eq!(
            outcome_cell(&RecordOutcome::Resolved(vec![
                "a.example".to_string(),
                "b.example".to_string()
            ])),
            "a.example, b.example"
        );
        assert_eq!(outcome_cell(&RecordOutcome::NoAnswer), "-");
        assert_eq!(outcome_cell(&RecordOutcome::NoSuchDomain), "-");
        assert_eq!(outcome_cell(&RecordOutcome::Refused), "REFUSED");
        assert_eq!(outcome_cell(&RecordOutcome::Timeout), "TIMEOUT");
        assert_eq!(
            outcome_cell(&RecordOutcome::Fault("io error".to_string())),
            "ERROR"
        );
    }

    #[test]
    fn test_all_dash_columns_are_omitted() {
        let reports = vec![report_with_a("a.example", resolved("1.2.3.4"))];
        let columns = active_columns(&reports);
        assert_eq!(
            columns,
            vec![Column::Domain, Column::Record(RecordKind::A), Column::Ip]
        );
    }

    #[test]
    fn test_existence_column_appears_with_nxdomain_rows() {
        let reports = vec![report_with_a("a.example", RecordOutcome::NoSuchDomain)];
        let columns = active_columns(&reports);
        assert!(columns.contains(&Column::Existence));
        // The A column itself renders "-" everywhere, so it is omitted
        assert!(!columns.contains(&Column::Record(RecordKind::A)));
    }

    #[test]
    fn test_empty_reports_keep_domain_header_only() {
        assert_eq!(active_columns(&[]), vec![Column::Domain]);
    }

    #[test]
    fn test_faulted_column_stays_active() {
        let reports = vec![report_with_a(
            "a.example",
            RecordOutcome::Fault("boom".to_string()),
        )];
        assert!(active_columns(&reports).contains(&Column::Record(RecordKind::A)));
    }

    #[test]
    fn test_cell_text_for_ip_and_existence() {
        let report = report_with_a("a.example", resolved("1.2.3.4"));
        assert_eq!(cell_text(&report, Column::Domain), "a.example");
        assert_eq!(cell_text(&report, Column::Ip), "1.2.3.4");
        assert_eq!(cell_text(&report, Column::Existence), "-");

        let nx = report_with_a("b.example", RecordOutcome::NoSuchDomain);
        assert_eq!(cell_text(&nx, Column::Ip), "-");
        assert_eq!(cell_text(&nx, Column::Existence), "PARTIAL NXDOMAIN");
    }
}
