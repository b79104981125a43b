//! Spreadsheet collaborator.

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Color, Format, Workbook};

use crate::export::columns::{cell_text, Column};
use crate::models::{DomainReport, RecordKind};

/// Writes the report sequence to a workbook at `path`, overwriting any
/// existing file.
///
/// One row per domain, the shared active columns plus a computed `Takeover`
/// column; suspected CNAME values are set in green so the highlight survives
/// into the spreadsheet. An empty report sequence produces a header-only
/// sheet.
pub fn write_workbook(reports: &[DomainReport], columns: &[Column], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new().set_bold();
    let takeover_format = Format::new().set_font_color(Color::Green);

    for (col, column) in columns.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, column.header(), &header_format)?;
    }
    worksheet.write_with_format(0, columns.len() as u16, "Takeover", &header_format)?;

    for (idx, report) in reports.iter().enumerate() {
        let row = (idx + 1) as u32;
        for (col, &column) in columns.iter().enumerate() {
            let value = cell_text(report, column);
            if report.takeover_suspected && column == Column::Record(RecordKind::Cname) {
                worksheet.write_with_format(row, col as u16, value, &takeover_format)?;
            } else {
                worksheet.write(row, col as u16, value)?;
            }
        }
        worksheet.write(
            row,
            columns.len() as u16,
            if report.takeover_suspected {
                "TRUE"
            } else {
                "FALSE"
            },
        )?;
    }

    worksheet.set_column_width(0, 30)?;

    workbook
        .save(path)
        .with_context(|| format!("Failed to write workbook to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::columns::active_columns;
    use crate::models::RecordOutcome;

    fn report(domain: &str, cname: RecordOutcome) -> DomainReport {
        DomainReport::from_outcomes(
            domain,
            cname,
            RecordOutcome::NoAnswer,
            RecordOutcome::NoAnswer,
            RecordOutcome::NoAnswer,
            RecordOutcome::NoAnswer,
            RecordOutcome::NoAnswer,
        )
    }

    #[test]
    fn test_workbook_is_written_and_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.xlsx");

        let reports = vec![report(
            "ghost.example",
            RecordOutcome::Resolved(vec!["ghost.github.io".to_string()]),
        )];
        let columns = active_columns(&reports);

        write_workbook(&reports, &columns, &path).unwrap();
        let first_len = std::fs::metadata(&path).unwrap().len();
        assert!(first_len > 0);

        // Second run overwrites rather than appending
        write_workbook(&reports, &columns, &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_empty_reports_still_produce_a_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");

        let columns = active_columns(&[]);
        write_workbook(&[], &columns, &path).unwrap();
        assert!(path.exists());
    }
}
