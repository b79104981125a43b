//! Console table collaborator.

use comfy_table::{Cell, Color, Table};

use crate::export::columns::{cell_text, Column};
use crate::models::{DomainReport, RecordKind};

/// Renders the ordered report sequence as a console table over the given
/// column set. Rows with a suspected takeover get their CNAME cell colored
/// green, mirroring the highlight analysts expect from this kind of sweep.
pub fn render_table(reports: &[DomainReport], columns: &[Column]) -> Table {
    let mut table = Table::new();
    table.set_header(columns.iter().map(|c| c.header()).collect::<Vec<_>>());

    for report in reports {
        let row: Vec<Cell> = columns
            .iter()
            .map(|&column| {
                let cell = Cell::new(cell_text(report, column));
                if report.takeover_suspected && column == Column::Record(RecordKind::Cname) {
                    cell.fg(Color::Green)
                } else {
                    cell
                }
            })
            .collect();
        table.add_row(row);
    }

    table
}
