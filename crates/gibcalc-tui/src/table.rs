//! Cycle table tinted with each cycle's color.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use gibcalc_core::cycles::CycleTable;

use crate::styles::row_style;

/// Render the cycles of `table`, one row per cycle.
pub fn render_cycle_table(frame: &mut Frame, area: Rect, table: &CycleTable) {
    let rows: Vec<Row> = table
        .cycles()
        .iter()
        .map(|cycle| {
            let hex = cycle.color().map_or_else(|| "-".to_string(), |c| c.to_hex());
            Row::new(vec![
                Cell::from(cycle.len().to_string()),
                Cell::from(hex),
                Cell::from(cycle.to_string()),
            ])
            .style(row_style(cycle.color()))
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Length(10),
        Constraint::Min(10),
    ];
    let widget = Table::new(rows, widths)
        .header(
            Row::new(vec!["Length", "Color", "Cycle"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Cycle lengths for {} ", table.modulus())),
        );
    frame.render_widget(widget, area);
}
