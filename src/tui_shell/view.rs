use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row as TableRow, Table, TableState};

use crate::nav::{Row, RowProjection};

pub(super) fn render_view_chrome(frame: &mut ratatui::Frame, title: &str, area: Rect) -> Rect {
    let header = Line::from(vec![Span::styled(
        title.to_string(),
        Style::default().fg(Color::Yellow),
    )]);
    let outer = Block::default().borders(Borders::ALL).title(header);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    inner
}

fn row_style(row: &Row) -> Style {
    if row.removed {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
    } else if row.selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

/// Column widths from the widest cell, header included.
pub(super) fn column_widths(projection: &RowProjection) -> Vec<Constraint> {
    projection
        .columns
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let widest = projection
                .rows
                .iter()
                .filter_map(|r| r.cells.get(i))
                .map(|c| c.chars().count())
                .max()
                .unwrap_or(0)
                .max(name.chars().count());
            Constraint::Length(widest as u16)
        })
        .collect()
}

pub(super) fn render_page(frame: &mut ratatui::Frame, projection: &RowProjection, area: Rect) {
    if let Some(placeholder) = &projection.placeholder {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                placeholder.as_str(),
                Style::default().fg(Color::Gray),
            ))),
            area,
        );
        return;
    }

    let header = TableRow::new(projection.columns.iter().map(|c| Cell::from(*c)))
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows = projection.rows.iter().map(|r| {
        TableRow::new(r.cells.iter().map(|c| Cell::from(c.as_str()))).style(row_style(r))
    });
    let table = Table::new(rows, column_widths(projection))
        .header(header)
        .column_spacing(2)
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(projection.cursor);
    frame.render_stateful_widget(table, area, &mut state);
}

#[cfg(test)]
#[path = "../tests/tui_shell/view_tests.rs"]
mod tests;
