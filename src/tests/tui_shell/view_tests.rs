use ratatui::Terminal;
use ratatui::backend::TestBackend;

use super::*;

fn projection(rows: Vec<Vec<&str>>, placeholder: Option<&str>) -> RowProjection {
    RowProjection {
        title: "projects".to_string(),
        columns: &["Project", "Repositories"],
        cursor: (!rows.is_empty()).then_some(0),
        rows: rows
            .into_iter()
            .map(|cells| Row {
                cells: cells.into_iter().map(str::to_string).collect(),
                selected: false,
                removed: false,
            })
            .collect(),
        placeholder: placeholder.map(str::to_string),
    }
}

fn screen(projection: &RowProjection) -> anyhow::Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(40, 4))?;
    terminal.draw(|f| render_page(f, projection, f.area()))?;
    Ok(terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect())
}

#[test]
fn widths_fit_the_widest_cell_or_header() {
    let p = projection(vec![vec!["a-very-long-project", "3"]], None);
    assert_eq!(
        column_widths(&p),
        vec![Constraint::Length(19), Constraint::Length(12)]
    );
}

#[test]
fn placeholder_replaces_the_table() -> anyhow::Result<()> {
    let p = projection(Vec::new(), Some("(no data: status code 503)"));
    let text = screen(&p)?;
    assert!(text.contains("(no data: status code 503)"));
    assert!(!text.contains("Project"));
    Ok(())
}

#[test]
fn table_shows_header_and_rows() -> anyhow::Result<()> {
    let p = projection(vec![vec!["alpha", "3"], vec!["beta", "0"]], None);
    let text = screen(&p)?;
    assert!(text.contains("Project"));
    assert!(text.contains("alpha"));
    assert!(text.contains("beta"));
    Ok(())
}
