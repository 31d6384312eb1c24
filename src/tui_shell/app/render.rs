use super::*;

const KEY_HINTS: &str =
    "↑↓ move  enter open  - back  space select  c clear  d delete  r reload  t time  q quit";

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(area);

    // Header
    let header = Line::from(vec![
        Span::styled(
            "regdash",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(app.registry_url.as_str(), Style::default().fg(Color::Blue)),
    ]);
    frame.render_widget(
        Paragraph::new(header).block(Block::default().borders(Borders::BOTTOM)),
        chunks[0],
    );

    // Current page
    let projection = app.ctl.rows(OffsetDateTime::now_utc());
    let inner = render_view_chrome(frame, &projection.title, chunks[1]);
    render_page(frame, &projection, inner);

    // Notice
    let notice = match app.ctl.notice() {
        Some(n) => {
            let color = match n.kind {
                NoticeKind::Info => Color::Green,
                NoticeKind::Error => Color::Red,
            };
            Line::from(Span::styled(n.text.as_str(), Style::default().fg(color)))
        }
        None => Line::from(""),
    };
    frame.render_widget(
        Paragraph::new(notice).block(Block::default().borders(Borders::TOP)),
        chunks[2],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            KEY_HINTS,
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
        ))),
        chunks[3],
    );
}
