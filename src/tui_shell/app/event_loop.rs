use super::*;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.drain_completions();

        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            if let TermEvent::Key(k) = event::read().context("read event")? {
                if let Some(input) = keymap::input_for(k) {
                    app.dispatch(Event::Input(input));
                }
            }
        }
    }
}
