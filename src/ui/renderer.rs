//! Terminal setup, the main loop, and teardown

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::core::{AppContext, EventHandler};
use super::shell::ShellComposer;
use crate::config::Config;
use crate::logger::Logger;

/// Run the main TUI application
pub async fn run_app(config: Config, logger: Logger) -> Result<()> {
    let mouse_enabled = config.ui.mouse_enabled;

    // Route problems are reported before the terminal is touched
    let context = AppContext::new(config, logger);
    let mut shell = ShellComposer::new(context).context("Invalid route configuration")?;

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main application loop
    let res = run_ui(&mut terminal, &mut shell).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(ref e) = res {
        log::error!("UI loop failed: {e:#}");
    }
    res
}

/// Main UI loop
async fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, shell: &mut ShellComposer) -> Result<()> {
    let mut events = EventHandler::new();

    loop {
        // Only draw when something changed: a store notification, navigation,
        // input, or a resize
        if shell.needs_redraw() && events.should_render() {
            shell.take_redraw();
            terminal.draw(|f| {
                let area = f.area();
                shell.render(f, area);
            })?;
            events.mark_rendered();
        }

        let event = events.next_event().await?;
        shell.handle_event(event);

        if shell.should_quit() {
            log::info!("shutting down");
            break;
        }
    }

    Ok(())
}
