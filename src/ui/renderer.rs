//! Terminal setup and the async event loop.

use crate::config::Config;
use crate::logger::Logger;
use crate::survey::Submitter;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::sync::Arc;

/// Run the survey until the user quits
pub async fn run_app(config: &Config, submitter: Arc<dyn Submitter>, logger: Logger) -> anyhow::Result<()> {
    let mut app = AppComponent::new(config, submitter, logger)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut event_handler = EventHandler::new();
    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render && event_handler.should_render() {
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area)
            })?;
            event_handler.mark_rendered();
            needs_render = false;
        }

        let event = tokio::select! {
            event = event_handler.next_event() => event?,
            Some(action) = app.wait_for_background_action() => {
                log::debug!("Applied background action {:?}", action);
                needs_render = true;
                EventType::Other
            }
        };

        match event {
            EventType::Tick => {
                // Background results and toast expiry
                if app.tick() {
                    needs_render = true;
                }
            }
            EventType::Other => {}
            event => {
                app.handle_event(event);
                needs_render = true;
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
