// UI module
// Demo dashboard views and the application event loop

pub mod app_view;
pub mod styles;

use std::io::Stdout;
use std::time::Instant;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::core::{App, EventHandler};

pub use app_view::render_app;
pub use styles::Styles;

/// Run the main application event loop
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Drive the debounce timer before drawing
        app.tick(Instant::now());

        // Render the UI
        terminal.draw(|f| render_app(f, app))?;

        // Handle events; wake up in time for a pending emission
        let timeout = app.poll_timeout(Instant::now());
        if event::poll(timeout)? {
            let app_event = EventHandler::handle(event::read()?);
            app.handle_event(app_event, Instant::now());
        }

        // Check if we should quit
        if app.should_quit {
            return Ok(());
        }
    }
}
