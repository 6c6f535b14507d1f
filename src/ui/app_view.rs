// Application View
// Main application layout and rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::{App, ObserverState, ResizeTrigger};
use super::Styles;

/// Render the entire application
pub fn render_app(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_main_content(f, app, chunks[1]);
    render_footer(f, app, chunks[2]);
}

/// Render the header bar
fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(app.config.application.title.as_str())
        .style(Styles::header())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

/// Render the main content area (status panel + observed surface)
fn render_main_content(f: &mut Frame, app: &App, area: Rect) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(0)])
        .split(area);

    render_status_panel(f, app, main_chunks[0]);
    render_surface(f, app, main_chunks[1]);
}

/// Render the observer status panel
fn render_status_panel(f: &mut Frame, app: &App, area: Rect) {
    let observer = &app.observer;
    let dims = observer.dimensions();

    let state_span = match observer.state() {
        ObserverState::Unattached => Span::styled("unattached", Styles::label()),
        ObserverState::Attached => Span::styled("attached", Styles::state_attached()),
        ObserverState::Detached => Span::styled("detached", Styles::state_detached()),
    };

    let watcher = if observer.has_native_watch() {
        "native + window fallback"
    } else {
        "window fallback only"
    };

    let trigger = match observer.last_trigger() {
        Some(ResizeTrigger::NativeWatcher) => "native watcher",
        Some(ResizeTrigger::WindowResize) => "window resize",
        None => "-",
    };

    let lines = vec![
        Line::from(vec![Span::styled("State:      ", Styles::label()), state_span]),
        Line::from(vec![
            Span::styled("Published:  ", Styles::label()),
            Span::styled(format!("{} x {}", dims.width, dims.height), Styles::value()),
        ]),
        Line::from(vec![
            Span::styled("Debounce:   ", Styles::label()),
            Span::styled(
                if observer.is_measuring() { "pending" } else { "idle" },
                Styles::value(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Sources:    ", Styles::label()),
            Span::styled(watcher, Styles::value()),
        ]),
        Line::from(vec![
            Span::styled("Last event: ", Styles::label()),
            Span::styled(trigger, Styles::value()),
        ]),
        Line::from(vec![
            Span::styled("Emissions:  ", Styles::label()),
            Span::styled(observer.emission_count().to_string(), Styles::value()),
        ]),
        Line::from(vec![
            Span::styled("Last emit:  ", Styles::label()),
            Span::styled(
                match app.last_emission {
                    Some(d) => format!("{} x {}", d.width, d.height),
                    None => "-".to_string(),
                },
                Styles::value(),
            ),
        ]),
    ];

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Observer"));
    f.render_widget(panel, area);
}

/// Render a consumer surface sized from the published dimensions
///
/// Stands in for a dependent visualization: it re-renders against whatever
/// the observer last published, clamped to the space actually available.
fn render_surface(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 2 || area.height < 2 {
        return;
    }
    let dims = app.observer.dimensions();

    let width = (dims.width as u16).clamp(2, area.width);
    let height = (dims.height as u16).clamp(2, area.height);
    let surface_area = Rect {
        x: area.x,
        y: area.y,
        width,
        height,
    };

    let style = if app.observer.is_measuring() {
        Styles::surface_measuring()
    } else {
        Styles::surface_idle()
    };

    let surface = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(format!("surface {} x {}", dims.width, dims.height));
    f.render_widget(surface, surface_area);
}

/// Render the footer bar
fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let mut text = app.config.application.status_bar.default_text.clone();
    if !app.config.application.bindings.is_empty() {
        let bindings = app
            .config
            .application
            .bindings
            .iter()
            .map(|b| format!("{}: {}", b.key, b.description))
            .collect::<Vec<_>>()
            .join(" | ");
        text = format!("{text} | {bindings}");
    }

    let footer = Paragraph::new(text)
        .style(Styles::footer())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
