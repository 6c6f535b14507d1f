// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// Which trigger source fired a resize notification
///
/// Both sources feed the same debounce; they only differ for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeTrigger {
    /// The platform's native element-level watcher
    NativeWatcher,
    /// The global window-resize fallback listener
    WindowResize,
}

/// Application events that can be handled
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// The window (terminal) was resized
    WindowResized,

    /// Force an immediate re-measure
    Refresh,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Resize(_, _) => AppEvent::WindowResized,
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != crossterm::event::KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            // Re-measure
            KeyCode::Char('r') => AppEvent::Refresh,

            _ => AppEvent::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_resize_event_maps_to_window_resized() {
        let event = EventHandler::handle(Event::Resize(120, 40));
        assert!(matches!(event, AppEvent::WindowResized));
    }

    #[test]
    fn test_quit_keys() {
        assert!(matches!(
            EventHandler::handle(press(KeyCode::Char('q'))),
            AppEvent::Quit
        ));
    }

    #[test]
    fn test_release_events_ignored() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(matches!(EventHandler::handle(event), AppEvent::None));
    }

    #[test]
    fn test_unmapped_key_is_noop() {
        assert!(matches!(
            EventHandler::handle(press(KeyCode::Char('x'))),
            AppEvent::None
        ));
    }
}
