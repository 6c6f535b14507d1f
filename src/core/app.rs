// Application State
// Owning view of the size observer in the demo binary

use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::config::AppConfig;
use super::{AppEvent, Dimensions, SizeObserver, TerminalElement, TerminalPlatform};

/// Main application state
///
/// Plays the role of the view that owns the observed element: it attaches
/// the observer on startup, forwards resize events, consumes emissions, and
/// guarantees detach on every exit path via `teardown`.
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: AppConfig,

    /// The size observation service
    pub observer: SizeObserver<TerminalElement>,

    /// Platform registrations (terminal backend, degraded mode)
    pub platform: TerminalPlatform,

    /// Most recent emission consumed from the observer
    pub last_emission: Option<Dimensions>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(config: AppConfig) -> Self {
        let observer = SizeObserver::new(config.observer.to_observer_config());
        Self {
            config,
            observer,
            platform: TerminalPlatform::new(),
            last_emission: None,
            should_quit: false,
        }
    }

    /// Attach the observer to the terminal element
    pub fn attach_observer(&mut self) -> Result<()> {
        let first = self
            .observer
            .attach(TerminalElement::new(), &mut self.platform)
            .context("Failed to attach size observer")?;
        if first.is_some() {
            self.last_emission = first;
        }
        Ok(())
    }

    /// Handle an application event
    pub fn handle_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Quit => self.quit(),
            AppEvent::WindowResized => {
                // Listener removed means the event must be ignored, exactly
                // like a deregistered platform callback
                if self.platform.is_listening() {
                    self.observer
                        .notify(super::ResizeTrigger::WindowResize, now);
                }
            }
            AppEvent::Refresh => {
                if let Some(dims) = self.observer.refresh() {
                    self.last_emission = Some(dims);
                }
            }
            AppEvent::None => {}
        }
    }

    /// Drive the debounce timer and consume any emission
    pub fn tick(&mut self, now: Instant) {
        if let Some(dims) = self.observer.poll(now) {
            self.last_emission = Some(dims);
        }
    }

    /// Event-poll timeout: wake up in time for a pending emission
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let poll_timeout = Duration::from_millis(self.config.observer.poll_timeout_ms);
        match self.observer.time_until_emit(now) {
            Some(remaining) => remaining.min(poll_timeout),
            None => poll_timeout,
        }
    }

    /// Release the observer's registrations; safe to call more than once
    pub fn teardown(&mut self) {
        self.observer.detach(&mut self.platform);
    }

    /// Request application exit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ObserverState;

    #[test]
    fn test_teardown_is_safe_to_repeat() {
        let mut app = App::new(AppConfig::default());
        app.teardown();
        app.teardown();
        assert_eq!(app.observer.state(), ObserverState::Detached);
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut app = App::new(AppConfig::default());
        app.handle_event(AppEvent::Quit, Instant::now());
        assert!(app.should_quit);
    }

    #[test]
    fn test_poll_timeout_defaults_when_nothing_pending() {
        let app = App::new(AppConfig::default());
        let now = Instant::now();
        // Nothing pending: fall back to the configured poll timeout
        assert_eq!(
            app.poll_timeout(now),
            Duration::from_millis(app.config.observer.poll_timeout_ms)
        );
    }
}
