// Resize Platforms
// Registration surface for the two resize trigger sources

/// Platform hooks the observer registers with while attached
///
/// Two independent trigger sources exist: an element-level watcher provided
/// by the platform's native resize-observation facility (which may be
/// unsupported), and a global window-resize listener that is registered
/// unconditionally as a backstop. Both feed the same debounce, so a platform
/// that fires both for one physical resize is handled harmlessly.
pub trait ResizePlatform {
    /// Register the element-level watcher
    ///
    /// Returns false when the native facility is unsupported; this is a
    /// degraded mode, not an error - the window listener still covers
    /// resize semantics on its own.
    fn watch_element(&mut self) -> bool;

    /// Remove the element-level watcher
    fn unwatch_element(&mut self);

    /// Register the global window-resize listener
    fn add_window_listener(&mut self);

    /// Remove the global window-resize listener
    fn remove_window_listener(&mut self);
}

/// Terminal-backed platform for the demo binary
///
/// A terminal has no per-element resize facility, so `watch_element` always
/// reports unsupported and the observer runs in its degraded mode. The
/// window listener maps to crossterm's resize events; the event loop checks
/// `is_listening` before forwarding them, which mirrors an actual listener
/// deregistration.
#[derive(Debug, Default)]
pub struct TerminalPlatform {
    listening: bool,
}

impl TerminalPlatform {
    pub fn new() -> Self {
        Self { listening: false }
    }

    /// Whether resize events should still be forwarded to the observer
    pub fn is_listening(&self) -> bool {
        self.listening
    }
}

impl ResizePlatform for TerminalPlatform {
    fn watch_element(&mut self) -> bool {
        // No native per-element facility in a terminal
        false
    }

    fn unwatch_element(&mut self) {}

    fn add_window_listener(&mut self) {
        self.listening = true;
    }

    fn remove_window_listener(&mut self) {
        self.listening = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_platform_has_no_native_facility() {
        let mut platform = TerminalPlatform::new();
        assert!(!platform.watch_element());
    }

    #[test]
    fn test_terminal_platform_listener_lifecycle() {
        let mut platform = TerminalPlatform::new();
        assert!(!platform.is_listening());

        platform.add_window_listener();
        assert!(platform.is_listening());

        platform.remove_window_listener();
        assert!(!platform.is_listening());
    }
}
