// Size Observer
// Debounced size observation with an explicit attach/detach lifecycle

use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, trace};

use super::{Dimensions, Measurable, ResizePlatform, ResizeTrigger};

/// Lifecycle misuse errors
///
/// Platform-level conditions (missing native facility, unmeasurable
/// element, late callbacks) are absorbed internally and never surface here.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ObserverError {
    /// `attach` was called on an observer that is already attached
    #[error("observer is already attached")]
    AlreadyAttached,

    /// `attach` was called on a detached observer; detached is terminal
    /// because native watcher handles are not reusable once disconnected
    #[error("observer was detached; construct a fresh instance instead")]
    Detached,
}

/// Observer lifecycle state
///
/// Within `Attached` the observer alternates between idle and measuring
/// (a pending debounce deadline exists); see `is_measuring`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverState {
    /// Constructed but not yet watching anything
    Unattached,
    /// Watching an element; triggers are accepted
    Attached,
    /// Torn down; terminal state, all callbacks are discarded
    Detached,
}

/// Tuning knobs for a size observer
#[derive(Debug, Clone)]
pub struct ObserverConfig {
    /// Trigger silence required before a deferred emission fires
    pub quiet_period: Duration,
    /// Width published when the raw measurement reports zero width
    pub default_width: f64,
    /// Floor applied to every published height
    pub min_height: f64,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            quiet_period: Duration::from_millis(50),
            default_width: 300.0,
            min_height: 60.0,
        }
    }
}

/// Watches one element for size changes and republishes them debounced
///
/// Single-threaded and cooperative: the owner forwards platform callbacks
/// via `notify` and drives time via `poll`. Emissions are handed back by
/// value and carry only the most recent measurement; intermediate sizes
/// inside a resize burst are never published.
#[derive(Debug)]
pub struct SizeObserver<E: Measurable> {
    config: ObserverConfig,
    state: ObserverState,

    /// Element under observation; held only while attached
    element: Option<E>,

    /// Trigger time of the pending debounced emission (at most one)
    pending_since: Option<Instant>,

    /// Source of the most recent trigger, for diagnostics
    last_trigger: Option<ResizeTrigger>,

    /// Whether the native element watcher got registered on attach
    native_watch: bool,

    /// Whether the window-resize listener got registered on attach
    window_listener: bool,

    /// Last published dimensions
    dimensions: Dimensions,

    /// Number of emissions so far
    emissions: u64,
}

impl<E: Measurable> SizeObserver<E> {
    /// Create an unattached observer
    pub fn new(config: ObserverConfig) -> Self {
        let dimensions = Dimensions::initial(config.default_width, config.min_height);
        Self {
            config,
            state: ObserverState::Unattached,
            element: None,
            pending_since: None,
            last_trigger: None,
            native_watch: false,
            window_listener: false,
            dimensions,
            emissions: 0,
        }
    }

    /// Begin observing an element
    ///
    /// Registers the native element watcher when the platform supports it
    /// and unconditionally registers the window-resize listener as a
    /// backstop, then performs one immediate measurement so the first paint
    /// is not stuck at the defaults. Returns the published dimensions when
    /// that first measurement changed them.
    pub fn attach(
        &mut self,
        element: E,
        platform: &mut dyn ResizePlatform,
    ) -> Result<Option<Dimensions>, ObserverError> {
        match self.state {
            ObserverState::Attached => return Err(ObserverError::AlreadyAttached),
            ObserverState::Detached => return Err(ObserverError::Detached),
            ObserverState::Unattached => {}
        }

        self.native_watch = platform.watch_element();
        platform.add_window_listener();
        self.window_listener = true;

        self.element = Some(element);
        self.state = ObserverState::Attached;
        debug!(native_watch = self.native_watch, "size observer attached");

        Ok(self.measure_and_publish())
    }

    /// Record a resize trigger from either source
    ///
    /// Explicit debounce: every trigger replaces the pending deadline, so a
    /// continuous stream defers emission until the stream pauses for the
    /// full quiet period. Triggers outside `Attached` are discarded.
    pub fn notify(&mut self, trigger: ResizeTrigger, now: Instant) {
        if self.state != ObserverState::Attached {
            trace!(?trigger, state = ?self.state, "discarding resize trigger");
            return;
        }
        self.pending_since = Some(now);
        self.last_trigger = Some(trigger);
    }

    /// Drive the debounce timer
    ///
    /// Returns the new dimensions when the quiet period has elapsed
    /// uninterrupted and the fresh measurement differs from the last
    /// published value. A timer expiring after detach is discarded here,
    /// never applied.
    pub fn poll(&mut self, now: Instant) -> Option<Dimensions> {
        if self.state != ObserverState::Attached {
            return None;
        }
        let since = self.pending_since?;
        if now.saturating_duration_since(since) < self.config.quiet_period {
            return None;
        }
        self.pending_since = None;
        self.measure_and_publish()
    }

    /// Time remaining until the pending emission may fire
    ///
    /// `None` when nothing is pending; callers use this to bound their
    /// event-poll timeout.
    pub fn time_until_emit(&self, now: Instant) -> Option<Duration> {
        let since = self.pending_since?;
        let elapsed = now.saturating_duration_since(since);
        Some(self.config.quiet_period.saturating_sub(elapsed))
    }

    /// Re-measure immediately, bypassing the debounce
    ///
    /// Same path as the measurement performed on attach; a no-op unless
    /// attached.
    pub fn refresh(&mut self) -> Option<Dimensions> {
        if self.state != ObserverState::Attached {
            return None;
        }
        self.measure_and_publish()
    }

    /// Stop observing and release every registration
    ///
    /// Idempotent; intended to run on every exit path of the owning view.
    /// Cancels the pending emission, removes the native watcher iff one was
    /// registered, removes the window listener, and drops the element.
    /// Detached is terminal: no emission can occur afterwards.
    pub fn detach(&mut self, platform: &mut dyn ResizePlatform) {
        self.pending_since = None;

        if self.native_watch {
            platform.unwatch_element();
            self.native_watch = false;
        }
        if self.window_listener {
            platform.remove_window_listener();
            self.window_listener = false;
        }
        self.element = None;

        if self.state != ObserverState::Detached {
            debug!("size observer detached");
        }
        self.state = ObserverState::Detached;
    }

    /// Last published dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Current lifecycle state
    pub fn state(&self) -> ObserverState {
        self.state
    }

    /// Whether the observer is attached and accepting triggers
    pub fn is_attached(&self) -> bool {
        self.state == ObserverState::Attached
    }

    /// Whether a debounced emission is pending
    pub fn is_measuring(&self) -> bool {
        self.state == ObserverState::Attached && self.pending_since.is_some()
    }

    /// Whether the native element watcher is registered
    pub fn has_native_watch(&self) -> bool {
        self.native_watch
    }

    /// Number of emissions published so far
    pub fn emission_count(&self) -> u64 {
        self.emissions
    }

    /// Source of the most recent trigger, if any
    pub fn last_trigger(&self) -> Option<ResizeTrigger> {
        self.last_trigger
    }

    /// Sample the element and publish the clamped result if it changed
    ///
    /// An unmeasurable element (no bounding box) retains the previous
    /// dimensions. Republishing an identical value is suppressed.
    fn measure_and_publish(&mut self) -> Option<Dimensions> {
        let raw = self.element.as_ref()?.bounding_box()?;
        let dims = Dimensions::clamped(raw, self.config.default_width, self.config.min_height);
        if dims == self.dimensions {
            return None;
        }
        self.dimensions = dims;
        self.emissions += 1;
        trace!(width = dims.width, height = dims.height, "publishing dimensions");
        Some(dims)
    }
}
