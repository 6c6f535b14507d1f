// Core infrastructure module
// The size observation service and its seams

pub mod app;
pub mod dimensions;
pub mod element;
pub mod events;
pub mod observer;
pub mod platform;

pub use app::App;
pub use dimensions::{Dimensions, ElementBox};
pub use element::{Measurable, TerminalElement};
pub use events::{AppEvent, EventHandler, ResizeTrigger};
pub use observer::{ObserverConfig, ObserverError, ObserverState, SizeObserver};
pub use platform::{ResizePlatform, TerminalPlatform};
