// Size Observer Library
// Debounced size observation service for dashboard visualizations

// Core infrastructure - the observer, its seams, and demo app state
pub mod core;

// UI - demo dashboard views and event loop
pub mod ui;

// Configuration
pub mod config;
pub mod config_validation;

// Application constants (compiled from config.yaml by build.rs)
pub mod constants;

// Re-export commonly used items for convenience
pub use self::core::{
    App, Dimensions, ElementBox, Measurable, ObserverConfig, ObserverError, ObserverState,
    ResizePlatform, ResizeTrigger, SizeObserver,
};
pub use self::config::{AppConfig, ObserverSettings};
