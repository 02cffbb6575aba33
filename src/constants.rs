//! Component Constants
//!
//! Centralized defaults for component dimensions and timing.

/// Default popup panel dimensions
pub const POPUP_DEFAULT_WIDTH: f32 = 300.0;
pub const POPUP_DEFAULT_HEIGHT: f32 = 400.0;

/// Default popup panel corner radius
pub const POPUP_CORNER_RADIUS: f32 = 5.0;

/// Default popup title padding (all edges)
pub const POPUP_TITLE_PADDING: f32 = 16.0;

/// Dimming-overlay fade duration, fixed regardless of the panel animation
pub const OVERLAY_FADE_MS: u64 = 300;

/// Default show/hide animation duration for popups and toasts
pub const DEFAULT_ANIMATION_MS: u64 = 300;

/// Default toast dimensions
pub const TOAST_DEFAULT_WIDTH: f32 = 300.0;
pub const TOAST_DEFAULT_HEIGHT: f32 = 60.0;

/// Toast display times
pub const TOAST_TIME_SHORT_MS: u64 = 3000;
pub const TOAST_TIME_LONG_MS: u64 = 5000;

/// Distance from the bottom edge for the default toast placement
pub const TOAST_BOTTOM_MARGIN: f32 = 80.0;

/// Indicator badge edge length
pub const INDICATOR_DEFAULT_SIZE: f32 = 48.0;

/// One spinner revolution / pulse / frame cycle
pub const INDICATOR_CYCLE_MS: u64 = 800;

/// Backdrop corner radius and padding around the indicator badge
pub const INDICATOR_BACKDROP_RADIUS: f32 = 8.0;
pub const INDICATOR_BACKDROP_PADDING: f32 = 16.0;
