//! Popkit Component Library
//!
//! Popup, toast, and loading-indicator overlay components for GPUI. Each
//! widget is a self-contained entity: configure it with chainable setters,
//! wrap it in `cx.new`, mount it in your element tree, and drive it with
//! `show`/`hide` inside updates. Lifecycle notifications arrive through
//! `cx.subscribe`. An overlay covers whatever subtree it is mounted in and
//! renders nothing while hidden.

pub mod assets;
pub mod components;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod states;
pub mod theme;

pub use components::{
    Indicator, IndicatorStyle, Popup, PopupAnimation, PopupEvent, PopupStyle, Toast, ToastEvent,
    ToastTime,
};
pub use error::{Error, Result};
pub use states::{SharedIndicator, ToastStyle, ToastStyles};
pub use theme::{ColorSpec, PopkitColors};
