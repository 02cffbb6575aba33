//! Components - The Overlay Widgets
//!
//! The three toolkit entities. Each is configured with chainable setters,
//! wrapped in an `Entity` by the host, mounted into the host's element tree,
//! and driven through method calls inside updates.

pub mod indicator;
pub mod popup;
pub mod toast;

pub use indicator::*;
pub use popup::*;
pub use toast::*;
