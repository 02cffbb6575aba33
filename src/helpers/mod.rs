//! Helper Utilities
//!
//! Small non-UI building blocks used by the components.

mod display_count;
mod placement;

pub use display_count::*;
pub use placement::*;
