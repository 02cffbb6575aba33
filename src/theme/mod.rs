//! Theme
//!
//! Default palette and type scale shared by the components.

pub mod colors;
pub mod typography;

pub use colors::*;
pub use typography::*;
