//! Process-Wide State
//!
//! The toolkit's two globals: the toast style registry and the shared
//! default indicator. Both install lazily and follow last-write-wins
//! semantics.

mod shared_indicator;
mod styles;

pub use shared_indicator::*;
pub use styles::*;
