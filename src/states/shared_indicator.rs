//! Shared Default Indicator
//!
//! Process-wide slot holding the application's default loading indicator.
//! Hosts register one near startup and fetch it from anywhere without
//! threading the entity through their views.

use crate::components::Indicator;
use crate::error::{Error, Result};
use gpui::{App, Entity, Global};
use tracing::info;

/// Global slot for the default indicator, accessed via associated functions
pub struct SharedIndicator {
    indicator: Entity<Indicator>,
}

impl Global for SharedIndicator {}

impl SharedIndicator {
    /// Register the process-wide default indicator (last write wins)
    pub fn set(indicator: Entity<Indicator>, cx: &mut App) {
        info!("registering default indicator");
        cx.set_global(Self { indicator });
    }

    /// The default indicator
    ///
    /// # Panics
    ///
    /// Panics if no default indicator has been registered. Use [`try_get`]
    /// when the caller can recover.
    ///
    /// [`try_get`]: Self::try_get
    pub fn get(cx: &App) -> Entity<Indicator> {
        match Self::try_get(cx) {
            Ok(indicator) => indicator,
            Err(error) => panic!("{error}"),
        }
    }

    /// The default indicator, or an error if none was registered
    pub fn try_get(cx: &App) -> Result<Entity<Indicator>> {
        cx.try_global::<Self>()
            .map(|shared| shared.indicator.clone())
            .ok_or(Error::DefaultIndicatorUnset)
    }

    /// Whether a default indicator has been registered
    pub fn is_set(cx: &App) -> bool {
        cx.has_global::<Self>()
    }
}
