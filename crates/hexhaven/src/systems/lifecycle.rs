//! # Lifecycle System
//!
//! Recomputes each agent's life stage from its birthday and the current
//! calendar. Runs after the calendar advances; stages only ever move
//! forward because the calendar does.

use hexhaven_core::{AgeStage, World};

/// Ages every agent carrying a lifecycle component.
#[derive(Debug, Default)]
pub struct LifecycleSystem;

impl LifecycleSystem {
    /// Creates the system.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Updates the stage of every agent to match its current age.
    pub fn process(&self, world: &mut World) {
        let calendar = world.calendar;
        for (_, lifecycle) in world.lifecycles.iter_mut() {
            lifecycle.stage = AgeStage::from_years(calendar.years_since(lifecycle.birthday));
        }
    }
}
