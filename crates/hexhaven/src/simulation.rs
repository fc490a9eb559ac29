//! # Simulation
//!
//! The aggregate a host engine embeds: owns the [`World`] and the systems,
//! and advances them from wall-clock time. All state lives here; nothing is
//! global.

use crate::config::SimConfig;
use crate::systems::{LifecycleSystem, TimeSystem};
use hexhaven_core::{CoreError, World};
use hexhaven_procedural::{MapSeed, WorldBuilder};

/// A running world plus the systems that advance it.
pub struct Simulation {
    /// The simulation state. Hosts read it for drawing and hit-testing.
    pub world: World,
    time: TimeSystem,
    lifecycle: LifecycleSystem,
}

impl Simulation {
    /// Builds a fresh world from `config` and wires up the systems.
    ///
    /// # Errors
    ///
    /// Propagates [`CoreError`] from world construction, e.g. a configured
    /// population larger than the agent capacity.
    pub fn from_config(config: &SimConfig) -> Result<Self, CoreError> {
        let world = WorldBuilder::new(config.map_size_x, config.map_size_y)
            .seed(MapSeed::new(config.seed))
            .population(config.starting_population)
            .tree_attempts(config.tree_attempts)
            .build()?;

        tracing::info!(
            map_size_x = config.map_size_x,
            map_size_y = config.map_size_y,
            seed = config.seed,
            "simulation ready"
        );

        Ok(Self {
            world,
            time: TimeSystem::new(config.tick_seconds),
            lifecycle: LifecycleSystem::new(),
        })
    }

    /// Advances the simulation by `elapsed_seconds` of wall time.
    ///
    /// Returns the number of in-game hours that passed. Agent systems only
    /// run on updates where at least one hour elapsed.
    pub fn update(&mut self, elapsed_seconds: f64) -> u64 {
        let hours = self.time.advance(&mut self.world, elapsed_seconds);
        if hours > 0 {
            self.lifecycle.process(&mut self.world);
        }
        hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_advances_calendar() {
        let config = SimConfig {
            map_size_x: 8,
            map_size_y: 8,
            tick_seconds: 0.1,
            ..SimConfig::default()
        };
        let mut simulation = Simulation::from_config(&config).unwrap();
        let start = simulation.world.calendar;

        assert_eq!(simulation.update(0.05), 0);
        assert_eq!(simulation.world.calendar, start);

        assert_eq!(simulation.update(0.05), 1);
        assert_eq!(simulation.world.calendar.total_hours(), start.total_hours() + 1);
    }
}
