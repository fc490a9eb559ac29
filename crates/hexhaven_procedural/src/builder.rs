//! # World Builder
//!
//! Turns a map size and a seed into a fully populated [`World`]: terrain
//! tiles with positions, attributes and debug tints, noise-derived heights,
//! scattered trees, a camera entity, the starting calendar, and the initial
//! agent population.

use crate::generator::MapGenerator;
use crate::noise::MapSeed;
use hexhaven_core::{
    Appearance, Calendar, CoreError, Lifecycle, Position, SpriteId, TileAttributes, Tint, World,
    TERRAIN_LAYER,
};

/// Grid layers a standard map carries: terrain and objects.
const MAP_LAYERS: usize = 2;

/// In-game year the simulation starts at.
const START_YEAR: u64 = 100;

/// Age, in years, of the starting population.
const STARTING_AGE: u64 = 20;

/// Builder for an initial [`World`].
///
/// # Example
///
/// ```rust,ignore
/// let world = WorldBuilder::new(64, 64)
///     .seed(MapSeed::new(42))
///     .population(10)
///     .build()?;
/// ```
pub struct WorldBuilder {
    size_x: usize,
    size_y: usize,
    seed: MapSeed,
    population: usize,
    tree_attempts: usize,
}

impl WorldBuilder {
    /// Starts a builder for a `size_x` by `size_y` map with default seed,
    /// population and tree density.
    #[must_use]
    pub fn new(size_x: usize, size_y: usize) -> Self {
        Self {
            size_x,
            size_y,
            seed: MapSeed::default(),
            population: 10,
            tree_attempts: 200,
        }
    }

    /// Sets the generation seed.
    #[must_use]
    pub const fn seed(mut self, seed: MapSeed) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the starting agent population.
    #[must_use]
    pub const fn population(mut self, population: usize) -> Self {
        self.population = population;
        self
    }

    /// Sets how many tree placements are attempted.
    #[must_use]
    pub const fn tree_attempts(mut self, attempts: usize) -> Self {
        self.tree_attempts = attempts;
        self
    }

    /// Builds the world.
    ///
    /// # Errors
    ///
    /// Propagates [`CoreError`] from component adds; in practice that means
    /// the requested population exceeds the agent capacity.
    pub fn build(self) -> Result<World, CoreError> {
        let mut world = World::new(self.size_x, self.size_y, MAP_LAYERS);

        // One terrain entity per cell.
        world.populate_grid();

        // Base components for every tile.
        for x in 0..self.size_x {
            for y in 0..self.size_y {
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let tile = world.grid.entity_at(x as i32, y as i32, TERRAIN_LAYER)?;

                let (world_x, world_y) = world.grid.tile_to_world(x, y);
                world.positions.add(tile, Position::new(world_x, world_y))?;
                world.tile_attributes.add(tile, TileAttributes::default())?;
                world
                    .appearances
                    .add(tile, Appearance::new(SpriteId::HEXAGON, debug_tint(x, y)))?;
            }
        }

        // Heights and trees.
        let mut generator = MapGenerator::new(self.seed);
        generator.apply_noise(&mut world)?;
        generator.scatter_trees(&mut world, self.tree_attempts)?;

        // The camera is an ordinary entity with a position.
        world.camera = world.new_entity();
        world.positions.add(world.camera, Position::new(0.0, 0.0))?;

        // Make time exist.
        world.calendar = Calendar::from_years(START_YEAR);

        // Starting population, all the same age for now.
        let birthday = Calendar::from_years(START_YEAR - STARTING_AGE);
        for _ in 0..self.population {
            let agent = world.new_entity();
            world.lifecycles.add(agent, Lifecycle::born_on(birthday))?;
        }

        tracing::info!(
            size_x = self.size_x,
            size_y = self.size_y,
            seed = self.seed.value(),
            entities = world.entity_count(),
            population = self.population,
            "built world"
        );
        Ok(world)
    }
}

/// Debug tile tint: every tenth column blue, every tenth row green, their
/// crossings yellow, the origin red.
fn debug_tint(x: usize, y: usize) -> Tint {
    if x == 0 && y == 0 {
        Tint::RED
    } else if x % 10 == 0 && y % 10 == 0 {
        Tint::YELLOW
    } else if x % 10 == 0 {
        Tint::BLUE
    } else if y % 10 == 0 {
        Tint::GREEN
    } else {
        Tint::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexhaven_core::AgeStage;

    #[test]
    fn test_build_populates_everything() {
        let world = WorldBuilder::new(12, 12)
            .seed(MapSeed::new(42))
            .population(10)
            .build()
            .unwrap();

        // Every tile has position, attributes and appearance.
        for x in 0..12 {
            for y in 0..12 {
                let tile = world.grid.entity_at(x, y, TERRAIN_LAYER).unwrap();
                assert!(world.positions.contains(tile).unwrap());
                assert!(world.tile_attributes.contains(tile).unwrap());
                assert!(world.appearances.contains(tile).unwrap());
            }
        }

        // Camera exists and carries a position.
        assert!(!world.camera.is_null());
        assert!(world.positions.contains(world.camera).unwrap());

        // Calendar starts at the configured year.
        assert_eq!(world.calendar.total_years(), 100);

        // The starting population is twenty years old.
        assert_eq!(world.lifecycles.len(), 10);
        for (_, lifecycle) in world.lifecycles.iter() {
            assert_eq!(world.calendar.years_since(lifecycle.birthday), 20);
            assert_eq!(lifecycle.stage, AgeStage::Baby); // not aged yet
        }
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = WorldBuilder::new(10, 10).seed(MapSeed::new(5)).build().unwrap();
        let b = WorldBuilder::new(10, 10).seed(MapSeed::new(5)).build().unwrap();

        assert_eq!(a.entity_count(), b.entity_count());
        for x in 0..10 {
            for y in 0..10 {
                let ta = a.grid.entity_at(x, y, TERRAIN_LAYER).unwrap();
                let tb = b.grid.entity_at(x, y, TERRAIN_LAYER).unwrap();
                assert_eq!(
                    a.tile_attributes.get(ta).unwrap().height,
                    b.tile_attributes.get(tb).unwrap().height
                );
            }
        }
    }

    #[test]
    fn test_debug_tints() {
        assert_eq!(debug_tint(0, 0), Tint::RED);
        assert_eq!(debug_tint(10, 10), Tint::YELLOW);
        assert_eq!(debug_tint(10, 3), Tint::BLUE);
        assert_eq!(debug_tint(3, 10), Tint::GREEN);
        assert_eq!(debug_tint(3, 3), Tint::WHITE);
    }
}
