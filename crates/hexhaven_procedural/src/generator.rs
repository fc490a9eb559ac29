//! # Map Generator
//!
//! Writes procedurally generated attributes into an existing world: terrain
//! heights from fractal simplex noise, and scattered objects (trees) on the
//! object layer.
//!
//! Heights are sampled on the surface of a cylinder: the x axis of the map
//! is mapped to the circumference and y runs along the axis, so tile (0, y)
//! and tile (`size_x`, y) would sample the same point and the map wraps
//! east to west without a seam.

use crate::noise::{MapSeed, SimplexNoise};
use hexhaven_core::{Appearance, CoreError, Position, SpriteId, Tint, World, OBJECT_LAYER, TERRAIN_LAYER};
use rand::{Rng as _, SeedableRng as _};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::TAU;

/// Octave count for terrain height noise.
const HEIGHT_OCTAVES: u32 = 6;

/// Base frequency for terrain height noise.
const HEIGHT_FREQUENCY: f64 = 0.02;

/// Larger values make the map look bigger; smaller ones the opposite.
const SAMPLING_SCALE: f64 = 1.0;

/// Stateful generator that stamps noise-derived terrain attributes and
/// scattered objects into a [`World`].
pub struct MapGenerator {
    height_noise: SimplexNoise,
    rng: ChaCha8Rng,
}

impl MapGenerator {
    /// Creates a generator for `seed`.
    ///
    /// The object-scatter RNG runs on an independent sub-seed so adding new
    /// noise consumers never perturbs tree placement.
    #[must_use]
    pub fn new(seed: MapSeed) -> Self {
        Self {
            height_noise: SimplexNoise::new(seed),
            rng: ChaCha8Rng::seed_from_u64(seed.derive(1).value()),
        }
    }

    /// Samples fractal noise for every terrain tile and writes the result
    /// into its [`hexhaven_core::TileAttributes`] height.
    ///
    /// # Errors
    ///
    /// Propagates [`CoreError`] if a terrain tile is missing its attribute
    /// component; the builder adds those before calling this.
    pub fn apply_noise(&self, world: &mut World) -> Result<(), CoreError> {
        let size_x = world.grid.size_x();
        let size_y = world.grid.size_y();

        for x in 0..size_x {
            for y in 0..size_y {
                #[allow(clippy::cast_precision_loss)]
                let around = x as f64 / size_x as f64;

                // Wrap the x axis around a cylinder. sin/cos over tau give a
                // unit circle scaled back up to map size.
                #[allow(clippy::cast_precision_loss)]
                let noise_x = (around * TAU).sin() / TAU * size_x as f64 / SAMPLING_SCALE;
                #[allow(clippy::cast_precision_loss)]
                let noise_y = (around * TAU).cos() / TAU * size_x as f64 / SAMPLING_SCALE;
                #[allow(clippy::cast_precision_loss)]
                let noise_z = y as f64 / SAMPLING_SCALE;

                let height = self.height_noise.fractal3(
                    noise_x * HEIGHT_FREQUENCY,
                    noise_y * HEIGHT_FREQUENCY,
                    noise_z * HEIGHT_FREQUENCY,
                    HEIGHT_OCTAVES,
                    0.5,
                    2.0,
                );

                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let tile = world.grid.entity_at(x as i32, y as i32, TERRAIN_LAYER)?;
                #[allow(clippy::cast_possible_truncation)]
                {
                    world.tile_attributes.get_mut(tile)?.height = height as f32;
                }
            }
        }

        tracing::debug!(size_x, size_y, "applied height noise to terrain");
        Ok(())
    }

    /// Scatters up to `attempts` trees onto random object-layer cells.
    ///
    /// Cells that already hold an occupant are skipped, so the number placed
    /// can be lower than `attempts`. Placement is uniform for now; per-biome
    /// densities would slot in here later.
    ///
    /// # Errors
    ///
    /// Propagates [`CoreError`] if a component add fails, which indicates an
    /// undersized world.
    pub fn scatter_trees(&mut self, world: &mut World, attempts: usize) -> Result<usize, CoreError> {
        let size_x = world.grid.size_x();
        let size_y = world.grid.size_y();
        let mut placed = 0;

        for _ in 0..attempts {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let x = self.rng.gen_range(0..size_x) as i32;
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let y = self.rng.gen_range(0..size_y) as i32;

            if !world.grid.entity_at(x, y, OBJECT_LAYER)?.is_null() {
                // Something is already there.
                continue;
            }

            let tree = world.new_entity();
            world.grid.set_entity(x, y, OBJECT_LAYER, tree)?;

            #[allow(clippy::cast_sign_loss)]
            let (world_x, world_y) = world.grid.tile_to_world(x as usize, y as usize);
            world.positions.add(tree, Position::new(world_x, world_y))?;
            world
                .appearances
                .add(tree, Appearance::new(SpriteId::PINE_TREE, Tint::GREEN))?;

            tracing::debug!(x, y, %tree, "placed a tree");
            placed += 1;
        }

        tracing::info!(placed, attempts, "scattered trees");
        Ok(placed)
    }
}
