//! # Layered Entity Grid
//!
//! A fixed-size rectangular array of entity handles, one per (column, row,
//! layer) cell. The grid is the spatial index of the world: it answers
//! "which entity occupies this tile" for the terrain layer (ground tiles)
//! and the object layer (occupants such as trees).
//!
//! Cells on unpopulated layers hold [`Entity::NULL`], which is a valid
//! answer, not an error. Out-of-bounds coordinates are an error.

use crate::ecs::entity::{Entity, EntityAllocator};
use crate::error::CoreError;
use crate::hex::HexVector;

/// Layer index for ground tiles.
pub const TERRAIN_LAYER: usize = 0;

/// Layer index for tile occupants (trees, buildings).
pub const OBJECT_LAYER: usize = 1;

/// Horizontal spacing between tile columns, in world units.
pub const TILE_WIDTH: f32 = 32.0;

/// Vertical spacing between tile rows, in world units.
pub const TILE_HEIGHT: f32 = 28.0;

/// A container for entities arranged in a grid pattern, intended to store
/// map data. Cells can be addressed by raw column/row or spatially through a
/// [`HexVector`].
///
/// The layer count is fixed at construction, so a map can carry more than
/// the default terrain/object pair (an underground level, say) without a
/// different grid type.
pub struct EntityGrid {
    size_x: usize,
    size_y: usize,
    layers: usize,
    cells: Box<[Entity]>,
}

impl EntityGrid {
    /// Creates a grid of `size_x` by `size_y` cells with `layers` layers,
    /// every cell holding [`Entity::NULL`].
    ///
    /// # Panics
    ///
    /// Panics if any dimension is zero.
    #[must_use]
    pub fn new(size_x: usize, size_y: usize, layers: usize) -> Self {
        assert!(size_x > 0 && size_y > 0, "grid dimensions must be nonzero");
        assert!(layers > 0, "grid must have at least one layer");

        Self {
            size_x,
            size_y,
            layers,
            cells: vec![Entity::NULL; size_x * size_y * layers].into_boxed_slice(),
        }
    }

    /// Grid width in tiles.
    #[inline]
    #[must_use]
    pub const fn size_x(&self) -> usize {
        self.size_x
    }

    /// Grid height in tiles.
    #[inline]
    #[must_use]
    pub const fn size_y(&self) -> usize {
        self.size_y
    }

    /// Number of layers.
    #[inline]
    #[must_use]
    pub const fn layers(&self) -> usize {
        self.layers
    }

    /// Whether (x, y) names a cell inside the grid.
    #[inline]
    #[must_use]
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size_x && (y as usize) < self.size_y
    }

    fn flat_index(&self, x: i32, y: i32, layer: usize) -> Result<usize, CoreError> {
        if !self.is_valid(x, y) || layer >= self.layers {
            return Err(CoreError::CellOutOfBounds {
                x,
                y,
                layer,
                size_x: self.size_x,
                size_y: self.size_y,
                layers: self.layers,
            });
        }
        Ok((x as usize * self.size_y + y as usize) * self.layers + layer)
    }

    /// Allocates a fresh entity for every terrain-layer cell.
    ///
    /// Other layers are left as [`Entity::NULL`]; occupants are placed later
    /// by world generation.
    pub fn populate_terrain(&mut self, allocator: &mut EntityAllocator) {
        for x in 0..self.size_x {
            for y in 0..self.size_y {
                let index = (x * self.size_y + y) * self.layers + TERRAIN_LAYER;
                self.cells[index] = allocator.allocate();
            }
        }
    }

    /// Returns the entity stored at (x, y) on `layer`.
    ///
    /// The returned id may be [`Entity::NULL`] if nothing occupies the cell.
    ///
    /// # Errors
    ///
    /// [`CoreError::CellOutOfBounds`] if the coordinate or layer is invalid.
    pub fn entity_at(&self, x: i32, y: i32, layer: usize) -> Result<Entity, CoreError> {
        Ok(self.cells[self.flat_index(x, y, layer)?])
    }

    /// Returns the entity at the cell a [`HexVector`] addresses.
    ///
    /// # Errors
    ///
    /// [`CoreError::CellOutOfBounds`] if the hex lies outside the grid.
    pub fn entity_at_hex(&self, hex: HexVector, layer: usize) -> Result<Entity, CoreError> {
        self.entity_at(hex.x(), hex.y(), layer)
    }

    /// Stores `entity` at (x, y) on `layer`.
    ///
    /// # Errors
    ///
    /// [`CoreError::CellOutOfBounds`] if the coordinate or layer is invalid.
    pub fn set_entity(
        &mut self,
        x: i32,
        y: i32,
        layer: usize,
        entity: Entity,
    ) -> Result<(), CoreError> {
        let index = self.flat_index(x, y, layer)?;
        self.cells[index] = entity;
        Ok(())
    }

    /// World-space position of a tile.
    ///
    /// Odd columns sit half a tile lower, producing the interlocking
    /// hexagonal layout.
    #[must_use]
    pub fn tile_to_world(&self, x: usize, y: usize) -> (f32, f32) {
        #[allow(clippy::cast_precision_loss)]
        let mut world_y = y as f32 * TILE_HEIGHT;
        if x & 1 == 1 {
            world_y += TILE_HEIGHT / 2.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let world_x = x as f32 * TILE_WIDTH;
        (world_x, world_y)
    }

    /// Tile under a world-space position.
    ///
    /// The inverse of [`EntityGrid::tile_to_world`], clamped into grid bounds
    /// rather than failing: callers use this for view culling and mouse
    /// hit-testing, where positions off the map edge are routine.
    #[must_use]
    pub fn world_to_tile(&self, world_x: f32, world_y: f32) -> (usize, usize) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let x = (world_x / TILE_WIDTH).floor().max(0.0) as usize;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let y = (world_y / TILE_HEIGHT).floor().max(0.0) as usize;
        (x.min(self.size_x - 1), y.min(self.size_y - 1))
    }
}
