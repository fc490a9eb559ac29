//! # World Aggregate
//!
//! The single source of truth for simulation state: one sparse set per
//! component kind, the layered entity grid, the entity id counter, the
//! in-game calendar, and the designated camera entity.
//!
//! The world is exclusively owned by its single simulation thread. Systems
//! receive `&mut World` explicitly; there is no ambient global.

use crate::calendar::Calendar;
use crate::ecs::component::{Appearance, Lifecycle, Position, TileAttributes};
use crate::ecs::entity::{Entity, EntityAllocator};
use crate::ecs::sparse_set::SparseSet;
use crate::grid::EntityGrid;

/// Extra entity headroom on top of the tile count, for the camera, agents,
/// trees and other non-tile entities. Undersizing this shows up as
/// capacity-exhausted errors from `add`.
pub const ENTITY_SLACK: usize = 1000;

/// Dense capacity for agent lifecycles: at most this many living agents.
pub const MAX_AGENTS: usize = 1000;

/// Container for every entity and component that currently exists.
///
/// Multiple worlds can coexist (unit tests lean on that for isolation);
/// normal gameplay uses exactly one.
pub struct World {
    allocator: EntityAllocator,

    // =========================================================================
    // Component storages - add new component kinds here
    // =========================================================================
    /// Position storage, carried by tiles, objects, agents and the camera.
    pub positions: SparseSet<Position>,
    /// Terrain attribute storage, carried by terrain tiles.
    pub tile_attributes: SparseSet<TileAttributes>,
    /// Appearance storage for everything drawable.
    pub appearances: SparseSet<Appearance>,
    /// Lifecycle storage, carried by agents only (split dense/sparse bounds).
    pub lifecycles: SparseSet<Lifecycle>,

    /// The spatial index mapping grid cells to entities.
    pub grid: EntityGrid,
    /// Current in-game date.
    pub calendar: Calendar,
    /// The camera entity. Just an ordinary entity with a position component,
    /// not special-cased storage.
    pub camera: Entity,
}

impl World {
    /// Creates an empty world sized for a `size_x` by `size_y` map with
    /// `layers` grid layers.
    ///
    /// Every sparse set is sized to `size_x * size_y + ENTITY_SLACK` up
    /// front; nothing resizes afterwards. The grid starts unpopulated.
    ///
    /// # Panics
    ///
    /// Panics if any dimension is zero.
    #[must_use]
    pub fn new(size_x: usize, size_y: usize, layers: usize) -> Self {
        let max_entities = size_x * size_y + ENTITY_SLACK;

        Self {
            allocator: EntityAllocator::new(),
            positions: SparseSet::new(max_entities),
            tile_attributes: SparseSet::new(max_entities),
            appearances: SparseSet::new(max_entities),
            lifecycles: SparseSet::with_layout(MAX_AGENTS, max_entities),
            grid: EntityGrid::new(size_x, size_y, layers),
            calendar: Calendar::EPOCH,
            camera: Entity::NULL,
        }
    }

    /// Returns the next unused entity id.
    ///
    /// Ids strictly increase and are never recycled.
    #[inline]
    pub fn new_entity(&mut self) -> Entity {
        self.allocator.allocate()
    }

    /// Number of entities allocated so far.
    #[inline]
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.allocator.count()
    }

    /// Allocates a terrain-tile entity for every grid cell on the terrain
    /// layer. Object-layer cells stay null.
    pub fn populate_grid(&mut self) {
        self.grid.populate_terrain(&mut self.allocator);
    }
}
