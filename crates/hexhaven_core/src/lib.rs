//! # HEXHAVEN Core
//!
//! The simulation kernel: a fixed-capacity sparse-set ECS, hexagonal grid
//! addressing, and the layered entity grid that ties them together.
//!
//! ## Architecture Rules
//!
//! 1. **No allocations after setup** - Every container is sized at construction
//! 2. **Single-threaded** - One thread owns the [`World`]; no locks anywhere
//! 3. **Explicit errors** - Out-of-range and missing-component conditions are
//!    surfaced as [`CoreError`], never absorbed silently
//!
//! ## Example
//!
//! ```rust,ignore
//! use hexhaven_core::{SparseSet, Entity, Position};
//!
//! let mut positions: SparseSet<Position> = SparseSet::new(10_000);
//! let tile = Entity::from_raw(1);
//! positions.add(tile, Position::new(0.0, 0.0))?;
//! ```

pub mod calendar;
pub mod ecs;
pub mod error;
pub mod grid;
pub mod hex;

pub use calendar::Calendar;
pub use ecs::{
    AgeStage, Appearance, Entity, EntityAllocator, Lifecycle, Position, SparseSet, SpriteId,
    TileAttributes, Tint, World,
};
pub use error::CoreError;
pub use grid::{EntityGrid, OBJECT_LAYER, TERRAIN_LAYER};
pub use hex::{HexDirection, HexVector};
