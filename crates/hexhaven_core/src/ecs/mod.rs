//! # Entity Component System
//!
//! A fixed-capacity, sparse-set ECS.
//!
//! ## Design Philosophy
//!
//! - All storage is preallocated when the [`World`] is built
//! - Each component kind lives in its own [`SparseSet`], packed densely
//! - Entity ids are plain monotonically increasing integers; id `0` is the
//!   reserved null entity and ids are never recycled
//! - No dynamic dispatch, no locking, no interior mutability

pub mod component;
pub mod entity;
pub mod sparse_set;
pub mod world;

pub use component::{AgeStage, Appearance, Lifecycle, Position, SpriteId, TileAttributes, Tint};
pub use entity::{Entity, EntityAllocator};
pub use sparse_set::SparseSet;
pub use world::World;
