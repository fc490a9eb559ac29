//! # Core Error Types
//!
//! All errors that can occur in the simulation kernel.
//!
//! Every variant is a local precondition violation: nothing here is retried or
//! recovered mid-operation. Callers either pre-check (`contains`, `is_valid`)
//! or treat a returned error as a programming fault.

use crate::ecs::Entity;
use thiserror::Error;

/// Errors that can occur in the simulation kernel.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// Entity id falls outside a sparse set's declared id range.
    #[error("entity {entity} outside sparse capacity {capacity}")]
    EntityOutOfRange {
        /// The offending entity id.
        entity: Entity,
        /// The sparse array capacity it was checked against.
        capacity: usize,
    },

    /// `get` was called for an entity that holds no such component.
    #[error("entity {0} has no such component")]
    ComponentMissing(Entity),

    /// The dense storage is full; no further entries can be added.
    #[error("dense storage full: capacity {capacity}")]
    CapacityExhausted {
        /// Maximum number of simultaneous live entries.
        capacity: usize,
    },

    /// A grid coordinate falls outside the entity grid's bounds.
    #[error("grid cell ({x}, {y}) layer {layer} outside {size_x}x{size_y} grid with {layers} layers")]
    CellOutOfBounds {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
        /// Requested layer.
        layer: usize,
        /// Grid width.
        size_x: usize,
        /// Grid height.
        size_y: usize,
        /// Number of layers in the grid.
        layers: usize,
    },

    /// Cubic hex coordinates whose components do not sum to zero.
    #[error("cubic coordinates ({q}, {r}, {s}) must sum to zero")]
    InvalidCubic {
        /// First cubic component.
        q: i32,
        /// Second cubic component.
        r: i32,
        /// Third cubic component.
        s: i32,
    },
}
