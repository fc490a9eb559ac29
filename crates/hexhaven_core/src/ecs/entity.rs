//! # Entity Management
//!
//! Entities are opaque integer ids with no inherent data; everything an
//! entity "is" lives in components keyed by its id.
//!
//! Id `0` is reserved as the null entity, so empty grid cells can be told
//! apart from occupied ones. Ids are handed out monotonically starting at 1
//! and are never recycled: a stale id simply resolves to "no component" in
//! every sparse set, which keeps erasure logic trivial.

use std::fmt;

/// Unique identifier for an entity.
///
/// A plain `u32` under the hood. `Entity::NULL` (id 0) marks an empty slot
/// and is never returned by [`EntityAllocator::allocate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Entity(u32);

impl Entity {
    /// The null entity, used for empty grid cells.
    pub const NULL: Self = Self(0);

    /// Creates an entity id from a raw integer.
    ///
    /// Intended for tests and for storage internals; simulation code should
    /// obtain ids from [`EntityAllocator::allocate`].
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer id.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the id as an array index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Checks whether this is the null entity.
    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic entity id source.
///
/// Starts at 1 so that 0 always means "no entity". Ids strictly increase and
/// are never reused, so no free list exists and no collision is possible in
/// single-threaded use.
#[derive(Debug, Clone)]
pub struct EntityAllocator {
    tally: u32,
}

impl EntityAllocator {
    /// Creates a fresh allocator with no entities handed out yet.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { tally: 1 }
    }

    /// Returns the next unused entity id and advances the counter.
    #[inline]
    pub fn allocate(&mut self) -> Entity {
        let entity = Entity(self.tally);
        self.tally += 1;
        entity
    }

    /// Number of entities allocated so far.
    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        (self.tally - 1) as usize
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic_and_start_at_one() {
        let mut allocator = EntityAllocator::new();
        let a = allocator.allocate();
        let b = allocator.allocate();
        assert_eq!(a, Entity::from_raw(1));
        assert_eq!(b, Entity::from_raw(2));
        assert_eq!(allocator.count(), 2);
    }

    #[test]
    fn test_null_entity_is_zero() {
        assert!(Entity::NULL.is_null());
        assert_eq!(Entity::NULL.raw(), 0);
        assert!(!Entity::from_raw(1).is_null());
    }
}
