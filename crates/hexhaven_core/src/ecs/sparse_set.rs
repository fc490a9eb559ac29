//! # Sparse-Set Component Storage
//!
//! Fixed-capacity dense/sparse index-mapped storage, one set per component
//! kind. This is the storage primitive everything else is built on.
//!
//! ## Storage model
//!
//! Three parallel arrays:
//!
//! - `sparse`: entity id -> dense slot (may hold stale entries)
//! - `dense`: dense slot -> entity id (no holes below `count`)
//! - `elements`: dense slot -> component value
//!
//! An entity `e` is present exactly when `sparse[e] < count` and
//! `dense[sparse[e]] == e`; that cross-link test is authoritative, so stale
//! `sparse` entries are harmless.
//!
//! ## Capacity
//!
//! Two independent bounds, both fixed at construction:
//!
//! - the sparse array length bounds the valid entity id range
//! - the dense array length bounds the number of simultaneous live entries
//!
//! The set never resizes. Exceeding either bound is an explicit [`CoreError`].

use crate::ecs::entity::Entity;
use crate::error::CoreError;

/// Fixed-capacity sparse set mapping entity ids to component values.
///
/// Mutation is strictly single-threaded: add, mutate in place through
/// [`SparseSet::get_mut`], and swap-remove. Iteration order is dense-array
/// order, which is insertion order until a removal reorders the tail.
///
/// # Example
///
/// ```rust,ignore
/// let mut set: SparseSet<f32> = SparseSet::new(100);
/// set.add(Entity::from_raw(3), 1.5)?;
/// *set.get_mut(Entity::from_raw(3))? += 1.0;
/// ```
pub struct SparseSet<T> {
    /// Entity id -> dense slot. Stale entries are allowed.
    sparse: Box<[usize]>,
    /// Dense slot -> entity id. Valid below `count`.
    dense: Box<[Entity]>,
    /// Dense slot -> component value. Parallel to `dense`.
    elements: Box<[T]>,
    /// Number of live entries.
    count: usize,
}

impl<T: Clone + Default> SparseSet<T> {
    /// Creates a set where both bounds equal `capacity`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_layout(capacity, capacity)
    }

    /// Creates a set with separate dense and sparse bounds.
    ///
    /// Useful for components carried by few entities out of a large id range,
    /// e.g. agent lifecycles in a world dominated by tiles.
    ///
    /// # Panics
    ///
    /// Panics if either capacity is zero.
    #[must_use]
    pub fn with_layout(dense_capacity: usize, sparse_capacity: usize) -> Self {
        assert!(dense_capacity > 0, "dense capacity must be greater than zero");
        assert!(
            sparse_capacity >= dense_capacity,
            "sparse capacity must be at least the dense capacity"
        );

        Self {
            sparse: vec![0; sparse_capacity].into_boxed_slice(),
            dense: vec![Entity::NULL; dense_capacity].into_boxed_slice(),
            elements: vec![T::default(); dense_capacity].into_boxed_slice(),
            count: 0,
        }
    }

    /// Number of live entries.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Whether the set holds no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Upper bound on simultaneous live entries.
    #[inline]
    #[must_use]
    pub fn dense_capacity(&self) -> usize {
        self.dense.len()
    }

    /// Upper bound (exclusive) on valid entity ids.
    #[inline]
    #[must_use]
    pub fn sparse_capacity(&self) -> usize {
        self.sparse.len()
    }

    /// Checks whether `entity` currently holds a value in this set.
    ///
    /// # Errors
    ///
    /// [`CoreError::EntityOutOfRange`] if the id falls outside the sparse
    /// array. An in-range id that is simply absent returns `Ok(false)`.
    #[inline]
    pub fn contains(&self, entity: Entity) -> Result<bool, CoreError> {
        let slot = self
            .sparse
            .get(entity.index())
            .copied()
            .ok_or(CoreError::EntityOutOfRange {
                entity,
                capacity: self.sparse.len(),
            })?;
        Ok(slot < self.count && self.dense[slot] == entity)
    }

    /// Adds `value` for `entity`.
    ///
    /// A duplicate add is a silent no-op: the first write wins and the stored
    /// value is left untouched. This mirrors long-standing behavior that
    /// callers rely on; tests pin it down.
    ///
    /// # Errors
    ///
    /// - [`CoreError::EntityOutOfRange`] if the id exceeds the sparse bound
    /// - [`CoreError::CapacityExhausted`] if the dense array is already full
    pub fn add(&mut self, entity: Entity, value: T) -> Result<(), CoreError> {
        if self.contains(entity)? {
            return Ok(());
        }
        if self.count == self.dense.len() {
            return Err(CoreError::CapacityExhausted {
                capacity: self.dense.len(),
            });
        }

        self.elements[self.count] = value;
        self.dense[self.count] = entity;
        self.sparse[entity.index()] = self.count;
        self.count += 1;
        Ok(())
    }

    /// Returns the value stored for `entity`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::EntityOutOfRange`] if the id exceeds the sparse bound
    /// - [`CoreError::ComponentMissing`] if the entity holds no value here
    pub fn get(&self, entity: Entity) -> Result<&T, CoreError> {
        if !self.contains(entity)? {
            return Err(CoreError::ComponentMissing(entity));
        }
        Ok(&self.elements[self.sparse[entity.index()]])
    }

    /// Returns a mutable borrow of the value stored for `entity`.
    ///
    /// Callers mutate through the borrow directly; there is no separate
    /// write-back step.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SparseSet::get`].
    pub fn get_mut(&mut self, entity: Entity) -> Result<&mut T, CoreError> {
        if !self.contains(entity)? {
            return Err(CoreError::ComponentMissing(entity));
        }
        Ok(&mut self.elements[self.sparse[entity.index()]])
    }

    /// Removes the value stored for `entity`, if any.
    ///
    /// Removal is a swap-remove: the last dense entry is moved into the freed
    /// slot and its sparse link is repaired, so the dense region stays packed.
    /// Removing the final entry degenerates to a pure count decrement.
    /// Removing an absent entity is a no-op.
    ///
    /// # Errors
    ///
    /// [`CoreError::EntityOutOfRange`] if the id exceeds the sparse bound.
    pub fn remove(&mut self, entity: Entity) -> Result<(), CoreError> {
        if !self.contains(entity)? {
            return Ok(());
        }

        let slot = self.sparse[entity.index()];
        let last = self.count - 1;
        let moved = self.dense[last];

        self.dense[slot] = moved;
        self.elements.swap(slot, last);
        self.sparse[moved.index()] = slot;

        self.count -= 1;
        Ok(())
    }

    /// Iterates over live entries in dense order.
    ///
    /// The sequence is finite, restartable, and yields exactly `len()` pairs.
    /// Order is insertion order until a swap-removal reorders the tail.
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.dense[..self.count]
            .iter()
            .copied()
            .zip(self.elements[..self.count].iter())
    }

    /// Iterates mutably over live entries in dense order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut T)> {
        self.dense[..self.count]
            .iter()
            .copied()
            .zip(self.elements[..self.count].iter_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(raw: u32) -> Entity {
        Entity::from_raw(raw)
    }

    #[test]
    fn test_add_then_get() {
        let mut set: SparseSet<String> = SparseSet::new(10);
        set.add(e(0), "test".to_owned()).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains(e(0)).unwrap());
        assert_eq!(set.get(e(0)).unwrap(), "test");
    }

    #[test]
    fn test_duplicate_add_first_write_wins() {
        let mut set: SparseSet<String> = SparseSet::new(10);
        set.add(e(0), "test".to_owned()).unwrap();
        set.add(e(0), "another".to_owned()).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(e(0)).unwrap(), "test");
    }

    #[test]
    fn test_out_of_range_id_is_rejected() {
        let mut set: SparseSet<u32> = SparseSet::new(4);
        assert_eq!(
            set.add(e(4), 7),
            Err(CoreError::EntityOutOfRange {
                entity: e(4),
                capacity: 4
            })
        );
        assert!(set.contains(e(4)).is_err());
        assert!(set.get(e(4)).is_err());
    }

    #[test]
    fn test_get_missing_is_distinct_from_out_of_range() {
        let set: SparseSet<u32> = SparseSet::new(4);
        assert_eq!(set.get(e(2)), Err(CoreError::ComponentMissing(e(2))));
    }

    #[test]
    fn test_capacity_exhausted_is_explicit() {
        let mut set: SparseSet<u32> = SparseSet::with_layout(2, 10);
        set.add(e(5), 50).unwrap();
        set.add(e(6), 60).unwrap();
        assert_eq!(
            set.add(e(7), 70),
            Err(CoreError::CapacityExhausted { capacity: 2 })
        );
        // The full set is untouched.
        assert_eq!(set.len(), 2);
        assert_eq!(*set.get(e(5)).unwrap(), 50);
    }

    #[test]
    fn test_swap_remove_repairs_links() {
        let mut set: SparseSet<u32> = SparseSet::new(10);
        set.add(e(1), 10).unwrap();
        set.add(e(2), 20).unwrap();
        set.add(e(3), 30).unwrap();

        // Removing the middle entry moves entity 3 into its slot.
        set.remove(e(2)).unwrap();
        assert_eq!(set.len(), 2);
        assert!(!set.contains(e(2)).unwrap());
        assert_eq!(*set.get(e(1)).unwrap(), 10);
        assert_eq!(*set.get(e(3)).unwrap(), 30);
    }

    #[test]
    fn test_remove_last_entry() {
        let mut set: SparseSet<u32> = SparseSet::new(10);
        set.add(e(1), 10).unwrap();
        set.add(e(2), 20).unwrap();
        set.remove(e(2)).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(*set.get(e(1)).unwrap(), 10);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut set: SparseSet<u32> = SparseSet::new(10);
        set.add(e(1), 10).unwrap();
        set.remove(e(5)).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(*set.get(e(1)).unwrap(), 10);
    }

    #[test]
    fn test_readd_after_remove() {
        let mut set: SparseSet<u32> = SparseSet::new(10);
        set.add(e(1), 10).unwrap();
        set.remove(e(1)).unwrap();
        assert!(!set.contains(e(1)).unwrap());
        set.add(e(1), 11).unwrap();
        assert_eq!(*set.get(e(1)).unwrap(), 11);
    }

    #[test]
    fn test_mutate_in_place() {
        let mut set: SparseSet<u32> = SparseSet::new(10);
        set.add(e(4), 1).unwrap();
        *set.get_mut(e(4)).unwrap() += 41;
        assert_eq!(*set.get(e(4)).unwrap(), 42);
    }

    #[test]
    fn test_iteration_yields_exactly_live_entries() {
        let mut set: SparseSet<u32> = SparseSet::new(10);
        for raw in 0..6 {
            set.add(e(raw), raw * 10).unwrap();
        }
        set.remove(e(0)).unwrap();
        set.remove(e(3)).unwrap();

        let collected: Vec<(Entity, u32)> = set.iter().map(|(id, v)| (id, *v)).collect();
        assert_eq!(collected.len(), set.len());
        assert_eq!(collected.len(), 4);
        for (id, value) in collected {
            assert!(set.contains(id).unwrap());
            assert_eq!(value, id.raw() * 10);
        }

        // Restartable: a second pass sees the same entries.
        assert_eq!(set.iter().count(), 4);
    }

    #[test]
    fn test_iteration_is_dense_order() {
        let mut set: SparseSet<u32> = SparseSet::new(10);
        set.add(e(7), 70).unwrap();
        set.add(e(2), 20).unwrap();
        set.add(e(9), 90).unwrap();

        let ids: Vec<u32> = set.iter().map(|(id, _)| id.raw()).collect();
        assert_eq!(ids, vec![7, 2, 9]);

        // Swap-removal moves the tail entry forward.
        set.remove(e(7)).unwrap();
        let ids: Vec<u32> = set.iter().map(|(id, _)| id.raw()).collect();
        assert_eq!(ids, vec![9, 2]);
    }

    #[test]
    fn test_iter_mut_updates_values() {
        let mut set: SparseSet<u32> = SparseSet::new(10);
        set.add(e(1), 1).unwrap();
        set.add(e(2), 2).unwrap();
        for (_, value) in set.iter_mut() {
            *value *= 100;
        }
        assert_eq!(*set.get(e(1)).unwrap(), 100);
        assert_eq!(*set.get(e(2)).unwrap(), 200);
    }

    #[test]
    fn test_split_layout_bounds() {
        let set: SparseSet<u32> = SparseSet::with_layout(100, 10_000);
        assert_eq!(set.dense_capacity(), 100);
        assert_eq!(set.sparse_capacity(), 10_000);
    }
}
