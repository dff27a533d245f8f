/*!
A sparse set of state identifiers.

This is the classic sparse/dense pair of arrays: membership tests, inserts,
removals of an arbitrary element and clearing are all constant time, and
iteration visits elements in insertion order. All values must be smaller
than the set's capacity, which for the simulator is the NFA's vertex count.
*/

use crate::nfa::StateId;

#[derive(Clone, Debug)]
pub struct SparseSet {
    /// The number of elements currently in the set.
    len: usize,
    /// Elements in insertion order. Only the first `len` slots are live.
    dense: Vec<StateId>,
    /// Maps a value to its index in `dense`. Entries for values not in the
    /// set are arbitrary, so membership must be confirmed against `dense`.
    sparse: Vec<usize>,
}

impl SparseSet {
    /// Creates a set able to hold values in `0..capacity`.
    pub fn new(capacity: usize) -> SparseSet {
        let mut set = SparseSet { len: 0, dense: vec![], sparse: vec![] };
        set.resize(capacity);
        set
    }

    /// Changes the capacity of this set. The set is cleared.
    pub fn resize(&mut self, new_capacity: usize) {
        self.clear();
        self.dense.resize(new_capacity, 0);
        self.sparse.resize(new_capacity, 0);
    }

    pub fn capacity(&self) -> usize {
        self.dense.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `id`, returning `true` if it wasn't already present.
    ///
    /// # Panics
    ///
    /// If `id` is not smaller than the capacity.
    #[inline]
    pub fn insert(&mut self, id: StateId) -> bool {
        if self.contains(id) {
            return false;
        }
        assert!(
            id < self.capacity(),
            "{:?} exceeds capacity of {:?}",
            id,
            self.capacity(),
        );
        let index = self.len;
        self.dense[index] = id;
        self.sparse[id] = index;
        self.len += 1;
        true
    }

    #[inline]
    pub fn contains(&self, id: StateId) -> bool {
        match self.sparse.get(id) {
            Some(&index) => index < self.len && self.dense[index] == id,
            None => false,
        }
    }

    /// Removes and returns one element of the set, or `None` if it's empty.
    ///
    /// The most recently inserted element is the one removed.
    #[inline]
    pub fn pop(&mut self) -> Option<StateId> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.dense[self.len])
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Iterates over the elements in insertion order.
    pub fn iter(&self) -> SparseSetIter<'_> {
        SparseSetIter(self.dense[..self.len].iter())
    }
}

#[derive(Debug)]
pub struct SparseSetIter<'a>(std::slice::Iter<'a, StateId>);

impl<'a> Iterator for SparseSetIter<'a> {
    type Item = StateId;

    #[inline]
    fn next(&mut self) -> Option<StateId> {
        self.0.next().copied()
    }
}
