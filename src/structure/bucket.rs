//! Bucket queue used by both peeling algorithms.
//!
//! Entities (vertices for core decomposition, edges for truss decomposition) are stored in a bucket
//! indexed by their current key (degree or triangle support).
//! Peeling only ever decreases keys by one, so the cursor on the smallest non empty bucket moves back at most
//! one step per decrement, which gives O(1) amortized extraction of a minimum and O(1) decrement.
//!
//! Inside a bucket, extraction order is the reverse of insertion order. It is deterministic, and decomposition
//! results do not depend on it.

use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

pub struct BucketQueue<T> {
    /// buckets\[k\] holds entities with key k
    buckets: Vec<IndexSet<T>>,
    /// current key of each entity still in the queue
    keys: IndexMap<T, usize>,
    /// no non empty bucket below this key
    cursor: usize,
} // end of struct BucketQueue

impl<T> BucketQueue<T>
where
    T: Copy + Eq + Hash,
{
    /// allocates buckets for keys in 0..=max_key and room for capacity entities
    pub fn with_max_key(max_key: usize, capacity: usize) -> Self {
        let buckets = (0..=max_key).map(|_| IndexSet::<T>::new()).collect();
        BucketQueue {
            buckets,
            keys: IndexMap::with_capacity(capacity),
            cursor: 0,
        }
    }

    /// number of entities in the queue
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.keys.contains_key(item)
    }

    pub fn key_of(&self, item: &T) -> Option<usize> {
        self.keys.get(item).copied()
    }

    /// inserts item with key. An item already present is moved to the new key.
    pub fn insert(&mut self, item: T, key: usize) {
        if let Some(old) = self.keys.insert(item, key) {
            self.buckets[old].swap_remove(&item);
        }
        if key >= self.buckets.len() {
            log::trace!("BucketQueue growing to key {}", key);
            self.buckets.resize_with(key + 1, IndexSet::new);
        }
        self.buckets[key].insert(item);
        if self.keys.len() == 1 || key < self.cursor {
            self.cursor = key;
        }
    } // end of insert

    /// smallest key currently held, None if empty
    pub fn min_key(&mut self) -> Option<usize> {
        if self.keys.is_empty() {
            return None;
        }
        while self.buckets[self.cursor].is_empty() {
            self.cursor += 1;
        }
        Some(self.cursor)
    } // end of min_key

    /// removes an entity of minimal key and returns it with its key
    pub fn pop_min(&mut self) -> Option<(T, usize)> {
        let key = self.min_key()?;
        let item = self.buckets[key].pop()?;
        self.keys.swap_remove(&item);
        Some((item, key))
    } // end of pop_min

    /// decreases key of item by one and returns the new key.
    /// Returns None, leaving the queue unchanged, if the item is not in the queue or its key is already 0.
    pub fn decrement(&mut self, item: &T) -> Option<usize> {
        let key = self.keys.get_mut(item)?;
        if *key == 0 {
            log::error!("BucketQueue::decrement called on a key already at 0");
            return None;
        }
        let old = *key;
        *key -= 1;
        let new = *key;
        self.buckets[old].swap_remove(item);
        self.buckets[new].insert(*item);
        if new < self.cursor {
            self.cursor = new;
        }
        Some(new)
    } // end of decrement
} // end of impl BucketQueue

//=========================================================================

#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn extract_in_key_order() {
        log_init_test();
        //
        let mut queue = BucketQueue::<u32>::with_max_key(5, 4);
        queue.insert(10, 3);
        queue.insert(11, 1);
        queue.insert(12, 5);
        queue.insert(13, 1);
        assert_eq!(queue.len(), 4);
        assert_eq!(queue.min_key(), Some(1));
        let mut keys = Vec::new();
        while let Some((_, key)) = queue.pop_min() {
            keys.push(key);
        }
        assert_eq!(keys, vec![1, 1, 3, 5]);
        assert!(queue.is_empty());
        assert_eq!(queue.pop_min(), None);
    }

    #[test]
    fn decrement_moves_cursor_back() {
        log_init_test();
        //
        let mut queue = BucketQueue::<u32>::with_max_key(4, 3);
        queue.insert(1, 2);
        queue.insert(2, 4);
        queue.insert(3, 3);
        assert_eq!(queue.pop_min(), Some((1, 2)));
        // cursor is now at 2, pushing 3 down to 1 must be seen
        assert_eq!(queue.decrement(&3), Some(2));
        assert_eq!(queue.decrement(&3), Some(1));
        assert_eq!(queue.key_of(&3), Some(1));
        assert_eq!(queue.pop_min(), Some((3, 1)));
        assert_eq!(queue.pop_min(), Some((2, 4)));
        assert_eq!(queue.decrement(&2), None);
    }

    #[test]
    fn decrement_at_zero_refused() {
        let mut queue = BucketQueue::<u32>::with_max_key(1, 2);
        queue.insert(7, 0);
        queue.insert(8, 1);
        assert_eq!(queue.decrement(&7), None);
        assert_eq!(queue.key_of(&7), Some(0));
        assert_eq!(queue.decrement(&8), Some(0));
        assert_eq!(queue.decrement(&8), None);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop_min().map(|(_, k)| k), Some(0));
        assert_eq!(queue.pop_min().map(|(_, k)| k), Some(0));
    }

    #[test]
    fn reinsert_and_grow() {
        let mut queue = BucketQueue::<(u32, u32)>::with_max_key(1, 2);
        queue.insert((0, 1), 1);
        queue.insert((0, 1), 6);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.key_of(&(0, 1)), Some(6));
        queue.insert((1, 2), 4);
        assert!(queue.contains(&(1, 2)));
        assert_eq!(queue.pop_min(), Some(((1, 2), 4)));
        assert_eq!(queue.pop_min(), Some(((0, 1), 6)));
    }
} // end of mod tests
