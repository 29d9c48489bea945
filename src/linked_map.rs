//! Linked map implementation.
//!
//! This module provides the core [`LinkedMap`] type. The map keeps every key
//! in a mutable linear order while providing O(1) lookup, insertion, removal
//! and repositioning.
//!
//! # Examples
//!
//! ```
//! use linkedmap::linked_map::LinkedMap;
//!
//! let mut map = LinkedMap::new();
//! map.upsert("first", 1);
//! map.upsert("second", 2);
//! map.move_to_back(&"first");
//!
//! let entries: Vec<_> = map.iter().collect();
//! assert_eq!(entries, [(&"second", &2), (&"first", &1)]);
//! ```

use core::borrow::Borrow;
use core::fmt;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::ops::Index;

use hashbrown::HashTable;
use hashbrown::hash_table;

use crate::Ptr;
use crate::RandomState;
use crate::arena::Arena;

mod iter;

pub use iter::IntoIter;
pub use iter::Iter;
pub use iter::Keys;
pub use iter::Values;

#[cold]
#[inline(never)]
fn missing_from_index(ptr: Ptr) -> ! {
    panic!("Node {ptr:?} is linked but missing from the index");
}

/// A hash map that keeps its keys in a mutable linear order.
///
/// New keys are appended to the back. Updating an existing key keeps its
/// position. Any key can be moved to either end, or next to any other key,
/// in O(1).
///
/// Internally a [`HashTable`] maps each key to the handle of a node in an
/// arena-backed circular doubly-linked list. The list is the iteration order;
/// the table only provides lookup.
///
/// The generic parameters are:
/// - `K`: Key type, must implement `Hash + Eq` for most operations
/// - `V`: Value type
/// - `S`: Hash builder type, defaults to the standard hasher
///
/// Every operation that names a key reports a missing key through its return
/// value (`false` or `None`) and leaves the map untouched.
///
/// # Examples
///
/// ```
/// use linkedmap::linked_map::LinkedMap;
///
/// let mut map = LinkedMap::new();
/// map.upsert("apple", 5);
/// map.upsert("banana", 3);
/// map.upsert("cherry", 8);
/// map.move_before(&"cherry", &"apple");
///
/// assert_eq!(map.to_string(), "{cherry: 8, apple: 5, banana: 3}");
/// ```
pub struct LinkedMap<K, V, S = RandomState> {
    head: Ptr,
    tail: Ptr,
    nodes: Arena<K, V>,
    table: HashTable<Ptr>,
    hasher: S,
}

impl<K, V> LinkedMap<K, V> {
    /// Creates a new, empty linked map.
    ///
    /// The map does not allocate until the first key is inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedmap::LinkedMap;
    ///
    /// let map: LinkedMap<&str, i32> = LinkedMap::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.front(), None);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty linked map able to hold at least `capacity` entries
    /// without reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedmap::LinkedMap;
    ///
    /// let map: LinkedMap<&str, i32> = LinkedMap::with_capacity(10);
    /// assert!(map.capacity() >= 10);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::default())
    }
}

impl<K, V, S> LinkedMap<K, V, S> {
    /// Creates an empty linked map which will use `hasher` to hash keys.
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates an empty linked map with the given capacity and hasher.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hashbrown::DefaultHashBuilder as RandomState;
    /// use linkedmap::linked_map::LinkedMap;
    ///
    /// let mut map: LinkedMap<&str, i32, _> =
    ///     LinkedMap::with_capacity_and_hasher(10, RandomState::default());
    /// map.upsert("key", 42);
    /// assert_eq!(map.get(&"key"), Some(&42));
    /// ```
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        LinkedMap {
            head: Ptr::null(),
            tail: Ptr::null(),
            nodes: Arena::with_capacity(capacity),
            table: HashTable::with_capacity(capacity),
            hasher,
        }
    }

    /// Returns a reference to the map's hasher.
    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedmap::LinkedMap;
    ///
    /// let mut map = LinkedMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.upsert(1, "a");
    /// map.upsert(1, "b");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of entries the map can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.table.capacity().min(self.nodes.capacity())
    }

    /// Removes every entry, keeping the allocated memory for reuse.
    pub fn clear(&mut self) {
        self.table.clear();
        self.nodes.clear();
        self.head = Ptr::null();
        self.tail = Ptr::null();
    }

    /// Removes every entry and returns the map for further use.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedmap::LinkedMap;
    ///
    /// let mut map = LinkedMap::new();
    /// map.upsert("a", 1);
    /// map.upsert("b", 2);
    ///
    /// map.reset().upsert("c", 3);
    /// assert_eq!(map.to_string(), "{c: 3}");
    /// ```
    pub fn reset(&mut self) -> &mut Self {
        self.clear();
        self
    }

    /// Returns the first entry in the current order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedmap::LinkedMap;
    ///
    /// let mut map = LinkedMap::new();
    /// assert_eq!(map.front(), None);
    /// map.upsert("a", 1);
    /// map.upsert("b", 2);
    /// assert_eq!(map.front(), Some((&"a", &1)));
    /// ```
    pub fn front(&self) -> Option<(&K, &V)> {
        let node = &self.nodes[self.head.optional()?];
        Some((&node.key, &node.value))
    }

    /// Returns the last entry in the current order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedmap::LinkedMap;
    ///
    /// let mut map = LinkedMap::new();
    /// assert_eq!(map.back(), None);
    /// map.upsert("a", 1);
    /// map.upsert("b", 2);
    /// assert_eq!(map.back(), Some((&"b", &2)));
    /// ```
    pub fn back(&self) -> Option<(&K, &V)> {
        let node = &self.nodes[self.tail.optional()?];
        Some((&node.key, &node.value))
    }

    /// Returns the first entry with a mutable reference to its value.
    pub fn front_mut(&mut self) -> Option<(&K, &mut V)> {
        let node = &mut self.nodes[self.head.optional()?];
        Some((&node.key, &mut node.value))
    }

    /// Returns the last entry with a mutable reference to its value.
    pub fn back_mut(&mut self) -> Option<(&K, &mut V)> {
        let node = &mut self.nodes[self.tail.optional()?];
        Some((&node.key, &mut node.value))
    }

    /// Calls `visit` on each entry from front to back, stopping early the
    /// first time it returns `false`.
    ///
    /// The map is borrowed for the whole traversal, so it cannot be modified
    /// from inside `visit`. Use [`retain`](Self::retain) to drop entries
    /// during a pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedmap::LinkedMap;
    ///
    /// let mut map = LinkedMap::new();
    /// for (i, key) in ["a", "b", "c", "d"].into_iter().enumerate() {
    ///     map.upsert(key, i);
    /// }
    ///
    /// let mut seen = Vec::new();
    /// map.range(|key, value| {
    ///     seen.push(*key);
    ///     *value < 1
    /// });
    /// assert_eq!(seen, ["a", "b"]);
    /// ```
    pub fn range<F>(&self, mut visit: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        for (key, value) in self.iter() {
            if !visit(key, value) {
                break;
            }
        }
    }

    /// Returns an iterator over the entries in current order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedmap::LinkedMap;
    ///
    /// let mut map = LinkedMap::new();
    /// map.upsert("a", 1);
    /// map.upsert("b", 2);
    ///
    /// let rev: Vec<_> = map.iter().rev().collect();
    /// assert_eq!(rev, [(&"b", &2), (&"a", &1)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.nodes, self.head, self.tail, self.len())
    }

    /// Returns an iterator over the keys in current order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values in current order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Removes and returns the first entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedmap::LinkedMap;
    ///
    /// let mut map = LinkedMap::new();
    /// map.upsert("a", 1);
    /// map.upsert("b", 2);
    /// assert_eq!(map.pop_front(), Some(("a", 1)));
    /// assert_eq!(map.pop_front(), Some(("b", 2)));
    /// assert_eq!(map.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<(K, V)> {
        let ptr = self.head.optional()?;
        Some(self.remove_ptr(ptr))
    }

    /// Removes and returns the last entry.
    pub fn pop_back(&mut self) -> Option<(K, V)> {
        let ptr = self.tail.optional()?;
        Some(self.remove_ptr(ptr))
    }

    /// Retains only the entries for which `keep` returns `true`.
    ///
    /// Entries are visited in current order, and `keep` may modify the values
    /// it is shown.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedmap::LinkedMap;
    ///
    /// let mut map: LinkedMap<i32, i32> = (1..=6).map(|i| (i, i)).collect();
    /// map.retain(|_, value| {
    ///     *value *= 10;
    ///     *value % 20 == 0
    /// });
    /// assert_eq!(map.to_string(), "{2: 20, 4: 40, 6: 60}");
    /// ```
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let mut ptr = self.head;
        for _ in 0..self.len() {
            let next = self.nodes.next(ptr);
            let node = &mut self.nodes[ptr];
            if !keep(&node.key, &mut node.value) {
                self.remove_ptr(ptr);
            }
            ptr = next;
        }
    }

    /// Unlinks `ptr` from the order, drops it from the index and frees its
    /// slot.
    fn remove_ptr(&mut self, ptr: Ptr) -> (K, V) {
        let hash = self.nodes[ptr].hash;
        match self.table.find_entry(hash, |&p| p == ptr) {
            Ok(occupied) => {
                occupied.remove();
            }
            Err(_) => missing_from_index(ptr),
        }
        self.unlink(ptr);
        let node = self.nodes.free(ptr);
        (node.key, node.value)
    }

    /// Detaches `ptr` from its neighbours, fixing up `head` and `tail`.
    fn unlink(&mut self, ptr: Ptr) {
        let prev = self.nodes.prev(ptr);
        let next = self.nodes.next(ptr);

        if next == ptr {
            debug_assert_eq!(self.head, ptr);
            debug_assert_eq!(self.tail, ptr);
            self.head = Ptr::null();
            self.tail = Ptr::null();
        } else {
            self.nodes.set_next(prev, next);
            self.nodes.set_prev(next, prev);
            if self.head == ptr {
                self.head = next;
            }
            if self.tail == ptr {
                self.tail = prev;
            }
        }

        self.nodes.set_prev(ptr, Ptr::null());
        self.nodes.set_next(ptr, Ptr::null());
    }

    /// Links the detached `ptr` as the only node of an empty list.
    fn link_alone(&mut self, ptr: Ptr) {
        debug_assert!(self.head.is_null() && self.tail.is_null());
        self.nodes.set_prev(ptr, ptr);
        self.nodes.set_next(ptr, ptr);
        self.head = ptr;
        self.tail = ptr;
    }

    /// Links the detached `ptr` immediately before `next`.
    fn link_before(&mut self, ptr: Ptr, next: Ptr) {
        let prev = self.nodes.prev(next);
        self.nodes.set_next(prev, ptr);
        self.nodes.set_prev(next, ptr);
        self.nodes.set_prev(ptr, prev);
        self.nodes.set_next(ptr, next);
        if self.head == next {
            self.head = ptr;
        }
    }

    /// Links the detached `ptr` immediately after `prev`.
    fn link_after(&mut self, ptr: Ptr, prev: Ptr) {
        let next = self.nodes.next(prev);
        self.nodes.set_next(prev, ptr);
        self.nodes.set_prev(next, ptr);
        self.nodes.set_prev(ptr, prev);
        self.nodes.set_next(ptr, next);
        if self.tail == prev {
            self.tail = ptr;
        }
    }

    fn link_as_head(&mut self, ptr: Ptr) {
        match self.head.optional() {
            Some(head) => self.link_before(ptr, head),
            None => self.link_alone(ptr),
        }
    }

    fn link_as_tail(&mut self, ptr: Ptr) {
        match self.tail.optional() {
            Some(tail) => self.link_after(ptr, tail),
            None => self.link_alone(ptr),
        }
    }

    /// Checks the index/order bijection and the circular links.
    #[cfg(test)]
    pub(crate) fn validate(&self) {
        assert_eq!(
            self.table.len(),
            self.nodes.len(),
            "Index and order must have the same length"
        );

        if self.is_empty() {
            assert!(self.head.is_null(), "Empty map must have a null head");
            assert!(self.tail.is_null(), "Empty map must have a null tail");
            return;
        }

        assert!(self.nodes.is_occupied(self.head), "Head must be occupied");
        assert!(self.nodes.is_occupied(self.tail), "Tail must be occupied");
        assert_eq!(self.nodes.prev(self.head), self.tail, "Head links to tail");
        assert_eq!(self.nodes.next(self.tail), self.head, "Tail links to head");

        let mut ptr = self.head;
        for step in 0..self.len() {
            assert!(self.nodes.is_occupied(ptr), "Linked node must be occupied");
            let node = &self.nodes[ptr];
            assert!(
                self.table.find(node.hash, |&p| p == ptr).is_some(),
                "Linked node {ptr:?} must be indexed"
            );
            let next = self.nodes.next(ptr);
            assert_eq!(self.nodes.prev(next), ptr, "Links must be symmetric");
            if step + 1 < self.len() {
                assert_ne!(next, self.head, "List closes before visiting every node");
            } else {
                assert_eq!(next, self.head, "List must close after the tail");
            }
            ptr = next;
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LinkedMap<K, V, S> {
    fn find_ptr<Q>(&self, key: &Q) -> Option<Ptr>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.is_empty() {
            return None;
        }
        let hash = self.hasher.hash_one(key);
        self.table
            .find(hash, |&ptr| key.eq(self.nodes[ptr].key.borrow()))
            .copied()
    }

    /// Looks up `key`, appending a new node at the back if it is absent.
    ///
    /// Returns the node's handle, and hands `value` back untouched when the
    /// key was already present.
    fn find_or_insert_back(&mut self, key: K, value: V) -> (Ptr, Option<V>) {
        let hash = self.hasher.hash_one(&key);
        let nodes = &self.nodes;
        let ptr = match self.table.entry(
            hash,
            |&ptr| nodes[ptr].key == key,
            |&ptr| nodes[ptr].hash,
        ) {
            hash_table::Entry::Occupied(occupied) => return (*occupied.get(), Some(value)),
            hash_table::Entry::Vacant(vacant) => {
                let ptr = self.nodes.alloc(key, value, hash);
                vacant.insert(ptr);
                ptr
            }
        };
        self.link_as_tail(ptr);
        (ptr, None)
    }

    /// Sets the value for `key`.
    ///
    /// A new key is appended to the back and `true` is returned. An existing
    /// key has its value overwritten in place, keeps its position, and
    /// `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedmap::LinkedMap;
    ///
    /// let mut map = LinkedMap::new();
    /// assert!(map.upsert("a", 1));
    /// assert!(map.upsert("b", 2));
    /// assert!(!map.upsert("a", 10));
    /// assert_eq!(map.to_string(), "{a: 10, b: 2}");
    /// ```
    pub fn upsert(&mut self, key: K, value: V) -> bool {
        match self.find_or_insert_back(key, value) {
            (ptr, Some(value)) => {
                self.nodes[ptr].value = value;
                false
            }
            (_, None) => true,
        }
    }

    /// Inserts `key` at the back only if it is absent.
    ///
    /// Returns `true` if the key was inserted. An existing key keeps both its
    /// value and its position, and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedmap::LinkedMap;
    ///
    /// let mut map = LinkedMap::new();
    /// assert!(map.insert_if_absent("a", 1));
    /// assert!(!map.insert_if_absent("a", 2));
    /// assert_eq!(map.get(&"a"), Some(&1));
    /// ```
    pub fn insert_if_absent(&mut self, key: K, value: V) -> bool {
        self.find_or_insert_back(key, value).1.is_none()
    }

    /// Sets the value for `key`, returning the value it replaced.
    ///
    /// Behaves like [`upsert`](Self::upsert): a new key goes to the back and
    /// an existing key keeps its position.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedmap::LinkedMap;
    ///
    /// let mut map = LinkedMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.insert(37, "b"), Some("a"));
    /// assert_eq!(map[&37], "b");
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.find_or_insert_back(key, value) {
            (ptr, Some(value)) => Some(core::mem::replace(&mut self.nodes[ptr].value, value)),
            (_, None) => None,
        }
    }

    /// Returns `true` if the map contains `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_ptr(key).is_some()
    }

    /// Returns a reference to the value stored for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedmap::LinkedMap;
    ///
    /// let mut map = LinkedMap::new();
    /// map.upsert(String::from("a"), 1);
    /// assert_eq!(map.get("a"), Some(&1));
    /// assert_eq!(map.get("b"), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let ptr = self.find_ptr(key)?;
        Some(&self.nodes[ptr].value)
    }

    /// Returns the stored key and value for `key`.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let node = &self.nodes[self.find_ptr(key)?];
        Some((&node.key, &node.value))
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let ptr = self.find_ptr(key)?;
        Some(&mut self.nodes[ptr].value)
    }

    /// Removes `key` from the map, returning its value if it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedmap::LinkedMap;
    ///
    /// let mut map = LinkedMap::new();
    /// map.upsert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes `key` from the map, returning the stored key and value if it
    /// was present.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.is_empty() {
            return None;
        }

        let hash = self.hasher.hash_one(key);
        let ptr = match self
            .table
            .find_entry(hash, |&ptr| key.eq(self.nodes[ptr].key.borrow()))
        {
            Ok(occupied) => occupied.remove().0,
            Err(_) => return None,
        };

        self.unlink(ptr);
        let node = self.nodes.free(ptr);
        Some((node.key, node.value))
    }

    /// Moves `key` to the front of the order.
    ///
    /// Returns `false` without changing anything if `key` is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedmap::LinkedMap;
    ///
    /// let mut map = LinkedMap::new();
    /// map.upsert("a", 1);
    /// map.upsert("b", 2);
    /// map.upsert("c", 3);
    ///
    /// assert!(map.move_to_front(&"c"));
    /// assert_eq!(map.front(), Some((&"c", &3)));
    /// assert!(!map.move_to_front(&"z"));
    /// ```
    pub fn move_to_front<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(ptr) = self.find_ptr(key) else {
            return false;
        };
        if ptr != self.head {
            self.unlink(ptr);
            self.link_as_head(ptr);
        }
        true
    }

    /// Moves `key` to the back of the order.
    ///
    /// Returns `false` without changing anything if `key` is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedmap::LinkedMap;
    ///
    /// let mut map = LinkedMap::new();
    /// map.upsert("a", 1);
    /// map.upsert("b", 2);
    ///
    /// assert!(map.move_to_back(&"a"));
    /// assert_eq!(map.back(), Some((&"a", &1)));
    /// ```
    pub fn move_to_back<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(ptr) = self.find_ptr(key) else {
            return false;
        };
        if ptr != self.tail {
            self.unlink(ptr);
            self.link_as_tail(ptr);
        }
        true
    }

    /// Moves `key` so that it sits immediately before `mark`.
    ///
    /// Returns `false` without changing anything if either key is absent.
    /// Moving a key before itself leaves the order unchanged and returns
    /// `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedmap::LinkedMap;
    ///
    /// let mut map = LinkedMap::new();
    /// map.upsert("a", 1);
    /// map.upsert("b", 2);
    /// map.upsert("c", 3);
    ///
    /// assert!(map.move_before(&"a", &"c"));
    /// assert_eq!(map.to_string(), "{b: 2, a: 1, c: 3}");
    /// ```
    pub fn move_before<Q>(&mut self, key: &Q, mark: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (Some(ptr), Some(mark)) = (self.find_ptr(key), self.find_ptr(mark)) else {
            return false;
        };
        let in_place = ptr != self.tail && self.nodes.next(ptr) == mark;
        if ptr != mark && !in_place {
            self.unlink(ptr);
            self.link_before(ptr, mark);
        }
        true
    }

    /// Moves `key` so that it sits immediately after `mark`.
    ///
    /// Returns `false` without changing anything if either key is absent.
    /// Moving a key after itself leaves the order unchanged and returns
    /// `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedmap::LinkedMap;
    ///
    /// let mut map = LinkedMap::new();
    /// map.upsert("a", 1);
    /// map.upsert("b", 2);
    /// map.upsert("c", 3);
    ///
    /// assert!(map.move_after(&"c", &"a"));
    /// assert_eq!(map.to_string(), "{a: 1, c: 3, b: 2}");
    /// ```
    pub fn move_after<Q>(&mut self, key: &Q, mark: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (Some(ptr), Some(mark)) = (self.find_ptr(key), self.find_ptr(mark)) else {
            return false;
        };
        let in_place = ptr != self.head && self.nodes.prev(ptr) == mark;
        if ptr != mark && !in_place {
            self.unlink(ptr);
            self.link_after(ptr, mark);
        }
        true
    }

    /// Shrinks the capacity of the map as much as possible.
    pub fn shrink_to_fit(&mut self) {
        let nodes = &self.nodes;
        self.table.shrink_to_fit(|&ptr| nodes[ptr].hash);
        self.nodes.shrink_to_fit();
    }
}

impl<K, V, S: Default> Default for LinkedMap<K, V, S> {
    fn default() -> Self {
        LinkedMap::with_capacity_and_hasher(0, S::default())
    }
}

impl<K: Clone, V: Clone, S: Clone> Clone for LinkedMap<K, V, S> {
    fn clone(&self) -> Self {
        LinkedMap {
            head: self.head,
            tail: self.tail,
            nodes: self.nodes.clone(),
            table: self.table.clone(),
            hasher: self.hasher.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for LinkedMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Formats the map as `{key: value, ...}` in current order.
///
/// ```
/// use linkedmap::LinkedMap;
///
/// let mut map = LinkedMap::new();
/// assert_eq!(map.to_string(), "{}");
/// map.upsert("a", 1);
/// map.upsert("b", 2);
/// assert_eq!(map.to_string(), "{a: 1, b: 2}");
/// ```
impl<K: fmt::Display, V: fmt::Display, S> fmt::Display for LinkedMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}

/// Two maps are equal when they hold the same entries in the same order.
impl<K: PartialEq, V: PartialEq, S> PartialEq for LinkedMap<K, V, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, S> Eq for LinkedMap<K, V, S> {}

impl<K, V, S> FromIterator<(K, V)> for LinkedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = LinkedMap::with_capacity_and_hasher(iter.size_hint().0, S::default());
        map.extend(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for LinkedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.upsert(key, value);
        }
    }
}

impl<'a, K, V, S> Extend<(&'a K, &'a V)> for LinkedMap<K, V, S>
where
    K: Hash + Eq + Copy,
    V: Copy,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: I) {
        for (&key, &value) in iter {
            self.upsert(key, value);
        }
    }
}

impl<K, V, S> IntoIterator for LinkedMap<K, V, S> {
    type IntoIter = IntoIter<K, V>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        let len = self.len();
        IntoIter::new(self.nodes, self.head, self.tail, len)
    }
}

impl<'a, K, V, S> IntoIterator for &'a LinkedMap<K, V, S> {
    type IntoIter = Iter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, Q, V, S> Index<&Q> for LinkedMap<K, V, S>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    fn index(&self, key: &Q) -> &Self::Output {
        self.get(key).expect("no entry found for key")
    }
}
