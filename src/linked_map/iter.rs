use core::iter::FusedIterator;

use crate::Ptr;
use crate::arena::Arena;

/// An iterator over the entries of a [`LinkedMap`], in current order.
///
/// This struct is created by the [`iter`] method on [`LinkedMap`]. See its
/// documentation for more.
///
/// [`iter`]: super::LinkedMap::iter
/// [`LinkedMap`]: super::LinkedMap
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
/// for (key, value) in map.iter() {
///     println!("{key}: {value}");
/// }
/// ```
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    nodes: &'a Arena<K, V>,
    forward_ptr: Ptr,
    reverse_ptr: Ptr,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(nodes: &'a Arena<K, V>, head: Ptr, tail: Ptr, len: usize) -> Self {
        Iter {
            nodes,
            forward_ptr: head,
            reverse_ptr: tail,
            remaining: len,
        }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let nodes = self.nodes;
        let ptr = self.forward_ptr;
        self.forward_ptr = nodes.next(ptr);

        let node = &nodes[ptr];
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let nodes = self.nodes;
        let ptr = self.reverse_ptr;
        self.reverse_ptr = nodes.prev(ptr);

        let node = &nodes[ptr];
        Some((&node.key, &node.value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An iterator over the keys of a [`LinkedMap`](super::LinkedMap), in
/// current order.
#[derive(Debug)]
pub struct Keys<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of a [`LinkedMap`](super::LinkedMap), in
/// current order.
#[derive(Debug)]
pub struct Values<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

/// An owning iterator over the entries of a [`LinkedMap`], in current order.
///
/// This struct is created by the [`into_iter`] method on [`LinkedMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`LinkedMap`]: super::LinkedMap
///
/// # Examples
///
/// ```
/// use linkedmap::LinkedMap;
///
/// let mut map = LinkedMap::new();
/// map.upsert("a", 1);
/// map.upsert("b", 2);
/// map.move_to_front(&"b");
///
/// let entries: Vec<_> = map.into_iter().collect();
/// assert_eq!(entries, [("b", 2), ("a", 1)]);
/// ```
#[derive(Debug)]
pub struct IntoIter<K, V> {
    nodes: Arena<K, V>,
    forward_ptr: Ptr,
    reverse_ptr: Ptr,
    remaining: usize,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(nodes: Arena<K, V>, head: Ptr, tail: Ptr, len: usize) -> Self {
        IntoIter {
            nodes,
            forward_ptr: head,
            reverse_ptr: tail,
            remaining: len,
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // Freeing a slot leaves its neighbours' links intact, so the walk can
        // continue from the saved successor.
        let ptr = self.forward_ptr;
        self.forward_ptr = self.nodes.next(ptr);

        let node = self.nodes.free(ptr);
        Some((node.key, node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let ptr = self.reverse_ptr;
        self.reverse_ptr = self.nodes.prev(ptr);

        let node = self.nodes.free(ptr);
        Some((node.key, node.value))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}
