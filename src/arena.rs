use alloc::vec::Vec;
use core::ops::{
    Index,
    IndexMut,
};

use crate::Ptr;

#[cold]
#[inline(never)]
fn assert_occupied(ptr: Ptr) -> ! {
    panic!("Attempted to access free or out of range slot {ptr:?}");
}

/// The payload of an occupied slot.
#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) hash: u64,
}

#[derive(Debug, Clone)]
enum NodeOrFree<K, V> {
    Free,
    Node(Node<K, V>),
}

/// One arena slot. `next` doubles as the free-list link once the slot is
/// released.
#[derive(Debug, Clone)]
struct Slot<K, V> {
    prev: Ptr,
    next: Ptr,
    data: NodeOrFree<K, V>,
}

/// Storage for the order list. Slots are addressed by [`Ptr`] and recycled
/// through an intrusive free list, so a node never moves once allocated.
#[derive(Debug, Clone)]
pub(crate) struct Arena<K, V> {
    slots: Vec<Slot<K, V>>,
    free_head: Ptr,
    occupied: usize,
}

impl<K, V> Arena<K, V> {
    pub(crate) const fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free_head: Ptr::null(),
            occupied: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        assert!(capacity < u32::MAX as usize - 1, "Capacity too large");
        Arena {
            slots: Vec::with_capacity(capacity),
            free_head: Ptr::null(),
            occupied: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.occupied
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = Ptr::null();
        self.occupied = 0;
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        // Occupied slots cannot be compacted since the index holds their
        // handles, so only an empty arena gives back its free slots.
        if self.occupied == 0 {
            self.clear();
        }
        self.slots.shrink_to_fit();
    }

    /// Stores a new unlinked node and returns its handle.
    pub(crate) fn alloc(&mut self, key: K, value: V, hash: u64) -> Ptr {
        let data = NodeOrFree::Node(Node { key, value, hash });
        self.occupied += 1;

        if let Some(ptr) = self.free_head.optional() {
            let slot = &mut self.slots[ptr.unchecked_get()];
            self.free_head = slot.next;
            *slot = Slot {
                prev: Ptr::null(),
                next: Ptr::null(),
                data,
            };
            ptr
        } else {
            let ptr = Ptr::unchecked_from(self.slots.len());
            self.slots.push(Slot {
                prev: Ptr::null(),
                next: Ptr::null(),
                data,
            });
            ptr
        }
    }

    /// Releases the slot at `ptr` and returns its node. The caller must have
    /// unlinked it from the order list first.
    pub(crate) fn free(&mut self, ptr: Ptr) -> Node<K, V> {
        if !self.is_occupied(ptr) {
            assert_occupied(ptr);
        }

        let slot = core::mem::replace(
            &mut self.slots[ptr.unchecked_get()],
            Slot {
                prev: Ptr::null(),
                next: self.free_head,
                data: NodeOrFree::Free,
            },
        );
        self.free_head = ptr;
        self.occupied -= 1;

        match slot.data {
            NodeOrFree::Node(node) => node,
            NodeOrFree::Free => assert_occupied(ptr),
        }
    }

    pub(crate) fn is_occupied(&self, ptr: Ptr) -> bool {
        if ptr.is_null() {
            return false;
        }
        matches!(
            self.slots.get(ptr.unchecked_get()),
            Some(Slot {
                data: NodeOrFree::Node(_),
                ..
            })
        )
    }

    pub(crate) fn prev(&self, ptr: Ptr) -> Ptr {
        self.slots[ptr.unchecked_get()].prev
    }

    pub(crate) fn next(&self, ptr: Ptr) -> Ptr {
        self.slots[ptr.unchecked_get()].next
    }

    pub(crate) fn set_prev(&mut self, ptr: Ptr, prev: Ptr) {
        self.slots[ptr.unchecked_get()].prev = prev;
    }

    pub(crate) fn set_next(&mut self, ptr: Ptr, next: Ptr) {
        self.slots[ptr.unchecked_get()].next = next;
    }
}

impl<K, V> Default for Arena<K, V> {
    fn default() -> Self {
        Arena::new()
    }
}

impl<K, V> Index<Ptr> for Arena<K, V> {
    type Output = Node<K, V>;

    fn index(&self, ptr: Ptr) -> &Self::Output {
        match self.slots.get(ptr.unchecked_get()) {
            Some(Slot {
                data: NodeOrFree::Node(node),
                ..
            }) => node,
            _ => assert_occupied(ptr),
        }
    }
}

impl<K, V> IndexMut<Ptr> for Arena<K, V> {
    fn index_mut(&mut self, ptr: Ptr) -> &mut Self::Output {
        match self.slots.get_mut(ptr.unchecked_get()) {
            Some(Slot {
                data: NodeOrFree::Node(node),
                ..
            }) => node,
            _ => assert_occupied(ptr),
        }
    }
}
