#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

mod arena;
pub mod linked_map;

extern crate alloc;

#[cfg(feature = "std")]
type RandomState = std::hash::RandomState;
#[cfg(not(feature = "std"))]
type RandomState = hashbrown::DefaultHashBuilder;

/// A hash map that keeps its keys in a mutable linear order, implemented as
/// a doubly-linked list of arena nodes indexed by a hash table.
///
/// This is the main type alias using the default hasher. For custom hashers,
/// use [`linked_map::LinkedMap`] directly.
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
/// assert_eq!(map.to_string(), "{b: 2, a: 1}");
/// ```
pub type LinkedMap<K, V> = crate::linked_map::LinkedMap<K, V, RandomState>;

use core::num::NonZeroU32;

pub use linked_map::IntoIter;
pub use linked_map::Iter;
pub use linked_map::Keys;
pub use linked_map::Values;

/// Handle to a node in the map's arena.
///
/// `Ptr(u32::MAX)` is reserved as the null handle, so the largest usable
/// index is `u32::MAX - 2`. Handles are non-generational and never leave the
/// map: a freed slot is recycled by the next allocation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub(crate) struct Ptr(NonZeroU32);

impl core::fmt::Debug for Ptr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_null() {
            write!(f, "Ptr(null)")
        } else {
            write!(f, "Ptr({})", self.0.get() - 1)
        }
    }
}

impl Default for Ptr {
    fn default() -> Self {
        Ptr::null()
    }
}

impl Ptr {
    pub(crate) const fn null() -> Self {
        Ptr(NonZeroU32::MAX)
    }

    pub(crate) fn is_null(self) -> bool {
        self == Ptr::null()
    }

    pub(crate) fn unchecked_from(index: usize) -> Self {
        debug_assert!(
            index < u32::MAX as usize - 1,
            "Index too large to fit in Ptr: {index}"
        );
        match NonZeroU32::new((index as u32).wrapping_add(1)) {
            Some(raw) => Ptr(raw),
            None => Ptr::null(),
        }
    }

    pub(crate) fn unchecked_get(self) -> usize {
        self.0.get() as usize - 1
    }

    pub(crate) fn optional(self) -> Option<Ptr> {
        if self.is_null() { None } else { Some(self) }
    }
}
