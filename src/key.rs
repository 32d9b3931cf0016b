//! Slot indices and generation-checked node handles.
//!
//! Links inside the arena are [`Slot`]s: a `u32` newtype with a reserved
//! sentinel instead of `Option<u32>`, keeping each node at two words of
//! link overhead. Slots never escape the crate. Callers hold [`NodeId`]s,
//! which pair a slot with the generation its node was created under; a
//! handle whose generation no longer matches its entry is stale, and
//! every operation treats a stale handle as "node not present".

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Raw arena index with a reserved "none" sentinel.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Slot(u32);

impl Slot {
    /// Sentinel value representing "no slot".
    pub(crate) const NONE: Self = Slot(u32::MAX);

    /// Panics if `val` collides with the `NONE` sentinel.
    #[inline]
    pub(crate) fn from_usize(val: usize) -> Self {
        assert!(
            val < u32::MAX as usize,
            "index exceeds the slot type maximum"
        );
        Slot(val as u32)
    }

    #[inline]
    pub(crate) const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Returns `true` if this is the sentinel value.
    #[inline]
    pub(crate) const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Returns `true` if this is not the sentinel value.
    #[inline]
    pub(crate) const fn is_some(self) -> bool {
        !self.is_none()
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("Slot(NONE)")
        } else {
            write!(f, "Slot({})", self.0)
        }
    }
}

/// A copyable, non-owning handle to a node in a [`List`](crate::List).
///
/// Handles are issued by insertion operations and checked on every use:
/// once the node is removed, or the list is cleared, the handle is stale
/// and every operation given it reports the node as absent. Handles are
/// branded with the element type, so a handle from a `List<u64>` cannot
/// be passed to a `List<String>`.
///
/// Using a handle with a list other than the one that issued it is
/// memory-safe but unspecified: it is usually detected as stale, but may
/// address an unrelated node of that list.
///
/// # Example
///
/// ```
/// use catena::List;
///
/// let mut list: List<u64> = List::new();
/// let id = list.push_back(7);
///
/// assert_eq!(list.get(id), Some(&7));
/// assert_eq!(list.remove(id), Some(7));
///
/// // The handle is now stale; the node cannot be resurrected.
/// assert_eq!(list.get(id), None);
/// assert_eq!(list.remove(id), None);
/// ```
pub struct NodeId<T> {
    pub(crate) slot: Slot,
    pub(crate) generation: u64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> NodeId<T> {
    #[inline]
    pub(crate) const fn new(slot: Slot, generation: u64) -> Self {
        Self {
            slot,
            generation,
            _marker: PhantomData,
        }
    }
}

// Manual impls so `T` carries no bounds.

impl<T> Clone for NodeId<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeId<T> {}

impl<T> PartialEq for NodeId<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot && self.generation == other.generation
    }
}

impl<T> Eq for NodeId<T> {}

impl<T> Hash for NodeId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slot.hash(state);
        self.generation.hash(state);
    }
}

impl<T> fmt::Debug for NodeId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeId")
            .field("slot", &self.slot)
            .field("generation", &self.generation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_sentinel() {
        assert!(Slot::NONE.is_none());
        assert!(!Slot::NONE.is_some());
        assert!(Slot::from_usize(0).is_some());
        assert_eq!(Slot::from_usize(5).as_usize(), 5);
    }

    #[test]
    fn largest_valid_slot_is_below_the_sentinel() {
        let last = Slot::from_usize(u32::MAX as usize - 1);

        assert!(last.is_some());
        assert_ne!(last, Slot::NONE);
    }

    #[test]
    #[should_panic(expected = "exceeds the slot type maximum")]
    fn slot_colliding_with_the_sentinel_is_rejected() {
        let _ = Slot::from_usize(u32::MAX as usize);
    }

    #[test]
    fn node_id_equality_includes_generation() {
        let a: NodeId<u64> = NodeId::new(Slot::from_usize(3), 0);
        let same: NodeId<u64> = NodeId::new(Slot::from_usize(3), 0);
        let reused: NodeId<u64> = NodeId::new(Slot::from_usize(3), 1);

        assert_eq!(a, same);
        assert_ne!(a, reused);
    }

    #[test]
    fn node_id_is_copy() {
        let a: NodeId<String> = NodeId::new(Slot::from_usize(0), 7);
        let b = a;

        // Both copies stay usable.
        assert_eq!(a, b);
    }

    #[test]
    fn debug_renders_slot_and_generation() {
        let id: NodeId<u64> = NodeId::new(Slot::from_usize(2), 4);
        let rendered = format!("{id:?}");

        assert!(rendered.contains("Slot(2)"));
        assert!(rendered.contains('4'));
    }
}
