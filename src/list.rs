//! Doubly-linked list backed by a generational arena.
//!
//! Nodes live in a `Vec`-backed arena owned by the list; the chain is
//! threaded through them with slot indices instead of pointers. Callers
//! hold [`NodeId`] handles: copyable, generation-checked, and inert once
//! the node is gone. All topology changes go through list operations, so
//! the chain invariants (head/tail bracketing, link symmetry, length
//! matching the reachable chain) hold before and after every call.
//!
//! # Example
//!
//! ```
//! use catena::List;
//!
//! let mut list: List<u64> = List::new();
//!
//! let a = list.push_back(1);
//! let b = list.push_back(2);
//! list.push_front(0);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get(b), Some(&2));
//!
//! // O(1) removal from anywhere, by handle.
//! assert_eq!(list.remove(a), Some(1));
//!
//! let values: Vec<_> = list.iter().copied().collect();
//! assert_eq!(values, vec![0, 2]);
//! ```
//!
//! # Stale handles
//!
//! Removing a node, or clearing the list, advances the arena generation
//! for the affected slots. A handle issued earlier keeps its old
//! generation and is detected as stale on every subsequent use:
//!
//! ```
//! use catena::List;
//!
//! let mut list: List<&str> = List::new();
//! let id = list.push_back("transient");
//!
//! list.clear();
//!
//! assert_eq!(list.get(id), None);
//! assert_eq!(list.remove(id), None);
//! assert!(!list.detach(id));
//! ```
//!
//! # Change notifications
//!
//! Three multicast channels report mutations: item added, item removed,
//! and cleared. Listeners run synchronously, in registration order, after
//! the structural change has committed:
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use catena::List;
//!
//! let mut list: List<String> = List::new();
//! let log = Rc::new(RefCell::new(Vec::new()));
//!
//! let sink = Rc::clone(&log);
//! list.on_item_added(move |item: &String| sink.borrow_mut().push(item.clone()));
//!
//! list.push_back("alpha".to_owned());
//! list.push_back("beta".to_owned());
//!
//! assert_eq!(*log.borrow(), vec!["alpha", "beta"]);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::events::{Hooks, ListenerId};
use crate::key::{NodeId, Slot};
use crate::storage::Arena;

/// A doubly-linked list with stable node handles and change
/// notifications.
///
/// The list is the sole owner of its nodes. Insertion returns a
/// [`NodeId`] that later addresses the node in O(1); removal, value
/// search, positional lookup, and bulk copy are all available through
/// the methods below. Not safe for concurrent access: callers that share
/// a list across threads must serialize access externally.
///
/// # Example
///
/// ```
/// use catena::List;
///
/// let mut list: List<String> = List::new();
/// list.push_back("b".to_owned());
/// list.push_front("a".to_owned());
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.front(), Some(&"a".to_owned()));
/// assert_eq!(list.back(), Some(&"b".to_owned()));
/// ```
pub struct List<T> {
    arena: Arena<T>,
    head: Slot,
    tail: Slot,
    len: usize,
    hooks: Hooks<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    // ========================================================================
    // Construction & size
    // ========================================================================

    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: Slot::NONE,
            tail: Slot::NONE,
            len: 0,
            hooks: Hooks::new(),
        }
    }

    /// Creates an empty list with room for `capacity` nodes before the
    /// arena reallocates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            head: Slot::NONE,
            tail: Slot::NONE,
            len: 0,
            hooks: Hooks::new(),
        }
    }

    /// Returns the number of linked elements.
    ///
    /// Detached nodes are alive but not part of the chain, and do not
    /// count.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no linked elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Appends a value, returning its handle.
    ///
    /// The new node becomes the tail; if the list was empty it becomes
    /// the head too. Fires the item-added channel. O(1) amortized.
    #[inline]
    pub fn push_back(&mut self, value: T) -> NodeId<T> {
        let slot = self.arena.insert(value);
        self.link_back(slot);
        trace!(len = self.len, "pushed value at back");
        self.hooks.emit_added(&self.arena.node(slot).value);
        NodeId::new(slot, self.arena.node(slot).generation)
    }

    /// Prepends a value, returning its handle.
    ///
    /// The new node becomes the head; if the list was empty it becomes
    /// the tail too. Fires the item-added channel. O(1) amortized.
    #[inline]
    pub fn push_front(&mut self, value: T) -> NodeId<T> {
        let slot = self.arena.insert(value);
        self.link_front(slot);
        trace!(len = self.len, "pushed value at front");
        self.hooks.emit_added(&self.arena.node(slot).value);
        NodeId::new(slot, self.arena.node(slot).generation)
    }

    /// Removes and returns the front element.
    ///
    /// Returns `None` if the list is empty; nothing fires in that case.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head.is_none() {
            return None;
        }

        let slot = self.head;
        self.unlink(slot);
        let value = self.arena.free(slot);
        trace!(len = self.len, "popped value from front");
        self.hooks.emit_removed(&value);
        Some(value)
    }

    /// Removes and returns the back element.
    ///
    /// Returns `None` if the list is empty; nothing fires in that case.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.tail.is_none() {
            return None;
        }

        let slot = self.tail;
        self.unlink(slot);
        let value = self.arena.free(slot);
        trace!(len = self.len, "popped value from back");
        self.hooks.emit_removed(&value);
        Some(value)
    }

    /// Removes the node behind `id` and returns its value.
    ///
    /// The handle is validated before anything is touched, so a stale
    /// handle returns `None` and cannot disturb live nodes. Removing a
    /// linked node fires the item-removed channel; removing a
    /// [detached](List::detach) node only frees it, since its membership
    /// already ended, and was announced, when `detach` ran.
    pub fn remove(&mut self, id: NodeId<T>) -> Option<T> {
        let node = self.arena.get(id.slot, id.generation)?;
        let linked = node.prev.is_some() || node.next.is_some() || self.head == id.slot;

        if linked {
            self.unlink(id.slot);
        }
        let value = self.arena.free(id.slot);
        trace!(len = self.len, "removed node");

        if linked {
            self.hooks.emit_removed(&value);
        }
        Some(value)
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `false`, mutating nothing, when no element matches.
    /// Fires the item-removed channel on success. O(n) scan, O(1)
    /// splice.
    ///
    /// # Example
    ///
    /// ```
    /// use catena::List;
    ///
    /// let mut list: List<u64> = (1..=3).collect();
    ///
    /// assert!(list.remove_value(&2));
    /// assert!(!list.remove_value(&2));
    ///
    /// let values: Vec<_> = list.iter().copied().collect();
    /// assert_eq!(values, vec![1, 3]);
    /// ```
    pub fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let Some(id) = self.find(value) else {
            return false;
        };
        self.remove(id).is_some()
    }

    /// Removes every node, linked and detached, and resets the list.
    ///
    /// Advances the arena generation, so every outstanding handle
    /// becomes stale. Fires the cleared channel once, even when the list
    /// was already empty; the item-removed channel stays silent.
    pub fn clear(&mut self) {
        let dropped = self.len;
        self.arena.clear();
        self.head = Slot::NONE;
        self.tail = Slot::NONE;
        self.len = 0;
        debug!(dropped, "cleared list");
        self.hooks.emit_cleared();
    }

    // ========================================================================
    // Detach & attach
    // ========================================================================

    /// Unlinks the node behind `id` from the chain without freeing it.
    ///
    /// The node stays alive in the arena: its value remains reachable
    /// through [`get`](List::get)/[`get_mut`](List::get_mut) and the
    /// handle can splice it back via [`attach_front`](List::attach_front)
    /// or [`attach_back`](List::attach_back). Fires the item-removed
    /// channel. Returns `false` for stale handles and nodes that are
    /// already detached.
    ///
    /// # Example
    ///
    /// ```
    /// use catena::List;
    ///
    /// let mut list: List<u64> = (1..=3).collect();
    /// let second = list.head().and_then(|head| list.next_of(head)).unwrap();
    ///
    /// assert!(list.detach(second));
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.get(second), Some(&2));
    ///
    /// assert!(list.attach_back(second));
    /// let values: Vec<_> = list.iter().copied().collect();
    /// assert_eq!(values, vec![1, 3, 2]);
    /// ```
    pub fn detach(&mut self, id: NodeId<T>) -> bool {
        let Some(node) = self.arena.get(id.slot, id.generation) else {
            return false;
        };
        let linked = node.prev.is_some() || node.next.is_some() || self.head == id.slot;
        if !linked {
            return false;
        }

        self.unlink(id.slot);
        trace!(len = self.len, "detached node");
        self.hooks.emit_removed(&self.arena.node(id.slot).value);
        true
    }

    /// Splices a detached node back in at tail position.
    ///
    /// Fires the item-added channel. Returns `false` for stale handles
    /// and for nodes that are currently linked; relinking always goes
    /// through an explicit [`detach`](List::detach) first.
    pub fn attach_back(&mut self, id: NodeId<T>) -> bool {
        let Some(slot) = self.detached_slot(id) else {
            return false;
        };

        self.link_back(slot);
        trace!(len = self.len, "attached node at back");
        self.hooks.emit_added(&self.arena.node(slot).value);
        true
    }

    /// Splices a detached node back in at head position.
    ///
    /// Fires the item-added channel. Returns `false` for stale handles
    /// and for nodes that are currently linked.
    pub fn attach_front(&mut self, id: NodeId<T>) -> bool {
        let Some(slot) = self.detached_slot(id) else {
            return false;
        };

        self.link_front(slot);
        trace!(len = self.len, "attached node at front");
        self.hooks.emit_added(&self.arena.node(slot).value);
        true
    }

    /// Returns `true` if `id` addresses a live node that is part of the
    /// chain.
    ///
    /// `false` for detached nodes and stale handles.
    #[inline]
    pub fn is_linked(&self, id: NodeId<T>) -> bool {
        match self.arena.get(id.slot, id.generation) {
            Some(node) => node.prev.is_some() || node.next.is_some() || self.head == id.slot,
            None => false,
        }
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Returns the handle of the first element equal to `value`.
    ///
    /// Scans forward from the head using value equality, not identity.
    /// `None` if no element matches. O(n).
    pub fn find(&self, value: &T) -> Option<NodeId<T>>
    where
        T: PartialEq,
    {
        let mut slot = self.head;
        while slot.is_some() {
            let node = self.arena.node(slot);
            if node.value == *value {
                return Some(NodeId::new(slot, node.generation));
            }
            slot = node.next;
        }
        None
    }

    /// Returns `true` if some element equals `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(value).is_some()
    }

    /// Returns the handle of the element at `index`.
    ///
    /// Positions are counted from the head; the valid range is
    /// `[0, len)`, so on an empty list every index is out of range.
    /// O(n).
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index >= len`, carrying both the
    /// index and the current length.
    pub fn node_at(&self, index: usize) -> Result<NodeId<T>> {
        let Some(slot) = self.slot_at(index) else {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        };
        Ok(NodeId::new(slot, self.arena.node(slot).generation))
    }

    /// Returns a reference to the element at `index`, or `None` when
    /// `index >= len`. O(n).
    #[inline]
    pub fn get_at(&self, index: usize) -> Option<&T> {
        let slot = self.slot_at(index)?;
        Some(&self.arena.node(slot).value)
    }

    /// Returns a mutable reference to the element at `index`, or `None`
    /// when `index >= len`. O(n).
    #[inline]
    pub fn get_at_mut(&mut self, index: usize) -> Option<&mut T> {
        let slot = self.slot_at(index)?;
        Some(&mut self.arena.node_mut(slot).value)
    }

    // ========================================================================
    // Access & navigation
    // ========================================================================

    /// Returns a reference to the value behind `id`.
    ///
    /// Works for linked and detached nodes; `None` for stale handles.
    #[inline]
    pub fn get(&self, id: NodeId<T>) -> Option<&T> {
        self.arena.get(id.slot, id.generation).map(|node| &node.value)
    }

    /// Returns a mutable reference to the value behind `id`.
    ///
    /// Works for linked and detached nodes; `None` for stale handles.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId<T>) -> Option<&mut T> {
        self.arena
            .get_mut(id.slot, id.generation)
            .map(|node| &mut node.value)
    }

    /// Returns a reference to the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.head.is_none() {
            None
        } else {
            Some(&self.arena.node(self.head).value)
        }
    }

    /// Returns a mutable reference to the front element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.head.is_none() {
            None
        } else {
            Some(&mut self.arena.node_mut(self.head).value)
        }
    }

    /// Returns a reference to the back element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.tail.is_none() {
            None
        } else {
            Some(&self.arena.node(self.tail).value)
        }
    }

    /// Returns a mutable reference to the back element.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.tail.is_none() {
            None
        } else {
            Some(&mut self.arena.node_mut(self.tail).value)
        }
    }

    /// Returns the head node's handle, or `None` if empty.
    #[inline]
    pub fn head(&self) -> Option<NodeId<T>> {
        if self.head.is_none() {
            None
        } else {
            Some(NodeId::new(self.head, self.arena.node(self.head).generation))
        }
    }

    /// Returns the tail node's handle, or `None` if empty.
    #[inline]
    pub fn tail(&self) -> Option<NodeId<T>> {
        if self.tail.is_none() {
            None
        } else {
            Some(NodeId::new(self.tail, self.arena.node(self.tail).generation))
        }
    }

    /// Returns the handle of the node after `id`.
    ///
    /// `None` if `id` is the tail, stale, or detached.
    #[inline]
    pub fn next_of(&self, id: NodeId<T>) -> Option<NodeId<T>> {
        let next = self.arena.get(id.slot, id.generation)?.next;
        if next.is_none() {
            None
        } else {
            Some(NodeId::new(next, self.arena.node(next).generation))
        }
    }

    /// Returns the handle of the node before `id`.
    ///
    /// `None` if `id` is the head, stale, or detached.
    #[inline]
    pub fn prev_of(&self, id: NodeId<T>) -> Option<NodeId<T>> {
        let prev = self.arena.get(id.slot, id.generation)?.prev;
        if prev.is_none() {
            None
        } else {
            Some(NodeId::new(prev, self.arena.node(prev).generation))
        }
    }

    // ========================================================================
    // Bulk copy
    // ========================================================================

    /// Clones every linked element, in order, into `dest` starting at
    /// `start`.
    ///
    /// Validation happens before any write, so a failed call leaves
    /// `dest` untouched. Slots outside `[start, start + len)` are never
    /// written.
    ///
    /// # Errors
    ///
    /// [`Error::StartOutOfRange`] when `start > dest.len()`;
    /// [`Error::InsufficientCapacity`] when fewer than `len` slots
    /// remain at and after `start`.
    ///
    /// # Example
    ///
    /// ```
    /// use catena::List;
    ///
    /// let list: List<u64> = (1..=5).collect();
    /// let mut dest = [0u64; 7];
    ///
    /// list.copy_to(&mut dest, 2).unwrap();
    /// assert_eq!(dest, [0, 0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn copy_to(&self, dest: &mut [T], start: usize) -> Result<()>
    where
        T: Clone,
    {
        if start > dest.len() {
            return Err(Error::StartOutOfRange {
                start,
                dest_len: dest.len(),
            });
        }

        let available = dest.len() - start;
        if available < self.len {
            return Err(Error::InsufficientCapacity {
                required: self.len,
                available,
            });
        }

        for (dst, value) in dest[start..].iter_mut().zip(self.iter()) {
            *dst = value.clone();
        }
        Ok(())
    }

    // ========================================================================
    // Notifications
    // ========================================================================

    /// Registers a listener on the item-added channel.
    ///
    /// The channel fires for every append, prepend, and
    /// [`attach_front`](List::attach_front)/[`attach_back`](List::attach_back)
    /// splice, with a reference to the affected value. Listeners run
    /// synchronously on the mutating caller's thread, in registration
    /// order, after the structural change has committed. A listener that
    /// panics unwinds out through the mutating call and listeners
    /// registered after it are skipped for that event; the list itself
    /// stays consistent.
    pub fn on_item_added<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&T) + 'static,
    {
        self.hooks.on_added(Box::new(listener))
    }

    /// Registers a listener on the item-removed channel.
    ///
    /// The channel fires once per node leaving the chain: pops, handle
    /// and value removals, and [`detach`](List::detach). Freeing an
    /// already-detached node does not fire again, and [`clear`](List::clear)
    /// reports through its own channel instead. Same ordering and panic
    /// rules as [`on_item_added`](List::on_item_added).
    pub fn on_item_removed<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&T) + 'static,
    {
        self.hooks.on_removed(Box::new(listener))
    }

    /// Registers a listener on the cleared channel.
    ///
    /// Fires once per [`clear`](List::clear), even when the list was
    /// already empty. Same ordering and panic rules as
    /// [`on_item_added`](List::on_item_added).
    pub fn on_cleared<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut() + 'static,
    {
        self.hooks.on_cleared(Box::new(listener))
    }

    /// Revokes a previously registered listener.
    ///
    /// Returns `false` when `id` is unknown or already revoked.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.hooks.unsubscribe(id)
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over references to the linked elements, front
    /// to back.
    ///
    /// Each call starts a fresh traversal. The iterator borrows the
    /// list, so structural mutation while it is live is a compile error
    /// rather than a runtime hazard.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Returns an iterator over the handles of the linked elements,
    /// front to back.
    ///
    /// Useful when a traversal needs to remove or revisit nodes
    /// afterwards: collect the handles first, then mutate.
    #[inline]
    pub fn ids(&self) -> Ids<'_, T> {
        Ids {
            arena: &self.arena,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    // ========================================================================
    // Chain plumbing
    // ========================================================================

    /// Splices an unlinked node in at tail position.
    fn link_back(&mut self, slot: Slot) {
        {
            let node = self.arena.node_mut(slot);
            node.prev = self.tail;
            node.next = Slot::NONE;
        }

        if self.tail.is_some() {
            self.arena.node_mut(self.tail).next = slot;
        } else {
            self.head = slot;
        }

        self.tail = slot;
        self.len += 1;
    }

    /// Splices an unlinked node in at head position.
    fn link_front(&mut self, slot: Slot) {
        {
            let node = self.arena.node_mut(slot);
            node.next = self.head;
            node.prev = Slot::NONE;
        }

        if self.head.is_some() {
            self.arena.node_mut(self.head).prev = slot;
        } else {
            self.tail = slot;
        }

        self.head = slot;
        self.len += 1;
    }

    /// Splices a linked node out of the chain, fixing head/tail.
    ///
    /// The node's own links are cleared; it stays in the arena.
    fn unlink(&mut self, slot: Slot) {
        let (prev, next) = {
            let node = self.arena.node(slot);
            (node.prev, node.next)
        };

        if prev.is_some() {
            self.arena.node_mut(prev).next = next;
        } else {
            self.head = next;
        }

        if next.is_some() {
            self.arena.node_mut(next).prev = prev;
        } else {
            self.tail = prev;
        }

        let node = self.arena.node_mut(slot);
        node.prev = Slot::NONE;
        node.next = Slot::NONE;

        self.len -= 1;
    }

    /// Walks `index` steps from the head; `None` when `index >= len`.
    fn slot_at(&self, index: usize) -> Option<Slot> {
        if index >= self.len {
            return None;
        }

        let mut slot = self.head;
        for _ in 0..index {
            slot = self.arena.node(slot).next;
        }
        Some(slot)
    }

    /// Resolves `id` to its slot only when the node is alive and
    /// detached.
    fn detached_slot(&self, id: NodeId<T>) -> Option<Slot> {
        let node = self.arena.get(id.slot, id.generation)?;
        let linked = node.prev.is_some() || node.next.is_some() || self.head == id.slot;
        if linked {
            None
        } else {
            Some(id.slot)
        }
    }
}

// =============================================================================
// Std trait impls
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    /// Compares the linked element sequences; listener registrations and
    /// detached nodes do not participate.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T> FromIterator<T> for List<T> {
    /// Builds a list by appending each element in order. An empty source
    /// yields an empty list.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

impl<T> Extend<T> for List<T> {
    /// Appends each element in order, firing the item-added channel per
    /// element like any other append.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the list into an iterator over its linked values, front
    /// to back. Notification channels do not fire: the list, and its
    /// listener registry with it, is being dropped.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to a list's linked elements.
pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    front: Slot,
    back: Slot,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.arena.node(self.front);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.arena.node(self.back);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over the handles of a list's linked elements.
pub struct Ids<'a, T> {
    arena: &'a Arena<T>,
    front: Slot,
    back: Slot,
    remaining: usize,
}

impl<T> Iterator for Ids<'_, T> {
    type Item = NodeId<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let slot = self.front;
        let node = self.arena.node(slot);
        self.front = node.next;
        self.remaining -= 1;
        Some(NodeId::new(slot, node.generation))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Ids<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let slot = self.back;
        let node = self.arena.node(slot);
        self.back = node.prev;
        self.remaining -= 1;
        Some(NodeId::new(slot, node.generation))
    }
}

impl<T> ExactSizeIterator for Ids<'_, T> {}

impl<T> FusedIterator for Ids<'_, T> {}

/// Owning iterator over a consumed list's values.
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.list.head.is_none() {
            return None;
        }

        let slot = self.list.head;
        self.list.unlink(slot);
        Some(self.list.arena.free(slot))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.list.tail.is_none() {
            return None;
        }

        let slot = self.list.tail;
        self.list.unlink(slot);
        Some(self.list.arena.free(slot))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
