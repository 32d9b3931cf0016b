//! Generational entry arena backing a list.
//!
//! Nodes live in a `Vec` of entries; freed slots are chained into an
//! intrusive free list and reused by later insertions. Every occupied
//! entry records the generation it was created under, and the arena's
//! generation advances whenever a slot is freed or the arena is cleared,
//! so a handle minted for a previous occupant of a reused slot can never
//! address the new one.

use crate::key::Slot;

/// One arena slot: either a live node or a link in the free list.
#[derive(Debug)]
pub(crate) enum Entry<T> {
    Occupied(Node<T>),
    Vacant { next_free: Slot },
}

/// A live node: the stored value plus its neighbor links.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) generation: u64,
    pub(crate) prev: Slot,
    pub(crate) next: Slot,
}

#[derive(Debug)]
pub(crate) struct Arena<T> {
    entries: Vec<Entry<T>>,
    free_head: Slot,
    generation: u64,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
            free_head: Slot::NONE,
            generation: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            free_head: Slot::NONE,
            generation: 0,
        }
    }

    /// Generation that entries inserted right now will carry.
    #[inline]
    pub(crate) const fn generation(&self) -> u64 {
        self.generation
    }

    /// Inserts an unlinked node, reusing a vacant slot when one exists.
    pub(crate) fn insert(&mut self, value: T) -> Slot {
        let node = Node {
            value,
            generation: self.generation,
            prev: Slot::NONE,
            next: Slot::NONE,
        };

        if self.free_head.is_some() {
            let slot = self.free_head;
            let i = slot.as_usize();
            let next_free = match &self.entries[i] {
                Entry::Vacant { next_free } => *next_free,
                Entry::Occupied(_) => unreachable!("free list points at occupied entry"),
            };
            self.free_head = next_free;
            self.entries[i] = Entry::Occupied(node);
            slot
        } else {
            let slot = Slot::from_usize(self.entries.len());
            self.entries.push(Entry::Occupied(node));
            slot
        }
    }

    /// Frees an occupied slot, returning its value.
    ///
    /// Advances the generation so every handle minted for this slot's
    /// occupant is stale from here on.
    pub(crate) fn free(&mut self, slot: Slot) -> T {
        let i = slot.as_usize();
        let entry = std::mem::replace(
            &mut self.entries[i],
            Entry::Vacant {
                next_free: self.free_head,
            },
        );

        match entry {
            Entry::Occupied(node) => {
                self.free_head = slot;
                self.generation += 1;
                node.value
            }
            Entry::Vacant { .. } => unreachable!("freed a vacant arena slot"),
        }
    }

    /// Generation-checked lookup.
    #[inline]
    pub(crate) fn get(&self, slot: Slot, generation: u64) -> Option<&Node<T>> {
        match self.entries.get(slot.as_usize()) {
            Some(Entry::Occupied(node)) if node.generation == generation => Some(node),
            _ => None,
        }
    }

    /// Generation-checked mutable lookup.
    #[inline]
    pub(crate) fn get_mut(&mut self, slot: Slot, generation: u64) -> Option<&mut Node<T>> {
        match self.entries.get_mut(slot.as_usize()) {
            Some(Entry::Occupied(node)) if node.generation == generation => Some(node),
            _ => None,
        }
    }

    /// Access for slots the chain invariants vouch for.
    ///
    /// Panics on a vacant or out-of-range slot; chain links never point
    /// at one.
    #[inline]
    pub(crate) fn node(&self, slot: Slot) -> &Node<T> {
        match &self.entries[slot.as_usize()] {
            Entry::Occupied(node) => node,
            Entry::Vacant { .. } => unreachable!("chain link points at vacant entry"),
        }
    }

    /// Mutable access for slots the chain invariants vouch for.
    #[inline]
    pub(crate) fn node_mut(&mut self, slot: Slot) -> &mut Node<T> {
        match &mut self.entries[slot.as_usize()] {
            Entry::Occupied(node) => node,
            Entry::Vacant { .. } => unreachable!("chain link points at vacant entry"),
        }
    }

    /// Drops every entry and advances the generation, staling all
    /// outstanding handles. Keeps the allocation.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.free_head = Slot::NONE;
        self.generation += 1;
    }
}
