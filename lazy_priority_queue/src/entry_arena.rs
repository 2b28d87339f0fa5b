use std::vec::Vec;

use crate::mediator::MediatorIndex;

/// Stable position of entry in arena.
/// Shared by heap and mediator so tombstoning through one is seen by other.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub(crate) struct EntryId(usize);

impl EntryId {
    #[cfg(test)]
    #[inline(always)]
    pub(crate) fn new(v: usize) -> Self {
        Self(v)
    }

    #[cfg(test)]
    #[inline(always)]
    pub(crate) fn as_usize(self) -> usize {
        self.0
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Owner {
    /// Current entry of the task stored at this mediator position
    Live(MediatorIndex),
    /// Superseded or removed, waits in heap until popped
    Removed,
}

#[derive(Clone, Debug)]
pub(crate) struct Entry<TPriority> {
    pub(crate) priority: TPriority,
    pub(crate) sequence: u64,
    pub(crate) owner: Owner,
}

impl<TPriority> Entry<TPriority> {
    /// Heap order: priority first, then insertion sequence
    #[inline(always)]
    pub(crate) fn sort_key(&self) -> (&TPriority, u64) {
        (&self.priority, self.sequence)
    }

    #[inline(always)]
    pub(crate) fn is_live(&self) -> bool {
        matches!(self.owner, Owner::Live(_))
    }
}

#[derive(Clone, Debug)]
enum Slot<TPriority> {
    Occupied(Entry<TPriority>),
    Vacant { next_free: Option<usize> },
}

/// Slab of entries with intrusive free list.
/// Slot is freed only when the heap drops its last reference to it.
#[derive(Clone, Debug)]
pub(crate) struct EntryArena<TPriority> {
    slots: Vec<Slot<TPriority>>,
    first_free: Option<usize>,
    occupied: usize,
}

impl<TPriority> EntryArena<TPriority> {
    #[cfg(test)]
    #[inline(always)]
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    #[inline(always)]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            first_free: None,
            occupied: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional);
    }

    /// Number of occupied slots, live and tombstoned together
    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.occupied
    }

    #[inline(always)]
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.first_free = None;
        self.occupied = 0;
    }

    pub(crate) fn insert(&mut self, entry: Entry<TPriority>) -> EntryId {
        self.occupied += 1;
        match self.first_free {
            Some(position) => {
                let next_free = match self.slots[position] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("Free list points to occupied slot"),
                };
                self.first_free = next_free;
                self.slots[position] = Slot::Occupied(entry);
                EntryId(position)
            }
            None => {
                self.slots.push(Slot::Occupied(entry));
                EntryId(self.slots.len() - 1)
            }
        }
    }

    #[inline(always)]
    pub(crate) fn get(&self, id: EntryId) -> &Entry<TPriority> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(entry)) => entry,
            _ => panic!("All entry ids must be valid"),
        }
    }

    #[inline(always)]
    pub(crate) fn get_mut(&mut self, id: EntryId) -> &mut Entry<TPriority> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(entry)) => entry,
            _ => panic!("All entry ids must be valid"),
        }
    }

    /// Releases slot and returns its entry
    pub(crate) fn free(&mut self, id: EntryId) -> Entry<TPriority> {
        let vacant = Slot::Vacant {
            next_free: self.first_free,
        };
        match std::mem::replace(&mut self.slots[id.0], vacant) {
            Slot::Occupied(entry) => {
                self.first_free = Some(id.0);
                self.occupied -= 1;
                entry
            }
            Slot::Vacant { .. } => panic!("Double free of entry slot {}", id.0),
        }
    }
}
