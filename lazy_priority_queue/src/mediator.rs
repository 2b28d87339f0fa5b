use crate::entry_arena::EntryId;
use indexmap::map::{IndexMap, OccupiedEntry as IMOccupiedEntry, VacantEntry as IMVacantEntry};
use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

/// Wrapper around possible outer vec index
/// Used to avoid mux up with entry id
/// And to make sure that `Mediator` indexed only with MediatorIndex
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub(crate) struct MediatorIndex(pub(crate) usize);

/// This is wrapper over indexmap that uses `MediatorIndex` as index.
/// Maps every live task to its current entry.
/// Also it centralized checking for panics
#[derive(Clone, Debug)]
pub(crate) struct Mediator<TTask: Hash + Eq, S: BuildHasher> {
    map: IndexMap<TTask, EntryId, S>,
}

#[inline(always)]
fn with_copied_entry_id<'a, T>((k, &i): (&'a T, &EntryId)) -> (&'a T, EntryId) {
    (k, i)
}

pub(crate) struct VacantEntry<'a, TTask: 'a + Hash + Eq>(IMVacantEntry<'a, TTask, EntryId>);
pub(crate) struct OccupiedEntry<'a, TTask: 'a + Hash + Eq>(IMOccupiedEntry<'a, TTask, EntryId>);
pub(crate) enum MediatorEntry<'a, TTask: 'a + Hash + Eq> {
    Vacant(VacantEntry<'a, TTask>),
    Occupied(OccupiedEntry<'a, TTask>),
}

/// Result of swap removal.
/// If other task was moved into freed position, its entry must learn new position.
pub(crate) struct SwapRemoved<TTask> {
    pub(crate) task: TTask,
    pub(crate) entry_id: EntryId,
    pub(crate) moved: Option<(MediatorIndex, EntryId)>,
}

impl<TTask, S> Mediator<TTask, S>
where
    TTask: Hash + Eq,
    S: BuildHasher,
{
    #[inline(always)]
    pub(crate) fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            map: IndexMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    #[inline(always)]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional)
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline(always)]
    pub(crate) fn clear(&mut self) {
        self.map.clear()
    }

    #[inline(always)]
    pub(crate) fn get_index(&self, MediatorIndex(position): MediatorIndex) -> (&TTask, EntryId) {
        self.map
            .get_index(position)
            .map(with_copied_entry_id)
            .expect("All mediator indexes must be valid")
    }

    #[inline(always)]
    pub(crate) fn entry(&mut self, task: TTask) -> MediatorEntry<TTask> {
        match self.map.entry(task) {
            indexmap::map::Entry::Occupied(v) => MediatorEntry::Occupied(OccupiedEntry(v)),
            indexmap::map::Entry::Vacant(v) => MediatorEntry::Vacant(VacantEntry(v)),
        }
    }

    #[inline(always)]
    pub(crate) fn get<Q>(&self, task: &Q) -> Option<EntryId>
    where
        TTask: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(task).copied()
    }

    /// Removes task by key
    pub(crate) fn swap_remove<Q>(&mut self, task: &Q) -> Option<SwapRemoved<TTask>>
    where
        TTask: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (position, task, entry_id) = self.map.swap_remove_full(task)?;
        Some(SwapRemoved {
            task,
            entry_id,
            moved: self.moved_into(MediatorIndex(position)),
        })
    }

    /// Removes task by its position
    pub(crate) fn swap_remove_index(&mut self, index: MediatorIndex) -> SwapRemoved<TTask> {
        let (task, entry_id) = self
            .map
            .swap_remove_index(index.0)
            .expect("All mediator indexes must be valid");
        SwapRemoved {
            task,
            entry_id,
            moved: self.moved_into(index),
        }
    }

    #[inline(always)]
    fn moved_into(&self, index: MediatorIndex) -> Option<(MediatorIndex, EntryId)> {
        // Former last item now lives at `index` unless removed item was the last one
        self.map.get_index(index.0).map(|(_, &id)| (index, id))
    }

    #[inline(always)]
    pub(crate) fn iter(&self) -> indexmap::map::Iter<'_, TTask, EntryId> {
        self.map.iter()
    }
}

impl<'a, TTask: 'a + Hash + Eq> VacantEntry<'a, TTask> {
    #[inline(always)]
    pub(crate) fn insert(self, value: EntryId) {
        self.0.insert(value);
    }

    #[inline(always)]
    pub(crate) fn index(&self) -> MediatorIndex {
        MediatorIndex(self.0.index())
    }
}

impl<'a, TTask: 'a + Hash + Eq> OccupiedEntry<'a, TTask> {
    #[inline(always)]
    pub(crate) fn index(&self) -> MediatorIndex {
        MediatorIndex(self.0.index())
    }

    /// Replaces entry id, returns superseded one
    #[inline(always)]
    pub(crate) fn replace(&mut self, value: EntryId) -> EntryId {
        self.0.insert(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::RandomState;

    fn filled(tasks: &[&'static str]) -> Mediator<&'static str, RandomState> {
        let mut mediator = Mediator::with_capacity_and_hasher(tasks.len(), RandomState::new());
        for (i, &task) in tasks.iter().enumerate() {
            match mediator.entry(task) {
                MediatorEntry::Vacant(entry) => {
                    assert_eq!(entry.index(), MediatorIndex(i));
                    entry.insert(EntryId::new(i));
                }
                MediatorEntry::Occupied(_) => unreachable!(),
            }
        }
        mediator
    }

    #[test]
    fn test_swap_remove_reports_moved() {
        let mut mediator = filled(&["a", "b", "c", "d"]);
        let removed = mediator.swap_remove("b").unwrap();
        assert_eq!(removed.task, "b");
        assert_eq!(removed.entry_id, EntryId::new(1));
        // "d" was last and took place of "b"
        assert_eq!(removed.moved, Some((MediatorIndex(1), EntryId::new(3))));
        assert_eq!(mediator.get_index(MediatorIndex(1)), (&"d", EntryId::new(3)));
        assert_eq!(mediator.len(), 3);
    }

    #[test]
    fn test_swap_remove_last() {
        let mut mediator = filled(&["a", "b", "c"]);
        let removed = mediator.swap_remove_index(MediatorIndex(2));
        assert_eq!(removed.task, "c");
        assert!(removed.moved.is_none());
        assert!(mediator.swap_remove("c").is_none());
        assert_eq!(mediator.get("a"), Some(EntryId::new(0)));
    }

    #[test]
    fn test_occupied_replace() {
        let mut mediator = filled(&["a", "b"]);
        match mediator.entry("b") {
            MediatorEntry::Occupied(mut entry) => {
                assert_eq!(entry.index(), MediatorIndex(1));
                assert_eq!(entry.replace(EntryId::new(10)), EntryId::new(1));
            }
            MediatorEntry::Vacant(_) => unreachable!(),
        }
        assert_eq!(mediator.get("b"), Some(EntryId::new(10)));
        let collected: Vec<_> = mediator.iter().map(|(k, &v)| (k, v)).collect();
        assert_eq!(
            collected,
            vec![(&"a", EntryId::new(0)), (&"b", EntryId::new(10))]
        );
        mediator.clear();
        assert!(mediator.is_empty());
    }
}
