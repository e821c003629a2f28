//! Observable list that never holds two equal items.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

use crate::observable::{ListResult, ObservableList, ReadOnlyList};

/// Duplicate-free wrapper around [`ObservableList`].
#[derive(Debug)]
pub struct UniqueList<T: 'static> {
    items: ObservableList<T>,
}

impl<T> UniqueList<T>
where
    T: Clone + PartialEq + Eq + Hash + 'static,
{
    pub fn new() -> Self {
        Self {
            items: ObservableList::new(),
        }
    }

    pub fn read_only(&self) -> ReadOnlyList<T> {
        self.items.read_only()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn position(&self, item: &T) -> Option<usize> {
        self.items.position(item)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.items.to_vec()
    }

    /// Append `item` unless an equal item is already present.
    pub fn push(&mut self, item: T) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove the item equal to `item`, if any.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let index = self.position(item)?;
        self.items.remove(index).ok()
    }

    /// Overwrite the item at `index`. The caller has already checked that
    /// `item` does not duplicate another entry.
    pub fn replace_at(&mut self, index: usize, item: T) -> ListResult<T> {
        self.items.set(index, item)
    }

    /// Replace the whole contents. Fails with the first repeated item and
    /// leaves the list untouched.
    pub fn set_all(&mut self, items: Vec<T>) -> Result<(), T> {
        if let Some(duplicate) = first_duplicate(&items) {
            return Err(duplicate);
        }
        self.items.set_all(items);
        Ok(())
    }

    /// Replace the whole contents, keeping the first of any repeated items.
    /// Returns how many repeats were dropped.
    pub fn set_all_dedup(&mut self, items: Vec<T>) -> usize {
        let total = items.len();
        let mut seen = HashSet::with_capacity(total);
        let unique: Vec<T> = items
            .into_iter()
            .filter(|item| seen.insert(item.clone()))
            .collect();
        let dropped = total - unique.len();
        self.items.set_all(unique);
        dropped
    }

    /// Rewrite items in place. `edit` returns the replacement for an item, or
    /// `None` to leave it alone. A replacement equal to an item already in the
    /// list merges into it: the edited entry is removed instead. Returns how
    /// many items were edited.
    pub fn update_each(&mut self, mut edit: impl FnMut(&T) -> Option<T>) -> ListResult<usize> {
        let mut changed = 0;
        let mut index = 0;
        while index < self.items.len() {
            let Some(current) = self.items.get(index) else {
                break;
            };
            let Some(replacement) = edit(&current) else {
                index += 1;
                continue;
            };
            changed += 1;
            if replacement != current && self.contains(&replacement) {
                // Removal shifts the next item into `index`.
                self.items.remove(index)?;
            } else {
                self.items.set(index, replacement)?;
                index += 1;
            }
        }
        Ok(changed)
    }

    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) -> usize {
        self.items.retain(keep)
    }

    pub fn sort_by(&mut self, compare: impl FnMut(&T, &T) -> Ordering) {
        self.items.sort_by(compare)
    }
}

impl<T> Default for UniqueList<T>
where
    T: Clone + PartialEq + Eq + Hash + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq + 'static> PartialEq for UniqueList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

/// First item that appears more than once, in list order of its repeat.
pub fn first_duplicate<T: Clone + Eq + Hash>(items: &[T]) -> Option<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().find(|item| !seen.insert(*item)).cloned()
}
