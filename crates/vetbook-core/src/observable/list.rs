//! The owning, mutable observable list.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use super::shared::ListCore;
use super::{ListChange, ListError, ListResult, ReadOnlyList, Subscription};

/// An ordered collection that reports every mutation to its listeners.
///
/// The list is the sole mutable owner of its items. Other components hold a
/// [`ReadOnlyList`] obtained from [`ObservableList::read_only`], which sees
/// every change as it happens.
pub struct ObservableList<T: 'static> {
    core: Rc<ListCore<T>>,
}

impl<T: 'static> ObservableList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            core: Rc::new(ListCore::new(Vec::new())),
        }
    }

    pub fn len(&self) -> usize {
        self.core.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run `f` against the current contents without cloning them.
    ///
    /// The contents stay borrowed while `f` runs, so mutating the backing
    /// list from inside `f` panics on the `RefCell` borrow. Reading is fine.
    pub fn with_items<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.core.items())
    }

    /// A live read-only handle onto this list.
    pub fn read_only(&self) -> ReadOnlyList<T> {
        ReadOnlyList::from_core(Rc::clone(&self.core))
    }

    /// Register a change callback; dropping the returned handle unsubscribes.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&ListChange<'_, T>) + 'static,
    {
        self.read_only().subscribe(listener)
    }

    /// Append an item at the end.
    pub fn push(&mut self, item: T) {
        let len = self.len();
        self.core.splice(len, len, vec![item]);
    }

    /// Insert an item at `index`, shifting later items back.
    pub fn insert(&mut self, index: usize, item: T) -> ListResult<()> {
        let len = self.len();
        if index > len {
            return Err(ListError::IndexOutOfBounds { index, len });
        }
        self.core.splice(index, index, vec![item]);
        Ok(())
    }

    /// Remove and return the item at `index`.
    pub fn remove(&mut self, index: usize) -> ListResult<T> {
        let len = self.len();
        if index >= len {
            return Err(ListError::IndexOutOfBounds { index, len });
        }
        self.core
            .splice(index, index + 1, Vec::new())
            .pop()
            .ok_or(ListError::IndexOutOfBounds { index, len })
    }

    /// Replace the item at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, item: T) -> ListResult<T> {
        let len = self.len();
        if index >= len {
            return Err(ListError::IndexOutOfBounds { index, len });
        }
        self.core
            .splice(index, index + 1, vec![item])
            .pop()
            .ok_or(ListError::IndexOutOfBounds { index, len })
    }

    /// Replace the whole contents in one change, returning the old items.
    pub fn set_all(&mut self, items: Vec<T>) -> Vec<T> {
        let len = self.len();
        self.core.splice(0, len, items)
    }

    /// Remove every item.
    pub fn clear(&mut self) -> Vec<T> {
        self.set_all(Vec::new())
    }

    /// Keep only the items matching `keep`.
    ///
    /// Each contiguous run of dropped items is reported as its own splice,
    /// highest indices first, so reported indices are valid when applied in
    /// order.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) -> usize {
        let flags: Vec<bool> = self.core.items().iter().map(|item| keep(item)).collect();
        let mut removed = 0;
        let mut end = flags.len();
        while end > 0 {
            if flags[end - 1] {
                end -= 1;
                continue;
            }
            let mut start = end - 1;
            while start > 0 && !flags[start - 1] {
                start -= 1;
            }
            removed += self.core.splice(start, end, Vec::new()).len();
            end = start;
        }
        removed
    }

    /// Stable sort, reported as a single permutation.
    pub fn sort_by(&mut self, mut compare: impl FnMut(&T, &T) -> Ordering) {
        let permutation = {
            let items = self.core.items();
            let mut order: Vec<usize> = (0..items.len()).collect();
            order.sort_by(|&a, &b| compare(&items[a], &items[b]));
            let mut permutation = vec![0; order.len()];
            for (new, &old) in order.iter().enumerate() {
                permutation[old] = new;
            }
            permutation
        };
        self.core.permute(0, permutation);
    }

    /// Number of live listeners, including derived views.
    pub fn listener_count(&self) -> usize {
        self.core.listener_count()
    }
}

impl<T: Clone + 'static> ObservableList<T> {
    pub fn get(&self, index: usize) -> Option<T> {
        self.core.items().get(index).cloned()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.core.items().clone()
    }
}

impl<T: PartialEq + 'static> ObservableList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.core.items().contains(item)
    }

    pub fn position(&self, item: &T) -> Option<usize> {
        self.core.items().iter().position(|candidate| candidate == item)
    }
}

impl<T: 'static> Default for ObservableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> From<Vec<T>> for ObservableList<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            core: Rc::new(ListCore::new(items)),
        }
    }
}

impl<T: 'static> FromIterator<T> for ObservableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: PartialEq + 'static> PartialEq for ObservableList<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.core.items() == *other.core.items()
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for ObservableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.core.items().iter()).finish()
    }
}
