//! Shared list state behind every list handle.

use std::any::Any;
use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use super::{ListChange, ListListener};

pub(crate) struct ListCore<T> {
    items: RefCell<Vec<T>>,
    listeners: RefCell<Vec<Weak<dyn ListListener<T>>>>,
    /// Keeps the producer of a derived list alive for as long as any handle
    /// to the derived list exists.
    _upstream: Option<Rc<dyn Any>>,
}

impl<T: 'static> ListCore<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        Self {
            items: RefCell::new(items),
            listeners: RefCell::new(Vec::new()),
            _upstream: None,
        }
    }

    pub(crate) fn with_upstream(items: Vec<T>, upstream: Rc<dyn Any>) -> Self {
        Self {
            items: RefCell::new(items),
            listeners: RefCell::new(Vec::new()),
            _upstream: Some(upstream),
        }
    }

    pub(crate) fn items(&self) -> Ref<'_, Vec<T>> {
        self.items.borrow()
    }

    pub(crate) fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub(crate) fn add_listener(&self, listener: Weak<dyn ListListener<T>>) {
        let mut listeners = self.listeners.borrow_mut();
        listeners.retain(|l| l.strong_count() > 0);
        listeners.push(listener);
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|l| l.strong_count() > 0)
            .count()
    }

    /// Replace `from..to` with `added` and notify. Returns the removed items.
    pub(crate) fn splice(&self, from: usize, to: usize, added: Vec<T>) -> Vec<T> {
        let added_count = added.len();
        let removed: Vec<T> = self.items.borrow_mut().splice(from..to, added).collect();
        if removed.is_empty() && added_count == 0 {
            return removed;
        }

        {
            let items = self.items.borrow();
            self.notify(&ListChange::Splice {
                from,
                removed: &removed,
                added: &items[from..from + added_count],
            });
        }
        removed
    }

    /// Reorder `from..from + permutation.len()` and notify. Identity
    /// permutations are dropped silently.
    pub(crate) fn permute(&self, from: usize, permutation: Vec<usize>) {
        if permutation.iter().enumerate().all(|(i, &p)| p == from + i) {
            return;
        }

        {
            let mut items = self.items.borrow_mut();
            let len = permutation.len();
            let mut slots: Vec<Option<T>> = items.drain(from..from + len).map(Some).collect();
            let mut inverse = vec![0; len];
            for (old, &new) in permutation.iter().enumerate() {
                inverse[new - from] = old;
            }
            let ordered: Vec<T> = inverse.iter().filter_map(|&old| slots[old].take()).collect();
            items.splice(from..from, ordered);
        }

        self.notify(&ListChange::Permute {
            from,
            permutation: &permutation,
        });
    }

    fn notify(&self, change: &ListChange<'_, T>) {
        // Snapshot the listeners so a callback may subscribe without
        // re-borrowing the registry.
        let live: Vec<Rc<dyn ListListener<T>>> = {
            let mut listeners = self.listeners.borrow_mut();
            listeners.retain(|l| l.strong_count() > 0);
            listeners.iter().filter_map(Weak::upgrade).collect()
        };
        for listener in live {
            listener.on_change(change);
        }
    }
}
