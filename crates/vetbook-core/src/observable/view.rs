//! Read-only live views.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use super::projection::Projection;
use super::shared::ListCore;
use super::{ListChange, ListError, ListListener, ListResult};

/// A live, read-only handle onto an observable list.
///
/// Cloning the handle is cheap and every clone observes the same contents.
/// Mutation attempts through the `try_*` methods always fail with
/// [`ListError::UnsupportedOperation`] and leave the list untouched.
pub struct ReadOnlyList<T: 'static> {
    core: Rc<ListCore<T>>,
}

/// Keeps a change callback registered. Dropping it unsubscribes.
#[must_use = "dropping a subscription unsubscribes immediately"]
pub struct Subscription {
    _listener: Rc<dyn Any>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

impl<T: 'static> ReadOnlyList<T> {
    pub(crate) fn from_core(core: Rc<ListCore<T>>) -> Self {
        Self { core }
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

    /// Register a change callback; dropping the returned handle unsubscribes.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&ListChange<'_, T>) + 'static,
    {
        let listener = Rc::new(listener);
        let registered: Rc<dyn ListListener<T>> = listener.clone();
        self.core.add_listener(Rc::downgrade(&registered));
        Subscription {
            _listener: listener,
        }
    }

    /// A live view of the items `map` turns into `Some`, in source order.
    pub fn filter_map<U, F>(&self, map: F) -> ReadOnlyList<U>
    where
        U: 'static,
        F: Fn(&T) -> Option<U> + 'static,
    {
        ReadOnlyList::from_core(Projection::attach(&self.core, Box::new(map)))
    }

    /// Number of live listeners, including derived views.
    pub fn listener_count(&self) -> usize {
        self.core.listener_count()
    }

    pub fn try_push(&self, _item: T) -> ListResult<()> {
        Err(ListError::UnsupportedOperation("push"))
    }

    pub fn try_insert(&self, _index: usize, _item: T) -> ListResult<()> {
        Err(ListError::UnsupportedOperation("insert"))
    }

    pub fn try_remove(&self, _index: usize) -> ListResult<T> {
        Err(ListError::UnsupportedOperation("remove"))
    }

    pub fn try_set(&self, _index: usize, _item: T) -> ListResult<T> {
        Err(ListError::UnsupportedOperation("set"))
    }

    pub fn try_clear(&self) -> ListResult<()> {
        Err(ListError::UnsupportedOperation("clear"))
    }
}

impl<T: Clone + 'static> ReadOnlyList<T> {
    pub fn get(&self, index: usize) -> Option<T> {
        self.core.items().get(index).cloned()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.core.items().clone()
    }

    /// A live view of the items matching `predicate`, in source order.
    pub fn filtered<F>(&self, predicate: F) -> ReadOnlyList<T>
    where
        F: Fn(&T) -> bool + 'static,
    {
        self.filter_map(move |item| predicate(item).then(|| item.clone()))
    }
}

impl<T: PartialEq + 'static> ReadOnlyList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.core.items().contains(item)
    }

    pub fn position(&self, item: &T) -> Option<usize> {
        self.core.items().iter().position(|candidate| candidate == item)
    }
}

impl<T: 'static> Clone for ReadOnlyList<T> {
    fn clone(&self) -> Self {
        Self {
            core: Rc::clone(&self.core),
        }
    }
}

impl<T: PartialEq + 'static> PartialEq for ReadOnlyList<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.core.items() == *other.core.items()
    }
}

impl<T: PartialEq + 'static> PartialEq<Vec<T>> for ReadOnlyList<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self.core.items() == *other
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for ReadOnlyList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.core.items().iter()).finish()
    }
}
