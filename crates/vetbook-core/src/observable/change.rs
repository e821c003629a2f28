//! Change descriptors delivered to list listeners.

/// A single structural change to an observable list.
#[derive(Debug, PartialEq)]
pub enum ListChange<'a, T> {
    /// `removed` left the list at index `from` and `added` now occupies
    /// `from..from + added.len()`.
    Splice {
        from: usize,
        removed: &'a [T],
        added: &'a [T],
    },
    /// The items in `from..from + permutation.len()` were reordered. The item
    /// previously at `from + i` now sits at `permutation[i]`.
    Permute { from: usize, permutation: &'a [usize] },
}

impl<T> ListChange<'_, T> {
    /// Number of items that entered the list.
    pub fn added_count(&self) -> usize {
        match self {
            ListChange::Splice { added, .. } => added.len(),
            ListChange::Permute { .. } => 0,
        }
    }

    /// Number of items that left the list.
    pub fn removed_count(&self) -> usize {
        match self {
            ListChange::Splice { removed, .. } => removed.len(),
            ListChange::Permute { .. } => 0,
        }
    }
}

/// Receives list changes synchronously.
pub trait ListListener<T> {
    fn on_change(&self, change: &ListChange<'_, T>);
}

impl<T, F> ListListener<T> for F
where
    F: Fn(&ListChange<'_, T>),
{
    fn on_change(&self, change: &ListChange<'_, T>) {
        self(change)
    }
}
