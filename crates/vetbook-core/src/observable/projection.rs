//! Incremental filter-map projection from a source list into a derived list.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::shared::ListCore;
use super::{ListChange, ListListener};

type MapFn<S, U> = Box<dyn Fn(&S) -> Option<U>>;

/// Listens to a source list and keeps a derived list in step with it.
///
/// `matches[i]` records whether source item `i` currently produces a derived
/// item, so the derived index of any source position is the number of set
/// flags before it.
pub(crate) struct Projection<S: 'static, U: 'static> {
    _source: Rc<ListCore<S>>,
    target: Weak<ListCore<U>>,
    matches: RefCell<Vec<bool>>,
    map: MapFn<S, U>,
}

impl<S: 'static, U: 'static> Projection<S, U> {
    /// Build the derived list for `source` and subscribe it to changes.
    pub(crate) fn attach(source: &Rc<ListCore<S>>, map: MapFn<S, U>) -> Rc<ListCore<U>> {
        let (matches, initial) = {
            let items = source.items();
            let mapped: Vec<Option<U>> = items.iter().map(|item| map(item)).collect();
            let matches: Vec<bool> = mapped.iter().map(Option::is_some).collect();
            (matches, mapped.into_iter().flatten().collect::<Vec<U>>())
        };

        let mut attached: Option<Rc<Projection<S, U>>> = None;
        let target = Rc::new_cyclic(|weak_target| {
            let projection = Rc::new(Projection {
                _source: Rc::clone(source),
                target: weak_target.clone(),
                matches: RefCell::new(matches),
                map,
            });
            attached = Some(Rc::clone(&projection));
            ListCore::with_upstream(initial, projection)
        });

        if let Some(projection) = attached {
            let listener: Rc<dyn ListListener<S>> = projection;
            source.add_listener(Rc::downgrade(&listener));
        }
        target
    }

    fn apply_splice(&self, target: &ListCore<U>, from: usize, removed: usize, added: &[S]) {
        let (start, dropped, projected) = {
            let mut matches = self.matches.borrow_mut();
            let start = count_set(&matches[..from]);
            let dropped = count_set(&matches[from..from + removed]);
            let mapped: Vec<Option<U>> = added.iter().map(|item| (self.map)(item)).collect();
            matches.splice(from..from + removed, mapped.iter().map(Option::is_some));
            (start, dropped, mapped.into_iter().flatten().collect::<Vec<U>>())
        };

        if dropped == 0 && projected.is_empty() {
            return;
        }
        target.splice(start, start + dropped, projected);
    }

    fn apply_permute(&self, target: &ListCore<U>, from: usize, permutation: &[usize]) {
        let (start, induced) = {
            let mut matches = self.matches.borrow_mut();
            let len = permutation.len();
            let start = count_set(&matches[..from]);

            // New source positions of the matching items, in current order.
            let moved: Vec<usize> = (0..len)
                .filter(|&i| matches[from + i])
                .map(|i| permutation[i])
                .collect();

            let mut reordered = vec![false; len];
            for (i, &new) in permutation.iter().enumerate() {
                reordered[new - from] = matches[from + i];
            }
            matches[from..from + len].copy_from_slice(&reordered);

            let mut ranked = moved.clone();
            ranked.sort_unstable();
            let induced: Vec<usize> = moved
                .iter()
                .map(|new| start + ranked.partition_point(|other| other < new))
                .collect();
            (start, induced)
        };

        target.permute(start, induced);
    }
}

impl<S: 'static, U: 'static> ListListener<S> for Projection<S, U> {
    fn on_change(&self, change: &ListChange<'_, S>) {
        let Some(target) = self.target.upgrade() else {
            return;
        };
        match *change {
            ListChange::Splice {
                from,
                removed,
                added,
            } => self.apply_splice(&target, from, removed.len(), added),
            ListChange::Permute { from, permutation } => {
                self.apply_permute(&target, from, permutation)
            }
        }
    }
}

fn count_set(flags: &[bool]) -> usize {
    flags.iter().filter(|flag| **flag).count()
}
