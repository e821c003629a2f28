//! Observable lists and live derived views.
//!
//! # Architecture
//!
//! ```text
//!  ObservableList<Person> ──(owner, mutates)
//!         │
//!         │  ListChange::Splice / ListChange::Permute
//!         ▼
//!    Projection ──(matches bitmap, filter_map)──▶ ReadOnlyList<Client>
//!                                                       │
//!                                                       ▼
//!                                               subscribers (UI, ...)
//! ```
//!
//! Every list shares its state through a single-threaded `Rc<RefCell<..>>`
//! core. Listeners run synchronously inside the mutating call, and derived
//! views apply each change to the affected slice only.
//!
//! Mutating a list from inside one of its own listeners panics on the
//! `RefCell` borrow.

mod change;
mod list;
mod projection;
mod shared;
mod view;

pub use change::*;
pub use list::*;
pub use view::*;

use thiserror::Error;

/// List access errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("Unsupported operation on read-only view: {0}")]
    UnsupportedOperation(&'static str),

    #[error("Index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type ListResult<T> = Result<T, ListError>;
