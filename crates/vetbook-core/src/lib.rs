//! Vetbook Core Library
//!
//! In-memory record store for a veterinary clinic's address book: clients,
//! vet technicians, pets, ownership records, tags and appointments.
//!
//! # Architecture
//!
//! ```text
//!        persistence (JSON)                       UI
//!               │                                  ▲
//!    AddressBookSnapshot ──reset_data──▶  AddressBook │ subscribe(..)
//!                                            │        │
//!                      ┌─────────────────────┼────────┴──────────┐
//!                      ▼                     ▼                   ▼
//!            ReadOnlyList<Person>   ReadOnlyList<Client>  ReadOnlyList<VetTechnician>
//!                 (live view)          (derived view)        (derived view)
//! ```
//!
//! # Core Principle
//!
//! **Views never go stale.** Every collection is an observable list; derived
//! views apply each change incrementally and need no refresh call.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Appointment, Person, Pet, Tag, ClientOwnPet)
//! - [`observable`]: Observable lists, read-only views, derived views
//! - [`book`]: The address book, its configuration and snapshots

pub mod book;
pub mod models;
pub mod observable;

// Re-export commonly used types
pub use book::{
    AddressBook, AddressBookSnapshot, BookConfig, BookError, BookResult, DuplicatePolicy,
    ReadOnlyAddressBook,
};
pub use models::{
    Appointment, AppointmentBuilder, Client, ClientOwnPet, ModelError, Person, PersonDetails, Pet,
    Tag, VetTechnician,
};
pub use observable::{ListChange, ListError, ObservableList, ReadOnlyList, Subscription};
