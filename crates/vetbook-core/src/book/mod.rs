//! The address book: owner of every record collection.

mod address_book;
mod config;
mod snapshot;
mod unique_list;

pub use address_book::*;
pub use config::*;
pub use snapshot::*;
pub use unique_list::*;

use thiserror::Error;

use crate::models::{
    Appointment, Client, ClientOwnPet, ModelError, Person, Pet, Tag, VetTechnician,
};
use crate::observable::{ListError, ReadOnlyList};

/// Address book errors.
#[derive(Error, Debug)]
pub enum BookError {
    #[error("Missing required argument: {0}")]
    NullArgument(&'static str),

    #[error("Duplicate person: {0}")]
    DuplicatePerson(String),

    #[error("Person not found: {0}")]
    PersonNotFound(String),

    #[error("Duplicate appointment: {0}")]
    DuplicateAppointment(String),

    #[error("Appointment not found: {0}")]
    AppointmentNotFound(String),

    #[error("Duplicate pet: {0}")]
    DuplicatePet(String),

    #[error("Pet not found: {0}")]
    PetNotFound(String),

    #[error("Duplicate association: {0}")]
    DuplicateAssociation(String),

    #[error("Association not found: {0}")]
    AssociationNotFound(String),

    #[error("List error: {0}")]
    List(#[from] ListError),

    #[error("Invalid record: {0}")]
    Model(#[from] ModelError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type BookResult<T> = Result<T, BookError>;

/// Read access to every collection of an address book.
///
/// All lists are live views: they keep reflecting the owner's contents after
/// it changes.
pub trait ReadOnlyAddressBook {
    fn person_list(&self) -> ReadOnlyList<Person>;

    fn tag_list(&self) -> ReadOnlyList<Tag>;

    fn appointment_list(&self) -> ReadOnlyList<Appointment>;

    fn pet_list(&self) -> ReadOnlyList<Pet>;

    fn client_pet_associations(&self) -> ReadOnlyList<ClientOwnPet>;

    /// Persons that are clients, in person-list order.
    fn client_list(&self) -> ReadOnlyList<Client> {
        self.person_list()
            .filter_map(|person: &Person| person.as_client().cloned())
    }

    /// Persons that are vet technicians, in person-list order.
    fn vet_technician_list(&self) -> ReadOnlyList<VetTechnician> {
        self.person_list()
            .filter_map(|person: &Person| person.as_vet_technician().cloned())
    }
}
