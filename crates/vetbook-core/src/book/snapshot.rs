//! Plain, serializable address book contents.
//!
//! This is the shape a persistence layer reads and writes. It is not live:
//! lists handed out by a snapshot never change.

use serde::{Deserialize, Serialize};

use super::{BookError, BookResult, ReadOnlyAddressBook};
use crate::models::{Appointment, ClientOwnPet, Person, Pet, Tag};
use crate::observable::{ObservableList, ReadOnlyList};

/// Every collection of an address book at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressBookSnapshot {
    pub persons: Vec<Person>,
    pub tags: Vec<Tag>,
    pub appointments: Vec<Appointment>,
    pub pets: Vec<Pet>,
    pub associations: Vec<ClientOwnPet>,
}

impl AddressBookSnapshot {
    /// Copy the current contents of any address book.
    pub fn capture(source: &dyn ReadOnlyAddressBook) -> Self {
        Self {
            persons: source.person_list().to_vec(),
            tags: source.tag_list().to_vec(),
            appointments: source.appointment_list().to_vec(),
            pets: source.pet_list().to_vec(),
            associations: source.client_pet_associations().to_vec(),
        }
    }

    pub fn to_json(&self) -> BookResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot. A JSON `null` is a missing source.
    pub fn from_json(json: &str) -> BookResult<Self> {
        let snapshot: Option<Self> = serde_json::from_str(json)?;
        snapshot.ok_or(BookError::NullArgument("source"))
    }
}

fn frozen<T: Clone + 'static>(items: &[T]) -> ReadOnlyList<T> {
    ObservableList::from(items.to_vec()).read_only()
}

impl ReadOnlyAddressBook for AddressBookSnapshot {
    fn person_list(&self) -> ReadOnlyList<Person> {
        frozen(&self.persons)
    }

    fn tag_list(&self) -> ReadOnlyList<Tag> {
        frozen(&self.tags)
    }

    fn appointment_list(&self) -> ReadOnlyList<Appointment> {
        frozen(&self.appointments)
    }

    fn pet_list(&self) -> ReadOnlyList<Pet> {
        frozen(&self.pets)
    }

    fn client_pet_associations(&self) -> ReadOnlyList<ClientOwnPet> {
        frozen(&self.associations)
    }
}
