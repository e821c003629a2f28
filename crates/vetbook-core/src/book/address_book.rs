//! The mutable address book.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use log::{debug, info, warn};

use super::{
    AddressBookSnapshot, BookConfig, BookError, BookResult, DuplicatePolicy,
    ReadOnlyAddressBook, UniqueList,
};
use crate::models::{
    Appointment, AppointmentBuilder, Client, ClientOwnPet, Person, Pet, Tag, VetTechnician,
};
use crate::observable::ReadOnlyList;

/// Owns persons, tags, appointments, pets and client/pet associations.
///
/// Persons are unique. Every tag used by a stored person is also present in
/// the master tag list. The client and vet technician lists are derived from
/// the person list and follow it automatically.
#[derive(Debug)]
pub struct AddressBook {
    config: BookConfig,
    persons: UniqueList<Person>,
    tags: UniqueList<Tag>,
    appointments: UniqueList<Appointment>,
    pets: UniqueList<Pet>,
    associations: UniqueList<ClientOwnPet>,
    clients: ReadOnlyList<Client>,
    vet_technicians: ReadOnlyList<VetTechnician>,
}

impl AddressBook {
    /// Create an empty address book with the default configuration.
    pub fn new() -> Self {
        Self::with_config(BookConfig::default())
    }

    /// Create an empty address book.
    pub fn with_config(config: BookConfig) -> Self {
        let persons: UniqueList<Person> = UniqueList::new();
        let people = persons.read_only();
        let clients = people.filter_map(|person: &Person| person.as_client().cloned());
        let vet_technicians =
            people.filter_map(|person: &Person| person.as_vet_technician().cloned());
        Self {
            config,
            persons,
            tags: UniqueList::new(),
            appointments: UniqueList::new(),
            pets: UniqueList::new(),
            associations: UniqueList::new(),
            clients,
            vet_technicians,
        }
    }

    /// Create an address book holding a copy of `source`.
    pub fn from_read_only(source: &dyn ReadOnlyAddressBook) -> BookResult<Self> {
        let mut book = Self::new();
        book.reset_data(source)?;
        Ok(book)
    }

    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    // =========================================================================
    // Bulk Operations
    // =========================================================================

    /// Replace every collection with the contents of `source`.
    ///
    /// A repeated person in `source` is a caller bug. Under
    /// [`DuplicatePolicy::Panic`] this panics; under
    /// [`DuplicatePolicy::Reject`] it returns [`BookError::DuplicatePerson`]
    /// and the book is left as it was. Repeats in the other collections are
    /// collapsed to their first occurrence.
    pub fn reset_data(&mut self, source: &dyn ReadOnlyAddressBook) -> BookResult<()> {
        let persons = source.person_list().to_vec();
        let person_count = persons.len();
        if let Err(duplicate) = self.persons.set_all(persons) {
            match self.config.duplicate_policy {
                DuplicatePolicy::Panic => panic!(
                    "address book invariant violated: duplicate person `{}` in reset source",
                    duplicate.name()
                ),
                DuplicatePolicy::Reject => {
                    warn!(
                        "event=reset_data module=book status=rejected reason=duplicate_person"
                    );
                    return Err(BookError::DuplicatePerson(duplicate.name().to_string()));
                }
            }
        }

        let mut dropped = self.tags.set_all_dedup(source.tag_list().to_vec());
        dropped += self
            .appointments
            .set_all_dedup(source.appointment_list().to_vec());
        dropped += self.pets.set_all_dedup(source.pet_list().to_vec());
        dropped += self
            .associations
            .set_all_dedup(source.client_pet_associations().to_vec());
        self.sync_master_tags();

        if dropped > 0 {
            warn!("event=reset_data module=book status=dedup dropped={}", dropped);
        }
        info!(
            "event=reset_data module=book status=ok persons={} tags={} appointments={} pets={} associations={}",
            person_count,
            self.tags.len(),
            self.appointments.len(),
            self.pets.len(),
            self.associations.len()
        );
        Ok(())
    }

    /// Replace every collection with a JSON snapshot. A JSON `null` fails
    /// with [`BookError::NullArgument`].
    pub fn reset_from_json(&mut self, json: &str) -> BookResult<()> {
        let snapshot = AddressBookSnapshot::from_json(json)?;
        self.reset_data(&snapshot)
    }

    /// Copy the current contents.
    pub fn snapshot(&self) -> AddressBookSnapshot {
        AddressBookSnapshot::capture(self)
    }

    // =========================================================================
    // Person Operations
    // =========================================================================

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    /// Add a person. Its tags join the master tag list.
    pub fn add_person(&mut self, person: Person) -> BookResult<()> {
        if self.persons.contains(&person) {
            warn!("event=add_person module=book status=rejected reason=duplicate");
            return Err(BookError::DuplicatePerson(person.name().to_string()));
        }
        self.merge_tags(person.tags().iter().cloned());
        debug!(
            "event=add_person module=book status=ok client={}",
            person.is_client()
        );
        self.persons.push(person);
        Ok(())
    }

    /// Replace `target` with `edited`.
    ///
    /// When both are clients, associations naming the old client are updated
    /// to the new one.
    pub fn update_person(&mut self, target: &Person, edited: Person) -> BookResult<()> {
        let Some(index) = self.persons.position(target) else {
            warn!("event=update_person module=book status=rejected reason=not_found");
            return Err(BookError::PersonNotFound(target.name().to_string()));
        };
        if edited != *target && self.persons.contains(&edited) {
            warn!("event=update_person module=book status=rejected reason=duplicate");
            return Err(BookError::DuplicatePerson(edited.name().to_string()));
        }

        if let (Some(old), Some(new)) = (target.as_client(), edited.as_client()) {
            let new = new.clone();
            self.associations.update_each(|association| {
                (association.client == *old)
                    .then(|| ClientOwnPet::new(new.clone(), association.pet.clone()))
            })?;
        } else if let Some(old) = target.as_client() {
            self.associations
                .retain(|association| association.client != *old);
        }

        self.merge_tags(edited.tags().iter().cloned());
        self.persons.replace_at(index, edited)?;
        debug!("event=update_person module=book status=ok index={}", index);
        Ok(())
    }

    /// Remove a person. Removing a client also drops its pet associations.
    pub fn remove_person(&mut self, person: &Person) -> BookResult<Person> {
        let Some(removed) = self.persons.remove(person) else {
            warn!("event=remove_person module=book status=rejected reason=not_found");
            return Err(BookError::PersonNotFound(person.name().to_string()));
        };
        if let Some(client) = removed.as_client() {
            let dropped = self
                .associations
                .retain(|association| association.client != *client);
            debug!(
                "event=remove_person module=book associations_dropped={}",
                dropped
            );
        }
        debug!("event=remove_person module=book status=ok");
        Ok(removed)
    }

    /// Order persons by name. Derived views are reordered, not rebuilt.
    pub fn sort_persons_by_name(&mut self) {
        self.persons.sort_by(|a, b| a.name().cmp(b.name()));
        info!(
            "event=sort_persons module=book status=ok persons={}",
            self.persons.len()
        );
    }

    // =========================================================================
    // Tag Operations
    // =========================================================================

    /// Strip `tag` from every person and pet, then from the master list.
    pub fn remove_tag(&mut self, tag: &Tag) -> BookResult<()> {
        let without = |tags: &BTreeSet<Tag>| {
            let mut tags = tags.clone();
            tags.remove(tag);
            tags
        };

        let persons = self.persons.update_each(|person| {
            person.tags().contains(tag).then(|| {
                let mut edited = person.clone();
                edited.details_mut().tags = without(person.tags());
                edited
            })
        })?;
        let pets = self.pets.update_each(|pet| {
            pet.tags.contains(tag).then(|| Pet {
                tags: without(&pet.tags),
                ..pet.clone()
            })
        })?;
        self.associations.update_each(|association| {
            let stale = association.client.details.tags.contains(tag)
                || association.pet.tags.contains(tag);
            stale.then(|| {
                let mut edited = association.clone();
                edited.client.details.tags = without(&association.client.details.tags);
                edited.pet.tags = without(&association.pet.tags);
                edited
            })
        })?;
        self.tags.remove(tag);

        info!(
            "event=remove_tag module=book status=ok persons={} pets={}",
            persons, pets
        );
        Ok(())
    }

    // =========================================================================
    // Appointment Operations
    // =========================================================================

    pub fn add_appointment(&mut self, appointment: Appointment) -> BookResult<()> {
        if self.appointments.contains(&appointment) {
            warn!("event=add_appointment module=book status=rejected reason=duplicate");
            return Err(BookError::DuplicateAppointment(appointment.to_string()));
        }
        debug!("event=add_appointment module=book status=ok");
        self.appointments.push(appointment);
        Ok(())
    }

    /// Build an appointment from collected fields and add it.
    pub fn schedule_appointment(&mut self, builder: AppointmentBuilder) -> BookResult<Appointment> {
        let appointment = builder.build()?;
        self.add_appointment(appointment.clone())?;
        Ok(appointment)
    }

    /// Replace `target` with `edited` (e.g., a rescheduled copy).
    pub fn update_appointment(
        &mut self,
        target: &Appointment,
        edited: Appointment,
    ) -> BookResult<()> {
        let Some(index) = self.appointments.position(target) else {
            warn!("event=update_appointment module=book status=rejected reason=not_found");
            return Err(BookError::AppointmentNotFound(target.to_string()));
        };
        if edited != *target && self.appointments.contains(&edited) {
            warn!("event=update_appointment module=book status=rejected reason=duplicate");
            return Err(BookError::DuplicateAppointment(edited.to_string()));
        }
        self.appointments.replace_at(index, edited)?;
        debug!("event=update_appointment module=book status=ok index={}", index);
        Ok(())
    }

    pub fn remove_appointment(&mut self, appointment: &Appointment) -> BookResult<Appointment> {
        self.appointments.remove(appointment).ok_or_else(|| {
            warn!("event=remove_appointment module=book status=rejected reason=not_found");
            BookError::AppointmentNotFound(appointment.to_string())
        })
    }

    /// Appointments on `date`, in list order.
    pub fn appointments_on(&self, date: NaiveDate) -> Vec<Appointment> {
        self.appointments
            .to_vec()
            .into_iter()
            .filter(|appointment| appointment.date() == date)
            .collect()
    }

    // =========================================================================
    // Pet Operations
    // =========================================================================

    /// Add a pet. Its tags join the master tag list.
    pub fn add_pet(&mut self, pet: Pet) -> BookResult<()> {
        if self.pets.contains(&pet) {
            warn!("event=add_pet module=book status=rejected reason=duplicate");
            return Err(BookError::DuplicatePet(pet.name.clone()));
        }
        self.merge_tags(pet.tags.iter().cloned());
        debug!("event=add_pet module=book status=ok");
        self.pets.push(pet);
        Ok(())
    }

    /// Remove a pet together with any ownership records for it.
    pub fn remove_pet(&mut self, pet: &Pet) -> BookResult<Pet> {
        let Some(removed) = self.pets.remove(pet) else {
            warn!("event=remove_pet module=book status=rejected reason=not_found");
            return Err(BookError::PetNotFound(pet.name.clone()));
        };
        self.associations
            .retain(|association| association.pet != removed);
        debug!("event=remove_pet module=book status=ok");
        Ok(removed)
    }

    // =========================================================================
    // Association Operations
    // =========================================================================

    /// Record that `client` owns `pet`. Both must already be stored.
    pub fn add_association(&mut self, client: &Client, pet: &Pet) -> BookResult<()> {
        if !self.persons.contains(&Person::Client(client.clone())) {
            warn!("event=add_association module=book status=rejected reason=client_not_found");
            return Err(BookError::PersonNotFound(client.name().to_string()));
        }
        if !self.pets.contains(pet) {
            warn!("event=add_association module=book status=rejected reason=pet_not_found");
            return Err(BookError::PetNotFound(pet.name.clone()));
        }
        let association = ClientOwnPet::new(client.clone(), pet.clone());
        if !self.associations.push(association) {
            warn!("event=add_association module=book status=rejected reason=duplicate");
            return Err(BookError::DuplicateAssociation(format!(
                "{} owns {}",
                client.name(),
                pet.name
            )));
        }
        debug!("event=add_association module=book status=ok");
        Ok(())
    }

    pub fn remove_association(&mut self, association: &ClientOwnPet) -> BookResult<ClientOwnPet> {
        let Some(removed) = self.associations.remove(association) else {
            warn!("event=remove_association module=book status=rejected reason=not_found");
            return Err(BookError::AssociationNotFound(association.to_string()));
        };
        debug!("event=remove_association module=book status=ok");
        Ok(removed)
    }

    /// Pets owned by `client`, in association order.
    pub fn pets_of(&self, client: &Client) -> Vec<Pet> {
        self.associations
            .to_vec()
            .into_iter()
            .filter(|association| association.client == *client)
            .map(|association| association.pet)
            .collect()
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn merge_tags(&mut self, tags: impl IntoIterator<Item = Tag>) {
        for tag in tags {
            self.tags.push(tag);
        }
    }

    /// Make sure every tag used by a person or pet is in the master list.
    fn sync_master_tags(&mut self) {
        let used: Vec<Tag> = self
            .persons
            .to_vec()
            .iter()
            .flat_map(|person| person.tags().iter().cloned())
            .chain(self.pets.to_vec().into_iter().flat_map(|pet| pet.tags))
            .collect();
        self.merge_tags(used);
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for AddressBook {
    fn eq(&self, other: &Self) -> bool {
        self.persons == other.persons
            && self.tags == other.tags
            && self.appointments == other.appointments
            && self.pets == other.pets
            && self.associations == other.associations
    }
}

impl ReadOnlyAddressBook for AddressBook {
    fn person_list(&self) -> ReadOnlyList<Person> {
        self.persons.read_only()
    }

    fn tag_list(&self) -> ReadOnlyList<Tag> {
        self.tags.read_only()
    }

    fn appointment_list(&self) -> ReadOnlyList<Appointment> {
        self.appointments.read_only()
    }

    fn pet_list(&self) -> ReadOnlyList<Pet> {
        self.pets.read_only()
    }

    fn client_pet_associations(&self) -> ReadOnlyList<ClientOwnPet> {
        self.associations.read_only()
    }

    fn client_list(&self) -> ReadOnlyList<Client> {
        self.clients.clone()
    }

    fn vet_technician_list(&self) -> ReadOnlyList<VetTechnician> {
        self.vet_technicians.clone()
    }
}
