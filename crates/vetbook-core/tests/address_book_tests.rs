//! Address book integration tests.

use vetbook_core::observable::ObservableList;
use vetbook_core::{
    AddressBook, AddressBookSnapshot, Appointment, BookConfig, BookError, Client, ClientOwnPet,
    ListError, Person, PersonDetails, Pet, ReadOnlyAddressBook, ReadOnlyList, Tag, VetTechnician,
};

use chrono::{NaiveDate, NaiveTime};

fn alice() -> Person {
    Client::new(
        PersonDetails::new("Alice Pauline", "94351253", "alice@example.com", "123 Jurong West Ave 6")
            .with_tags(["friends"]),
    )
    .into()
}

fn benson() -> Person {
    Client::new(
        PersonDetails::new("Benson Meier", "98765432", "johnd@example.com", "311 Clementi Ave 2")
            .with_tags(["owesMoney", "friends"]),
    )
    .into()
}

fn daniel() -> Person {
    VetTechnician::new(PersonDetails::new(
        "Daniel Meier",
        "87652533",
        "cornelia@example.com",
        "10th street",
    ))
    .into()
}

fn garfield() -> Pet {
    Pet::new("Garfield", "feline", "Persian", 5, "M")
}

fn checkup() -> Appointment {
    Appointment::new(
        NaiveDate::from_ymd_opt(2018, 3, 14).unwrap(),
        NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        "Alice Pauline",
        "Garfield",
        "Daniel Meier",
    )
}

fn typical_snapshot() -> AddressBookSnapshot {
    let owner = alice().as_client().cloned().unwrap();
    AddressBookSnapshot {
        persons: vec![alice(), daniel(), benson()],
        tags: vec![Tag::new("friends"), Tag::new("owesMoney")],
        appointments: vec![checkup()],
        pets: vec![garfield()],
        associations: vec![ClientOwnPet::new(owner, garfield())],
    }
}

/// A read-only address book whose person list may break the uniqueness rule.
struct AddressBookStub {
    persons: ObservableList<Person>,
    tags: ObservableList<Tag>,
    appointments: ObservableList<Appointment>,
    pets: ObservableList<Pet>,
    associations: ObservableList<ClientOwnPet>,
}

impl AddressBookStub {
    fn new(persons: Vec<Person>, tags: Vec<Tag>) -> Self {
        Self {
            persons: persons.into(),
            tags: tags.into(),
            appointments: ObservableList::new(),
            pets: ObservableList::new(),
            associations: ObservableList::new(),
        }
    }
}

impl ReadOnlyAddressBook for AddressBookStub {
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
}

#[test]
fn test_new_book_is_empty() {
    let book = AddressBook::new();
    assert!(book.person_list().is_empty());
    assert!(book.tag_list().is_empty());
    assert!(book.appointment_list().is_empty());
    assert!(book.pet_list().is_empty());
    assert!(book.client_pet_associations().is_empty());
    assert!(book.client_list().is_empty());
    assert!(book.vet_technician_list().is_empty());
}

#[test]
fn test_reset_from_null_json() {
    let mut book = AddressBook::new();
    let result = book.reset_from_json("null");
    assert!(matches!(result, Err(BookError::NullArgument("source"))));
}

#[test]
fn test_reset_data_replaces_contents() {
    let mut book = AddressBook::new();
    book.add_person(daniel()).unwrap();

    let source = typical_snapshot();
    book.reset_data(&source).unwrap();
    assert_eq!(book.snapshot(), source);
}

#[test]
fn test_reset_from_json_replaces_contents() {
    let source = typical_snapshot();
    let mut book = AddressBook::new();
    book.reset_from_json(&source.to_json().unwrap()).unwrap();
    assert_eq!(book.snapshot(), source);

    let copy = AddressBook::from_read_only(&book).unwrap();
    assert_eq!(copy, book);
}

#[test]
#[should_panic(expected = "duplicate person")]
fn test_reset_data_with_duplicate_persons_panics() {
    let tags: Vec<Tag> = alice().tags().iter().cloned().collect();
    let stub = AddressBookStub::new(vec![alice(), alice()], tags);

    let mut book = AddressBook::new();
    let _ = book.reset_data(&stub);
}

#[test]
fn test_reset_data_with_duplicate_persons_rejected_by_config() {
    let tags: Vec<Tag> = alice().tags().iter().cloned().collect();
    let stub = AddressBookStub::new(vec![alice(), alice()], tags);

    let mut book = AddressBook::with_config(BookConfig::rejecting_duplicates());
    book.add_person(daniel()).unwrap();

    let result = book.reset_data(&stub);
    assert!(matches!(result, Err(BookError::DuplicatePerson(name)) if name == "Alice Pauline"));
    assert_eq!(book.person_list().to_vec(), vec![daniel()]);
}

#[test]
fn test_reset_data_syncs_master_tags() {
    let stub = AddressBookStub::new(vec![benson()], Vec::new());
    let mut book = AddressBook::new();
    book.reset_data(&stub).unwrap();
    assert_eq!(
        book.tag_list().to_vec(),
        vec![Tag::new("friends"), Tag::new("owesMoney")]
    );
}

#[test]
fn test_person_list_modify_rejected() {
    let mut book = AddressBook::new();
    book.add_person(alice()).unwrap();

    let persons = book.person_list();
    assert_eq!(
        persons.try_remove(0),
        Err(ListError::UnsupportedOperation("remove"))
    );
    assert_eq!(book.person_list().to_vec(), vec![alice()]);
}

#[test]
fn test_tag_list_modify_rejected() {
    let book = AddressBook::new();
    assert_eq!(
        book.tag_list().try_remove(0),
        Err(ListError::UnsupportedOperation("remove"))
    );
    assert_eq!(
        book.tag_list().try_push(Tag::new("new")),
        Err(ListError::UnsupportedOperation("push"))
    );
    assert!(book.tag_list().is_empty());
}

#[test]
fn test_other_lists_modify_rejected() {
    let mut book = AddressBook::new();
    book.reset_data(&typical_snapshot()).unwrap();

    assert!(book.appointment_list().try_clear().is_err());
    assert!(book.pet_list().try_remove(0).is_err());
    assert!(book.client_pet_associations().try_remove(0).is_err());
    assert!(book.client_list().try_remove(0).is_err());
    assert!(book.vet_technician_list().try_clear().is_err());
    assert_eq!(book.snapshot(), typical_snapshot());
}

#[test]
fn test_derived_lists_split_persons() {
    let mut book = AddressBook::new();
    for person in [alice(), daniel(), benson()] {
        book.add_person(person).unwrap();
    }

    let clients = book.client_list();
    let techs = book.vet_technician_list();
    assert_eq!(
        clients.to_vec(),
        vec![
            alice().as_client().cloned().unwrap(),
            benson().as_client().cloned().unwrap(),
        ]
    );
    assert_eq!(techs.to_vec(), vec![daniel().as_vet_technician().cloned().unwrap()]);
}

#[test]
fn test_derived_lists_follow_later_changes() {
    let mut book = AddressBook::new();
    book.add_person(alice()).unwrap();
    book.add_person(daniel()).unwrap();

    let clients = book.client_list();
    let techs = book.vet_technician_list();

    book.add_person(benson()).unwrap();
    assert_eq!(clients.len(), 2);

    book.remove_person(&alice()).unwrap();
    assert_eq!(clients.to_vec(), vec![benson().as_client().cloned().unwrap()]);

    book.remove_person(&daniel()).unwrap();
    assert!(techs.is_empty());
}

#[test]
fn test_sort_reorders_derived_lists() {
    let mut book = AddressBook::new();
    for person in [benson(), daniel(), alice()] {
        book.add_person(person).unwrap();
    }
    let clients = book.client_list();

    book.sort_persons_by_name();
    assert_eq!(book.person_list().to_vec(), vec![alice(), benson(), daniel()]);
    let names: Vec<String> = clients.to_vec().iter().map(|c| c.name().to_string()).collect();
    assert_eq!(names, vec!["Alice Pauline", "Benson Meier"]);
}

#[test]
fn test_appointment_operations() {
    let mut book = AddressBook::new();
    book.add_appointment(checkup()).unwrap();
    assert!(matches!(
        book.add_appointment(checkup()),
        Err(BookError::DuplicateAppointment(_))
    ));

    let later = checkup().with_time(NaiveTime::from_hms_opt(15, 0, 0).unwrap());
    book.update_appointment(&checkup(), later.clone()).unwrap();
    assert_eq!(book.appointment_list().to_vec(), vec![later.clone()]);
    assert_eq!(
        book.appointments_on(NaiveDate::from_ymd_opt(2018, 3, 14).unwrap()),
        vec![later.clone()]
    );
    assert!(book
        .appointments_on(NaiveDate::from_ymd_opt(2018, 3, 15).unwrap())
        .is_empty());

    assert_eq!(book.remove_appointment(&later).unwrap(), later);
    assert!(matches!(
        book.remove_appointment(&later),
        Err(BookError::AppointmentNotFound(_))
    ));
}

#[test]
fn test_schedule_appointment_from_builder() {
    let mut book = AddressBook::new();
    let scheduled = book
        .schedule_appointment(
            Appointment::builder()
                .date(NaiveDate::from_ymd_opt(2018, 3, 14).unwrap())
                .time(NaiveTime::from_hms_opt(10, 30, 0).unwrap())
                .client("Alice Pauline")
                .pet("Garfield")
                .vet_tech("Daniel Meier"),
        )
        .unwrap();
    assert_eq!(scheduled, checkup());
    assert_eq!(book.appointment_list().to_vec(), vec![checkup()]);
}

#[test]
fn test_view_subscription_sees_changes() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let mut book = AddressBook::new();
    let added = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&added);
    let _subscription = book.client_list().subscribe(move |change| {
        if let vetbook_core::ListChange::Splice { added, .. } = change {
            sink.borrow_mut()
                .extend(added.iter().map(|c: &Client| c.name().to_string()));
        }
    });

    book.add_person(daniel()).unwrap();
    book.add_person(alice()).unwrap();
    assert_eq!(*added.borrow(), vec!["Alice Pauline".to_string()]);
}
