//! Person models: clients and vet technicians.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Tag;

/// Contact details shared by every kind of person.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PersonDetails {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl PersonDetails {
    /// Create details with no tags.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
            tags: BTreeSet::new(),
        }
    }

    /// Builder-style tag attachment.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Tag::new));
        self
    }
}

/// A pet owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Client {
    #[serde(flatten)]
    pub details: PersonDetails,
}

impl Client {
    pub fn new(details: PersonDetails) -> Self {
        Self { details }
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }
}

/// Clinic staff that handles appointments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct VetTechnician {
    #[serde(flatten)]
    pub details: PersonDetails,
}

impl VetTechnician {
    pub fn new(details: PersonDetails) -> Self {
        Self { details }
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }
}

/// Any person stored in the address book.
///
/// The variant is the discriminant: narrowing goes through
/// [`Person::as_client`] / [`Person::as_vet_technician`], which return `None`
/// for the other variant instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Person {
    Client(Client),
    VetTechnician(VetTechnician),
}

impl Person {
    pub fn is_client(&self) -> bool {
        matches!(self, Person::Client(_))
    }

    pub fn as_client(&self) -> Option<&Client> {
        match self {
            Person::Client(client) => Some(client),
            Person::VetTechnician(_) => None,
        }
    }

    pub fn as_vet_technician(&self) -> Option<&VetTechnician> {
        match self {
            Person::VetTechnician(tech) => Some(tech),
            Person::Client(_) => None,
        }
    }

    pub fn details(&self) -> &PersonDetails {
        match self {
            Person::Client(client) => &client.details,
            Person::VetTechnician(tech) => &tech.details,
        }
    }

    /// Mutable access for building edited copies; stored persons are never
    /// modified in place.
    pub fn details_mut(&mut self) -> &mut PersonDetails {
        match self {
            Person::Client(client) => &mut client.details,
            Person::VetTechnician(tech) => &mut tech.details,
        }
    }

    pub fn name(&self) -> &str {
        &self.details().name
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.details().tags
    }
}

impl From<Client> for Person {
    fn from(client: Client) -> Self {
        Person::Client(client)
    }
}

impl From<VetTechnician> for Person {
    fn from(tech: VetTechnician) -> Self {
        Person::VetTechnician(tech)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let details = self.details();
        let kind = if self.is_client() { "Client" } else { "Vet Tech" };
        write!(
            f,
            "{} ({}) Phone: {} Email: {} Address: {} Tags: ",
            details.name, kind, details.phone, details.email, details.address
        )?;
        for tag in &details.tags {
            write!(f, "{}", tag)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Person {
        Client::new(
            PersonDetails::new("Alice Pauline", "94351253", "alice@example.com", "123 Jurong West Ave 6")
                .with_tags(["friends"]),
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

    #[test]
    fn test_discriminant_narrowing() {
        let client = alice();
        assert!(client.is_client());
        assert!(client.as_client().is_some());
        assert!(client.as_vet_technician().is_none());

        let tech = daniel();
        assert!(!tech.is_client());
        assert!(tech.as_client().is_none());
        assert_eq!(tech.as_vet_technician().unwrap().name(), "Daniel Meier");
    }

    #[test]
    fn test_same_details_different_variant_not_equal() {
        let details = PersonDetails::new("Sam", "1", "sam@example.com", "Somewhere");
        let as_client: Person = Client::new(details.clone()).into();
        let as_tech: Person = VetTechnician::new(details).into();
        assert_ne!(as_client, as_tech);
    }

    #[test]
    fn test_serde_kind_tag() {
        let json = serde_json::to_value(alice()).unwrap();
        assert_eq!(json["kind"], "client");
        assert_eq!(json["name"], "Alice Pauline");
        let back: Person = serde_json::from_value(json).unwrap();
        assert_eq!(back, alice());
    }

    #[test]
    fn test_display_lists_tags() {
        let text = alice().to_string();
        assert!(text.starts_with("Alice Pauline (Client)"));
        assert!(text.ends_with("Tags: [friends]"));
    }
}
