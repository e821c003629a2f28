//! Pet models.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Tag;

/// A patient of the clinic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Pet {
    /// Pet name
    pub name: String,
    /// Species (e.g., "canine", "feline")
    pub species: String,
    /// Breed
    pub breed: String,
    /// Age in years
    pub age: u32,
    /// Gender as recorded at intake
    pub gender: String,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl Pet {
    /// Create a new pet with required fields.
    pub fn new(
        name: impl Into<String>,
        species: impl Into<String>,
        breed: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
            breed: breed.into(),
            age,
            gender: gender.into(),
            tags: BTreeSet::new(),
        }
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Species: {} Breed: {} Age: {} Gender: {}",
            self.name, self.species, self.breed, self.age, self.gender
        )
    }
}
