//! Client/pet ownership association.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Client, Pet};

/// Records that a client owns a pet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ClientOwnPet {
    pub client: Client,
    pub pet: Pet,
}

impl ClientOwnPet {
    pub fn new(client: Client, pet: Pet) -> Self {
        Self { client, pet }
    }
}

impl fmt::Display for ClientOwnPet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} owns {}", self.client.name(), self.pet.name)
    }
}
