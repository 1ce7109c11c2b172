//! # Shelter
//!
//! Keeps admitted pets in admission order and indexes them by name.
//!
//! The name index stores positions into the ordered list, so both views
//! address the very same instances. When two pets share a name the index
//! points at the most recent arrival while the list keeps both.

use std::collections::HashMap;

use menagerie_common::warn;
use tracing::debug;

use crate::animal::Animal;
use crate::animal::cat::Cat;
use crate::animal::dog::Dog;
use crate::error::PetError;
use crate::pet::Pet;

#[derive(Debug, Default, Clone)]
pub struct Shelter {
    animals: Vec<Pet>,
    by_name: HashMap<String, usize>,
}

impl Shelter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn admit(&mut self, pet: impl Into<Pet>) {
        let pet: Pet = pet.into();
        let idx: usize = self.animals.len();
        let name: String = pet.name().to_owned();

        debug!(name = %name, species = %pet.species(), idx, "admitting");
        self.animals.push(pet);

        if let Some(previous) = self.by_name.insert(name, idx) {
            let name = self.animals[idx].name();
            warn!("'{name}' was already admitted at #{previous}, lookups now reach #{idx}");
        }
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    /// Pets in admission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pet> {
        self.animals.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Pet> {
        self.by_name.get(name).map(|&idx| &self.animals[idx])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Pet> {
        let idx: usize = *self.by_name.get(name)?;
        self.animals.get_mut(idx)
    }

    /// Looks `name` up and narrows it to a [`Dog`].
    pub fn fetch_dog_mut(&mut self, name: &str) -> Result<&mut Dog, PetError> {
        self.get_mut(name)
            .ok_or_else(|| PetError::NotFound(name.to_owned()))?
            .as_dog_mut()
    }

    /// Looks `name` up and narrows it to a [`Cat`].
    pub fn fetch_cat(&self, name: &str) -> Result<&Cat, PetError> {
        self.get(name)
            .ok_or_else(|| PetError::NotFound(name.to_owned()))?
            .as_cat()
    }
}

impl FromIterator<Pet> for Shelter {
    fn from_iter<I: IntoIterator<Item = Pet>>(iter: I) -> Self {
        let mut shelter = Shelter::new();
        for pet in iter {
            shelter.admit(pet);
        }
        shelter
    }
}

impl<'a> IntoIterator for &'a Shelter {
    type Item = &'a Pet;
    type IntoIter = std::slice::Iter<'a, Pet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
