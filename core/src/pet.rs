//! # Pet
//!
//! The closed set of animal variants. Storing animals as [`Pet`] keeps the
//! collection homogeneous while the `as_*` accessors give checked access to
//! the variant underneath.

use std::fmt;
use std::hash::{Hash, Hasher};

use menagerie_common::narrator::Narrator;
use tracing::trace;

use crate::animal::cat::Cat;
use crate::animal::dog::Dog;
use crate::animal::{Animal, Identity};
use crate::error::PetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Dog,
    Cat,
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Species::Dog => write!(f, "dog"),
            Species::Cat => write!(f, "cat"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Pet {
    Dog(Dog),
    Cat(Cat),
}

impl Pet {
    pub fn species(&self) -> Species {
        match self {
            Pet::Dog(_) => Species::Dog,
            Pet::Cat(_) => Species::Cat,
        }
    }

    pub fn as_dog(&self) -> Result<&Dog, PetError> {
        match self {
            Pet::Dog(dog) => Ok(dog),
            other => Err(other.mismatch(Species::Dog)),
        }
    }

    pub fn as_dog_mut(&mut self) -> Result<&mut Dog, PetError> {
        match self {
            Pet::Dog(dog) => Ok(dog),
            other => Err(other.mismatch(Species::Dog)),
        }
    }

    pub fn as_cat(&self) -> Result<&Cat, PetError> {
        match self {
            Pet::Cat(cat) => Ok(cat),
            other => Err(other.mismatch(Species::Cat)),
        }
    }

    pub fn as_cat_mut(&mut self) -> Result<&mut Cat, PetError> {
        match self {
            Pet::Cat(cat) => Ok(cat),
            other => Err(other.mismatch(Species::Cat)),
        }
    }

    fn mismatch(&self, expected: Species) -> PetError {
        trace!(name = self.name(), %expected, actual = %self.species(), "narrowing failed");
        PetError::SpeciesMismatch {
            name: self.name().to_owned(),
            expected,
            actual: self.species(),
        }
    }

    fn animal(&self) -> &dyn Animal {
        match self {
            Pet::Dog(dog) => dog as &dyn Animal,
            Pet::Cat(cat) => cat as &dyn Animal,
        }
    }
}

impl Animal for Pet {
    fn identity(&self) -> &Identity {
        self.animal().identity()
    }

    fn speak(&self, narrator: &mut dyn Narrator) {
        self.animal().speak(narrator);
    }

    fn locomote(&self, narrator: &mut dyn Narrator) {
        self.animal().locomote(narrator);
    }
}

impl From<Dog> for Pet {
    fn from(dog: Dog) -> Self {
        Pet::Dog(dog)
    }
}

impl From<Cat> for Pet {
    fn from(cat: Cat) -> Self {
        Pet::Cat(cat)
    }
}

impl PartialEq for Pet {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Pet::Dog(a), Pet::Dog(b)) => a == b,
            (Pet::Cat(a), Pet::Cat(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Pet {}

impl Hash for Pet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.identity().fmt(f)
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
