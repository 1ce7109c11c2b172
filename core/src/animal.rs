//! # Animal Contract
//!
//! Every animal carries an [`Identity`] (name and age) and knows how to
//! speak and how to move. Concrete variants live in [`dog`] and [`cat`].
//!
//! Equality and hashing are defined on the identity alone. Two dogs with the
//! same name and age are equal even when their breeds differ.

pub mod cat;
pub mod dog;

use std::fmt;

use menagerie_common::narrator::Narrator;

/// Name and age shared by all animals.
///
/// No validation happens on construction: an empty name is accepted as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    name: String,
    age: u32,
}

impl Identity {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} years old)", self.name, self.age)
    }
}

pub trait Animal {
    fn identity(&self) -> &Identity;

    /// Emits the animal's characteristic sound.
    fn speak(&self, narrator: &mut dyn Narrator);

    /// Emits how the animal gets around.
    fn locomote(&self, narrator: &mut dyn Narrator);

    fn name(&self) -> &str {
        self.identity().name()
    }

    fn age(&self) -> u32 {
        self.identity().age()
    }

    /// `"<name> (<age> years old)"`
    fn describe(&self) -> String {
        self.identity().to_string()
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
