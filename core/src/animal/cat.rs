use std::fmt;
use std::hash::{Hash, Hasher};

use menagerie_common::narrator::Narrator;

use crate::animal::{Animal, Identity};

#[derive(Debug, Clone)]
pub struct Cat {
    identity: Identity,
    indoor: bool,
}

impl Cat {
    pub fn new(name: impl Into<String>, age: u32, indoor: bool) -> Self {
        Self {
            identity: Identity::new(name, age),
            indoor,
        }
    }

    pub fn is_indoor(&self) -> bool {
        self.indoor
    }

    pub fn scratch(&self, narrator: &mut dyn Narrator) {
        narrator.say(&format!("{} scratches the furniture!", self.name()));
    }
}

impl Animal for Cat {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn speak(&self, narrator: &mut dyn Narrator) {
        narrator.say(&format!("{} says: Meow!", self.name()));
    }

    fn locomote(&self, narrator: &mut dyn Narrator) {
        narrator.say(&format!("{} walks gracefully", self.name()));
    }
}

// Indoor flag does not take part in equality.
impl PartialEq for Cat {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for Cat {}

impl Hash for Cat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
    }
}

impl fmt::Display for Cat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.identity.fmt(f)
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
