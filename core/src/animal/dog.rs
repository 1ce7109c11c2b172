use std::fmt;
use std::hash::{Hash, Hasher};

use menagerie_common::narrator::Narrator;
use tracing::debug;

use crate::animal::{Animal, Identity};

pub const FETCH: &str = "fetch";

#[derive(Debug, Clone)]
pub struct Dog {
    identity: Identity,
    breed: String,
    tricks: Vec<String>,
}

impl Dog {
    pub fn new(name: impl Into<String>, age: u32, breed: impl Into<String>) -> Self {
        Self {
            identity: Identity::new(name, age),
            breed: breed.into(),
            tricks: Vec::new(),
        }
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    /// Fetches the ball, which also teaches the dog the `fetch` trick.
    pub fn fetch(&mut self, narrator: &mut dyn Narrator) {
        narrator.say(&format!("{} fetches the ball!", self.name()));
        self.learn_trick(FETCH, narrator);
    }

    /// Appends `trick` to the repertoire. Duplicates are kept.
    pub fn learn_trick(&mut self, trick: impl Into<String>, narrator: &mut dyn Narrator) {
        let trick: String = trick.into();
        debug!(dog = self.name(), trick = %trick, known = self.tricks.len(), "learning trick");
        narrator.say(&format!("{} learned: {}", self.name(), trick));
        self.tricks.push(trick);
    }

    /// Owned copy of the learned tricks, in learning order.
    pub fn tricks(&self) -> Vec<String> {
        self.tricks.clone()
    }

    /// Read-only view of the learned tricks.
    pub fn tricks_view(&self) -> &[String] {
        &self.tricks
    }

    /// Runs through every trick once per round.
    pub fn perform_all_tricks(&self, times: usize, narrator: &mut dyn Narrator) {
        for _ in 0..times {
            for trick in &self.tricks {
                narrator.say(&format!("{} performs: {}", self.name(), trick));
            }
        }
    }
}

impl Animal for Dog {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn speak(&self, narrator: &mut dyn Narrator) {
        narrator.say(&format!("{} says: Woof!", self.name()));
    }

    fn locomote(&self, narrator: &mut dyn Narrator) {
        narrator.say(&format!("{} runs on four legs", self.name()));
    }
}

impl PartialEq for Dog {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for Dog {}

impl Hash for Dog {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
    }
}

impl fmt::Display for Dog {
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
