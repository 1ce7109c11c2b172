//! # Demo Scenario
//!
//! The scripted walk-through: admit a few animals, let every one of them
//! introduce itself through the shared [`Animal`] contract, then single out
//! one dog for variant-specific work.

use menagerie_common::config::Config;
use menagerie_common::narrator::Narrator;
use tracing::debug;

use crate::animal::Animal;
use crate::animal::cat::Cat;
use crate::animal::dog::Dog;
use crate::error::PetError;
use crate::pet::Pet;
use crate::shelter::Shelter;

pub const ROLL_CALL_TITLE: &str = "All Animals";
pub const TRICKS_TITLE: &str = "Dog Tricks";
pub const EXTRA_TRICK: &str = "roll over";

/// The demo cast, in admission order.
pub fn residents() -> Vec<Pet> {
    vec![
        Dog::new("Buddy", 3, "Golden Retriever").into(),
        Cat::new("Whiskers", 5, true).into(),
        Dog::new("Max", 2, "German Shepherd").into(),
    ]
}

pub fn shelter() -> Shelter {
    residents().into_iter().collect()
}

/// Describes every pet, then lets it speak and move.
pub fn roll_call(shelter: &Shelter, narrator: &mut dyn Narrator, cfg: &Config) {
    section(narrator, ROLL_CALL_TITLE, cfg);
    for pet in shelter {
        narrator.say(&pet.describe());
        pet.speak(narrator);
        pet.locomote(narrator);
        narrator.blank();
    }
}

/// Puts the spotlighted dog through fetch, one new trick and a few rounds.
///
/// Fails when the spotlight names nobody or names a cat.
pub fn dog_tricks(
    shelter: &mut Shelter,
    narrator: &mut dyn Narrator,
    cfg: &Config,
) -> Result<(), PetError> {
    section(narrator, TRICKS_TITLE, cfg);
    let dog: &mut Dog = shelter.fetch_dog_mut(&cfg.spotlight)?;
    debug!(dog = dog.name(), breed = dog.breed(), rounds = cfg.rounds, "spotlight");

    dog.fetch(narrator);
    dog.learn_trick(EXTRA_TRICK, narrator);
    dog.perform_all_tricks(cfg.rounds, narrator);
    Ok(())
}

/// Lets the named cat scratch the furniture.
pub fn scratch(shelter: &Shelter, name: &str, narrator: &mut dyn Narrator) -> Result<(), PetError> {
    let cat: &Cat = shelter.fetch_cat(name)?;
    debug!(cat = cat.name(), indoor = cat.is_indoor(), "scratching");
    cat.scratch(narrator);
    Ok(())
}

/// The whole demo: roll call followed by the dog tricks.
pub fn run(narrator: &mut dyn Narrator, cfg: &Config) -> Result<Shelter, PetError> {
    let mut shelter = shelter();
    roll_call(&shelter, narrator, cfg);
    dog_tricks(&mut shelter, narrator, cfg)?;
    Ok(shelter)
}

fn section(narrator: &mut dyn Narrator, title: &str, cfg: &Config) {
    if cfg.quiet == 0 {
        narrator.header(title);
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
