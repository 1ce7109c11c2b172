use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use menagerie_common::config::Config;
use menagerie_common::narrator::{Narrator, Transcript};
use menagerie_core::animal::Animal;
use menagerie_core::animal::cat::Cat;
use menagerie_core::animal::dog::Dog;
use menagerie_core::error::PetError;
use menagerie_core::pet::{Pet, Species};
use menagerie_core::scenario;
use menagerie_core::shelter::Shelter;

/*************************************************************
                      Full demo transcript
**************************************************************/

const EXPECTED: &[&str] = &[
    "=== All Animals ===",
    "Buddy (3 years old)",
    "Buddy says: Woof!",
    "Buddy runs on four legs",
    "",
    "Whiskers (5 years old)",
    "Whiskers says: Meow!",
    "Whiskers walks gracefully",
    "",
    "Max (2 years old)",
    "Max says: Woof!",
    "Max runs on four legs",
    "",
    "=== Dog Tricks ===",
    "Buddy fetches the ball!",
    "Buddy learned: fetch",
    "Buddy learned: roll over",
    "Buddy performs: fetch",
    "Buddy performs: roll over",
    "Buddy performs: fetch",
    "Buddy performs: roll over",
];

#[test]
fn default_demo_matches_transcript() -> anyhow::Result<()> {
    let mut out = Transcript::new();
    scenario::run(&mut out, &Config::default())?;
    assert_eq!(out.lines(), EXPECTED);
    Ok(())
}

#[test]
fn demo_leaves_buddy_with_two_tricks() -> anyhow::Result<()> {
    let shelter = scenario::run(&mut Transcript::new(), &Config::default())?;
    let buddy = shelter.get("Buddy").ok_or_else(|| anyhow::anyhow!("buddy missing"))?;
    assert_eq!(buddy.as_dog()?.tricks(), vec!["fetch", "roll over"]);

    let max = shelter.fetch_cat("Max");
    assert!(matches!(max, Err(PetError::SpeciesMismatch { actual: Species::Dog, .. })));
    Ok(())
}

#[test]
fn more_rounds_only_extend_the_performance() -> anyhow::Result<()> {
    let cfg = Config { rounds: 5, ..Config::default() };
    let mut out = Transcript::new();
    scenario::run(&mut out, &cfg)?;

    let performed: Vec<&String> = out
        .lines()
        .iter()
        .filter(|line| line.starts_with("Buddy performs: "))
        .collect();
    assert_eq!(performed.len(), 10);
    assert_eq!(out.len(), EXPECTED.len() - 4 + 10);
    Ok(())
}

#[test]
fn quiet_demo_has_no_headers() -> anyhow::Result<()> {
    let cfg = Config { quiet: 1, ..Config::default() };
    let mut out = Transcript::new();
    scenario::run(&mut out, &cfg)?;
    assert!(out.lines().iter().all(|line| !line.starts_with("===")));
    assert_eq!(out.len(), EXPECTED.len() - 2);
    Ok(())
}

/*************************************************************
                  Contract across the variants
**************************************************************/

fn hash_of(pet: &Pet) -> u64 {
    let mut hasher = DefaultHasher::new();
    pet.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn equal_pets_hash_alike() {
    let pairs = [
        (Pet::from(Dog::new("Rex", 3, "Beagle")), Pet::from(Dog::new("Rex", 3, "Poodle"))),
        (Pet::from(Cat::new("Tom", 1, true)), Pet::from(Cat::new("Tom", 1, false))),
    ];
    for (a, b) in &pairs {
        assert_eq!(a, b);
        assert_eq!(hash_of(a), hash_of(b));
    }
    assert_ne!(pairs[0].0, Pet::from(Cat::new("Rex", 3, true)));
}

#[test]
fn collected_shelter_narrows_and_mutates_in_place() {
    let mut shelter: Shelter = scenario::residents().into_iter().collect();
    let mut out = Transcript::new();

    let max = shelter.fetch_dog_mut("Max").expect("max is a dog");
    max.learn_trick("sit", &mut out);
    max.learn_trick("sit", &mut out);

    let max = shelter.iter().nth(2).expect("max is third");
    assert_eq!(max.as_dog().map(Dog::tricks), Ok(vec![String::from("sit"); 2]));
    assert_eq!(out.lines(), ["Max learned: sit", "Max learned: sit"]);
}

#[test]
fn trait_objects_dispatch_like_pets() {
    let dog = Dog::new("Buddy", 3, "Golden Retriever");
    let cat = Cat::new("Whiskers", 5, true);
    let animals: [&dyn Animal; 2] = [&dog, &cat];

    let mut out = Transcript::new();
    for animal in animals {
        out.say(&animal.describe());
        animal.speak(&mut out);
    }
    assert_eq!(
        out.lines(),
        [
            "Buddy (3 years old)",
            "Buddy says: Woof!",
            "Whiskers (5 years old)",
            "Whiskers says: Meow!",
        ]
    );
}
