//! # Menagerie Core
//!
//! The domain model: a shared [`animal::Animal`] contract, its two variants
//! ([`animal::dog::Dog`], [`animal::cat::Cat`]), the closed [`pet::Pet`] set
//! used to store them side by side, the [`shelter::Shelter`] that keeps them
//! in order and by name, and the scripted [`scenario`] that puts it all on
//! stage.
//!
//! Nothing here prints directly. Every emitted line goes through a
//! [`menagerie_common::narrator::Narrator`].

pub mod animal;
pub mod error;
pub mod pet;
pub mod scenario;
pub mod shelter;
