use thiserror::Error;

use crate::pet::Species;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PetError {
    #[error("no animal named '{0}' in the shelter")]
    NotFound(String),

    #[error("'{name}' is a {actual}, not a {expected}")]
    SpeciesMismatch {
        name: String,
        expected: Species,
        actual: Species,
    },
}
