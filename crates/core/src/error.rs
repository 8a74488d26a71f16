//! Error types for Roleroll Core

use thiserror::Error;

use crate::models::ROSTER_SIZE;

#[derive(Error, Debug)]
pub enum Error {
    /// A roster slot is blank after trimming. `slot` is zero-based.
    #[error("Please enter all {} names.", ROSTER_SIZE)]
    EmptyName { slot: usize },

    #[error("Roster must have exactly {expected} names, got {found}")]
    RosterSize { expected: usize, found: usize },

    #[error("Roster slot {} is out of range (0..{})", .slot, ROSTER_SIZE)]
    SlotOutOfRange { slot: usize },

    #[error("Unknown role: {0}")]
    UnknownRole(String),
}

pub type Result<T> = std::result::Result<T, Error>;
