//! Roleroll Core Library
//!
//! Lane-role models, the no-repeat role assigner, the roll session and
//! settings for the SKT10 role assigner.

pub mod assigner;
pub mod config;
pub mod error;
pub mod invariants;
pub mod models;
pub mod session;

pub use assigner::{assign, assign_with, RetryPolicy};
pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use models::*;
pub use session::RollSession;
