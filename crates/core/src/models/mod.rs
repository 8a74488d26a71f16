//! Data models for Roleroll

mod assignment;
mod role;
mod roster;

pub use assignment::*;
pub use role::*;
pub use roster::*;
