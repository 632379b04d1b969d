//! Exhaustive search for six-creature teams whose combined type advantages
//! reach a coverage threshold.

pub mod cli;
pub mod data;
pub mod error;
pub mod output;
pub mod search;

pub use error::{Result, TeamError};
