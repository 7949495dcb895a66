//! Core types and constants for the beacon tracker

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::*;
