//! Cycle-local observation processing

pub mod aggregator;

pub use aggregator::{Observation, ObservationSet};
