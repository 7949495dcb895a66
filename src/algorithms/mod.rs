//! Ranging and position-solving algorithms

pub mod multilateration;
pub mod ranging;

pub use multilateration::{LeastSquaresSolver, SolveError, SolveResult};
pub use ranging::{estimate_distance, PathLossModel};
