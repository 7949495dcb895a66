//! Model constants and system parameters

/// Path-loss exponent for free-space propagation
pub const FREE_SPACE_PATH_LOSS_EXPONENT: f64 = 2.0;

/// Minimum number of ranged beacons for a 2D multilateration solve
pub const MIN_SOLVER_BEACONS: usize = 3;

/// Default pause between tracking cycles (milliseconds)
pub const DEFAULT_CYCLE_INTERVAL_MS: u64 = 2000;
