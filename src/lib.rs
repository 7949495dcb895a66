//! RSSI Beacon Tracker
//!
//! Estimates the 2D position of a mobile observer from signal-strength
//! readings of fixed, pre-registered radio beacons. Each cycle inverts a
//! log-distance path-loss model per beacon and solves the resulting
//! overdetermined multilateration system by linear least squares.

pub mod algorithms;
pub mod core;
pub mod processing;
pub mod scanning;
pub mod tracking;
pub mod utils;

// Re-export commonly used types
pub use algorithms::{estimate_distance, LeastSquaresSolver, PathLossModel, SolveError};
pub use core::{BeaconRecord, BeaconRegistry, Point};
pub use processing::{Observation, ObservationSet};
pub use scanning::{BeaconScanner, MockScanner, ScanError, Sighting};
pub use tracking::{
    CycleClock, CycleOutcome, CycleReport, LogSink, ManualClock, MemorySink, ReportSink,
    TokioClock, Tracker,
};
pub use utils::{load_registry, TrackerConfig};
